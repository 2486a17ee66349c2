pub mod header;
pub mod marker;
pub mod revision;

pub use header::Header;
pub use revision::{RangeError, Revision};

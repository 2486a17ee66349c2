use crate::revision::{RangeError, Revision};
use once_cell::sync::OnceCell;
use regex::bytes::Regex;

fn pattern() -> &'static Regex {
    static MARKER: OnceCell<Regex> = OnceCell::new();
    // ASCII classes only, lines are raw bytes in whatever encoding the source uses.
    // Greedy prefix, so the last marker of a line is the one captured.
    MARKER.get_or_init(|| Regex::new(r"(?-u)^.*\$Revision:\s*#([0-9]+)\s*\$").unwrap())
}

pub fn capture<S: AsRef<[u8]> + ?Sized>(line: &S) -> Option<&str> {
    pattern()
        .captures(line.as_ref())
        .and_then(|c| c.get(1))
        .and_then(|m| core::str::from_utf8(m.as_bytes()).ok())
}

/// Finds the revision the scanned source will have after commit.
///
/// The last marker in input order wins. Only that one is converted, so an
/// unrepresentable marker that is later superseded does not fail the scan.
/// Without any marker the result is [`Revision::NOT_FOUND`].
pub fn scan<I, S>(lines: I) -> Result<Revision, RangeError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<[u8]>,
{
    let mut last: Option<String> = None;
    for line in lines {
        if let Some(digits) = capture(&line) {
            last = Some(digits.to_owned());
        }
    }

    match last {
        Some(digits) => Revision::next_after(&digits),
        None => Ok(Revision::NOT_FOUND),
    }
}

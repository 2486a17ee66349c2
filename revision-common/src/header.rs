use crate::revision::Revision;
use core::fmt;

pub const GUARD: &str = "HARDWARE_SIGNAGE_DISPLAY_REVISION_H__";

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Header {
    pub revision: Revision,
}

impl Header {
    pub fn new(revision: Revision) -> Self {
        Self { revision }
    }

    #[inline]
    pub fn low(&self) -> u8 {
        self.revision.to_le_bytes()[0]
    }

    #[inline]
    pub fn high(&self) -> u8 {
        self.revision.to_le_bytes()[1]
    }
}

impl From<Revision> for Header {
    fn from(revision: Revision) -> Self {
        Self::new(revision)
    }
}

impl fmt::Display for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "#ifndef {}", GUARD)?;
        writeln!(f, "#define {}", GUARD)?;
        writeln!(f)?;
        writeln!(f, "#include <pic.h>")?;
        writeln!(f)?;
        writeln!(f, "#define REVISION_LOW  {}", self.low())?;
        writeln!(f, "#define REVISION_HIGH {}", self.high())?;
        writeln!(f)?;
        writeln!(f, "__IDLOC({});", self.revision.idloc())?;
        writeln!(f)?;
        writeln!(f, "#endif  // {}", GUARD)
    }
}

use byteorder::{BigEndian, ByteOrder, LittleEndian};
use core::fmt;
use num_traits::ToPrimitive;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Revision(i16);

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum RangeError {
    OutOfRange(i64),
    Unparsable,
}

impl fmt::Display for RangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RangeError::OutOfRange(v) => write!(
                f,
                "revision {} does not fit into a signed 16-bit halfword ({}..={})",
                v,
                i16::MIN,
                i16::MAX
            ),
            RangeError::Unparsable => f.write_str("revision digits cannot be represented as a number"),
        }
    }
}

impl std::error::Error for RangeError {}

impl Revision {
    pub const NOT_FOUND: Revision = Revision(-1);

    pub fn new(value: i64) -> Result<Self, RangeError> {
        value
            .to_i16()
            .map(Self)
            .ok_or(RangeError::OutOfRange(value))
    }

    // +1: that's the revision once the source is committed
    pub fn next_after(digits: &str) -> Result<Self, RangeError> {
        let committed = digits
            .parse::<i64>()
            .ok()
            .filter(|v| *v >= 0)
            .and_then(|v| v.checked_add(1))
            .ok_or(RangeError::Unparsable)?;
        Self::new(committed)
    }

    #[inline]
    pub fn value(&self) -> i16 {
        self.0
    }

    #[inline]
    pub fn is_found(&self) -> bool {
        *self != Self::NOT_FOUND
    }

    pub fn to_le_bytes(&self) -> [u8; 2] {
        let mut buf = [0_u8; 2];
        LittleEndian::write_i16(&mut buf, self.0);
        buf
    }

    pub fn from_le_bytes(bytes: [u8; 2]) -> Self {
        Self(LittleEndian::read_i16(&bytes))
    }

    // hello frame order, high byte first
    pub fn to_wire(&self) -> [u8; 2] {
        let mut buf = [0_u8; 2];
        BigEndian::write_i16(&mut buf, self.0);
        buf
    }

    pub fn from_wire(bytes: [u8; 2]) -> Self {
        Self(BigEndian::read_i16(&bytes))
    }

    pub fn idloc(&self) -> String {
        hex::encode_upper(self.to_wire())
    }
}

impl fmt::Display for Revision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found() {
        let r = Revision::NOT_FOUND;
        assert_eq!(r.value(), -1);
        assert!(!r.is_found());
        assert_eq!(r.to_le_bytes(), [0xFF, 0xFF]);
        assert_eq!(r.idloc(), "FFFF");
    }

    #[test]
    fn next_after() {
        assert_eq!(Revision::next_after("5"), Ok(Revision(6)));
        assert_eq!(Revision::next_after("0"), Ok(Revision(1)));
        assert_eq!(Revision::next_after("0007"), Ok(Revision(8)));
        assert_eq!(Revision::next_after("32766"), Ok(Revision(i16::MAX)));
        assert_eq!(
            Revision::next_after("32767"),
            Err(RangeError::OutOfRange(32768))
        );
        assert_eq!(
            Revision::next_after("9223372036854775806"),
            Err(RangeError::OutOfRange(i64::MAX))
        );
        assert_eq!(
            Revision::next_after("9223372036854775807"),
            Err(RangeError::Unparsable)
        );
        assert_eq!(Revision::next_after("-3"), Err(RangeError::Unparsable));
        assert_eq!(Revision::next_after(""), Err(RangeError::Unparsable));
        assert_eq!(Revision::next_after("1a"), Err(RangeError::Unparsable));
    }

    #[test]
    fn new() {
        assert_eq!(Revision::new(-1), Ok(Revision::NOT_FOUND));
        assert_eq!(Revision::new(i16::MIN as i64), Ok(Revision(i16::MIN)));
        assert_eq!(Revision::new(-32769), Err(RangeError::OutOfRange(-32769)));
        assert_eq!(Revision::new(70000), Err(RangeError::OutOfRange(70000)));
    }

    #[test]
    fn bytes() {
        let r = Revision::new(512).unwrap();
        assert_eq!(r.to_le_bytes(), [0x00, 0x02]);
        assert_eq!(r.to_wire(), [0x02, 0x00]);
        assert_eq!(r.idloc(), "0200");

        let r = Revision::new(6).unwrap();
        assert_eq!(r.to_le_bytes(), [6, 0]);
        assert_eq!(r.idloc(), "0006");

        let r = Revision::new(0x7ABC).unwrap();
        assert_eq!(r.to_le_bytes(), [0xBC, 0x7A]);
        assert_eq!(r.idloc(), "7ABC");

        assert_eq!(Revision::new(i16::MIN as i64).unwrap().idloc(), "8000");
    }

    #[test]
    fn wire() {
        // hello frame as sent by the display: SYN, REVISION_HIGH, REVISION_LOW
        let frame = [0x16_u8, 0x01, 0x2C];
        let r = Revision::from_wire(<[u8; 2]>::try_from(&frame[1..3]).unwrap());
        assert_eq!(r.value(), 300);
        assert_eq!(r.to_le_bytes(), [0x2C, 0x01]);

        assert_eq!(Revision::from_wire([0xFF, 0xFF]), Revision::NOT_FOUND);
    }

    #[test]
    fn random_values() {
        for _ in 0..1000 {
            let v: i16 = rand::random();
            let r = Revision::new(v as i64).unwrap();

            let le = r.to_le_bytes();
            assert_eq!(le, v.to_le_bytes());
            assert_eq!(Revision::from_le_bytes(le), r);
            assert_eq!(Revision::from_wire(r.to_wire()), r);
            assert_eq!(r.idloc(), format!("{:04X}", v as u16));
            assert_eq!(r.idloc(), r.idloc());
        }
    }
}

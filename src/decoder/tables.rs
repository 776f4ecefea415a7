use crate::decoder::error::DecodeError;
use crate::decoder::mode::Mode;

/// Bit layout of one segment's fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldWidths {
    /// Width of one full symbol (a group of 3 digits, 2 alphanumerics or 1 byte)
    pub bits_per_symbol: usize,
    /// Width of the character-count indicator
    pub count_bits: usize,
}

/// Version ranges that share count indicator widths
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionBucket {
    /// Versions 1-9
    Small,
    /// Versions 10-26
    Medium,
    /// Versions 27-40
    Large,
}

impl VersionBucket {
    /// Bucket for a Model 2 version number
    pub fn for_version(version: u8) -> Result<Self, DecodeError> {
        match version {
            1..=9 => Ok(VersionBucket::Small),
            10..=26 => Ok(VersionBucket::Medium),
            27..=40 => Ok(VersionBucket::Large),
            _ => Err(DecodeError::InvalidVersion(version)),
        }
    }

    fn index(self) -> usize {
        match self {
            VersionBucket::Small => 0,
            VersionBucket::Medium => 1,
            VersionBucket::Large => 2,
        }
    }
}

// Character-count indicator widths per bucket (ISO/IEC 18004 table 3).
const NUMERIC_COUNT_BITS: [usize; 3] = [10, 12, 14];
const ALPHANUMERIC_COUNT_BITS: [usize; 3] = [9, 11, 13];
const BYTE_COUNT_BITS: [usize; 3] = [8, 16, 16];

/// Resolve symbol and count indicator widths for a mode at a given version
pub fn field_widths(mode: Mode, version: u8) -> Result<FieldWidths, DecodeError> {
    let (bits_per_symbol, table) = match mode {
        Mode::Numeric => (10, &NUMERIC_COUNT_BITS),
        Mode::Alphanumeric => (11, &ALPHANUMERIC_COUNT_BITS),
        Mode::Byte => (8, &BYTE_COUNT_BITS),
        Mode::Terminator => return Err(DecodeError::UnsupportedMode(mode)),
    };
    let bucket = VersionBucket::for_version(version)?;
    Ok(FieldWidths {
        bits_per_symbol,
        count_bits: table[bucket.index()],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count_bits(mode: Mode, version: u8) -> usize {
        field_widths(mode, version).unwrap().count_bits
    }

    #[test]
    fn test_numeric_bucket_boundaries() {
        assert_eq!(count_bits(Mode::Numeric, 1), 10);
        assert_eq!(count_bits(Mode::Numeric, 9), 10);
        assert_eq!(count_bits(Mode::Numeric, 10), 12);
        assert_eq!(count_bits(Mode::Numeric, 26), 12);
        assert_eq!(count_bits(Mode::Numeric, 27), 14);
        assert_eq!(count_bits(Mode::Numeric, 40), 14);
    }

    #[test]
    fn test_alphanumeric_bucket_boundaries() {
        assert_eq!(count_bits(Mode::Alphanumeric, 9), 9);
        assert_eq!(count_bits(Mode::Alphanumeric, 10), 11);
        assert_eq!(count_bits(Mode::Alphanumeric, 26), 11);
        assert_eq!(count_bits(Mode::Alphanumeric, 27), 13);
    }

    #[test]
    fn test_byte_bucket_boundaries() {
        assert_eq!(count_bits(Mode::Byte, 9), 8);
        assert_eq!(count_bits(Mode::Byte, 10), 16);
        assert_eq!(count_bits(Mode::Byte, 26), 16);
        assert_eq!(count_bits(Mode::Byte, 27), 16);
    }

    #[test]
    fn test_symbol_widths() {
        assert_eq!(field_widths(Mode::Numeric, 1).unwrap().bits_per_symbol, 10);
        assert_eq!(field_widths(Mode::Alphanumeric, 1).unwrap().bits_per_symbol, 11);
        assert_eq!(field_widths(Mode::Byte, 1).unwrap().bits_per_symbol, 8);
    }

    #[test]
    fn test_invalid_inputs() {
        assert_eq!(
            field_widths(Mode::Numeric, 0),
            Err(DecodeError::InvalidVersion(0))
        );
        assert_eq!(
            field_widths(Mode::Byte, 41),
            Err(DecodeError::InvalidVersion(41))
        );
        assert_eq!(
            field_widths(Mode::Terminator, 5),
            Err(DecodeError::UnsupportedMode(Mode::Terminator))
        );
    }
}

//! Segment mode indicators
//!
//! Every segment opens with a 4-bit mode indicator. Only the three text
//! carrying modes are decoded; every other code closes the stream.

/// Width of the mode indicator in bits
pub const MODE_INDICATOR_BITS: usize = 4;

/// Segment encoding mode, tagged with its 4-bit indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// End of data (0000)
    Terminator = 0,
    /// Digits 0-9, three per 10-bit symbol (0001)
    Numeric = 1,
    /// 45-character table, two per 11-bit symbol (0010)
    Alphanumeric = 2,
    /// Raw 8-bit bytes (0100)
    Byte = 4,
}

impl Mode {
    /// Map a raw indicator to a mode. Unknown and unsupported codes become
    /// [`Mode::Terminator`].
    pub fn from_indicator(code: u32) -> Self {
        match code {
            1 => Mode::Numeric,
            2 => Mode::Alphanumeric,
            4 => Mode::Byte,
            _ => Mode::Terminator,
        }
    }

    /// The 4-bit indicator value
    pub fn indicator(self) -> u8 {
        self as u8
    }

    /// Whether this mode carries a data segment
    pub fn is_data(self) -> bool {
        !matches!(self, Mode::Terminator)
    }
}

/// Name of an ISO 18004 mode that is recognized but never decoded.
///
/// Used only for diagnostics when such a mode ends the stream.
pub fn unsupported_mode_name(code: u32) -> Option<&'static str> {
    match code {
        3 => Some("structured append"),
        5 => Some("FNC1 (first position)"),
        7 => Some("ECI"),
        8 => Some("kanji"),
        9 => Some("FNC1 (second position)"),
        _ => None,
    }
}

//! QR code data mode decoders
//!
//! Each decoder reads one segment's symbol stream from a shared
//! [`BitReader`](crate::decoder::bit_reader::BitReader):
//! - Numeric: digits, three per symbol
//! - Alphanumeric: 45-character table, two per symbol
//! - Byte: 8-bit data converted with the active text encoding

/// Alphanumeric mode (0010)
pub mod alphanumeric;
/// Byte mode (0100)
pub mod byte;
/// Numeric mode (0001)
pub mod numeric;

use crate::decoder::error::DecodeError;

/// Text read from one segment's symbol stream
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SymbolRun {
    /// Characters decoded before the run ended
    pub text: String,
    /// Set when the data ran out before every announced symbol was read
    pub truncated: bool,
}

impl SymbolRun {
    pub(crate) fn complete(text: String) -> Self {
        Self {
            text,
            truncated: false,
        }
    }

    /// Keep `text` and mark the run as cut short by `err`
    pub(crate) fn cut_short(text: String, err: &DecodeError) -> Self {
        if cfg!(debug_assertions) && crate::debug::debug_enabled() {
            eprintln!("SYMBOLS: run cut short after {:?}: {}", text, err);
        }
        Self {
            text,
            truncated: true,
        }
    }
}

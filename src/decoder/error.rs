use thiserror::Error;

use crate::decoder::encoding::TextEncoding;
use crate::decoder::mode::Mode;

/// Everything that can go wrong while walking a payload.
///
/// Only [`DecodeError::TextConversion`] ever reaches callers of the public
/// decode functions. The rest end the segment loop early and the text decoded
/// so far is kept.
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The cursor ran past the end of the payload
    #[error("requested {requested} bits but only {remaining} remain")]
    InsufficientBits { requested: usize, remaining: usize },

    /// A single read asked for more than 32 bits
    #[error("cannot read {requested} bits into a single field")]
    FieldTooWide { requested: usize },

    /// Terminator has no count indicator or symbols
    #[error("mode {0:?} has no data segment layout")]
    UnsupportedMode(Mode),

    /// Version cannot size a count indicator
    #[error("QR version {0} is outside 1-40")]
    InvalidVersion(u8),

    /// Malformed alphanumeric symbol
    #[error("alphanumeric symbol {0} maps outside the 45-character table")]
    AlphabetIndexOutOfRange(u32),

    /// Final normalization through the resolved encoding failed
    #[error("decoded text is not representable in {0}")]
    TextConversion(TextEncoding),
}

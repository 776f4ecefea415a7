use crate::decoder::encoding::TextEncoding;
use crate::decoder::mode::Mode;

/// One data segment read by the authoritative pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentInfo {
    /// Segment mode
    pub mode: Mode,
    /// Value of the character-count indicator
    pub character_count: usize,
    /// Text this segment contributed (empty if a byte run failed to convert)
    pub text: String,
    /// The data ended inside this segment; `text` holds what was read
    pub truncated: bool,
}

/// Detailed result of decoding one payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedPayload {
    /// Final normalized text
    pub text: String,
    /// Encoding used for byte segments and normalization
    pub encoding: TextEncoding,
    /// Whether the detection pass saw enough characters to read a selector
    pub selector_found: bool,
    /// QR version the payload was decoded with
    pub version: u8,
    /// Segments in stream order
    pub segments: Vec<SegmentInfo>,
}

impl DecodedPayload {
    /// Number of segments with the given mode
    pub fn count_mode(&self, mode: Mode) -> usize {
        self.segments.iter().filter(|s| s.mode == mode).count()
    }
}

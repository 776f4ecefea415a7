//! QR payload decoding modules
//!
//! Everything after error correction: reading bit fields, resolving segment
//! layouts, decoding numeric/alphanumeric/byte symbols and picking the text
//! encoding of byte segments.

/// MSB-first bit cursor over the payload
pub mod bit_reader;
/// Decoder settings and `QR_PAYLOAD_*` environment overrides
pub mod config;
/// Byte-segment charsets and the payment selector
pub mod encoding;
/// Decode error taxonomy
pub mod error;
/// Segment mode indicators
pub mod mode;
/// Data mode decoders (numeric, alphanumeric, byte)
pub mod modes;
/// Segment loop and the two-pass decode
pub mod payload_decoder;
/// Character-count indicator widths
pub mod tables;

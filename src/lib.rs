//! qr_payload - QR data segment decoder
//!
//! Turns the error-corrected data codewords of a QR symbol into text. The
//! payload is walked segment by segment (mode indicator, character count,
//! symbols) until a terminator, an unsupported mode or the end of the data.
//!
//! Byte segments of Russian payment codes may be CP1251 or KOI8-R rather
//! than UTF-8. The charset is picked from the selector digit at character 6
//! of the decoded text before the final pass runs.

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

mod debug;
/// Payload decoding modules (bit reader, modes, encodings)
pub mod decoder;
/// Decode results
pub mod models;

pub use decoder::config::DecoderConfig;
pub use decoder::encoding::TextEncoding;
pub use decoder::error::DecodeError;
pub use decoder::mode::Mode;
pub use decoder::payload_decoder::PayloadDecoder;
pub use models::{DecodedPayload, SegmentInfo};

use rayon::prelude::*;

/// Decode a payload with default settings.
///
/// # Arguments
/// * `bytes` - Error-corrected data codewords
/// * `version` - QR symbol version (1-40)
///
/// # Returns
/// The decoded text, or `None` if the text cannot be represented in the
/// encoding named by its selector
pub fn decode_payload(bytes: &[u8], version: u8) -> Option<String> {
    try_decode_payload(bytes, version).ok()
}

/// Decode a payload, keeping the failure reason
pub fn try_decode_payload(bytes: &[u8], version: u8) -> Result<String, DecodeError> {
    PayloadDecoder::new(bytes, version).decode()
}

/// Decode a payload and report its segments and resolved encoding
pub fn decode_payload_detailed(
    bytes: &[u8],
    version: u8,
    config: DecoderConfig,
) -> Result<DecodedPayload, DecodeError> {
    PayloadDecoder::with_config(bytes, version, config).decode_detailed()
}

/// Decode independent payloads in parallel.
///
/// Each payload gets its own decoder; results keep the input order.
pub fn decode_batch<P: AsRef<[u8]> + Sync>(payloads: &[(P, u8)]) -> Vec<Option<String>> {
    Decoder::new().decode_batch(payloads)
}

/// Decoder with fixed settings, reusable across payloads
#[derive(Debug, Clone, Copy, Default)]
pub struct Decoder {
    config: DecoderConfig,
}

impl Decoder {
    /// Create a decoder with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a decoder with explicit settings
    pub fn with_config(config: DecoderConfig) -> Self {
        Self { config }
    }

    /// Create a decoder configured from `QR_PAYLOAD_*` environment variables
    pub fn from_env() -> Self {
        Self::with_config(DecoderConfig::from_env())
    }

    /// Settings this decoder applies
    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Decode a single payload
    pub fn decode(&self, bytes: &[u8], version: u8) -> Option<String> {
        self.try_decode(bytes, version).ok()
    }

    /// Decode a single payload, keeping the failure reason
    pub fn try_decode(&self, bytes: &[u8], version: u8) -> Result<String, DecodeError> {
        PayloadDecoder::with_config(bytes, version, self.config).decode()
    }

    /// Decode a single payload with segment details
    pub fn decode_detailed(
        &self,
        bytes: &[u8],
        version: u8,
    ) -> Result<DecodedPayload, DecodeError> {
        decode_payload_detailed(bytes, version, self.config)
    }

    /// Decode independent payloads in parallel
    pub fn decode_batch<P: AsRef<[u8]> + Sync>(
        &self,
        payloads: &[(P, u8)],
    ) -> Vec<Option<String>> {
        payloads
            .par_iter()
            .map(|(bytes, version)| self.decode(bytes.as_ref(), *version))
            .collect()
    }
}

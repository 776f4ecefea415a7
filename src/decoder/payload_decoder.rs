/// Segment decoder - turns an error-corrected payload into text
use crate::decoder::bit_reader::BitReader;
use crate::decoder::config::DecoderConfig;
use crate::decoder::encoding::TextEncoding;
use crate::decoder::error::DecodeError;
use crate::decoder::mode::{MODE_INDICATOR_BITS, Mode, unsupported_mode_name};
use crate::decoder::modes::{
    alphanumeric::AlphanumericDecoder, byte::ByteDecoder, numeric::NumericDecoder,
};
use crate::decoder::tables::field_widths;
use crate::models::{DecodedPayload, SegmentInfo};


/// Result of the selector detection pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodingDetection {
    /// Encoding to use for the authoritative pass
    pub encoding: TextEncoding,
    /// Selector character, if the stream was long enough to contain one
    pub selector: Option<char>,
}

/// Walks the segments of one payload.
///
/// Decoding is two passes over the same buffer: a detection pass that reads
/// just far enough to find the charset selector, then an authoritative pass
/// that decodes every segment with the resolved charset. Each pass starts
/// from a rewound cursor and its own accumulator.
pub struct PayloadDecoder<'a> {
    reader: BitReader<'a>,
    version: u8,
    config: DecoderConfig,
}

impl<'a> PayloadDecoder<'a> {
    /// Decoder with default settings for `bytes` at QR `version`
    pub fn new(bytes: &'a [u8], version: u8) -> Self {
        Self::with_config(bytes, version, DecoderConfig::default())
    }

    /// Decoder with explicit settings
    pub fn with_config(bytes: &'a [u8], version: u8, config: DecoderConfig) -> Self {
        Self {
            reader: BitReader::new(bytes),
            version,
            config,
        }
    }

    /// Read the next mode indicator. Exhaustion and unsupported codes read
    /// as [`Mode::Terminator`].
    fn read_mode(&mut self) -> Mode {
        match self.reader.read_bits(MODE_INDICATOR_BITS) {
            Ok(code) => {
                let mode = Mode::from_indicator(code);
                if code != 0
                    && !mode.is_data()
                    && cfg!(debug_assertions)
                    && crate::debug::debug_enabled()
                {
                    eprintln!(
                        "SEGMENT: mode {:04b} ({}) ends the stream at bit {}",
                        code,
                        unsupported_mode_name(code).unwrap_or("reserved"),
                        self.reader.position() - MODE_INDICATOR_BITS
                    );
                }
                mode
            }
            Err(_) => Mode::Terminator,
        }
    }

    /// Count indicator plus symbol stream of a data segment
    fn read_segment(
        &mut self,
        mode: Mode,
        encoding: TextEncoding,
    ) -> Result<SegmentInfo, DecodeError> {
        let widths = field_widths(mode, self.version)?;
        let character_count = self.reader.read_bits(widths.count_bits)? as usize;
        let symbol_bits = widths.bits_per_symbol;
        let reader = &mut self.reader;
        let run = match mode {
            Mode::Numeric => NumericDecoder::decode(reader, character_count, symbol_bits),
            Mode::Alphanumeric => AlphanumericDecoder::decode(reader, character_count, symbol_bits),
            Mode::Byte => ByteDecoder::decode(reader, character_count, symbol_bits, encoding),
            Mode::Terminator => return Err(DecodeError::UnsupportedMode(mode)),
        };
        Ok(SegmentInfo {
            mode,
            character_count,
            text: run.text,
            truncated: run.truncated,
        })
    }

    /// Next segment, or `None` once the stream terminates.
    ///
    /// A segment cut short by the end of the data is still returned with
    /// whatever it decoded; callers stop after it.
    fn next_segment(&mut self, encoding: TextEncoding) -> Option<SegmentInfo> {
        let mode = self.read_mode();
        if !mode.is_data() {
            return None;
        }
        match self.read_segment(mode, encoding) {
            Ok(segment) => {
                if cfg!(debug_assertions) && crate::debug::debug_enabled() {
                    eprintln!(
                        "SEGMENT: {:?} count={} truncated={} -> {:?}",
                        segment.mode, segment.character_count, segment.truncated, segment.text
                    );
                }
                Some(segment)
            }
            Err(err) => {
                if cfg!(debug_assertions) && crate::debug::debug_enabled() {
                    eprintln!("SEGMENT: {:?} header unreadable, stopping: {}", mode, err);
                }
                None
            }
        }
    }

    /// Detection pass: decode until the selector character is available.
    ///
    /// Byte segments are read with the fallback encoding. The decoded text is
    /// thrown away; only the resolved encoding is returned.
    ///
    /// The selector position counts Unicode scalar values (`char`s), not
    /// grapheme clusters, so a combining mark ahead of it shifts the selector
    /// by one. Payment headers are plain ASCII, where the two agree.
    pub fn detect_encoding(&mut self) -> EncodingDetection {
        self.reader.reset();
        let fallback = self.config.fallback_encoding;
        let mut text = String::new();

        while let Some(segment) = self.next_segment(fallback) {
            text.push_str(&segment.text);
            if let Some(selector) = text.chars().nth(self.config.selector_index) {
                return EncodingDetection {
                    encoding: TextEncoding::from_selector(selector),
                    selector: Some(selector),
                };
            }
            if segment.truncated {
                break;
            }
        }

        EncodingDetection {
            encoding: fallback,
            selector: None,
        }
    }

    /// Authoritative pass: every segment up to the terminator, decoded with
    /// `encoding`
    pub fn decode_segments(&mut self, encoding: TextEncoding) -> Vec<SegmentInfo> {
        self.reader.reset();
        let mut segments = Vec::new();
        while let Some(segment) = self.next_segment(encoding) {
            let truncated = segment.truncated;
            segments.push(segment);
            if truncated {
                break;
            }
        }
        segments
    }

    /// Run both passes and normalize the text through the resolved encoding
    pub fn decode_detailed(mut self) -> Result<DecodedPayload, DecodeError> {
        let detection = if self.config.detect_encoding {
            self.detect_encoding()
        } else {
            EncodingDetection {
                encoding: self.config.fallback_encoding,
                selector: None,
            }
        };

        let segments = self.decode_segments(detection.encoding);
        let raw: String = segments.iter().map(|s| s.text.as_str()).collect();
        let text = detection.encoding.normalize(&raw)?;

        Ok(DecodedPayload {
            text,
            encoding: detection.encoding,
            selector_found: detection.selector.is_some(),
            version: self.version,
            segments,
        })
    }

    /// Decoded text, or [`DecodeError::TextConversion`] if the final
    /// normalization fails
    pub fn decode(self) -> Result<String, DecodeError> {
        self.decode_detailed().map(|payload| payload.text)
    }
}

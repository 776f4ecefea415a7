//! Text encodings for byte segments
//!
//! Russian payment QR codes (GOST R 56042) carry a service header whose 7th
//! character names the charset of the rest of the text: `1` for CP1251,
//! `2` for UTF-8 and `3` for KOI8-R.

use encoding_rs::{Encoding, KOI8_R, UTF_8, WINDOWS_1251};
use std::fmt;
use std::str::FromStr;

use crate::decoder::error::DecodeError;

/// Character offset of the encoding selector in a payment payload
pub const SELECTOR_INDEX: usize = 6;

/// Charset used to turn byte segments into text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextEncoding {
    /// Windows code page 1251 (Cyrillic)
    Cp1251,
    /// UTF-8
    #[default]
    Utf8,
    /// KOI8-R (Cyrillic)
    Koi8R,
}

impl TextEncoding {
    /// Resolve the selector character of a payment header
    pub fn from_selector(selector: char) -> Self {
        match selector {
            '1' => TextEncoding::Cp1251,
            '2' => TextEncoding::Utf8,
            '3' => TextEncoding::Koi8R,
            _ => TextEncoding::Utf8,
        }
    }

    fn backend(self) -> &'static Encoding {
        match self {
            TextEncoding::Cp1251 => WINDOWS_1251,
            TextEncoding::Utf8 => UTF_8,
            TextEncoding::Koi8R => KOI8_R,
        }
    }

    /// Decode raw bytes, failing on any malformed sequence
    pub fn decode(self, bytes: &[u8]) -> Option<String> {
        self.backend()
            .decode_without_bom_handling_and_without_replacement(bytes)
            .map(|text| text.into_owned())
    }

    /// Encode `text` in this charset and decode it back.
    ///
    /// Fails if any character has no mapping in the charset.
    pub fn normalize(self, text: &str) -> Result<String, DecodeError> {
        let (bytes, _, unmappable) = self.backend().encode(text);
        if unmappable {
            return Err(DecodeError::TextConversion(self));
        }
        self.decode(&bytes).ok_or(DecodeError::TextConversion(self))
    }
}

impl fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.backend().name())
    }
}

impl FromStr for TextEncoding {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace(['-', '_'], "").as_str() {
            "cp1251" | "windows1251" => Ok(TextEncoding::Cp1251),
            "utf8" => Ok(TextEncoding::Utf8),
            "koi8r" => Ok(TextEncoding::Koi8R),
            other => Err(format!("unknown text encoding '{other}'")),
        }
    }
}

//! Decoder settings
//!
//! Defaults follow the payment QR convention: detect the charset from the
//! selector at character 6 and fall back to UTF-8. `DecoderConfig::from_env`
//! lets tooling override them:
//! - `QR_PAYLOAD_DETECT_ENCODING` (0/1)
//! - `QR_PAYLOAD_SELECTOR_INDEX`
//! - `QR_PAYLOAD_ENCODING` (utf8, cp1251, koi8r)

use crate::decoder::encoding::{SELECTOR_INDEX, TextEncoding};

fn parse_env_usize(name: &str, default: usize) -> usize {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<usize>().ok())
        .unwrap_or(default)
}

fn parse_env_bool_u8(name: &str, default: bool) -> bool {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<u8>().ok())
        .map(|v| v != 0)
        .unwrap_or(default)
}

fn parse_env_encoding(name: &str, default: TextEncoding) -> TextEncoding {
    std::env::var(name)
        .ok()
        .and_then(|v| v.parse::<TextEncoding>().ok())
        .unwrap_or(default)
}

/// How a payload's text encoding is chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecoderConfig {
    /// Run the selector detection pass before decoding
    pub detect_encoding: bool,
    /// Character offset of the selector in the decoded text
    pub selector_index: usize,
    /// Encoding used when no selector is found, or always when detection is off
    pub fallback_encoding: TextEncoding,
}

impl DecoderConfig {
    /// Skip detection and decode every byte segment with `encoding`
    pub fn with_encoding(encoding: TextEncoding) -> Self {
        Self {
            detect_encoding: false,
            fallback_encoding: encoding,
            ..Self::default()
        }
    }

    /// Defaults overridden by `QR_PAYLOAD_*` environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            detect_encoding: parse_env_bool_u8(
                "QR_PAYLOAD_DETECT_ENCODING",
                defaults.detect_encoding,
            ),
            selector_index: parse_env_usize("QR_PAYLOAD_SELECTOR_INDEX", defaults.selector_index),
            fallback_encoding: parse_env_encoding(
                "QR_PAYLOAD_ENCODING",
                defaults.fallback_encoding,
            ),
        }
    }
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            detect_encoding: true,
            selector_index: SELECTOR_INDEX,
            fallback_encoding: TextEncoding::Utf8,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DecoderConfig::default();
        assert!(config.detect_encoding);
        assert_eq!(config.selector_index, 6);
        assert_eq!(config.fallback_encoding, TextEncoding::Utf8);
    }

    #[test]
    fn test_forced_encoding() {
        let config = DecoderConfig::with_encoding(TextEncoding::Koi8R);
        assert!(!config.detect_encoding);
        assert_eq!(config.fallback_encoding, TextEncoding::Koi8R);
        assert_eq!(config.selector_index, 6);
    }

    #[test]
    fn test_missing_env_uses_default() {
        assert_eq!(parse_env_usize("QR_PAYLOAD_TEST_UNSET_USIZE", 9), 9);
        assert!(parse_env_bool_u8("QR_PAYLOAD_TEST_UNSET_BOOL", true));
        assert_eq!(
            parse_env_encoding("QR_PAYLOAD_TEST_UNSET_ENC", TextEncoding::Cp1251),
            TextEncoding::Cp1251
        );
    }
}

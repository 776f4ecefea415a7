//! Property tests for the payload bit cursor

use proptest::prelude::*;
use qr_payload::DecodeError;
use qr_payload::decoder::bit_reader::BitReader;

// Reference: bit `pos` of the buffer, MSB first
fn bit_at(bytes: &[u8], pos: usize) -> u32 {
    ((bytes[pos / 8] >> (7 - pos % 8)) & 1) as u32
}

proptest! {
    #[test]
    fn read_matches_reference_bits(
        bytes in prop::collection::vec(any::<u8>(), 0..32),
        widths in prop::collection::vec(0usize..=16, 0..40),
    ) {
        let mut reader = BitReader::new(&bytes);
        for width in widths {
            let before = reader.position();
            match reader.read_bits(width) {
                Ok(value) => {
                    let expected = (before..before + width)
                        .fold(0u32, |acc, pos| (acc << 1) | bit_at(&bytes, pos));
                    prop_assert_eq!(value, expected);
                    prop_assert_eq!(reader.position(), before + width);
                }
                Err(DecodeError::InsufficientBits { requested, remaining }) => {
                    prop_assert_eq!(requested, width);
                    prop_assert!(remaining < width);
                    prop_assert_eq!(reader.position(), before);
                }
                Err(other) => prop_assert!(false, "unexpected error {:?}", other),
            }
        }
    }

    #[test]
    fn cursor_never_exceeds_buffer(
        bytes in prop::collection::vec(any::<u8>(), 0..16),
        widths in prop::collection::vec(0usize..=32, 0..64),
    ) {
        let mut reader = BitReader::new(&bytes);
        for width in widths {
            let _ = reader.read_bits(width);
            prop_assert!(reader.position() <= bytes.len() * 8);
            prop_assert_eq!(reader.remaining(), bytes.len() * 8 - reader.position());
        }
    }

    #[test]
    fn reset_replays_identical_values(
        bytes in prop::collection::vec(any::<u8>(), 1..16),
        widths in prop::collection::vec(1usize..=16, 1..20),
    ) {
        let mut reader = BitReader::new(&bytes);
        let first: Vec<_> = widths.iter().map(|&w| reader.read_bits(w)).collect();
        reader.reset();
        let second: Vec<_> = widths.iter().map(|&w| reader.read_bits(w)).collect();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn decode_never_panics(
        bytes in prop::collection::vec(any::<u8>(), 0..64),
        version in 0u8..=45,
    ) {
        let text = qr_payload::try_decode_payload(&bytes, version);
        prop_assert!(text.is_ok());
    }
}

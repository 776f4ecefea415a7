/// Numeric mode decoder (Mode 0001)
/// Groups of 3 digits = 10 bits, 2 digits = 7 bits, 1 digit = 4 bits
use crate::decoder::bit_reader::BitReader;
use crate::decoder::modes::SymbolRun;

const PAIR_BITS: usize = 7;
const SINGLE_BITS: usize = 4;

/// Decode numeric data
pub struct NumericDecoder;

impl NumericDecoder {
    /// Decode `character_count` digits, reading full groups of `group_bits`.
    ///
    /// Every group is zero-padded so "016" survives as "016" rather than "16".
    /// If the data ends early, the digits read so far are kept.
    pub fn decode(
        reader: &mut BitReader<'_>,
        character_count: usize,
        group_bits: usize,
    ) -> SymbolRun {
        let mut result = String::with_capacity(character_count + 1);

        for _ in 0..character_count / 3 {
            match reader.read_bits(group_bits) {
                Ok(value) => result.push_str(&format!("{:03}", value)),
                Err(err) => return SymbolRun::cut_short(result, &err),
            }
        }

        let tail = match character_count % 3 {
            1 => reader.read_bits(SINGLE_BITS).map(|value| value.to_string()),
            2 => reader.read_bits(PAIR_BITS).map(|value| format!("{:02}", value)),
            _ => return SymbolRun::complete(result),
        };
        match tail {
            Ok(digits) => {
                result.push_str(&digits);
                SymbolRun::complete(result)
            }
            Err(err) => SymbolRun::cut_short(result, &err),
        }
    }
}

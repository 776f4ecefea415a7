/// Alphanumeric mode decoder (Mode 0010)
/// Alphanumeric character set: 0-9, A-Z, space, $%*+-./:
use crate::decoder::bit_reader::BitReader;
use crate::decoder::error::DecodeError;
use crate::decoder::modes::SymbolRun;

/// Symbol values index into this table
pub const ALPHANUMERIC_TABLE: [char; 45] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I',
    'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', ' ', '$',
    '%', '*', '+', '-', '.', '/', ':',
];

const SINGLE_BITS: usize = 6;

/// Decode alphanumeric data
/// Pairs = 11 bits, single = 6 bits
pub struct AlphanumericDecoder;

impl AlphanumericDecoder {
    /// Decode `character_count` characters, reading pairs of `pair_bits`.
    ///
    /// A symbol pointing outside the table is dropped and decoding moves on to
    /// the next one. If the data ends early, the characters read so far are
    /// kept.
    pub fn decode(
        reader: &mut BitReader<'_>,
        character_count: usize,
        pair_bits: usize,
    ) -> SymbolRun {
        let mut result = String::with_capacity(character_count);

        for _ in 0..character_count / 2 {
            let value = match reader.read_bits(pair_bits) {
                Ok(value) => value,
                Err(err) => return SymbolRun::cut_short(result, &err),
            };
            match Self::pair(value) {
                Ok((first, second)) => {
                    result.push(first);
                    result.push(second);
                }
                Err(err) => Self::report_skip(&err),
            }
        }

        if character_count % 2 != 0 {
            let value = match reader.read_bits(SINGLE_BITS) {
                Ok(value) => value,
                Err(err) => return SymbolRun::cut_short(result, &err),
            };
            match Self::single(value) {
                Ok(ch) => result.push(ch),
                Err(err) => Self::report_skip(&err),
            }
        }

        SymbolRun::complete(result)
    }

    /// Characters at `value / 45` and `value % 45`
    pub fn pair(value: u32) -> Result<(char, char), DecodeError> {
        let first = ALPHANUMERIC_TABLE.get((value / 45) as usize);
        let second = ALPHANUMERIC_TABLE.get((value % 45) as usize);
        match (first, second) {
            (Some(&first), Some(&second)) => Ok((first, second)),
            _ => Err(DecodeError::AlphabetIndexOutOfRange(value)),
        }
    }

    /// Character at `value`, for the 6-bit trailing symbol
    pub fn single(value: u32) -> Result<char, DecodeError> {
        ALPHANUMERIC_TABLE
            .get(value as usize)
            .copied()
            .ok_or(DecodeError::AlphabetIndexOutOfRange(value))
    }

    fn report_skip(err: &DecodeError) {
        if cfg!(debug_assertions) && crate::debug::debug_enabled() {
            eprintln!("ALNUM: skipping symbol: {}", err);
        }
    }
}

/// Byte mode decoder (Mode 0100) for 8-bit data
use crate::decoder::bit_reader::BitReader;
use crate::decoder::encoding::TextEncoding;
use crate::decoder::error::DecodeError;
use crate::decoder::modes::SymbolRun;

/// Decode byte mode data (8 bits per character)
pub struct ByteDecoder;

impl ByteDecoder {
    /// Collect up to `character_count` raw bytes of `symbol_bits` each.
    ///
    /// Also returns the read error if the data ended first.
    pub fn read_bytes(
        reader: &mut BitReader<'_>,
        character_count: usize,
        symbol_bits: usize,
    ) -> (Vec<u8>, Option<DecodeError>) {
        let mut bytes = Vec::with_capacity(character_count);
        for _ in 0..character_count {
            match reader.read_bits(symbol_bits) {
                Ok(value) => bytes.push(value as u8),
                Err(err) => return (bytes, Some(err)),
            }
        }
        (bytes, None)
    }

    /// Read a byte segment and convert it with `encoding`.
    ///
    /// A run that is not valid in `encoding` yields an empty string; the
    /// bits are still consumed. A truncated run converts the bytes that were
    /// present.
    pub fn decode(
        reader: &mut BitReader<'_>,
        character_count: usize,
        symbol_bits: usize,
        encoding: TextEncoding,
    ) -> SymbolRun {
        let (bytes, cut) = Self::read_bytes(reader, character_count, symbol_bits);
        let text = encoding.decode(&bytes).unwrap_or_else(|| {
            if cfg!(debug_assertions) && crate::debug::debug_enabled() {
                eprintln!(
                    "BYTE: {} bytes are not valid {}, dropping segment text",
                    bytes.len(),
                    encoding
                );
            }
            String::new()
        });
        match cut {
            Some(err) => SymbolRun::cut_short(text, &err),
            None => SymbolRun::complete(text),
        }
    }
}

/// MSB-first bit cursor over an error-corrected payload
use crate::decoder::error::DecodeError;

/// Widest field a single read may return
pub const MAX_READ_BITS: usize = 32;

/// Reads big-endian bit fields from a byte buffer.
///
/// The cursor only moves forward on a successful read. A failed read leaves
/// it where it was, so callers can treat the error as "end of usable data".
#[derive(Debug)]
pub struct BitReader<'a> {
    bytes: &'a [u8],
    idx: usize,
}

impl<'a> BitReader<'a> {
    /// Cursor at the first bit of `bytes`
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, idx: 0 }
    }

    /// Total number of bits in the buffer
    pub fn bit_len(&self) -> usize {
        self.bytes.len() * 8
    }

    /// Current cursor position in bits
    pub fn position(&self) -> usize {
        self.idx
    }

    /// Bits left after the cursor
    pub fn remaining(&self) -> usize {
        self.bit_len().saturating_sub(self.idx)
    }

    /// Rewind to the first bit. The buffer itself is never touched.
    pub fn reset(&mut self) {
        self.idx = 0;
    }

    /// Read the next `count` bits as an unsigned integer.
    ///
    /// The first bit read becomes the most significant bit of the result.
    /// A single read is capped at [`MAX_READ_BITS`] (32) bits, even if more
    /// remain; wider requests fail with [`DecodeError::FieldTooWide`]. QR
    /// segment fields are at most 16 bits wide.
    pub fn read_bits(&mut self, count: usize) -> Result<u32, DecodeError> {
        if count > MAX_READ_BITS {
            return Err(DecodeError::FieldTooWide { requested: count });
        }
        let remaining = self.remaining();
        if count > remaining {
            return Err(DecodeError::InsufficientBits {
                requested: count,
                remaining,
            });
        }

        let mut val = 0u32;
        for pos in self.idx..self.idx + count {
            let byte = self.bytes[pos / 8];
            let bit = (byte >> (7 - (pos % 8))) & 1;
            val = (val << 1) | bit as u32;
        }
        self.idx += count;
        Ok(val)
    }
}

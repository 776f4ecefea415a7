//! Payload builders shared by the integration tests

#![allow(dead_code)]

const ALPHANUMERIC: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ $%*+-./:";

/// Bit-level payload builder for a fixed QR version
pub struct PayloadBuilder {
    bits: Vec<bool>,
    version: u8,
}

impl PayloadBuilder {
    pub fn new(version: u8) -> Self {
        Self {
            bits: Vec::new(),
            version,
        }
    }

    fn bucket(&self) -> usize {
        match self.version {
            1..=9 => 0,
            10..=26 => 1,
            _ => 2,
        }
    }

    pub fn bits(mut self, value: u32, count: usize) -> Self {
        for i in (0..count).rev() {
            self.bits.push(((value >> i) & 1) != 0);
        }
        self
    }

    pub fn numeric(self, digits: &str) -> Self {
        let count_bits = [10, 12, 14][self.bucket()];
        let mut builder = self.bits(0b0001, 4).bits(digits.len() as u32, count_bits);
        for group in digits.as_bytes().chunks(3) {
            let value: u32 = std::str::from_utf8(group).unwrap().parse().unwrap();
            let width = [0, 4, 7, 10][group.len()];
            builder = builder.bits(value, width);
        }
        builder
    }

    pub fn alphanumeric(self, text: &str) -> Self {
        let count_bits = [9, 11, 13][self.bucket()];
        let index = |c: char| ALPHANUMERIC.find(c).unwrap() as u32;
        let chars: Vec<char> = text.chars().collect();
        let mut builder = self.bits(0b0010, 4).bits(chars.len() as u32, count_bits);
        for pair in chars.chunks(2) {
            builder = match pair {
                [a, b] => builder.bits(index(*a) * 45 + index(*b), 11),
                [a] => builder.bits(index(*a), 6),
                _ => unreachable!(),
            };
        }
        builder
    }

    pub fn byte(self, data: &[u8]) -> Self {
        let count_bits = [8, 16, 16][self.bucket()];
        let mut builder = self.bits(0b0100, 4).bits(data.len() as u32, count_bits);
        for &b in data {
            builder = builder.bits(b as u32, 8);
        }
        builder
    }

    pub fn terminator(self) -> Self {
        self.bits(0, 4)
    }

    pub fn bit_len(&self) -> usize {
        self.bits.len()
    }

    /// Pack into bytes, zero-padding the last one
    pub fn build(&self) -> Vec<u8> {
        self.bits
            .chunks(8)
            .map(|chunk| {
                chunk
                    .iter()
                    .enumerate()
                    .fold(0u8, |acc, (i, &bit)| acc | ((bit as u8) << (7 - i)))
            })
            .collect()
    }
}

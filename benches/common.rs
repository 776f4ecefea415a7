/// Build a version 1-9 payload: an alphanumeric header followed by one byte
/// segment per chunk of `body`
pub fn payment_payload(header: &str, body: &[u8]) -> Vec<u8> {
    const TABLE: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ $%*+-./:";
    let index = |c: char| TABLE.find(c).expect("alphanumeric header") as u32;

    let mut bits = Vec::new();
    let chars: Vec<char> = header.chars().collect();
    push_bits(&mut bits, 0b0010, 4);
    push_bits(&mut bits, chars.len() as u32, 9);
    for pair in chars.chunks(2) {
        match pair {
            [a, b] => push_bits(&mut bits, index(*a) * 45 + index(*b), 11),
            [a] => push_bits(&mut bits, index(*a), 6),
            _ => {}
        }
    }
    for chunk in body.chunks(255) {
        push_bits(&mut bits, 0b0100, 4);
        push_bits(&mut bits, chunk.len() as u32, 8);
        for &byte in chunk {
            push_bits(&mut bits, byte as u32, 8);
        }
    }
    push_bits(&mut bits, 0, 4);

    bits.chunks(8)
        .map(|chunk| {
            chunk
                .iter()
                .enumerate()
                .fold(0u8, |acc, (i, &bit)| acc | ((bit as u8) << (7 - i)))
        })
        .collect()
}

fn push_bits(bits: &mut Vec<bool>, value: u32, count: usize) {
    for i in (0..count).rev() {
        bits.push(((value >> i) & 1) != 0);
    }
}

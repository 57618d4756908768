// Geometry of the trie under test. A hash is consumed `BITS_PER_LEVEL` bits
// at a time starting from the most significant end; the last level gets
// whatever bits remain.
//
// ```
//   bit 63                                                       bit 0
//   | lvl 0 | lvl 1 | lvl 2 | ...                  | lvl 11 | lvl 12 |
//   |   5   |   5   |   5   |                      |   5    |   4    |
// ```

pub const HASH_BITS: u32 = 64;
pub const BITS_PER_LEVEL: u32 = 5;
pub const FANOUT: usize = 1 << BITS_PER_LEVEL;
pub const MAX_DEPTH: usize = ((HASH_BITS + BITS_PER_LEVEL - 1) / BITS_PER_LEVEL) as usize;

pub const DIGITS: &[u8; FANOUT] = b"0123456789ABCDEFGHIJKLMNOPQRSTUV";

/// Number of hash bits available at `level`.
pub fn level_width(level: usize) -> u32 {
    assert!(level < MAX_DEPTH, "Invalid trie level: {}", level);
    let start = level as u32 * BITS_PER_LEVEL;
    (HASH_BITS - start).min(BITS_PER_LEVEL)
}

/// Right shift that moves the field for `level` down to bit 0.
pub fn level_shift(level: usize) -> u32 {
    let start = level as u32 * BITS_PER_LEVEL;
    HASH_BITS - start - level_width(level)
}

pub fn level_mask(level: usize) -> u64 {
    (1u64 << level_width(level)) - 1
}

pub fn digit_value(c: char) -> Option<u8> {
    let value = c.to_digit(FANOUT as u32)?;
    Some(value as u8)
}

pub fn digit_char(bucket: u8) -> char {
    DIGITS[bucket as usize] as char
}

use std::collections::BTreeMap;
use once_cell::sync::Lazy;

/// Letter weights for the default bag, close to a classic tile word game.
/// 98 tiles in total.
pub static LETTER_DISTRIBUTION: Lazy<BTreeMap<char, u32>> = Lazy::new(|| {
    BTreeMap::from([
        ('A', 9),
        ('B', 2),
        ('C', 2),
        ('D', 4),
        ('E', 12),
        ('F', 2),
        ('G', 3),
        ('H', 2),
        ('I', 9),
        ('J', 1),
        ('K', 1),
        ('L', 4),
        ('M', 2),
        ('N', 6),
        ('O', 8),
        ('P', 2),
        ('Q', 1),
        ('R', 6),
        ('S', 4),
        ('T', 6),
        ('U', 4),
        ('V', 2),
        ('W', 2),
        ('X', 1),
        ('Y', 2),
        ('Z', 1),
    ])
});

/// Only uppercase ASCII letters can sit on a tile
pub fn is_valid_letter(letter: char) -> bool {
    letter.is_ascii_uppercase()
}

/// Total number of letters a bag built from this distribution holds
pub fn total_weight(distribution: &BTreeMap<char, u32>) -> usize {
    distribution.values().map(|w| *w as usize).sum()
}

use std::collections::{BTreeMap, VecDeque};

use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

use crate::{
    error::{GameError, Result},
    utils::letters::{is_valid_letter, total_weight},
};

/// A finite, shuffled reservoir of letters.
///
/// The bag is filled once from a weighted distribution and only ever drains.
#[derive(Debug, Clone)]
pub struct LetterBag {
    letters: VecDeque<char>,
}

impl LetterBag {
    /// Build a bag holding each letter `weight` times, shuffled with a seeded RNG.
    ///
    /// The same distribution and seed always yield the same draw order.
    pub fn new(distribution: &BTreeMap<char, u32>, seed: u64) -> Result<Self> {
        if distribution.is_empty() {
            return Err(GameError::InvalidConfig(
                "letter distribution is empty".to_string(),
            ));
        }

        let mut letters = Vec::with_capacity(total_weight(distribution));
        for (&letter, &weight) in distribution {
            if !is_valid_letter(letter) {
                return Err(GameError::InvalidConfig(format!(
                    "distribution contains invalid letter '{}'",
                    letter
                )));
            }
            if weight == 0 {
                return Err(GameError::InvalidConfig(format!(
                    "letter '{}' has a zero weight",
                    letter
                )));
            }
            letters.extend(std::iter::repeat(letter).take(weight as usize));
        }

        // Fisher-Yates
        let mut rng = StdRng::seed_from_u64(seed);
        letters.shuffle(&mut rng);

        tracing::debug!("Filled letter bag with {} letters (seed {})", letters.len(), seed);

        Ok(Self {
            letters: letters.into(),
        })
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Number of letters left to draw
    pub fn remaining(&self) -> usize {
        self.letters.len()
    }

    /// Next letter to be drawn, without removing it
    pub fn peek_next(&self) -> Option<char> {
        self.letters.front().copied()
    }

    /// Up to `count` letters in draw order
    pub fn upcoming(&self, count: usize) -> Vec<char> {
        self.letters.iter().take(count).copied().collect()
    }

    /// Remove and return the next letter
    pub fn pop_next(&mut self) -> Result<char> {
        self.letters.pop_front().ok_or(GameError::EmptyBag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::letters::LETTER_DISTRIBUTION;

    fn drain(bag: &mut LetterBag) -> Vec<char> {
        let mut drawn = Vec::new();
        while !bag.is_empty() {
            drawn.push(bag.pop_next().unwrap());
        }
        drawn
    }

    #[test]
    fn test_drains_exact_multiset() {
        let distribution = BTreeMap::from([('A', 3), ('B', 1), ('Z', 2)]);
        let mut bag = LetterBag::new(&distribution, 7).unwrap();
        assert_eq!(bag.remaining(), 6);

        let mut drawn = drain(&mut bag);
        drawn.sort_unstable();
        assert_eq!(drawn, vec!['A', 'A', 'A', 'B', 'Z', 'Z']);
    }

    #[test]
    fn test_default_distribution_multiset() {
        let mut bag = LetterBag::new(&LETTER_DISTRIBUTION, 42).unwrap();
        let drawn = drain(&mut bag);

        let mut counts: BTreeMap<char, u32> = BTreeMap::new();
        for letter in drawn {
            *counts.entry(letter).or_default() += 1;
        }
        assert_eq!(counts, *LETTER_DISTRIBUTION);
    }

    #[test]
    fn test_same_seed_same_order() {
        let mut first = LetterBag::new(&LETTER_DISTRIBUTION, 1234).unwrap();
        let mut second = LetterBag::new(&LETTER_DISTRIBUTION, 1234).unwrap();
        assert_eq!(drain(&mut first), drain(&mut second));
    }

    #[test]
    fn test_peek_matches_pop() {
        let mut bag = LetterBag::new(&LETTER_DISTRIBUTION, 9).unwrap();
        let upcoming = bag.upcoming(3);
        assert_eq!(upcoming.len(), 3);

        let peeked = bag.peek_next();
        assert_eq!(peeked, Some(upcoming[0]));
        assert_eq!(bag.pop_next().ok(), peeked);
        assert_eq!(bag.peek_next(), Some(upcoming[1]));
    }

    #[test]
    fn test_upcoming_is_bounded_by_remaining() {
        let distribution = BTreeMap::from([('Q', 2)]);
        let bag = LetterBag::new(&distribution, 0).unwrap();
        assert_eq!(bag.upcoming(7), vec!['Q', 'Q']);
    }

    #[test]
    fn test_pop_empty_bag_fails() {
        let distribution = BTreeMap::from([('E', 1)]);
        let mut bag = LetterBag::new(&distribution, 0).unwrap();
        assert_eq!(bag.pop_next(), Ok('E'));
        assert!(bag.is_empty());
        assert_eq!(bag.peek_next(), None);
        assert_eq!(bag.pop_next(), Err(GameError::EmptyBag));
    }

    #[test]
    fn test_invalid_distributions() {
        let empty = BTreeMap::new();
        assert!(matches!(
            LetterBag::new(&empty, 0),
            Err(GameError::InvalidConfig(_))
        ));

        let zero_weight = BTreeMap::from([('A', 2), ('B', 0)]);
        assert!(matches!(
            LetterBag::new(&zero_weight, 0),
            Err(GameError::InvalidConfig(_))
        ));

        let lowercase = BTreeMap::from([('a', 2)]);
        assert!(matches!(
            LetterBag::new(&lowercase, 0),
            Err(GameError::InvalidConfig(_))
        ));
    }
}

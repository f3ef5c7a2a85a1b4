use std::collections::HashMap;

use crate::models::{Tile, BLANK_LETTER};

/// One row of the distribution table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LetterEntry {
    letter: char,
    count: u8,
    value: u8,
}

/// Romanian tile set: (letter, count, value).
/// Diacritic letters carry their own entries, `*` is the blank.
const ROMANIAN_TILES: &[(char, u8, u8)] = &[
    ('A', 11, 1),
    ('B', 2, 9),
    ('C', 5, 1),
    ('D', 4, 2),
    ('E', 9, 1),
    ('F', 2, 8),
    ('G', 2, 9),
    ('H', 1, 10),
    ('I', 10, 1),
    ('Î', 1, 8),
    ('J', 1, 10),
    ('L', 4, 1),
    ('M', 3, 4),
    ('N', 6, 1),
    ('O', 5, 1),
    ('P', 4, 2),
    ('R', 7, 1),
    ('S', 5, 1),
    ('Ș', 1, 8),
    ('T', 7, 1),
    ('Ț', 1, 8),
    ('U', 6, 1),
    ('V', 2, 8),
    ('X', 1, 10),
    ('Z', 1, 10),
    (BLANK_LETTER, 2, 0),
];

/// Immutable letter distribution: how many of each tile the bag starts
/// with and what each letter is worth.
///
/// Built once at startup and shared by reference (usually through an
/// `Arc`) with every tile supply that draws from it.
#[derive(Debug, Clone)]
pub struct LetterDistribution {
    entries: Vec<LetterEntry>,
    index: HashMap<char, usize>,
}

impl LetterDistribution {
    pub fn new(entries: impl IntoIterator<Item = (char, u8, u8)>) -> Self {
        let entries: Vec<LetterEntry> = entries
            .into_iter()
            .map(|(letter, count, value)| LetterEntry {
                letter: normalize(letter),
                count,
                value,
            })
            .collect();
        let index = entries
            .iter()
            .enumerate()
            .map(|(i, entry)| (entry.letter, i))
            .collect();
        Self { entries, index }
    }

    /// The reference Romanian distribution.
    pub fn romanian() -> Self {
        Self::new(ROMANIAN_TILES.iter().copied())
    }

    /// Number of tiles a freshly filled bag holds.
    pub fn total_tiles(&self) -> usize {
        self.entries.iter().map(|entry| entry.count as usize).sum()
    }

    /// Point value for a letter. Blanks and unknown letters are worth 0.
    pub fn value_of(&self, letter: char) -> u8 {
        let letter = normalize(letter);
        if letter == BLANK_LETTER {
            return 0;
        }
        self.entry(letter).map_or(0, |entry| entry.value)
    }

    /// Whether a blank may stand in for `letter`.
    pub fn is_assignable(&self, letter: char) -> bool {
        let letter = normalize(letter);
        letter != BLANK_LETTER && self.entry(letter).is_some()
    }

    /// Every tile of the distribution, in table order.
    pub fn tiles(&self) -> Vec<Tile> {
        self.entries
            .iter()
            .flat_map(|entry| {
                let tile = if entry.letter == BLANK_LETTER {
                    Tile::blank()
                } else {
                    Tile::new(entry.letter, entry.value)
                };
                std::iter::repeat(tile).take(entry.count as usize)
            })
            .collect()
    }

    /// Check that a set of tiles could legally have come out of this
    /// distribution: known letters, never more copies than the table holds.
    pub fn validate_tiles(&self, tiles: &[Tile]) -> bool {
        let mut counts: HashMap<char, usize> = HashMap::new();
        for tile in tiles {
            *counts.entry(tile.letter).or_default() += 1;
        }

        counts.iter().all(|(letter, count)| {
            self.entry(*letter)
                .is_some_and(|entry| *count <= entry.count as usize)
        })
    }

    fn entry(&self, letter: char) -> Option<&LetterEntry> {
        self.index.get(&letter).map(|&i| &self.entries[i])
    }
}

impl Default for LetterDistribution {
    fn default() -> Self {
        Self::romanian()
    }
}

/// Upper-case a single letter, keeping it as is when the mapping
/// would expand to several characters.
pub fn normalize(letter: char) -> char {
    let mut upper = letter.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(single), None) => single,
        _ => letter,
    }
}

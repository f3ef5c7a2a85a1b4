use std::fmt;

use serde::{Deserialize, Serialize};

/// Width and height of the board.
pub const BOARD_SIZE: usize = 15;

/// The square every opening move must cover.
pub const CENTER: Position = Position { row: 7, col: 7 };

/// Marker letter of a blank tile in the distribution table.
pub const BLANK_LETTER: char = '*';

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn in_bounds(&self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }

    /// Move one square along `axis`, backwards when `forward` is false.
    /// Returns `None` when stepping off the board.
    pub fn step(&self, axis: Axis, forward: bool) -> Option<Position> {
        let (row, col) = match (axis, forward) {
            (Axis::Horizontal, true) => (Some(self.row), self.col.checked_add(1)),
            (Axis::Horizontal, false) => (Some(self.row), self.col.checked_sub(1)),
            (Axis::Vertical, true) => (self.row.checked_add(1), Some(self.col)),
            (Axis::Vertical, false) => (self.row.checked_sub(1), Some(self.col)),
        };
        let next = Position::new(row?, col?);
        next.in_bounds().then_some(next)
    }

    /// Orthogonal neighbours that lie on the board.
    pub fn neighbors(&self) -> impl Iterator<Item = Position> + '_ {
        [Axis::Horizontal, Axis::Vertical]
            .into_iter()
            .flat_map(move |axis| [self.step(axis, false), self.step(axis, true)])
            .flatten()
    }

    /// Coordinate that varies when walking along `axis`.
    pub fn along(&self, axis: Axis) -> usize {
        match axis {
            Axis::Horizontal => self.col,
            Axis::Vertical => self.row,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Hash, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// Row fixed, column varies.
    Horizontal,
    /// Column fixed, row varies.
    Vertical,
}

impl Axis {
    pub fn perpendicular(self) -> Axis {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Hash, Eq, PartialEq, Default)]
pub enum BonusType {
    #[default]
    #[serde(rename = "")]
    None,
    #[serde(rename = "DL")]
    DoubleLetter,
    #[serde(rename = "TL")]
    TripleLetter,
    #[serde(rename = "DW")]
    DoubleWord,
    #[serde(rename = "TW")]
    TripleWord,
}

impl BonusType {
    /// Factor applied to a newly placed tile's value.
    pub fn letter_multiplier(self) -> i32 {
        match self {
            BonusType::DoubleLetter => 2,
            BonusType::TripleLetter => 3,
            BonusType::None | BonusType::DoubleWord | BonusType::TripleWord => 1,
        }
    }

    /// Factor applied to the whole word when a newly placed tile covers it.
    pub fn word_multiplier(self) -> i32 {
        match self {
            BonusType::DoubleWord => 2,
            BonusType::TripleWord => 3,
            BonusType::None | BonusType::DoubleLetter | BonusType::TripleLetter => 1,
        }
    }
}

/// A tile as it exists in the bag or on a rack.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Hash, Eq, PartialEq)]
pub struct Tile {
    pub letter: char,
    pub value: u8,
    pub is_blank: bool,
}

impl Tile {
    pub fn new(letter: char, value: u8) -> Self {
        Self {
            letter,
            value,
            is_blank: false,
        }
    }

    pub fn blank() -> Self {
        Self {
            letter: BLANK_LETTER,
            value: 0,
            is_blank: true,
        }
    }
}

/// A tile committed to the board. Blanks keep the letter chosen for them
/// but always score zero.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Hash, Eq, PartialEq)]
pub struct PlacedTile {
    pub letter: char,
    pub tile: Tile,
}

impl PlacedTile {
    pub fn value(&self) -> i32 {
        if self.tile.is_blank {
            0
        } else {
            self.tile.value as i32
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Square {
    pub position: Position,
    pub bonus: BonusType,
    pub occupied: Option<PlacedTile>,
}

/// Turn life-cycle of a session.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    AwaitingPlacement,
    PendingConfirmation,
    ExchangePending,
    GameOver,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_stops_at_edges() {
        let corner = Position::new(0, 0);
        assert_eq!(corner.step(Axis::Horizontal, false), None);
        assert_eq!(corner.step(Axis::Vertical, false), None);
        assert_eq!(corner.step(Axis::Horizontal, true), Some(Position::new(0, 1)));

        let far = Position::new(14, 14);
        assert_eq!(far.step(Axis::Vertical, true), None);
        assert_eq!(far.step(Axis::Vertical, false), Some(Position::new(13, 14)));
    }

    #[test]
    fn test_neighbors() {
        assert_eq!(Position::new(0, 0).neighbors().count(), 2);
        assert_eq!(Position::new(0, 5).neighbors().count(), 3);
        assert_eq!(CENTER.neighbors().count(), 4);
    }

    #[test]
    fn test_multipliers_are_exclusive() {
        for bonus in [
            BonusType::None,
            BonusType::DoubleLetter,
            BonusType::TripleLetter,
            BonusType::DoubleWord,
            BonusType::TripleWord,
        ] {
            // A square never boosts both the letter and the word.
            assert!(bonus.letter_multiplier() == 1 || bonus.word_multiplier() == 1);
        }
        assert_eq!(BonusType::TripleLetter.letter_multiplier(), 3);
        assert_eq!(BonusType::DoubleWord.word_multiplier(), 2);
    }

    #[test]
    fn test_blank_scores_zero_on_board() {
        let placed = PlacedTile {
            letter: 'Z',
            tile: Tile::blank(),
        };
        assert_eq!(placed.value(), 0);

        let placed = PlacedTile {
            letter: 'Z',
            tile: Tile::new('Z', 10),
        };
        assert_eq!(placed.value(), 10);
    }
}

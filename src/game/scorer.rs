use serde::{Deserialize, Serialize};

use crate::{
    game::{
        board::{Board, WordSpan},
        pending::PendingMove,
    },
    models::BonusType,
};

/// One letter of a word as the scorer sees it.
#[derive(Debug, Clone, Copy)]
pub struct ScoredCell {
    pub value: i32,
    pub bonus: BonusType,
    /// Placed this turn. Only new tiles pick up square bonuses.
    pub is_new: bool,
}

/// Score of a single word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordScore {
    pub word: String,
    pub letter_score: i32,
    pub word_multiplier: i32,
    pub score: i32,
}

pub struct Scorer;

impl Scorer {
    /// Score a run of letters.
    ///
    /// - Each letter contributes its base value
    /// - DL/TL multiply a letter's value, but only for tiles placed this turn
    /// - DW/TW under new tiles multiply the whole word; several of them
    ///   compound (two DW squares make x4)
    pub fn calculate(cells: &[ScoredCell]) -> (i32, i32) {
        let mut letter_score = 0;
        let mut word_multiplier = 1;

        for cell in cells {
            if cell.is_new {
                letter_score += cell.value * cell.bonus.letter_multiplier();
                word_multiplier *= cell.bonus.word_multiplier();
            } else {
                letter_score += cell.value;
            }
        }

        (letter_score, word_multiplier)
    }

    /// Score a word found on the board, treating pending tiles as new.
    pub fn score_word(board: &Board, span: &WordSpan, pending: &PendingMove) -> WordScore {
        let cells: Vec<ScoredCell> = span
            .positions
            .iter()
            .map(|&position| match pending.get(position) {
                Some(tile) => ScoredCell {
                    value: tile.placed().value(),
                    bonus: board.bonus_at(position),
                    is_new: true,
                },
                None => ScoredCell {
                    value: board.tile_at(position).map_or(0, |placed| placed.value()),
                    bonus: board.bonus_at(position),
                    is_new: false,
                },
            })
            .collect();

        let (letter_score, word_multiplier) = Self::calculate(&cells);
        WordScore {
            word: span.word.clone(),
            letter_score,
            word_multiplier,
            score: letter_score * word_multiplier,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Axis, PlacedTile, Position, Tile};

    fn new_cell(value: i32, bonus: BonusType) -> ScoredCell {
        ScoredCell {
            value,
            bonus,
            is_new: true,
        }
    }

    #[test]
    fn test_triple_word_and_double_letter_compose() {
        // ((1*2) + 1 + 1) * 3 = 12
        let cells = [
            new_cell(1, BonusType::TripleWord),
            new_cell(1, BonusType::DoubleLetter),
            new_cell(1, BonusType::None),
        ];
        let (letters, multiplier) = Scorer::calculate(&cells);
        assert_eq!(letters * multiplier, 12);
    }

    #[test]
    fn test_word_multipliers_compound() {
        let cells = [
            new_cell(2, BonusType::DoubleWord),
            new_cell(1, BonusType::None),
            new_cell(3, BonusType::DoubleWord),
        ];
        assert_eq!(Scorer::calculate(&cells), (6, 4));
    }

    #[test]
    fn test_old_tiles_ignore_bonuses() {
        let cells = [
            ScoredCell {
                value: 5,
                bonus: BonusType::TripleLetter,
                is_new: false,
            },
            ScoredCell {
                value: 1,
                bonus: BonusType::TripleWord,
                is_new: false,
            },
            new_cell(2, BonusType::None),
        ];
        assert_eq!(Scorer::calculate(&cells), (8, 1));
    }

    #[test]
    fn test_score_word_on_board() {
        // Row 0: TW at (0,0), DL at (0,3).
        let board = Board::new();
        let mut pending = PendingMove::new();
        for (col, letter) in "CASA".chars().enumerate() {
            pending
                .add(Position::new(0, col), Tile::new(letter, 1), letter)
                .unwrap();
        }
        let span = board.word_through(Position::new(0, 0), Axis::Horizontal, &pending);

        let score = Scorer::score_word(&board, &span, &pending);
        assert_eq!(score.word, "CASA");
        assert_eq!(score.letter_score, 5);
        assert_eq!(score.word_multiplier, 3);
        assert_eq!(score.score, 15);
    }

    #[test]
    fn test_blank_contributes_nothing() {
        let mut board = Board::new();
        board
            .place(
                Position::new(7, 6),
                PlacedTile {
                    letter: 'B',
                    tile: Tile::new('B', 9),
                },
            )
            .unwrap();
        let mut pending = PendingMove::new();
        pending.add(Position::new(7, 7), Tile::blank(), 'E').unwrap();

        let span = board.word_through(Position::new(7, 7), Axis::Horizontal, &pending);
        let score = Scorer::score_word(&board, &span, &pending);
        assert_eq!(score.word, "BE");
        assert_eq!(score.score, 9);
    }
}

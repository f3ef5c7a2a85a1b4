use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::{
    dictionary::Dictionary,
    error::MoveRejection,
    game::{
        board::{Board, WordSpan},
        pending::PendingMove,
        scorer::{Scorer, WordScore},
    },
    models::{Axis, Position, CENTER},
};

/// A legal move and what it is worth.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredMove {
    pub axis: Axis,
    /// Main word first, then cross words in placement order.
    pub words: Vec<WordScore>,
    pub total: i32,
}

impl ScoredMove {
    pub fn word_list(&self) -> Vec<String> {
        self.words.iter().map(|w| w.word.clone()).collect()
    }
}

/// Checks a pending move against the board and dictionary.
///
/// Validation only reads: the board and pending move are never modified,
/// so the same inputs always give the same answer.
pub struct MoveValidator;

impl MoveValidator {
    pub fn validate(
        board: &Board,
        pending: &PendingMove,
        dictionary: &Dictionary,
    ) -> Result<ScoredMove, MoveRejection> {
        let first = pending
            .tiles()
            .first()
            .map(|tile| tile.position)
            .ok_or(MoveRejection::EmptyMove)?;

        let axis = Self::line_axis(board, pending)?;
        Self::check_contiguous(board, pending, axis)?;

        let spans = Self::form_words(board, pending, first, axis);
        let main = &spans[0];
        tracing::debug!("Main word {} along {:?}", main.word, axis);

        if board.is_first_move() {
            if !main.positions.contains(&CENTER) {
                return Err(MoveRejection::MissesCenter);
            }
        } else if !pending.positions().any(|pos| board.touches_placed(pos)) {
            return Err(MoveRejection::Disconnected);
        }

        if let Some(unknown) = spans.iter().find(|span| !dictionary.contains(&span.word)) {
            return Err(MoveRejection::UnknownWord(unknown.word.to_lowercase()));
        }

        let words: Vec<WordScore> = spans
            .iter()
            .map(|span| Scorer::score_word(board, span, pending))
            .collect();
        let total = words.iter().map(|w| w.score).sum();

        Ok(ScoredMove { axis, words, total })
    }

    /// The axis all pending tiles share. A lone tile reads horizontally
    /// unless it only forms a word vertically.
    fn line_axis(board: &Board, pending: &PendingMove) -> Result<Axis, MoveRejection> {
        let rows: BTreeSet<usize> = pending.positions().map(|pos| pos.row).collect();
        let cols: BTreeSet<usize> = pending.positions().map(|pos| pos.col).collect();

        match (rows.len(), cols.len()) {
            (1, 1) => {
                let Some(pos) = pending.positions().next() else {
                    return Err(MoveRejection::EmptyMove);
                };
                let across = board.word_through(pos, Axis::Horizontal, pending);
                let down = board.word_through(pos, Axis::Vertical, pending);
                if across.len() == 1 && down.len() > 1 {
                    Ok(Axis::Vertical)
                } else {
                    Ok(Axis::Horizontal)
                }
            }
            (1, _) => Ok(Axis::Horizontal),
            (_, 1) => Ok(Axis::Vertical),
            _ => Err(MoveRejection::NotInLine),
        }
    }

    /// Every square between the outermost pending tiles must hold a letter,
    /// pending or committed.
    fn check_contiguous(
        board: &Board,
        pending: &PendingMove,
        axis: Axis,
    ) -> Result<(), MoveRejection> {
        let Some(anchor) = pending.positions().next() else {
            return Err(MoveRejection::EmptyMove);
        };
        let along: Vec<usize> = pending.positions().map(|pos| pos.along(axis)).collect();
        let (Some(&min), Some(&max)) = (along.iter().min(), along.iter().max()) else {
            return Err(MoveRejection::EmptyMove);
        };

        let filled = (min..=max)
            .map(|i| match axis {
                Axis::Horizontal => Position::new(anchor.row, i),
                Axis::Vertical => Position::new(i, anchor.col),
            })
            .all(|pos| pending.contains(pos) || board.is_occupied(pos));

        if filled {
            Ok(())
        } else {
            Err(MoveRejection::Gap)
        }
    }

    /// All words a move would form, without consulting the dictionary.
    /// Empty when the tiles do not lie in one line.
    pub fn preview_words(board: &Board, pending: &PendingMove) -> Vec<WordSpan> {
        let Some(first) = pending.positions().next() else {
            return Vec::new();
        };
        let Ok(axis) = Self::line_axis(board, pending) else {
            return Vec::new();
        };
        Self::form_words(board, pending, first, axis)
    }

    /// Main word through `first`, followed by every cross word longer than
    /// a single letter. Never empty.
    fn form_words(board: &Board, pending: &PendingMove, first: Position, axis: Axis) -> Vec<WordSpan> {
        let mut spans = vec![board.word_through(first, axis, pending)];
        spans.extend(
            pending
                .positions()
                .map(|pos| board.word_through(pos, axis.perpendicular(), pending))
                .filter(|span| span.len() > 1),
        );
        spans
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PlacedTile, Tile};

    fn dictionary() -> Dictionary {
        Dictionary::from_words(["cat", "at", "ca", "cal", "tac", "oa", "ot"])
    }

    fn pending_word(start: Position, axis: Axis, word: &str) -> PendingMove {
        let mut pending = PendingMove::new();
        let mut pos = Some(start);
        for letter in word.chars() {
            let here = pos.expect("word runs off the board");
            pending.add(here, Tile::new(letter, 1), letter).unwrap();
            pos = here.step(axis, true);
        }
        pending
    }

    fn board_with_cat() -> Board {
        let mut board = Board::new();
        let pending = pending_word(Position::new(7, 6), Axis::Horizontal, "CAT");
        board.commit(&pending).unwrap();
        board
    }

    #[test]
    fn test_empty_move_rejected() {
        let err = MoveValidator::validate(&Board::new(), &PendingMove::new(), &dictionary())
            .unwrap_err();
        assert_eq!(err, MoveRejection::EmptyMove);
    }

    #[test]
    fn test_first_move_through_center() {
        let board = Board::new();
        let pending = pending_word(Position::new(7, 6), Axis::Horizontal, "CAT");

        let scored = MoveValidator::validate(&board, &pending, &dictionary()).unwrap();
        assert_eq!(scored.axis, Axis::Horizontal);
        assert_eq!(scored.word_list(), vec!["CAT".to_string()]);
        assert_eq!(scored.total, 3);
    }

    #[test]
    fn test_first_move_missing_center() {
        let board = Board::new();
        let pending = pending_word(Position::new(3, 3), Axis::Horizontal, "CAT");
        let err = MoveValidator::validate(&board, &pending, &dictionary()).unwrap_err();
        assert_eq!(err, MoveRejection::MissesCenter);
    }

    #[test]
    fn test_diagonal_rejected() {
        let board = Board::new();
        let mut pending = PendingMove::new();
        pending.add(Position::new(7, 7), Tile::new('A', 1), 'A').unwrap();
        pending.add(Position::new(8, 8), Tile::new('T', 1), 'T').unwrap();
        let err = MoveValidator::validate(&board, &pending, &dictionary()).unwrap_err();
        assert_eq!(err, MoveRejection::NotInLine);
    }

    #[test]
    fn test_gap_rejected() {
        let board = Board::new();
        let mut pending = PendingMove::new();
        pending.add(Position::new(7, 6), Tile::new('C', 1), 'C').unwrap();
        pending.add(Position::new(7, 8), Tile::new('T', 1), 'T').unwrap();
        let err = MoveValidator::validate(&board, &pending, &dictionary()).unwrap_err();
        assert_eq!(err, MoveRejection::Gap);
    }

    #[test]
    fn test_gap_filled_by_board_is_fine() {
        let mut board = Board::new();
        board
            .place(
                Position::new(7, 7),
                PlacedTile {
                    letter: 'A',
                    tile: Tile::new('A', 1),
                },
            )
            .unwrap();
        // Not the opening move any more.
        board.commit(&PendingMove::new()).unwrap();

        let mut pending = PendingMove::new();
        pending.add(Position::new(7, 6), Tile::new('C', 1), 'C').unwrap();
        pending.add(Position::new(7, 8), Tile::new('T', 1), 'T').unwrap();
        let scored = MoveValidator::validate(&board, &pending, &dictionary()).unwrap();
        assert_eq!(scored.word_list(), vec!["CAT".to_string()]);
    }

    #[test]
    fn test_disconnected_rejected() {
        let board = board_with_cat();
        let mut pending = PendingMove::new();
        pending.add(Position::new(0, 0), Tile::new('A', 1), 'A').unwrap();
        let err = MoveValidator::validate(&board, &pending, &dictionary()).unwrap_err();
        assert_eq!(err, MoveRejection::Disconnected);
    }

    #[test]
    fn test_single_tile_forms_vertical_word() {
        let board = board_with_cat();
        let mut pending = PendingMove::new();
        // O above the A of CAT forms "OA" downwards.
        pending.add(Position::new(6, 7), Tile::new('O', 1), 'O').unwrap();

        let scored = MoveValidator::validate(&board, &pending, &dictionary()).unwrap();
        assert_eq!(scored.axis, Axis::Vertical);
        assert_eq!(scored.word_list(), vec!["OA".to_string()]);
        // (6,7) is plain: O(1) + A(1)
        assert_eq!(scored.total, 2);
    }

    #[test]
    fn test_single_tile_extension_has_one_main_word() {
        let board = board_with_cat();
        let mut pending = PendingMove::new();
        // CAT + nothing valid: "CATS" is not in the list.
        pending.add(Position::new(7, 9), Tile::new('S', 1), 'S').unwrap();
        let err = MoveValidator::validate(&board, &pending, &dictionary()).unwrap_err();
        assert_eq!(err, MoveRejection::UnknownWord("cats".to_string()));

        let dict = Dictionary::from_words(["cats"]);
        let scored = MoveValidator::validate(&board, &pending, &dict).unwrap();
        assert_eq!(scored.word_list(), vec!["CATS".to_string()]);
    }

    #[test]
    fn test_cross_words_are_checked_and_scored() {
        let board = board_with_cat();
        // "OT" placed at (6,7)-(6,8): forms OA and TT crosses.
        let pending = pending_word(Position::new(6, 7), Axis::Horizontal, "OT");
        let err = MoveValidator::validate(&board, &pending, &dictionary()).unwrap_err();
        assert_eq!(err, MoveRejection::UnknownWord("tt".to_string()));

        let dict = Dictionary::from_words(["ot", "oa", "tt"]);
        let scored = MoveValidator::validate(&board, &pending, &dict).unwrap();
        assert_eq!(
            scored.word_list(),
            vec!["OT".to_string(), "OA".to_string(), "TT".to_string()]
        );
        // (6,8) is a double letter: OT = 1 + 2, OA = 1 + 1, TT = 2 + 1
        assert_eq!(scored.total, 3 + 2 + 3);
    }

    #[test]
    fn test_validation_is_pure() {
        let board = board_with_cat();
        let pending = pending_word(Position::new(6, 7), Axis::Horizontal, "OT");
        let dict = Dictionary::from_words(["ot", "oa", "tt"]);

        let before = board.occupied_count();
        let a = MoveValidator::validate(&board, &pending, &dict);
        let b = MoveValidator::validate(&board, &pending, &dict);
        assert_eq!(a, b);
        assert_eq!(board.occupied_count(), before);
        assert_eq!(board.letter_at(Position::new(6, 7)), None);
        assert_eq!(pending.len(), 2);
    }

    #[test]
    fn test_preview_words() {
        let board = board_with_cat();
        let pending = pending_word(Position::new(6, 7), Axis::Horizontal, "OT");
        let words: Vec<String> = MoveValidator::preview_words(&board, &pending)
            .into_iter()
            .map(|span| span.word)
            .collect();
        assert_eq!(words, vec!["OT", "OA", "TT"]);
    }
}

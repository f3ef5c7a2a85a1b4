use crate::{
    error::EngineError,
    game::{layout, pending::PendingMove},
    models::{Axis, BonusType, PlacedTile, Position, Square, BOARD_SIZE},
};

/// A maximal run of letters along one axis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordSpan {
    pub word: String,
    pub positions: Vec<Position>,
}

impl WordSpan {
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// The 15x15 grid and the tiles committed to it.
#[derive(Debug, Clone)]
pub struct Board {
    squares: Vec<Square>,
    first_move: bool,
}

impl Board {
    pub fn new() -> Self {
        let squares = (0..BOARD_SIZE)
            .flat_map(|row| (0..BOARD_SIZE).map(move |col| Position::new(row, col)))
            .map(|position| Square {
                position,
                bonus: layout::bonus_at(position),
                occupied: None,
            })
            .collect();
        Self {
            squares,
            first_move: true,
        }
    }

    /// True until a move has been committed.
    pub fn is_first_move(&self) -> bool {
        self.first_move
    }

    pub fn bonus_at(&self, position: Position) -> BonusType {
        self.square(position).map_or(BonusType::None, |square| square.bonus)
    }

    pub fn tile_at(&self, position: Position) -> Option<&PlacedTile> {
        self.square(position)?.occupied.as_ref()
    }

    pub fn letter_at(&self, position: Position) -> Option<char> {
        self.tile_at(position).map(|placed| placed.letter)
    }

    pub fn is_occupied(&self, position: Position) -> bool {
        self.tile_at(position).is_some()
    }

    /// Whether any orthogonal neighbour of `position` holds a committed tile.
    pub fn touches_placed(&self, position: Position) -> bool {
        position.neighbors().any(|next| self.is_occupied(next))
    }

    pub fn occupied_count(&self) -> usize {
        self.squares.iter().filter(|s| s.occupied.is_some()).count()
    }

    pub fn squares(&self) -> impl Iterator<Item = &Square> {
        self.squares.iter()
    }

    /// Permanently put a tile on an empty square.
    pub fn place(&mut self, position: Position, placed: PlacedTile) -> Result<(), EngineError> {
        let square = self
            .square_mut(position)
            .ok_or(EngineError::OutOfBounds(position))?;
        if square.occupied.is_some() {
            return Err(EngineError::SquareOccupied(position));
        }
        square.occupied = Some(placed);
        Ok(())
    }

    /// Commit every pending tile and end the opening move.
    ///
    /// All squares are checked before any is written, so a failure leaves
    /// the board untouched.
    pub fn commit(&mut self, pending: &PendingMove) -> Result<(), EngineError> {
        for position in pending.positions() {
            match self.square(position) {
                None => return Err(EngineError::OutOfBounds(position)),
                Some(square) if square.occupied.is_some() => {
                    return Err(EngineError::SquareOccupied(position))
                }
                Some(_) => {}
            }
        }
        for tile in pending.tiles() {
            self.place(tile.position, tile.placed())?;
        }
        self.first_move = false;
        Ok(())
    }

    /// Collect the word running through `position` along `axis`, reading
    /// pending letters as if they were already on the board.
    pub fn word_through(&self, position: Position, axis: Axis, pending: &PendingMove) -> WordSpan {
        let letter = |pos: Position| {
            self.letter_at(pos)
                .or_else(|| pending.get(pos).map(|tile| tile.letter))
        };

        let mut start = position;
        while let Some(prev) = start.step(axis, false) {
            if letter(prev).is_none() {
                break;
            }
            start = prev;
        }

        let mut span = WordSpan {
            word: String::new(),
            positions: Vec::new(),
        };
        let mut cursor = Some(start);
        while let Some(pos) = cursor {
            let Some(ch) = letter(pos) else { break };
            span.word.push(ch);
            span.positions.push(pos);
            cursor = pos.step(axis, true);
        }
        span
    }

    /// Empty every square and start over with an opening move.
    pub fn clear(&mut self) {
        for square in &mut self.squares {
            square.occupied = None;
        }
        self.first_move = true;
    }

    fn square(&self, position: Position) -> Option<&Square> {
        position
            .in_bounds()
            .then(|| &self.squares[position.row * BOARD_SIZE + position.col])
    }

    fn square_mut(&mut self, position: Position) -> Option<&mut Square> {
        if !position.in_bounds() {
            return None;
        }
        Some(&mut self.squares[position.row * BOARD_SIZE + position.col])
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Tile, CENTER};

    fn placed(letter: char) -> PlacedTile {
        PlacedTile {
            letter,
            tile: Tile::new(letter, 1),
        }
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert!(board.is_first_move());
        assert_eq!(board.occupied_count(), 0);
        assert_eq!(board.squares().count(), BOARD_SIZE * BOARD_SIZE);
        assert_eq!(board.bonus_at(Position::new(0, 0)), BonusType::TripleWord);
    }

    #[test]
    fn test_place_twice_fails() {
        let mut board = Board::new();
        board.place(CENTER, placed('A')).unwrap();
        assert_eq!(board.letter_at(CENTER), Some('A'));

        let err = board.place(CENTER, placed('B')).unwrap_err();
        assert_eq!(err, EngineError::SquareOccupied(CENTER));
        assert_eq!(board.letter_at(CENTER), Some('A'));
    }

    #[test]
    fn test_place_off_board_fails() {
        let mut board = Board::new();
        let err = board.place(Position::new(15, 2), placed('A')).unwrap_err();
        assert_eq!(err, EngineError::OutOfBounds(Position::new(15, 2)));
    }

    #[test]
    fn test_word_through_joins_board_and_pending() {
        let mut board = Board::new();
        board.place(Position::new(7, 6), placed('C')).unwrap();
        board.place(Position::new(7, 8), placed('T')).unwrap();

        let mut pending = PendingMove::new();
        pending.add(CENTER, Tile::new('A', 1), 'A').unwrap();

        let span = board.word_through(CENTER, Axis::Horizontal, &pending);
        assert_eq!(span.word, "CAT");
        assert_eq!(
            span.positions,
            vec![Position::new(7, 6), CENTER, Position::new(7, 8)]
        );

        let cross = board.word_through(CENTER, Axis::Vertical, &pending);
        assert_eq!(cross.word, "A");
        assert_eq!(cross.len(), 1);
    }

    #[test]
    fn test_word_through_at_edge() {
        let board = Board::new();
        let mut pending = PendingMove::new();
        pending.add(Position::new(0, 0), Tile::new('A', 1), 'A').unwrap();
        pending.add(Position::new(0, 1), Tile::new('M', 4), 'M').unwrap();

        let span = board.word_through(Position::new(0, 1), Axis::Horizontal, &pending);
        assert_eq!(span.word, "AM");
    }

    #[test]
    fn test_commit_is_all_or_nothing() {
        let mut board = Board::new();
        board.place(Position::new(7, 8), placed('X')).unwrap();

        let mut pending = PendingMove::new();
        pending.add(CENTER, Tile::new('A', 1), 'A').unwrap();
        pending.add(Position::new(7, 8), Tile::new('B', 9), 'B').unwrap();

        assert!(board.commit(&pending).is_err());
        assert_eq!(board.letter_at(CENTER), None);
        assert!(board.is_first_move());
    }

    #[test]
    fn test_commit_and_clear() {
        let mut board = Board::new();
        let mut pending = PendingMove::new();
        pending.add(CENTER, Tile::new('A', 1), 'A').unwrap();

        board.commit(&pending).unwrap();
        assert!(!board.is_first_move());
        assert!(board.touches_placed(Position::new(6, 7)));
        assert!(!board.touches_placed(Position::new(0, 0)));

        board.clear();
        assert!(board.is_first_move());
        assert_eq!(board.occupied_count(), 0);
    }
}

use once_cell::sync::Lazy;

use crate::models::{BonusType, Position, BOARD_SIZE};

const TRIPLE_WORD: &[(usize, usize)] = &[
    (0, 0), (0, 7), (0, 14), (7, 0), (7, 14), (14, 0), (14, 7), (14, 14),
];

const DOUBLE_WORD: &[(usize, usize)] = &[
    (1, 1), (1, 13), (2, 2), (2, 12), (3, 3), (3, 11), (4, 4), (4, 10),
    (10, 4), (10, 10), (11, 3), (11, 11), (12, 2), (12, 12), (13, 1), (13, 13),
];

const TRIPLE_LETTER: &[(usize, usize)] = &[
    (1, 5), (1, 9), (5, 1), (5, 5), (5, 9), (5, 13),
    (9, 1), (9, 5), (9, 9), (9, 13), (13, 5), (13, 9),
];

const DOUBLE_LETTER: &[(usize, usize)] = &[
    (0, 3), (0, 11), (2, 6), (2, 8), (3, 0), (3, 7), (3, 14),
    (6, 2), (6, 6), (6, 8), (6, 12), (7, 3), (7, 11),
    (8, 2), (8, 6), (8, 8), (8, 12), (11, 0), (11, 7), (11, 14),
    (12, 6), (12, 8), (14, 3), (14, 11),
];

/// Premium squares, resolved once into a dense grid.
static LAYOUT: Lazy<[[BonusType; BOARD_SIZE]; BOARD_SIZE]> = Lazy::new(|| {
    let mut grid = [[BonusType::None; BOARD_SIZE]; BOARD_SIZE];
    for (squares, bonus) in [
        (TRIPLE_WORD, BonusType::TripleWord),
        (DOUBLE_WORD, BonusType::DoubleWord),
        (TRIPLE_LETTER, BonusType::TripleLetter),
        (DOUBLE_LETTER, BonusType::DoubleLetter),
    ] {
        for &(row, col) in squares {
            grid[row][col] = bonus;
        }
    }
    grid
});

/// Bonus of a square. Off-board positions have none.
pub fn bonus_at(position: Position) -> BonusType {
    if !position.in_bounds() {
        return BonusType::None;
    }
    LAYOUT[position.row][position.col]
}

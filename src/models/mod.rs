pub mod event;
pub mod game;

pub use event::{BoardLetter, GameEvent, GameSnapshot};
pub use game::{
    Axis, BonusType, Phase, PlacedTile, Position, Square, Tile, BLANK_LETTER, BOARD_SIZE, CENTER,
};

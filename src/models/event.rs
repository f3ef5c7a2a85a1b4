use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Phase, Position, Tile};

/// Notifications a session emits for the presentation layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEvent {
    MoveScored { points: i32, words: Vec<String> },
    TurnComplete { turn: u32 },
    InvalidMove { reason: String },
    GameOver { final_score: i32 },
}

/// A letter visible on the board, either committed or still pending.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BoardLetter {
    pub position: Position,
    pub letter: char,
    pub is_blank: bool,
    pub pending: bool,
}

/// Everything the presentation layer needs to redraw.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub game_id: Uuid,
    pub phase: Phase,
    pub turn: u32,
    pub score: i32,
    pub tiles_remaining: usize,
    pub board: Vec<BoardLetter>,
    /// Words the pending move would form, main word first.
    pub pending_words: Vec<String>,
    pub rack: Vec<Option<Tile>>,
    pub selected_tile: Option<usize>,
    pub exchange_mode: bool,
    pub exchange_selection: Vec<usize>,
}

//! Rules engine for a 15x15 tile-placement word game.
//!
//! The engine validates and scores moves, manages the tile bag and rack,
//! and runs the turn cycle of a single-player session. Rendering and input
//! live outside; [`protocol`] offers a JSON-lines front end for them.
//!
//! ```no_run
//! use std::sync::Arc;
//! use scrabble_engine::{Dictionary, GameSession, LetterDistribution};
//!
//! # async fn demo() -> anyhow::Result<()> {
//! let dictionary = Arc::new(Dictionary::load("dictionary.txt").await?);
//! let mut session = GameSession::new(dictionary, Arc::new(LetterDistribution::romanian()));
//! session.select_tile(0)?;
//! session.place_tile(scrabble_engine::models::CENTER, Some('A'))?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod dictionary;
pub mod error;
pub mod game;
pub mod models;
pub mod protocol;
pub mod utils;

pub use dictionary::Dictionary;
pub use error::{DictionaryError, EngineError, MoveRejection, TurnError};
pub use game::{Board, GameSession, MoveValidator, PendingMove, Rack, ScoredMove, TileSupply};
pub use utils::letters::LetterDistribution;

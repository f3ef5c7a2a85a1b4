use std::path::PathBuf;

use thiserror::Error;

use crate::models::{Phase, Position};

/// Failure to load the word list.
#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("failed to read dictionary '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("dictionary '{path}' is not valid UTF-8")]
    Decode { path: PathBuf },

    #[error("dictionary '{path}' contains no words")]
    Empty { path: PathBuf },
}

/// Caller sequencing bugs: the presentation layer asked for something the
/// engine state cannot do. These never arise from a legal sequence of intents.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("square {0} is already occupied")]
    SquareOccupied(Position),

    #[error("square {0} is off the board")]
    OutOfBounds(Position),

    #[error("square {0} is already part of the pending move")]
    DuplicatePending(Position),

    #[error("rack slot {0} is empty")]
    EmptySlot(usize),

    #[error("rack slot {0} does not exist")]
    SlotOutOfRange(usize),

    #[error("rack is not in exchange mode")]
    ExchangeModeOff,

    #[error("rack is in exchange mode")]
    ExchangeModeOn,

    #[error("rack has {free} free slots but {incoming} tiles were added")]
    RackOverflow { free: usize, incoming: usize },

    #[error("{selected} tiles selected for exchange but {supplied} replacements supplied")]
    ExchangeCountMismatch { selected: usize, supplied: usize },
}

/// Reasons a pending move is not a legal play.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MoveRejection {
    #[error("no tiles have been placed")]
    EmptyMove,

    #[error("tiles must lie in a single row or column")]
    NotInLine,

    #[error("tiles must form one unbroken line")]
    Gap,

    #[error("the first word must cover the center square")]
    MissesCenter,

    #[error("the word must connect to tiles already on the board")]
    Disconnected,

    #[error("'{0}' is not in the dictionary")]
    UnknownWord(String),
}

/// Everything a turn intent can fail with.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TurnError {
    #[error("not allowed while {0:?}")]
    WrongPhase(Phase),

    #[error("no rack tile is selected")]
    NoTileSelected,

    #[error("a blank tile needs a letter")]
    BlankLetterRequired,

    #[error("a blank tile cannot stand for '{0}'")]
    InvalidBlankLetter(char),

    #[error("exchange needs at least {required} tiles in the bag, {remaining} left")]
    NotEnoughTiles { required: usize, remaining: usize },

    #[error("no tiles are selected for exchange")]
    NothingToExchange,

    #[error("invalid move: {0}")]
    Rejected(#[from] MoveRejection),

    #[error(transparent)]
    Contract(#[from] EngineError),
}

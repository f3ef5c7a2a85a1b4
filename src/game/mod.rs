// Rules engine: board, tile supply, rack, move validation and the turn cycle.

pub mod bag;
pub mod board;
pub mod layout;
pub mod pending;
pub mod rack;
pub mod scorer;
pub mod session;
pub mod validator;

pub use bag::TileSupply;
pub use board::{Board, WordSpan};
pub use pending::{PendingMove, PendingTile};
pub use rack::{Rack, RACK_SIZE};
pub use scorer::{Scorer, WordScore};
pub use session::GameSession;
pub use validator::{MoveValidator, ScoredMove};

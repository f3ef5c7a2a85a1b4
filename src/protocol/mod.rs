// Line-oriented JSON front end for a game session.

pub mod handler;
pub mod messages;

pub use handler::run;
pub use messages::{ClientMessage, ServerMessage};

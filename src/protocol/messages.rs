use serde::{Deserialize, Serialize};

use crate::models::{GameEvent, GameSnapshot};

/// Messages sent from client to server
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    NewGame,
    SelectTile {
        index: usize,
    },
    PlaceTile {
        row: usize,
        col: usize,
        /// Letter a blank tile stands for.
        #[serde(default)]
        letter: Option<char>,
    },
    ConfirmMove,
    CancelMove,
    EnterExchange,
    ToggleExchangeTile {
        index: usize,
    },
    ConfirmExchange,
    CancelExchange,
    SkipTurn,
    GetState,
}

/// Messages sent from server to client
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    GameState(GameSnapshot),
    MoveScored { points: i32, words: Vec<String> },
    TurnComplete { turn: u32 },
    InvalidMove { reason: String },
    GameOver { final_score: i32 },
    Error { message: String },
}

impl From<GameEvent> for ServerMessage {
    fn from(event: GameEvent) -> Self {
        match event {
            GameEvent::MoveScored { points, words } => ServerMessage::MoveScored { points, words },
            GameEvent::TurnComplete { turn } => ServerMessage::TurnComplete { turn },
            GameEvent::InvalidMove { reason } => ServerMessage::InvalidMove { reason },
            GameEvent::GameOver { final_score } => ServerMessage::GameOver { final_score },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_client_messages() {
        let msg: ClientMessage =
            serde_json::from_str(r#"{"type":"place_tile","row":7,"col":8}"#).unwrap();
        assert_eq!(
            msg,
            ClientMessage::PlaceTile {
                row: 7,
                col: 8,
                letter: None
            }
        );

        let msg: ClientMessage =
            serde_json::from_str(r#"{"type":"place_tile","row":7,"col":8,"letter":"ș"}"#).unwrap();
        assert_eq!(
            msg,
            ClientMessage::PlaceTile {
                row: 7,
                col: 8,
                letter: Some('ș')
            }
        );

        let msg: ClientMessage = serde_json::from_str(r#"{"type":"skip_turn"}"#).unwrap();
        assert_eq!(msg, ClientMessage::SkipTurn);
    }

    #[test]
    fn test_event_messages_are_tagged() {
        let msg = ServerMessage::from(GameEvent::MoveScored {
            points: 12,
            words: vec!["CAT".to_string()],
        });
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["type"], "move_scored");
        assert_eq!(json["points"], 12);

        let json = serde_json::to_value(ServerMessage::GameOver { final_score: 40 }).unwrap();
        assert_eq!(json["type"], "game_over");
        assert_eq!(json["final_score"], 40);
    }
}

use tokio::{
    io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt},
    sync::mpsc,
};

use crate::{
    error::TurnError,
    game::GameSession,
    models::Position,
    protocol::messages::{ClientMessage, ServerMessage},
};

/// Drive a session from newline-delimited JSON.
///
/// Each line read is one `ClientMessage`; replies go out one JSON object per
/// line. Returns once the input is exhausted and every reply is written, or
/// as soon as the output side fails.
pub async fn run<R, W>(mut session: GameSession, reader: R, mut writer: W) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin + Send + 'static,
    W: AsyncWrite + Unpin + Send + 'static,
{
    let (tx, mut rx) = mpsc::channel::<ServerMessage>(100);
    tx.send(ServerMessage::GameState(session.snapshot())).await?;

    // Spawn a task to write messages to the client
    let mut send_task = tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            match serde_json::to_string(&msg) {
                Ok(mut json) => {
                    json.push('\n');
                    if writer.write_all(json.as_bytes()).await.is_err()
                        || writer.flush().await.is_err()
                    {
                        tracing::error!("Output closed, stopping");
                        break;
                    }
                }
                Err(e) => {
                    tracing::error!("Failed to serialize message: {}", e);
                }
            }
        }
    });

    // Handle incoming messages from the client
    let mut recv_task = tokio::spawn(async move {
        let mut lines = reader.lines();
        loop {
            let line = match lines.next_line().await {
                Ok(Some(line)) => line,
                Ok(None) => {
                    tracing::info!("Input closed");
                    break;
                }
                Err(e) => {
                    tracing::error!("Failed to read input: {}", e);
                    break;
                }
            };
            if line.trim().is_empty() {
                continue;
            }

            let replies = match serde_json::from_str::<ClientMessage>(&line) {
                Ok(client_msg) => handle_client_message(client_msg, &mut session),
                Err(e) => {
                    tracing::error!("Failed to parse message: {}", e);
                    vec![ServerMessage::Error {
                        message: format!("Invalid message format: {}", e),
                    }]
                }
            };
            for reply in replies {
                if tx.send(reply).await.is_err() {
                    return;
                }
            }
        }
    });

    // Input ending lets queued replies drain; output failing stops everything.
    tokio::select! {
        _ = (&mut send_task) => {
            recv_task.abort();
        }
        _ = (&mut recv_task) => {
            if let Err(e) = send_task.await {
                tracing::error!("Output task failed: {}", e);
            }
        }
    }

    Ok(())
}

/// Apply one intent and collect the replies: an error if it failed, any
/// events it produced, then the new state.
fn handle_client_message(msg: ClientMessage, session: &mut GameSession) -> Vec<ServerMessage> {
    tracing::debug!("Handling {:?}", msg);

    let result: Result<(), TurnError> = match msg {
        ClientMessage::NewGame => {
            session.new_game();
            Ok(())
        }
        ClientMessage::SelectTile { index } => session.select_tile(index),
        ClientMessage::PlaceTile { row, col, letter } => {
            session.place_tile(Position::new(row, col), letter)
        }
        ClientMessage::ConfirmMove => session.confirm_move().map(|_| ()),
        ClientMessage::CancelMove => session.cancel_move(),
        ClientMessage::EnterExchange => session.enter_exchange(),
        ClientMessage::ToggleExchangeTile { index } => {
            session.toggle_exchange_tile(index).map(|_| ())
        }
        ClientMessage::ConfirmExchange => session.confirm_exchange(),
        ClientMessage::CancelExchange => session.cancel_exchange(),
        ClientMessage::SkipTurn => session.skip_turn(),
        ClientMessage::GetState => Ok(()),
    };

    let mut replies = Vec::new();
    match result {
        // Rejections already surface as an invalid_move event.
        Ok(()) | Err(TurnError::Rejected(_)) => {}
        Err(e) => replies.push(ServerMessage::Error {
            message: e.to_string(),
        }),
    }
    replies.extend(session.take_events().into_iter().map(ServerMessage::from));
    replies.push(ServerMessage::GameState(session.snapshot()));
    replies
}

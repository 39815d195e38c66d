//! WebSocket feed for the crash game.
//!
//! Each client gets its own clone of the snapshot receiver and is
//! pushed a JSON snapshot whenever the engine publishes one. The
//! connection is read-only; client frames are ignored apart from
//! close.

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::Response,
};
use tokio::sync::watch;

use crate::api::server::AppState;
use crate::games::crash::CrashSnapshot;

pub async fn crash_ws(ws: WebSocketUpgrade, State(state): State<AppState>) -> Response {
    let receiver = state.crash.clone();
    ws.on_upgrade(move |socket| stream_snapshots(socket, receiver))
}

async fn stream_snapshots(mut socket: WebSocket, mut receiver: watch::Receiver<CrashSnapshot>) {
    loop {
        let payload = {
            let snapshot = receiver.borrow_and_update().clone();
            match serde_json::to_string(&snapshot) {
                Ok(payload) => payload,
                Err(err) => {
                    log::error!("failed to encode crash snapshot: {err}");
                    break;
                }
            }
        };
        if socket.send(Message::Text(payload)).await.is_err() {
            break;
        }
        if receiver.changed().await.is_err() {
            // Engine is gone; tell the client and stop.
            let _ = socket.send(Message::Close(None)).await;
            break;
        }
    }
}

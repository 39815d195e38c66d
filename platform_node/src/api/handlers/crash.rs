//! Crash game read endpoints. All state comes from the engine's
//! snapshot channel; nothing here can mutate the game.

use axum::{extract::State, response::Json};

use crate::api::server::AppState;
use crate::games::crash::{CrashSnapshot, RoundRecord};

/// Rounds of history served inline with the game state.
const STATE_HISTORY: usize = 10;

pub async fn crash_state(State(state): State<AppState>) -> Json<CrashSnapshot> {
    let mut snapshot = state.crash.borrow().clone();
    snapshot.history.truncate(STATE_HISTORY);
    Json(snapshot)
}

pub async fn crash_history(State(state): State<AppState>) -> Json<Vec<RoundRecord>> {
    Json(state.crash.borrow().history.clone())
}

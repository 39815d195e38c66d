//! Lottery endpoints.

use axum::{extract::State, response::Json};
use chrono::Utc;

use crate::api::server::AppState;
use crate::games::lottery::{CurrentDraw, LotteryStats, Winner};

pub async fn current_draw(State(state): State<AppState>) -> Json<CurrentDraw> {
    let draw = {
        let mut rng = rand::thread_rng();
        state.lottery.current_draw(Utc::now(), &mut rng)
    };
    Json(draw)
}

pub async fn past_winners(State(state): State<AppState>) -> Json<Vec<Winner>> {
    let winners = {
        let mut rng = rand::thread_rng();
        state.lottery.past_winners(Utc::now(), &mut rng)
    };
    Json(winners)
}

pub async fn stats(State(state): State<AppState>) -> Json<LotteryStats> {
    let stats = {
        let mut rng = rand::thread_rng();
        state.lottery.stats(&mut rng)
    };
    Json(stats)
}

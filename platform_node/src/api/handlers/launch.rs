//! Token launchpad simulator endpoints.

use axum::{extract::State, http::StatusCode, response::Json};

use crate::api::errors::ApiResult;
use crate::api::server::AppState;
use crate::launch::{LaunchReceipt, LaunchRequest};

/// Simulate a token deployment. The receipt is fabricated and says so;
/// invalid parameters get a 422 with the reason.
pub async fn launch_token(
    State(state): State<AppState>,
    Json(request): Json<LaunchRequest>,
) -> ApiResult<(StatusCode, Json<LaunchReceipt>)> {
    let receipt = state.launchpad.launch(request)?;
    log::info!(
        "simulated launch of {} ({}) at {}",
        receipt.token_name,
        receipt.symbol,
        receipt.contract_address
    );
    Ok((StatusCode::CREATED, Json(receipt)))
}

pub async fn deployments(State(state): State<AppState>) -> Json<Vec<LaunchReceipt>> {
    Json(state.launchpad.deployments())
}

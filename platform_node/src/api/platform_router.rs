//! The consolidated platform router. Marketplace, dashboard, games
//! and launchpad all hang off this one surface.

use axum::{
    extract::{Request, State},
    http::Method,
    middleware::{self, Next},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

use crate::api::errors::ApiError;
use crate::api::handlers::{crash, launch, lottery, marketplace, status, studio, tokens};
use crate::api::server::AppState;
use crate::api::websocket;

/// Build the full router around shared state.
pub fn create_platform_router(state: AppState) -> Router {
    Router::new()
        // Landing page and service metadata
        .route("/", get(index))
        .route("/health", get(status::health))
        .route("/status", get(status::status))
        .route("/config", get(status::config_info))
        // Marketplace
        .route("/api/v1/collections", get(marketplace::list_collections))
        .route(
            "/api/v1/collections/trending",
            get(marketplace::trending_collections),
        )
        .route("/api/v1/collections/:id", get(marketplace::get_collection))
        .route("/api/v1/collection-nfts", get(marketplace::collection_nfts))
        .route(
            "/api/v1/nft/:collection/:token_id",
            get(marketplace::nft_detail),
        )
        .route("/api/v1/activities", get(marketplace::activities))
        .route("/api/v1/launchpad", get(marketplace::launchpad_projects))
        // NFT studio
        .route("/api/v1/studio/metadata/:token_id", get(studio::token_metadata))
        .route("/api/v1/studio/preview", get(studio::collection_preview))
        // Trading dashboard
        .route("/api/v1/tokens", get(tokens::list_tokens))
        .route("/api/v1/tokens/trending", get(tokens::trending_tokens))
        .route("/api/v1/whales", get(tokens::whale_wallets))
        .route("/api/v1/market-stats", get(tokens::market_stats))
        // Crash game
        .route("/api/v1/crash/state", get(crash::crash_state))
        .route("/api/v1/crash/history", get(crash::crash_history))
        .route("/ws/crash", get(websocket::crash_ws))
        // Lottery
        .route("/api/v1/lottery/current", get(lottery::current_draw))
        .route("/api/v1/lottery/winners", get(lottery::past_winners))
        .route("/api/v1/lottery/stats", get(lottery::stats))
        // Launchpad simulator
        .route("/api/v1/launch", post(launch::launch_token))
        .route("/api/v1/launch/deployments", get(launch::deployments))
        .fallback(not_found)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            rate_limit_middleware,
        ))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST])
                .allow_headers(Any),
        )
        .with_state(state)
}

async fn not_found() -> ApiError {
    ApiError::not_found("Unknown endpoint")
}

/// Per-IP and global limits, checked before any handler runs. The
/// client address comes from `X-Forwarded-For` when a proxy sets it.
async fn rate_limit_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let ip = request
        .headers()
        .get("x-forwarded-for")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .unwrap_or("unknown")
        .trim()
        .to_string();

    match state.rate_limiter.check_rate_limit(&ip) {
        Ok(()) => next.run(request).await,
        Err(err) => {
            log::warn!("rate limited {ip}: {err}");
            ApiError::too_many_requests(&err.to_string()).into_response()
        }
    }
}

async fn index() -> Html<&'static str> {
    Html(
        r#"
    <!DOCTYPE html>
    <html>
    <head>
        <title>HyperFlow Platform Node</title>
        <style>
            body { font-family: Arial, sans-serif; margin: 40px; background: #f5f5f5; }
            .container { max-width: 1200px; margin: 0 auto; background: white; padding: 30px; border-radius: 10px; box-shadow: 0 2px 10px rgba(0,0,0,0.1); }
            h1 { color: #2c3e50; text-align: center; }
            .section { margin: 30px 0; padding: 20px; border: 1px solid #ecf0f1; border-radius: 8px; }
            .endpoint { background: #f8f9fa; padding: 15px; margin: 10px 0; border-radius: 5px; border-left: 4px solid #3498db; }
            .method { display: inline-block; background: #3498db; color: white; padding: 5px 10px; border-radius: 3px; font-size: 12px; font-weight: bold; }
            .url { font-family: monospace; color: #2c3e50; }
            .description { color: #7f8c8d; margin-top: 5px; }
        </style>
    </head>
    <body>
        <div class="container">
            <h1>HyperFlow Platform Node</h1>
            <p style="text-align: center; color: #7f8c8d;">NFT marketplace, trading dashboard, crash game, lottery and launchpad simulator on HyperEVM</p>
            <div class="section">
                <h2>API Endpoints</h2>
                <div class="endpoint">
                    <span class="method">GET</span>
                    <span class="url">/health</span>
                    <div class="description">Check node health and status</div>
                </div>
                <div class="endpoint">
                    <span class="method">GET</span>
                    <span class="url">/api/v1/collections/trending</span>
                    <div class="description">Trending NFT collections with preview items</div>
                </div>
                <div class="endpoint">
                    <span class="method">GET</span>
                    <span class="url">/api/v1/collection-nfts?collection=hypio-babies&count=20</span>
                    <div class="description">Browse a page of collection listings</div>
                </div>
                <div class="endpoint">
                    <span class="method">GET</span>
                    <span class="url">/api/v1/tokens</span>
                    <div class="description">Token quotes for the trading dashboard</div>
                </div>
                <div class="endpoint">
                    <span class="method">GET</span>
                    <span class="url">/api/v1/crash/state</span>
                    <div class="description">Live crash game snapshot (also on /ws/crash)</div>
                </div>
                <div class="endpoint">
                    <span class="method">GET</span>
                    <span class="url">/api/v1/lottery/current</span>
                    <div class="description">Current lottery draw</div>
                </div>
                <div class="endpoint">
                    <span class="method">POST</span>
                    <span class="url">/api/v1/launch</span>
                    <div class="description">Simulate a token deployment (clearly labeled, never on-chain)</div>
                </div>
            </div>
        </div>
    </body>
    </html>
    "#,
    )
}

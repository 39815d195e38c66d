//! Trading dashboard endpoints: token quotes, whales, market stats.

use axum::{extract::State, response::Json};
use futures::future::join_all;

use crate::api::server::AppState;
use crate::market::catalog::{TokenInfo, TRACKED_TOKENS};
use crate::market::feeds::FeedError;
use crate::market::synth::{self, MarketStats, TokenQuote, WhaleWallet};

/// Quotes for every tracked token. With feeds enabled each token is
/// tried upstream first and falls back to a synthetic quote on any
/// classified failure; the `data_source` field says which one won.
pub async fn list_tokens(State(state): State<AppState>) -> Json<Vec<TokenQuote>> {
    Json(resolve_quotes(&state).await)
}

/// The strongest movers of the day, best 24h change first.
pub async fn trending_tokens(State(state): State<AppState>) -> Json<Vec<TokenQuote>> {
    let mut quotes = resolve_quotes(&state).await;
    quotes.sort_by(|a, b| {
        b.price_change_24h
            .partial_cmp(&a.price_change_24h)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    quotes.truncate(8);
    Json(quotes)
}

async fn resolve_quotes(state: &AppState) -> Vec<TokenQuote> {
    if state.feeds.enabled() {
        let fetched = join_all(
            TRACKED_TOKENS
                .iter()
                .map(|token| state.feeds.dexscreener_quote(token)),
        )
        .await;
        fetched
            .into_iter()
            .zip(TRACKED_TOKENS.iter())
            .map(|(result, base)| match result {
                Ok(quote) => quote,
                Err(err) => fallback_quote(base, &err),
            })
            .collect()
    } else {
        let mut rng = rand::thread_rng();
        TRACKED_TOKENS
            .iter()
            .map(|token| synth::quote(token, &mut rng))
            .collect()
    }
}

fn fallback_quote(base: &TokenInfo, err: &FeedError) -> TokenQuote {
    log::warn!(
        "upstream quote for {} failed ({err}), serving synthetic data",
        base.symbol
    );
    let mut rng = rand::thread_rng();
    synth::quote(base, &mut rng)
}

pub async fn whale_wallets() -> Json<Vec<WhaleWallet>> {
    let whales = {
        let mut rng = rand::thread_rng();
        synth::whale_wallets(&mut rng)
    };
    Json(whales)
}

pub async fn market_stats() -> Json<MarketStats> {
    let stats = {
        let mut rng = rand::thread_rng();
        synth::market_stats(&mut rng)
    };
    Json(stats)
}

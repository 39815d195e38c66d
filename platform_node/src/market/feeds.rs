//! Upstream market-data feeds.
//!
//! Thin typed clients for DexScreener and CoinGecko. Failures are
//! classified instead of swallowed; callers decide what to do with a
//! `FeedError` — in practice the handlers log it and fall back to
//! synthetic quotes, which stay labeled as synthetic.

use crate::config::UpstreamConfig;
use crate::market::catalog::TokenInfo;
use crate::market::synth::{DataSource, TokenQuote};
use chrono::Utc;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("upstream feeds are disabled")]
    Disabled,
    #[error("upstream request timed out")]
    Timeout,
    #[error("upstream returned status {0}")]
    Status(u16),
    #[error("failed to decode upstream payload: {0}")]
    Decode(String),
    #[error("transport error: {0}")]
    Transport(String),
}

impl From<reqwest::Error> for FeedError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FeedError::Timeout
        } else if err.is_decode() {
            FeedError::Decode(err.to_string())
        } else {
            FeedError::Transport(err.to_string())
        }
    }
}

#[derive(Debug, Deserialize)]
struct DexScreenerResponse {
    #[serde(default)]
    pairs: Vec<DexScreenerPair>,
}

#[derive(Debug, Deserialize)]
struct DexScreenerPair {
    #[serde(rename = "priceUsd")]
    price_usd: Option<String>,
    #[serde(rename = "priceChange")]
    price_change: Option<DexScreenerChange>,
    volume: Option<DexScreenerVolume>,
    liquidity: Option<DexScreenerLiquidity>,
    #[serde(rename = "marketCap")]
    market_cap: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct DexScreenerChange {
    h24: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct DexScreenerVolume {
    h24: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct DexScreenerLiquidity {
    usd: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct CoinGeckoRow {
    pub symbol: String,
    pub current_price: Option<f64>,
    pub price_change_percentage_24h: Option<f64>,
    pub total_volume: Option<f64>,
    pub market_cap: Option<f64>,
}

pub struct FeedClient {
    config: UpstreamConfig,
    client: reqwest::Client,
}

impl FeedClient {
    pub fn new(config: UpstreamConfig) -> Result<Self, FeedError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent("hyperflow-node/0.1")
            .build()?;
        Ok(FeedClient { config, client })
    }

    pub fn enabled(&self) -> bool {
        self.config.enabled
    }

    /// Live quote for one tracked token via DexScreener. The catalog
    /// baseline fills any field the pair payload is missing.
    pub async fn dexscreener_quote(&self, base: &TokenInfo) -> Result<TokenQuote, FeedError> {
        if !self.config.enabled {
            return Err(FeedError::Disabled);
        }
        let url = format!(
            "{}/latest/dex/tokens/{}",
            self.config.dexscreener_url, base.address
        );
        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(FeedError::Status(response.status().as_u16()));
        }
        let payload: DexScreenerResponse = response.json().await?;
        let pair = payload
            .pairs
            .into_iter()
            .next()
            .ok_or_else(|| FeedError::Decode("no pairs for token".to_string()))?;

        let price = pair
            .price_usd
            .as_deref()
            .and_then(|raw| raw.parse::<f64>().ok())
            .ok_or_else(|| FeedError::Decode("pair has no priceUsd".to_string()))?;

        Ok(TokenQuote {
            symbol: base.symbol.to_string(),
            address: base.address.to_string(),
            price,
            price_change_24h: pair
                .price_change
                .and_then(|change| change.h24)
                .unwrap_or(base.change_24h),
            volume_24h: pair
                .volume
                .and_then(|volume| volume.h24)
                .unwrap_or(base.volume_24h),
            market_cap: pair.market_cap.unwrap_or(base.market_cap),
            liquidity: pair
                .liquidity
                .and_then(|liquidity| liquidity.usd)
                .unwrap_or(base.liquidity),
            is_new: base.is_new,
            last_updated: Utc::now().to_rfc3339(),
            data_source: DataSource::Live,
        })
    }

    /// Market listing for the wider ecosystem via CoinGecko.
    pub async fn coingecko_markets(&self) -> Result<Vec<CoinGeckoRow>, FeedError> {
        if !self.config.enabled {
            return Err(FeedError::Disabled);
        }
        let url = format!(
            "{}/api/v3/coins/markets?vs_currency=usd&order=market_cap_desc&per_page=250&page=1",
            self.config.coingecko_url
        );
        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(FeedError::Status(response.status().as_u16()));
        }
        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::market::catalog::TRACKED_TOKENS;

    #[tokio::test]
    async fn disabled_feeds_fail_fast() {
        let client = FeedClient::new(UpstreamConfig::default()).unwrap();
        assert!(!client.enabled());
        let err = client.dexscreener_quote(&TRACKED_TOKENS[0]).await.unwrap_err();
        assert!(matches!(err, FeedError::Disabled));
        let err = client.coingecko_markets().await.unwrap_err();
        assert!(matches!(err, FeedError::Disabled));
    }

    #[test]
    fn pair_payload_decodes() {
        let raw = r#"{"pairs":[{"priceUsd":"1.85","priceChange":{"h24":-1.2},
            "volume":{"h24":45000000.0},"liquidity":{"usd":2100000.0},"marketCap":1850000000.0}]}"#;
        let payload: DexScreenerResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(payload.pairs.len(), 1);
        assert_eq!(payload.pairs[0].price_usd.as_deref(), Some("1.85"));
    }

    #[test]
    fn missing_pairs_field_defaults_empty() {
        let payload: DexScreenerResponse = serde_json::from_str("{}").unwrap();
        assert!(payload.pairs.is_empty());
    }
}

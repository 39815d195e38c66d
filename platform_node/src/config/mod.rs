//! Runtime configuration for the platform node.
//!
//! Everything has a sensible default so `hyperflow_node` starts with no
//! flags; individual knobs are overridable through `HYPERFLOW_*`
//! environment variables. No secret material is ever part of the
//! configuration: the launchpad is a simulator and signs nothing.

use crate::api::rate_limiter::RateLimitConfig;
use crate::games::crash::CrashConfig;
use crate::games::lottery::LotteryConfig;
use std::env;

/// HyperEVM chain id the platform reports in every payload.
pub const CHAIN_ID: u64 = 999;

#[derive(Debug, Clone)]
pub struct Config {
    /// Interface to bind on.
    pub listen_addr: String,
    /// Primary API port.
    pub port: u16,
    /// Ports tried in order when the primary one is taken.
    pub alt_ports: Vec<u16>,
    /// Human-readable network name.
    pub network: String,
    /// Chain the platform fabricates data for.
    pub chain_name: String,
    pub chain_id: u64,
    /// Stable node identifier reported by `/status`.
    pub node_id: String,
    pub upstream: UpstreamConfig,
    pub rate_limit: RateLimitConfig,
    pub crash: CrashConfig,
    pub lottery: LotteryConfig,
}

/// Outbound market-data feeds. Disabled by default so the node never
/// depends on third parties to come up.
#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    pub enabled: bool,
    pub dexscreener_url: String,
    pub coingecko_url: String,
    pub timeout_secs: u64,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        UpstreamConfig {
            enabled: false,
            dexscreener_url: "https://api.dexscreener.com".to_string(),
            coingecko_url: "https://api.coingecko.com".to_string(),
            timeout_secs: 5,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            listen_addr: "0.0.0.0".to_string(),
            port: 8080,
            alt_ports: vec![6001, 6002, 7000, 7001],
            network: "HyperFlow Platform".to_string(),
            chain_name: "HyperEVM".to_string(),
            chain_id: CHAIN_ID,
            node_id: "HyperFlow-Node-001".to_string(),
            upstream: UpstreamConfig::default(),
            rate_limit: RateLimitConfig::default(),
            crash: CrashConfig::default(),
            lottery: LotteryConfig::default(),
        }
    }
}

impl Config {
    /// Build a config from defaults plus `HYPERFLOW_*` overrides.
    pub fn from_env() -> Self {
        let mut config = Config::default();

        if let Some(port) = env_parse::<u16>("HYPERFLOW_PORT") {
            config.port = port;
        }
        if let Ok(addr) = env::var("HYPERFLOW_LISTEN_ADDR") {
            config.listen_addr = addr;
        }
        if let Ok(node_id) = env::var("HYPERFLOW_NODE_ID") {
            config.node_id = node_id;
        }
        if let Some(enabled) = env_parse::<bool>("HYPERFLOW_UPSTREAM_ENABLED") {
            config.upstream.enabled = enabled;
        }
        if let Ok(url) = env::var("HYPERFLOW_DEXSCREENER_URL") {
            config.upstream.dexscreener_url = url;
        }
        if let Ok(url) = env::var("HYPERFLOW_COINGECKO_URL") {
            config.upstream.coingecko_url = url;
        }
        if let Some(secs) = env_parse::<u64>("HYPERFLOW_UPSTREAM_TIMEOUT_SECS") {
            config.upstream.timeout_secs = secs;
        }

        config
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|raw| raw.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_offline() {
        let config = Config::default();
        assert!(!config.upstream.enabled);
        assert_eq!(config.chain_id, 999);
        assert_eq!(config.port, 8080);
        assert!(!config.alt_ports.is_empty());
    }
}

//! API server wiring: shared state, startup and port fallback.

use anyhow::{Context, Result};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::net::TcpListener;
use tokio::sync::watch;

use crate::api::platform_router::create_platform_router;
use crate::api::rate_limiter::RateLimiter;
use crate::config::Config;
use crate::games::crash::{CrashEngine, CrashSnapshot};
use crate::games::lottery::Lottery;
use crate::launch::Launchpad;
use crate::market::feeds::FeedClient;

/// Shared application state, cheap to clone into every handler.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub crash: watch::Receiver<CrashSnapshot>,
    pub lottery: Arc<Lottery>,
    pub launchpad: Arc<Launchpad>,
    pub feeds: Arc<FeedClient>,
    pub rate_limiter: Arc<RateLimiter>,
    pub started_at: Instant,
}

impl AppState {
    /// Build the state and spawn the crash engine. Must run inside a
    /// tokio runtime.
    pub fn new(config: Config) -> Result<Self> {
        let crash = CrashEngine::spawn(config.crash.clone());
        let feeds =
            FeedClient::new(config.upstream.clone()).context("building upstream feed client")?;
        let rate_limiter = Arc::new(RateLimiter::new(config.rate_limit.clone()));
        let lottery = Arc::new(Lottery::new(config.lottery.clone()));
        let launchpad = Arc::new(Launchpad::new(config.chain_id));

        Ok(AppState {
            config: Arc::new(config),
            crash,
            lottery,
            launchpad,
            feeds: Arc::new(feeds),
            rate_limiter,
            started_at: Instant::now(),
        })
    }
}

/// Bind the primary port, walking the fallback list when it is taken.
async fn bind_with_fallback(config: &Config) -> Result<TcpListener> {
    let primary = format!("{}:{}", config.listen_addr, config.port);
    match TcpListener::bind(&primary).await {
        Ok(listener) => return Ok(listener),
        Err(err) => {
            log::warn!("port {} unavailable ({err}), trying alternatives", config.port);
        }
    }
    for port in &config.alt_ports {
        let addr = format!("{}:{}", config.listen_addr, port);
        match TcpListener::bind(&addr).await {
            Ok(listener) => return Ok(listener),
            Err(err) => log::warn!("port {port} unavailable ({err})"),
        }
    }
    anyhow::bail!(
        "no usable port among {} and {:?}",
        config.port,
        config.alt_ports
    )
}

/// Start the platform API server and serve until the process ends.
pub async fn start_api_server(config: Config) -> Result<()> {
    let state = AppState::new(config)?;

    // Sweep idle rate-limit entries in the background.
    let limiter = state.rate_limiter.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(600));
        loop {
            interval.tick().await;
            limiter.cleanup_expired();
        }
    });

    let listener = bind_with_fallback(&state.config).await?;
    let local_addr = listener.local_addr().context("reading bound address")?;
    log::info!(
        "{} listening on http://{}",
        state.config.network,
        local_addr
    );

    let app = create_platform_router(state);
    axum::serve(listener, app).await.context("serving API")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn state_builds_from_default_config() {
        let state = AppState::new(Config::default()).unwrap();
        assert!(!state.feeds.enabled());
        assert_eq!(state.config.chain_id, 999);
    }

    #[tokio::test]
    async fn fallback_binding_picks_an_alternative() {
        let config = Config {
            listen_addr: "127.0.0.1".to_string(),
            port: 0,
            alt_ports: vec![],
            ..Default::default()
        };
        // Port 0 always binds; this exercises the happy path.
        let listener = bind_with_fallback(&config).await.unwrap();
        assert!(listener.local_addr().unwrap().port() > 0);
    }
}

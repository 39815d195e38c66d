//! Token launchpad simulator.
//!
//! Receipts are fabricated from a Keccak-256 digest of the launch
//! parameters and say so: every receipt carries `simulated: true`.
//! There is no key material anywhere in this crate and nothing is ever
//! signed or broadcast.

use crate::types::{Address, TxHash};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use sha3::{Digest, Keccak256};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;
use thiserror::Error;

/// Gas figures of a typical ERC-20 deployment, used for the receipt.
const DEPLOY_GAS_USED: u64 = 1_547_832;
const DEPLOY_GAS_PRICE_GWEI: u64 = 25;

#[derive(Debug, Error, PartialEq)]
pub enum LaunchError {
    #[error("token name must not be empty")]
    EmptyName,
    #[error("token name is too long (max 64 characters)")]
    NameTooLong,
    #[error("symbol must be 1-11 uppercase alphanumeric characters: {0}")]
    InvalidSymbol(String),
    #[error("decimals must be at most 18, got {0}")]
    DecimalsTooLarge(u8),
    #[error("initial supply must be positive")]
    ZeroSupply,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LaunchRequest {
    pub name: String,
    pub symbol: String,
    #[serde(default = "default_decimals")]
    pub decimals: u8,
    pub initial_supply: u64,
}

fn default_decimals() -> u8 {
    18
}

#[derive(Debug, Clone, Serialize)]
pub struct LaunchReceipt {
    pub token_name: String,
    pub symbol: String,
    pub decimals: u8,
    pub initial_supply: u64,
    pub contract_address: Address,
    pub tx_hash: TxHash,
    pub block_number: u64,
    pub gas_used: u64,
    pub gas_price_gwei: u64,
    pub gas_cost: f64,
    pub chain_id: u64,
    pub network: String,
    pub deployed_at: String,
    /// Always true. This node never signs or broadcasts anything.
    pub simulated: bool,
}

/// In-memory deployment ledger. A nonce counter keeps receipts unique
/// even for identical launch parameters.
pub struct Launchpad {
    chain_id: u64,
    nonce: AtomicU64,
    deployments: RwLock<Vec<LaunchReceipt>>,
}

impl Launchpad {
    pub fn new(chain_id: u64) -> Self {
        Launchpad {
            chain_id,
            nonce: AtomicU64::new(0),
            deployments: RwLock::new(Vec::new()),
        }
    }

    pub fn launch(&self, request: LaunchRequest) -> Result<LaunchReceipt, LaunchError> {
        validate(&request)?;

        let nonce = self.nonce.fetch_add(1, Ordering::SeqCst);
        let now = Utc::now();
        let timestamp = now.timestamp();

        let mut hasher = Keccak256::new();
        hasher.update(request.name.as_bytes());
        hasher.update(request.symbol.as_bytes());
        hasher.update(nonce.to_be_bytes());
        hasher.update(now.timestamp_nanos_opt().unwrap_or(timestamp).to_be_bytes());
        let contract_address = Address::from_digest(&hasher.finalize());

        let mut hasher = Keccak256::new();
        hasher.update(
            format!("deploy:{}:{}:{}", request.symbol, contract_address, timestamp).as_bytes(),
        );
        let tx_hash = TxHash::from_digest(&hasher.finalize());

        let gas_cost =
            (DEPLOY_GAS_USED * DEPLOY_GAS_PRICE_GWEI) as f64 * 1e9 / 1e18;

        let receipt = LaunchReceipt {
            token_name: request.name,
            symbol: request.symbol,
            decimals: request.decimals,
            initial_supply: request.initial_supply,
            contract_address,
            tx_hash,
            block_number: 11_300_000 + (timestamp as u64 % 50_000),
            gas_used: DEPLOY_GAS_USED,
            gas_price_gwei: DEPLOY_GAS_PRICE_GWEI,
            gas_cost,
            chain_id: self.chain_id,
            network: "HyperEVM".to_string(),
            deployed_at: now.to_rfc3339(),
            simulated: true,
        };

        self.deployments
            .write()
            .unwrap()
            .push(receipt.clone());
        Ok(receipt)
    }

    pub fn deployments(&self) -> Vec<LaunchReceipt> {
        self.deployments.read().unwrap().clone()
    }
}

fn validate(request: &LaunchRequest) -> Result<(), LaunchError> {
    if request.name.trim().is_empty() {
        return Err(LaunchError::EmptyName);
    }
    if request.name.len() > 64 {
        return Err(LaunchError::NameTooLong);
    }
    let symbol_ok = !request.symbol.is_empty()
        && request.symbol.len() <= 11
        && request
            .symbol
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit());
    if !symbol_ok {
        return Err(LaunchError::InvalidSymbol(request.symbol.clone()));
    }
    if request.decimals > 18 {
        return Err(LaunchError::DecimalsTooLarge(request.decimals));
    }
    if request.initial_supply == 0 {
        return Err(LaunchError::ZeroSupply);
    }
    Ok(())
}

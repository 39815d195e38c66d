//! HyperFlow platform node.
//!
//! One consolidated service for the HyperFlow demo platform on
//! HyperEVM: NFT marketplace browsing, a trading dashboard, the crash
//! game, the lottery and an honest token-launch simulator. Market
//! figures are fabricated within fixed bounds unless upstream feeds
//! are enabled, and every payload says which kind it is.

pub mod api;
pub mod config;
pub mod games;
pub mod launch;
pub mod market;
pub mod nft;
pub mod types;

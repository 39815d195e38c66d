//! Core value types shared across the platform API.

use rand::Rng;
use serde::{Serialize, Serializer};
use std::fmt;

/// 20-byte EVM-style address, rendered as `0x`-prefixed hex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Address([u8; 20]);

impl Address {
    pub fn from_bytes(bytes: [u8; 20]) -> Self {
        Address(bytes)
    }

    /// First 20 bytes of a 32-byte digest, the way contract addresses
    /// are carved out of a deployment hash.
    pub fn from_digest(digest: &[u8]) -> Self {
        let mut bytes = [0u8; 20];
        bytes.copy_from_slice(&digest[..20]);
        Address(bytes)
    }

    pub fn random(rng: &mut impl Rng) -> Self {
        let mut bytes = [0u8; 20];
        rng.fill(&mut bytes);
        Address(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

/// 32-byte transaction hash, rendered as `0x`-prefixed hex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TxHash([u8; 32]);

impl TxHash {
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        TxHash(bytes)
    }

    pub fn from_digest(digest: &[u8]) -> Self {
        let mut bytes = [0u8; 32];
        bytes.copy_from_slice(&digest[..32]);
        TxHash(bytes)
    }

    pub fn random(rng: &mut impl Rng) -> Self {
        let mut bytes = [0u8; 32];
        rng.fill(&mut bytes);
        TxHash(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Display for TxHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl Serialize for TxHash {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

/// HYPE-denominated amount. Serialized rounded to two decimals, which
/// is how every price in the platform is quoted.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Hype(pub f64);

impl Serialize for Hype {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(round2(self.0))
    }
}

/// Round to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

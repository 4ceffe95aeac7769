//! 32-byte account keys and deterministic auxiliary-address derivation.

use crate::error::TypesError;
use blake2::digest::consts::U32;
use blake2::{Blake2b, Digest};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

type Blake2b256 = Blake2b<U32>;

/// A 32-byte ledger account address.
///
/// Human-readable formats (TOML, JSON) carry the key as 64 lowercase hex
/// characters; binary formats carry the raw bytes.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct AccountKey([u8; 32]);

impl AccountKey {
    pub const ZERO: Self = Self([0u8; 32]);

    /// Seed for the decay pool owned by a token account.
    pub const DECAY_POOL_SEED: &'static [u8] = b"decay_pool";

    /// Seed for the chrono extension owned by a mint.
    pub const CHRONO_EXTENSION_SEED: &'static [u8] = b"chrono_extension";

    pub const fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 32]
    }

    /// Derive an auxiliary address from `seed` and a base account.
    ///
    /// `Blake2b-256(seed || base)`. Same inputs always give the same key.
    pub fn derive(seed: &[u8], base: &AccountKey) -> Self {
        let mut hasher = Blake2b256::new();
        hasher.update(seed);
        hasher.update(base.as_bytes());
        let result = hasher.finalize();
        let mut output = [0u8; 32];
        output.copy_from_slice(&result);
        Self(output)
    }

    /// Address of the decay pool belonging to this token account.
    pub fn decay_pool_address(&self) -> Self {
        Self::derive(Self::DECAY_POOL_SEED, self)
    }

    /// Address of the chrono extension belonging to this mint.
    pub fn chrono_extension_address(&self) -> Self {
        Self::derive(Self::CHRONO_EXTENSION_SEED, self)
    }
}

impl fmt::Debug for AccountKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AccountKey({})", hex::encode(&self.0[..4]))
    }
}

impl fmt::Display for AccountKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl FromStr for AccountKey {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = hex::decode(s).map_err(|e| TypesError::InvalidKey(e.to_string()))?;
        let bytes: [u8; 32] = bytes
            .try_into()
            .map_err(|v: Vec<u8>| TypesError::InvalidKey(format!("expected 32 bytes, got {}", v.len())))?;
        Ok(Self(bytes))
    }
}

impl From<[u8; 32]> for AccountKey {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl Serialize for AccountKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if serializer.is_human_readable() {
            serializer.serialize_str(&self.to_string())
        } else {
            self.0.serialize(serializer)
        }
    }
}

impl<'de> Deserialize<'de> for AccountKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        if deserializer.is_human_readable() {
            let s = String::deserialize(deserializer)?;
            s.parse().map_err(serde::de::Error::custom)
        } else {
            <[u8; 32]>::deserialize(deserializer).map(Self)
        }
    }
}

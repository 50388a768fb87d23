use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/* Script hashes are RIPEMD160 digests: 20 bytes */
pub const SCRIPT_HASH_LEN: usize = 20;

/* Fixed-length identifier addressing a deployed contract */
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ScriptHash([u8; SCRIPT_HASH_LEN]);

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScriptHashError {
    #[error("expected {expected} hex digits, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("not a hex string: {0}")]
    InvalidHex(#[from] hex::FromHexError),
}

impl FromStr for ScriptHash {
    type Err = ScriptHashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
            .unwrap_or(trimmed);

        if digits.len() != SCRIPT_HASH_LEN * 2 {
            return Err(ScriptHashError::InvalidLength {
                expected: SCRIPT_HASH_LEN * 2,
                actual: digits.len(),
            });
        }

        let mut bytes = [0u8; SCRIPT_HASH_LEN];
        hex::decode_to_slice(digits, &mut bytes)?;
        Ok(Self(bytes))
    }
}

impl fmt::Display for ScriptHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl Serialize for ScriptHash {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ScriptHash {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

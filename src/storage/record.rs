use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::Result;

/// Persisted value under the token table: the redirect target and the
/// absolute time after which the binding is considered gone.
///
/// A record is either absent or fully populated. Readers treat an
/// undecodable encoding as logically absent; only the sweeper physically
/// removes it.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Record {
    pub url: String,
    pub expiry: DateTime<Utc>,
}

impl Record {
    pub fn new(url: impl Into<String>, expiry: DateTime<Utc>) -> Self {
        Record {
            url: url.into(),
            expiry,
        }
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expiry < now
    }

    pub fn encode(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }

    /// Decoding keeps the raw `serde_json` error so callers can tell a
    /// corrupt record apart from an engine failure.
    pub fn decode(raw: &[u8]) -> serde_json::Result<Record> {
        serde_json::from_slice(raw)
    }
}

use chrono::Utc;
use tracing::debug;

use crate::errors::Result;
use crate::storage::Store;

/// Read-only token lookup.
///
/// Expired records resolve as absent but stay in the store until the
/// sweeper removes them; resolution never mutates anything, so it runs
/// concurrently with mints and sweeps without blocking either.
pub struct Resolver {
    store: Store,
}

impl Resolver {
    pub fn new(store: Store) -> Self {
        Resolver { store }
    }

    /// `Ok(None)` for a missing or expired token. A corrupt record surfaces
    /// as [`crate::errors::LinkmintError::CorruptRecord`] so monitoring can
    /// tell data damage apart from a link that was simply removed.
    pub fn resolve(&self, token: &str) -> Result<Option<String>> {
        let Some(record) = self.store.load(token)? else {
            debug!(token, "token not found");
            return Ok(None);
        };

        if record.is_expired_at(Utc::now()) {
            debug!(token, "token expired, awaiting sweep");
            return Ok(None);
        }

        Ok(Some(record.url))
    }
}

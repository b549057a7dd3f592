use std::sync::Arc;

use chrono::{Duration, Utc};
use redb::ReadableTable;
use tracing::{debug, warn};

use crate::errors::{LinkmintError, Result};
use crate::storage::{KEYS, Record, Store, URLS};
use crate::utils::token::TokenGenerator;

/// Creates or renews token bindings.
///
/// Deduplication runs inside the same write transaction as the writes, so
/// two concurrent mints of one URL converge on a single token: whichever
/// commits second finds the first writer's binding in the URL table and
/// adopts its token instead of the freshly generated candidate.
pub struct Minter {
    store: Store,
    tokens: Arc<dyn TokenGenerator>,
    ttl: Duration,
}

impl Minter {
    pub fn new(store: Store, tokens: Arc<dyn TokenGenerator>, ttl: Duration) -> Self {
        Minter { store, tokens, ttl }
    }

    /// Mint a token for `url`, reusing the existing binding when one is
    /// present and renewing the expiry either way.
    pub fn mint(&self, url: &str) -> Result<String> {
        if url.is_empty() {
            return Err(LinkmintError::validation("url must not be empty"));
        }

        let candidate = self.tokens.generate();

        let txn = self.store.write()?;
        let token;
        {
            let mut urls = txn.open_table(URLS)?;
            let mut keys = txn.open_table(KEYS)?;

            token = match urls.get(url)? {
                Some(existing) => existing.value().to_string(),
                None => candidate,
            };

            // The prior record is overwritten wholesale; decoding it only
            // serves to surface corruption before it gets repaired.
            if let Some(raw) = keys.get(token.as_str())? {
                if let Err(err) = Record::decode(raw.value()) {
                    warn!(token = %token, error = %err, "resetting corrupt record");
                }
            }

            let record = Record::new(url, Utc::now() + self.ttl);
            let encoded = record.encode()?;

            urls.insert(url, token.as_str())?;
            keys.insert(token.as_str(), encoded.as_slice())?;
        }
        txn.commit()?;

        debug!(token = %token, url, "minted");
        Ok(token)
    }
}

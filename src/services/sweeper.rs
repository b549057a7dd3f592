use std::thread;
use std::time::Duration;

use chrono::Utc;
use redb::ReadableTable;
use tracing::{error, info, warn};

use crate::errors::Result;
use crate::storage::{KEYS, Record, Store, URLS};

/// Background removal of expired and corrupt bindings.
///
/// A failed cycle is logged and retried on the next tick; stale entries
/// leak for at most one period past a failure. The sweeper never exits the
/// process.
pub struct Sweeper {
    store: Store,
    interval: Duration,
}

impl Sweeper {
    pub fn new(store: Store, interval: Duration) -> Self {
        Sweeper { store, interval }
    }

    /// Blocks for the lifetime of the process; intended for a dedicated
    /// thread.
    pub fn run(self) {
        loop {
            match self.sweep_once() {
                Ok(swept) if swept > 0 => info!(swept, "expired links removed"),
                Ok(_) => {}
                Err(err) => error!(error = %err, "sweep cycle failed"),
            }
            thread::sleep(self.interval);
        }
    }

    /// One cycle: scan every record and delete expired-or-corrupt entries
    /// from both tables inside a single transaction. Returns how many token
    /// bindings were removed.
    pub fn sweep_once(&self) -> Result<usize> {
        let now = Utc::now();

        let txn = self.store.write()?;
        let swept;
        {
            let mut keys = txn.open_table(KEYS)?;
            let mut urls = txn.open_table(URLS)?;

            let mut dead_tokens = Vec::new();
            let mut dead_urls = Vec::new();
            for entry in keys.iter()? {
                let (token, raw) = entry?;
                match Record::decode(raw.value()) {
                    Ok(record) if record.is_expired_at(now) => {
                        dead_tokens.push(token.value().to_string());
                        dead_urls.push(record.url);
                    }
                    Ok(_) => {}
                    Err(err) => {
                        // No decodable URL to unbind. A dangling entry in
                        // the URL table self-heals on the next mint of
                        // that URL.
                        warn!(token = %token.value(), error = %err, "dropping corrupt record");
                        dead_tokens.push(token.value().to_string());
                    }
                }
            }

            for token in &dead_tokens {
                keys.remove(token.as_str())?;
            }
            for url in &dead_urls {
                urls.remove(url.as_str())?;
            }

            swept = dead_tokens.len();
        }
        txn.commit()?;

        Ok(swept)
    }
}

//! Embedded store for link bindings.
//!
//! One redb file holds two tables: `urls` maps a URL to the token bound to
//! it, and `keys` maps a token to its serialized [`Record`]. Every mutating
//! operation updates both tables inside a single write transaction, so a
//! concurrent reader observes either the pre- or post-state, never a half
//! update. Read transactions run against an MVCC snapshot and do not block
//! writers.

use std::path::Path;
use std::sync::Arc;

use redb::{Database, ReadTransaction, TableDefinition, TableError, WriteTransaction};
use tracing::error;

use crate::errors::{LinkmintError, Result};

pub mod record;

pub use record::Record;

/// URL → token.
pub const URLS: TableDefinition<&str, &str> = TableDefinition::new("urls");

/// Token → serialized [`Record`].
pub const KEYS: TableDefinition<&str, &[u8]> = TableDefinition::new("keys");

/// Handle to the store file. Cheap to clone; all coordination between the
/// minter, resolver, and sweeper is delegated to redb's transaction
/// isolation, the store itself holds no locks.
#[derive(Clone)]
pub struct Store {
    db: Arc<Database>,
}

impl Store {
    /// Open or create the store file. Failure here is fatal to the caller;
    /// everything after startup degrades instead of crashing.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let db = Database::create(path).map_err(|err| {
            error!(path = %path.display(), error = %err, "failed to open store");
            LinkmintError::storage(format!("opening store {}: {err}", path.display()))
        })?;

        Ok(Store { db: Arc::new(db) })
    }

    /// Begin a read-write transaction. Table creation through it is
    /// idempotent.
    pub fn write(&self) -> Result<WriteTransaction> {
        Ok(self.db.begin_write()?)
    }

    /// Begin a read-only snapshot transaction.
    pub fn read(&self) -> Result<ReadTransaction> {
        Ok(self.db.begin_read()?)
    }

    /// Load the record bound to a token. A missing token, or a store that
    /// has never seen a write, is `Ok(None)`. An undecodable record is a
    /// [`LinkmintError::CorruptRecord`], distinct from ordinary absence.
    pub fn load(&self, token: &str) -> Result<Option<Record>> {
        let txn = self.read()?;
        let keys = match txn.open_table(KEYS) {
            Ok(table) => table,
            Err(TableError::TableDoesNotExist(_)) => return Ok(None),
            Err(err) => return Err(err.into()),
        };

        let Some(raw) = keys.get(token)? else {
            return Ok(None);
        };

        match Record::decode(raw.value()) {
            Ok(record) => Ok(Some(record)),
            Err(err) => {
                error!(token, error = %err, "corrupt record in store");
                Err(LinkmintError::corrupt_record(format!(
                    "record for token {token:?}: {err}"
                )))
            }
        }
    }

    /// Reverse lookup: the token currently bound to a URL, if any.
    pub fn token_for_url(&self, url: &str) -> Result<Option<String>> {
        let txn = self.read()?;
        let urls = match txn.open_table(URLS) {
            Ok(table) => table,
            Err(TableError::TableDoesNotExist(_)) => return Ok(None),
            Err(err) => return Err(err.into()),
        };

        Ok(urls.get(url)?.map(|existing| existing.value().to_string()))
    }
}

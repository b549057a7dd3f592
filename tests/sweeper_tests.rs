//! Sweeper tests
//!
//! One cycle must remove every expired or corrupt binding from both tables
//! while leaving live bindings untouched.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tempfile::TempDir;

use linkmint::services::{Minter, Resolver, Sweeper};
use linkmint::storage::{KEYS, Record, Store};
use linkmint::utils::token::RandomTokens;

fn open_store(dir: &TempDir) -> Store {
    Store::open(dir.path().join("links.redb")).expect("open store")
}

fn minter(store: &Store) -> Minter {
    Minter::new(
        store.clone(),
        Arc::new(RandomTokens::new(12)),
        Duration::days(30),
    )
}

fn sweeper(store: &Store) -> Sweeper {
    Sweeper::new(store.clone(), std::time::Duration::from_secs(60))
}

fn force_expiry(store: &Store, token: &str, expiry: DateTime<Utc>) {
    let record = store.load(token).unwrap().expect("record to rewrite");
    let encoded = Record::new(record.url, expiry).encode().unwrap();

    let txn = store.write().unwrap();
    {
        let mut keys = txn.open_table(KEYS).unwrap();
        keys.insert(token, encoded.as_slice()).unwrap();
    }
    txn.commit().unwrap();
}

fn inject_raw(store: &Store, token: &str, value: &[u8]) {
    let txn = store.write().unwrap();
    {
        let mut keys = txn.open_table(KEYS).unwrap();
        keys.insert(token, value).unwrap();
    }
    txn.commit().unwrap();
}

#[test]
fn sweep_on_fresh_store_is_a_noop() {
    let dir = TempDir::new().unwrap();
    let store = open_store(&dir);

    assert_eq!(sweeper(&store).sweep_once().unwrap(), 0);
}

#[test]
fn sweep_removes_expired_bindings_from_both_tables() {
    let dir = TempDir::new().unwrap();
    let store = open_store(&dir);
    let minter = minter(&store);

    let expired = minter.mint("https://example.com/old").unwrap();
    let live = minter.mint("https://example.com/new").unwrap();
    force_expiry(&store, &expired, Utc::now() - Duration::seconds(1));

    let swept = sweeper(&store).sweep_once().unwrap();
    assert_eq!(swept, 1);

    assert!(store.load(&expired).unwrap().is_none());
    assert_eq!(store.token_for_url("https://example.com/old").unwrap(), None);

    // Unexpired bindings survive and remain resolvable.
    assert_eq!(
        store.token_for_url("https://example.com/new").unwrap(),
        Some(live.clone())
    );
    assert_eq!(
        Resolver::new(store).resolve(&live).unwrap().as_deref(),
        Some("https://example.com/new")
    );
}

#[test]
fn sweep_drops_corrupt_records() {
    let dir = TempDir::new().unwrap();
    let store = open_store(&dir);

    minter(&store).mint("https://example.com/fine").unwrap();
    inject_raw(&store, "damagedtoken", b"garbage");

    assert_eq!(sweeper(&store).sweep_once().unwrap(), 1);
    assert!(store.load("damagedtoken").unwrap().is_none());
    assert!(
        store
            .token_for_url("https://example.com/fine")
            .unwrap()
            .is_some()
    );
}

#[test]
fn expired_link_lifecycle() {
    let dir = TempDir::new().unwrap();
    let store = open_store(&dir);
    let resolver = Resolver::new(store.clone());

    let token = minter(&store).mint("https://example.com/a").unwrap();
    assert_eq!(
        resolver.resolve(&token).unwrap().as_deref(),
        Some("https://example.com/a")
    );

    force_expiry(&store, &token, Utc::now() - Duration::seconds(1));
    sweeper(&store).sweep_once().unwrap();

    assert_eq!(resolver.resolve(&token).unwrap(), None);
    assert_eq!(store.token_for_url("https://example.com/a").unwrap(), None);
}

//! Linkmint - a small URL shortener with expiring links
//!
//! This library provides the core of the Linkmint service: minting short,
//! time-limited tokens for URLs, resolving tokens back to redirect targets,
//! and sweeping expired bindings from an embedded transactional store.
//!
//! # Architecture
//! - `storage`: embedded store with the two link tables (URL → token, token → record)
//! - `services`: the minter, resolver, and background sweeper
//! - `api`: HTTP handlers for redirect and mint requests
//! - `middleware`: bearer-token authentication for the mint endpoint
//! - `client`: the batch rewriter that shortens every URL in a document
//! - `config`: command-line and environment configuration
//! - `system`: logging initialization

pub mod api;
pub mod client;
pub mod config;
pub mod errors;
pub mod middleware;
pub mod services;
pub mod storage;
pub mod system;
pub mod utils;

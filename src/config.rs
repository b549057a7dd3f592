use std::path::PathBuf;

use clap::Parser;

/// Command-line and environment configuration for the server.
///
/// Every flag falls back to a `LINKMINT_*` environment variable, so the
/// service can be configured from a `.env` file in deployment.
#[derive(Parser, Debug, Clone)]
#[command(name = "linkmint", version, about = "URL shortener with expiring links")]
pub struct Config {
    /// Address to bind the HTTP server to
    #[arg(long, env = "LINKMINT_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "LINKMINT_PORT", default_value_t = 8080)]
    pub port: u16,

    /// Path to the store file, created on first run
    #[arg(long, env = "LINKMINT_DB", default_value = "linkmint.redb")]
    pub db: PathBuf,

    /// Shared secret authenticating mint requests; randomly generated each
    /// run if left off
    #[arg(long, env = "LINKMINT_SECRET")]
    pub secret: Option<String>,

    /// Length of generated tokens, in characters
    #[arg(long, env = "LINKMINT_TOKEN_LENGTH", default_value_t = 12)]
    pub token_length: usize,

    /// Link lifetime in days; re-minting a URL renews it
    #[arg(long, env = "LINKMINT_TTL_DAYS", default_value_t = 30)]
    pub ttl_days: i64,

    /// Seconds between sweeper cycles
    #[arg(long, env = "LINKMINT_SWEEP_INTERVAL", default_value_t = 60)]
    pub sweep_interval: u64,
}

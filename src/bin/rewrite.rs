//! Batch rewriter: reads a document, shortens every URL in it through a
//! running linkmint server, and prints the rewritten text to stdout.
//! Diagnostics go to stderr so the output stays pipeable.

use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use linkmint::client::MintClient;

#[derive(Parser, Debug)]
#[command(
    name = "linkmint-rewrite",
    version,
    about = "Shorten every URL in a text file"
)]
struct Args {
    /// Base URL of the linkmint server
    #[arg(long, env = "LINKMINT_SERVER", default_value = "http://127.0.0.1:8080")]
    server: String,

    /// Shared secret for the mint endpoint
    #[arg(long, env = "LINKMINT_SECRET")]
    secret: String,

    /// Input file; stdin when omitted
    file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let content = match &args.file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading stdin")?;
            buf
        }
    };

    let client = MintClient::new(args.server, args.secret);
    print!("{}", client.rewrite(&content).await);

    Ok(())
}

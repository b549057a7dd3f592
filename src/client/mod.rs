//! Client side of the batch rewriter: finds URLs in a document and replaces
//! each with its shortened form, minting over the wire against a running
//! server.

use dashmap::DashMap;
use futures_util::future::join_all;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::warn;

/// Matches http(s) URLs up to the first character that commonly terminates
/// one in prose (whitespace, `)`, `}`, `]`).
pub static URL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"https?://[^)\s}\]]+").expect("url regex"));

/// Replace every URL span in `content` with `replace(span)`, preserving the
/// surrounding text byte-for-byte.
pub fn rewrite_spans(content: &str, replace: impl Fn(&str) -> String) -> String {
    let mut out = String::with_capacity(content.len());
    let mut last = 0;
    for span in URL_REGEX.find_iter(content) {
        out.push_str(&content[last..span.start()]);
        out.push_str(&replace(span.as_str()));
        last = span.end();
    }
    out.push_str(&content[last..]);
    out
}

/// Client for the mint endpoint with a per-process memoization cache, so a
/// URL appearing many times in one document is minted once.
pub struct MintClient {
    http: reqwest::Client,
    base_url: String,
    secret: String,
    cache: DashMap<String, String>,
}

impl MintClient {
    pub fn new(base_url: impl Into<String>, secret: impl Into<String>) -> Self {
        MintClient {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            secret: secret.into(),
            cache: DashMap::new(),
        }
    }

    /// Shorten one URL, returning the input unchanged when minting fails; a
    /// rewrite pass degrades rather than dropping content.
    pub async fn shorten(&self, url: &str) -> String {
        if let Some(hit) = self.cache.get(url) {
            return hit.value().clone();
        }

        match self.mint(url).await {
            Ok(token) => {
                let short = format!("{}/{}", self.base_url, token);
                self.cache.insert(url.to_string(), short.clone());
                short
            }
            Err(err) => {
                warn!(url, error = %err, "mint request failed, leaving URL as-is");
                url.to_string()
            }
        }
    }

    /// Rewrite `content`, replacing every URL with its shortened form. All
    /// spans are minted concurrently first; reassembly then reads the warm
    /// cache in order.
    pub async fn rewrite(&self, content: &str) -> String {
        let spans: Vec<&str> = URL_REGEX.find_iter(content).map(|m| m.as_str()).collect();
        join_all(spans.iter().map(|url| self.shorten(url))).await;

        rewrite_spans(content, |url| {
            self.cache
                .get(url)
                .map(|hit| hit.value().clone())
                .unwrap_or_else(|| url.to_string())
        })
    }

    async fn mint(&self, url: &str) -> reqwest::Result<String> {
        let response = self
            .http
            .get(format!("{}/mint", self.base_url))
            .query(&[("url", url)])
            .bearer_auth(&self.secret)
            .send()
            .await?
            .error_for_status()?;

        response.text().await
    }
}

//! Batch rewriter tests
//!
//! The URL scanner and the reassembly pass are pure; they are exercised
//! here without a server.

use linkmint::client::{URL_REGEX, rewrite_spans};

#[test]
fn url_regex_finds_plain_urls() {
    let text = "see https://example.com/a and http://example.org/b.";
    let found: Vec<&str> = URL_REGEX.find_iter(text).map(|m| m.as_str()).collect();
    assert_eq!(
        found,
        vec!["https://example.com/a", "http://example.org/b."]
    );
}

#[test]
fn url_regex_stops_at_prose_delimiters() {
    let text = "(https://example.com/paren) {https://example.com/brace} [https://example.com/bracket]\nhttps://example.com/line";
    let found: Vec<&str> = URL_REGEX.find_iter(text).map(|m| m.as_str()).collect();
    assert_eq!(
        found,
        vec![
            "https://example.com/paren",
            "https://example.com/brace",
            "https://example.com/bracket",
            "https://example.com/line",
        ]
    );
}

#[test]
fn url_regex_ignores_other_schemes() {
    assert!(URL_REGEX.find("ftp://example.com/a").is_none());
    assert!(URL_REGEX.find("no links here").is_none());
}

#[test]
fn rewrite_spans_replaces_in_order() {
    let text = "a https://one.example b https://two.example c";
    let rewritten = rewrite_spans(text, |url| {
        if url == "https://one.example" {
            "X".to_string()
        } else {
            "Y".to_string()
        }
    });
    assert_eq!(rewritten, "a X b Y c");
}

#[test]
fn rewrite_spans_preserves_text_without_urls() {
    let text = "nothing to shorten\nhere at all";
    assert_eq!(rewrite_spans(text, |_| unreachable!()), text);
}

#[test]
fn rewrite_spans_keeps_surrounding_punctuation() {
    let text = "wrapped (https://example.com/a), done";
    let rewritten = rewrite_spans(text, |_| "https://s.example/t0".to_string());
    assert_eq!(rewritten, "wrapped (https://s.example/t0), done");
}

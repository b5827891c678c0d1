//! URL removal.
//!
//! Documents are split on whitespace; tokens that parse as absolute URLs
//! (a scheme plus a network location) are dropped and the survivors are
//! rejoined with single spaces. Relative paths and bare domains without a
//! scheme are not URLs and stay put.

use serde_json::{Map, Value};
use url::Url;

use crate::error::Result;
use crate::steps::{map_documents, parse_options, NoOptions};
use crate::types::{ExecutionStrategy, TextInput};

/// Remove absolute URLs from each document.
pub fn remove_urls(input: impl Into<TextInput>) -> Vec<String> {
    apply(input.into().into_batch(), ExecutionStrategy::Sequential)
}

pub(crate) fn apply(batch: Vec<String>, strategy: ExecutionStrategy) -> Vec<String> {
    map_documents(batch, strategy, |doc| {
        doc.split_whitespace()
            .filter(|token| !is_url(token))
            .collect::<Vec<_>>()
            .join(" ")
    })
}

pub(crate) fn step(
    batch: Vec<String>,
    attributes: &Map<String, Value>,
    strategy: ExecutionStrategy,
) -> Result<Vec<String>> {
    parse_options::<NoOptions>("remove_urls", attributes)?;
    Ok(apply(batch, strategy))
}

/// An absolute URL has both a scheme and a host. `mailto:` and similar
/// host-less schemes don't qualify.
fn is_url(token: &str) -> bool {
    Url::parse(token).map(|url| url.has_host()).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("http://example.com")]
    #[case("https://example.com/path?q=1")]
    #[case("http://t.co/abc")]
    #[case("ftp://files.example.com/a.txt")]
    fn test_absolute_urls_detected(#[case] token: &str) {
        assert!(is_url(token));
    }

    #[rstest]
    #[case("example.com")]
    #[case("www.example.com")]
    #[case("/relative/path")]
    #[case("mailto:someone")]
    #[case("just-a-word")]
    #[case("check:this")]
    fn test_non_urls_kept(#[case] token: &str) {
        assert!(!is_url(token));
    }

    #[test]
    fn test_url_token_dropped_and_spacing_normalized() {
        let out = remove_urls("check this http://example.com now");
        assert_eq!(out, vec!["check this now".to_string()]);
    }

    #[test]
    fn test_bare_domain_not_removed() {
        let out = remove_urls("visit example.com today");
        assert_eq!(out, vec!["visit example.com today".to_string()]);
    }

    #[test]
    fn test_multiple_urls_in_one_document() {
        let out = remove_urls("a http://x.io b https://y.io/z c");
        assert_eq!(out, vec!["a b c".to_string()]);
    }

    #[test]
    fn test_document_of_only_urls_becomes_empty() {
        let out = remove_urls("http://x.io https://y.io");
        assert_eq!(out, vec!["".to_string()]);
    }

    #[test]
    fn test_surviving_tokens_rejoined_single_spaced() {
        let out = remove_urls("a   b\t\tc");
        assert_eq!(out, vec!["a b c".to_string()]);
    }

    #[test]
    fn test_step_rejects_attributes() {
        let mut attributes = Map::new();
        attributes.insert("strict".into(), serde_json::json!(true));
        let err = step(vec![], &attributes, ExecutionStrategy::Sequential).unwrap_err();
        assert!(matches!(err, crate::error::CleanError::InvalidArgument(_)));
    }
}

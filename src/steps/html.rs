//! HTML stripping.
//!
//! Each document is parsed as an HTML fragment (best-effort, malformed
//! markup tolerated) and reduced to its visible text: text nodes joined by
//! a single space, with tags, attributes, and comments discarded. The
//! joining can introduce doubled spaces around former tag boundaries;
//! `fix_whitespace` downstream collapses them.

use scraper::Html;
use serde_json::{Map, Value};

use crate::error::Result;
use crate::steps::{map_documents, parse_options, NoOptions};
use crate::types::{ExecutionStrategy, TextInput};

/// Strip HTML markup from each document, keeping visible text.
pub fn remove_html(input: impl Into<TextInput>) -> Vec<String> {
    apply(input.into().into_batch(), ExecutionStrategy::Sequential)
}

pub(crate) fn apply(batch: Vec<String>, strategy: ExecutionStrategy) -> Vec<String> {
    map_documents(batch, strategy, |doc| {
        let fragment = Html::parse_fragment(doc);
        fragment
            .root_element()
            .text()
            .collect::<Vec<_>>()
            .join(" ")
    })
}

pub(crate) fn step(
    batch: Vec<String>,
    attributes: &Map<String, Value>,
    strategy: ExecutionStrategy,
) -> Result<Vec<String>> {
    parse_options::<NoOptions>("remove_html", attributes)?;
    Ok(apply(batch, strategy))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags_discarded_text_kept() {
        let out = remove_html("before <b>bold</b> after");
        assert_eq!(out, vec!["before  bold  after".to_string()]);
    }

    #[test]
    fn test_plain_text_passes_through() {
        let out = remove_html("no markup here");
        assert_eq!(out, vec!["no markup here".to_string()]);
    }

    #[test]
    fn test_attributes_discarded() {
        let out = remove_html(r#"<a href="http://x.io" class="link">click</a>"#);
        assert_eq!(out, vec!["click".to_string()]);
    }

    #[test]
    fn test_comments_discarded() {
        let out = remove_html("a <!-- hidden --> b");
        assert_eq!(out, vec!["a   b".to_string()]);
    }

    #[test]
    fn test_malformed_html_tolerated() {
        let out = remove_html("broken <b>bold <i>nested");
        assert_eq!(out, vec!["broken  bold  nested".to_string()]);
    }

    #[test]
    fn test_nested_markup() {
        let out = remove_html("<div><p>one</p><p>two</p></div>");
        assert_eq!(out, vec!["one two".to_string()]);
    }

    #[test]
    fn test_entities_decoded() {
        let out = remove_html("fish &amp; chips");
        assert_eq!(out, vec!["fish & chips".to_string()]);
    }

    #[test]
    fn test_batch_order_preserved() {
        let out = remove_html(vec!["<b>a</b>", "b"]);
        assert_eq!(out, vec!["a".to_string(), "b".to_string()]);
    }
}

//! Whitespace and punctuation-spacing normalization.
//!
//! Applies, in order:
//!
//! 1. collapse interior whitespace runs to a single space
//! 2. drop whitespace before `? . ! , :`
//! 3. insert a space after `? . !` directly followed by a letter
//! 4. insert a space after `,` directly followed by a non-space,
//!    non-digit character (digits stay glued for numbers like `1,000`)
//! 5. drop whitespace just inside parentheses
//! 6. drop whitespace just inside straight quote marks
//! 7. trim
//!
//! The insertion rules (3, 4) run before the tightening rules (5, 6):
//! rule 4 can place a space in front of a quote, and the quote rules must
//! still see it in the same pass. This ordering makes the whole transform
//! idempotent, which the property tests enforce.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};

use crate::error::Result;
use crate::steps::{map_documents, parse_options, NoOptions};
use crate::types::{ExecutionStrategy, TextInput};

static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern compiles"));
static SPACE_BEFORE_PUNCT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+([?.!,:])").expect("punct pattern compiles"));
static MISSING_SPACE_AFTER_SENTENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([?.!])([A-Za-z])").expect("sentence pattern compiles"));
static MISSING_SPACE_AFTER_COMMA: Lazy<Regex> =
    Lazy::new(|| Regex::new(r",([^\s\d])").expect("comma pattern compiles"));
static SPACE_AFTER_OPEN_PAREN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\(\s+").expect("open paren pattern compiles"));
static SPACE_BEFORE_CLOSE_PAREN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+\)").expect("close paren pattern compiles"));
static SPACE_AFTER_OPEN_QUOTE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(\s|^)(["'])\s"#).expect("open quote pattern compiles"));
static SPACE_BEFORE_CLOSE_QUOTE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"\s(["'])(\s|$)"#).expect("close quote pattern compiles"));

/// Normalize interior whitespace and punctuation spacing, then trim.
pub fn fix_whitespace(input: impl Into<TextInput>) -> Vec<String> {
    apply(input.into().into_batch(), ExecutionStrategy::Sequential)
}

pub(crate) fn apply(batch: Vec<String>, strategy: ExecutionStrategy) -> Vec<String> {
    map_documents(batch, strategy, normalize)
}

pub(crate) fn step(
    batch: Vec<String>,
    attributes: &Map<String, Value>,
    strategy: ExecutionStrategy,
) -> Result<Vec<String>> {
    parse_options::<NoOptions>("fix_whitespace", attributes)?;
    Ok(apply(batch, strategy))
}

fn normalize(doc: &str) -> String {
    let doc = WHITESPACE_RUN.replace_all(doc, " ");
    let doc = SPACE_BEFORE_PUNCT.replace_all(&doc, "${1}");
    let doc = MISSING_SPACE_AFTER_SENTENCE.replace_all(&doc, "${1} ${2}");
    let doc = MISSING_SPACE_AFTER_COMMA.replace_all(&doc, ", ${1}");
    let doc = SPACE_AFTER_OPEN_PAREN.replace_all(&doc, "(");
    let doc = SPACE_BEFORE_CLOSE_PAREN.replace_all(&doc, ")");
    let doc = SPACE_AFTER_OPEN_QUOTE.replace_all(&doc, "${1}${2}");
    let doc = SPACE_BEFORE_CLOSE_QUOTE.replace_all(&doc, "${1}${2}");
    doc.trim().to_string()
}

//! Substring replacement with sentence-aware capitalization.
//!
//! Every occurrence of the search string is replaced. An occurrence at the
//! very start of the document, or one whose nearest preceding
//! non-whitespace character is `.`, `!`, or `?`, gets the replacement with
//! its first letter capitalized; everywhere else the replacement is used
//! verbatim.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{CleanError, Result};
use crate::steps::{map_documents, parse_options};
use crate::types::{ExecutionStrategy, TextInput};

/// Options for [`replace_substring`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReplaceSubstringOptions {
    /// The exact substring to replace. Must be non-empty.
    pub str_to_replace: String,
    /// The replacement text.
    pub replacement: String,
}

/// Replace every occurrence of a substring, capitalizing sentence starts.
pub fn replace_substring(
    input: impl Into<TextInput>,
    str_to_replace: impl Into<String>,
    replacement: impl Into<String>,
) -> Result<Vec<String>> {
    let options = ReplaceSubstringOptions {
        str_to_replace: str_to_replace.into(),
        replacement: replacement.into(),
    };
    apply(
        input.into().into_batch(),
        &options,
        ExecutionStrategy::Sequential,
    )
}

pub(crate) fn apply(
    batch: Vec<String>,
    options: &ReplaceSubstringOptions,
    strategy: ExecutionStrategy,
) -> Result<Vec<String>> {
    if options.str_to_replace.is_empty() {
        return Err(CleanError::InvalidArgument(
            "replace_substring: str_to_replace must be non-empty".into(),
        ));
    }

    let needle = options.str_to_replace.clone();
    let replacement = options.replacement.clone();
    let capitalized = capitalize_first(&replacement);

    Ok(map_documents(batch, strategy, move |doc| {
        let mut out = String::with_capacity(doc.len());
        let mut last = 0;
        for (start, matched) in doc.match_indices(needle.as_str()) {
            out.push_str(&doc[last..start]);
            if starts_sentence(&doc[..start]) {
                out.push_str(&capitalized);
            } else {
                out.push_str(&replacement);
            }
            last = start + matched.len();
        }
        out.push_str(&doc[last..]);
        out
    }))
}

pub(crate) fn step(
    batch: Vec<String>,
    attributes: &Map<String, Value>,
    strategy: ExecutionStrategy,
) -> Result<Vec<String>> {
    let options: ReplaceSubstringOptions = parse_options("replace_substring", attributes)?;
    apply(batch, &options, strategy)
}

/// True when the text before an occurrence puts it at a sentence start:
/// nothing at all, or sentence-ending punctuation as the nearest
/// non-whitespace character.
fn starts_sentence(prefix: &str) -> bool {
    match prefix.trim_end().chars().next_back() {
        None => true,
        Some(c) => matches!(c, '.' | '!' | '?'),
    }
}

fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

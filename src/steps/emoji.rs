//! Emoji removal and demojization.
//!
//! Documents are walked by grapheme cluster so multi-codepoint emoji (skin
//! tones, ZWJ sequences like family emoji) are treated as single units. A
//! cluster that resolves to a known emoji is either deleted or replaced
//! with a space-delimited snake_case rendering of its CLDR name, e.g.
//! `😍` → ` smiling_face_with_heart-eyes `. Everything else passes through
//! unchanged.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use unicode_segmentation::UnicodeSegmentation;

use crate::error::Result;
use crate::steps::{map_documents, parse_options};
use crate::types::{ExecutionStrategy, TextInput};

/// Options for [`remove_emoji`].
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RemoveEmojiOptions {
    /// Replace each emoji with its textual description instead of deleting.
    pub replace: bool,
}

/// Remove emoji from each document, or replace them with descriptions.
pub fn remove_emoji(input: impl Into<TextInput>, replace: bool) -> Vec<String> {
    let options = RemoveEmojiOptions { replace };
    apply(
        input.into().into_batch(),
        &options,
        ExecutionStrategy::Sequential,
    )
}

pub(crate) fn apply(
    batch: Vec<String>,
    options: &RemoveEmojiOptions,
    strategy: ExecutionStrategy,
) -> Vec<String> {
    let replace = options.replace;
    map_documents(batch, strategy, move |doc| demojize(doc, replace))
}

pub(crate) fn step(
    batch: Vec<String>,
    attributes: &Map<String, Value>,
    strategy: ExecutionStrategy,
) -> Result<Vec<String>> {
    let options: RemoveEmojiOptions = parse_options("remove_emoji", attributes)?;
    Ok(apply(batch, &options, strategy))
}

fn demojize(doc: &str, replace: bool) -> String {
    let mut out = String::with_capacity(doc.len());
    for cluster in doc.graphemes(true) {
        match lookup(cluster) {
            Some(emoji) if replace => {
                out.push(' ');
                out.push_str(&description(emoji.name()));
                out.push(' ');
            }
            Some(_) => {}
            None => out.push_str(cluster),
        }
    }
    out
}

/// Resolve a grapheme cluster to an emoji, tolerating a missing or extra
/// U+FE0F presentation selector.
fn lookup(cluster: &str) -> Option<&'static emojis::Emoji> {
    emojis::get(cluster).or_else(|| {
        let stripped: String = cluster.chars().filter(|&c| c != '\u{FE0F}').collect();
        if stripped == cluster {
            None
        } else {
            emojis::get(&stripped)
        }
    })
}

/// Render a CLDR emoji name as a single snake_case token:
/// lowercase, spaces to underscores, punctuation dropped.
fn description(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for c in name.chars() {
        match c {
            ' ' => {
                if !out.ends_with('_') {
                    out.push('_');
                }
            }
            c if c.is_ascii_alphanumeric() || c == '-' || c == '_' => {
                out.push(c.to_ascii_lowercase());
            }
            _ => {}
        }
    }
    out
}

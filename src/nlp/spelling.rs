//! Spell checking against a caller-supplied lexicon.
//!
//! [`find_incorrect_spellings`] tokenizes each document with the
//! social-media tokenizer, looks up every candidate word in a
//! [`SpellingLexicon`], and reports unrecognized words together with the
//! closest in-lexicon suggestion within an edit-distance budget. It
//! annotates; it never rewrites the batch.
//!
//! Mentions, hashtags, non-ASCII tokens, and ordinal numbers (`1st`,
//! `22nd`, ...) are exempt from checking. Suggestions are cached for the
//! duration of one call so repeated tokens cost one lookup; the cache is
//! never shared across calls, so switching lexicons between calls can't
//! leak stale suggestions.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::Serialize;

use crate::error::Result;
use crate::nlp::tokenizer::tokenize;
use crate::types::TextInput;

/// Maximum edit distance used when the caller has no preference.
pub const DEFAULT_EDIT_DISTANCE: usize = 2;

static ORDINAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^\d+(?:st|nd|rd|th)$").expect("ordinal pattern compiles"));

// ─── Lexicon ────────────────────────────────────────────────────────────────

/// A spelling corpus: the set of words considered correctly spelled.
///
/// Lookup is lowercase. Suggestion order is deterministic: among words at
/// the same edit distance, the one appearing earliest in the source list
/// wins.
#[derive(Debug, Clone, Default)]
pub struct SpellingLexicon {
    /// Insertion-ordered words, for deterministic suggestion ties.
    words: Vec<String>,
    /// Lowercase membership index.
    index: FxHashSet<String>,
}

impl SpellingLexicon {
    /// Build a lexicon from a word list. Words are lowercased; duplicates
    /// keep their first position.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut lexicon = Self::default();
        for word in words {
            let word = word.as_ref().to_lowercase();
            if lexicon.index.insert(word.clone()) {
                lexicon.words.push(word);
            }
        }
        lexicon
    }

    /// Build from whitespace-separated text (one big word list).
    pub fn from_text(text: &str) -> Self {
        Self::from_words(text.split_whitespace())
    }

    /// Check membership, case-insensitively.
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains(&word.to_lowercase())
    }

    /// The closest word within `max_distance` edits, if any.
    pub fn suggest(&self, token: &str, max_distance: usize) -> Option<&str> {
        let token = token.to_lowercase();
        let mut best: Option<(usize, &str)> = None;
        for word in &self.words {
            let distance = strsim::levenshtein(&token, word);
            if distance <= max_distance && best.map_or(true, |(d, _)| distance < d) {
                if distance == 0 {
                    return Some(word);
                }
                best = Some((distance, word));
            }
        }
        best.map(|(_, word)| word)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

// ─── Report ─────────────────────────────────────────────────────────────────

/// Unrecognized words mapped to their suggested corrections (`None` when
/// nothing in the lexicon is close enough).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SpellingReport {
    pub corrections: BTreeMap<String, Option<String>>,
}

impl SpellingReport {
    /// The suggestion for a word, if the word was flagged and one exists.
    pub fn suggestion(&self, word: &str) -> Option<&str> {
        self.corrections
            .get(word)
            .and_then(|suggestion| suggestion.as_deref())
    }

    /// Whether a word was flagged as unrecognized.
    pub fn flagged(&self, word: &str) -> bool {
        self.corrections.contains_key(word)
    }

    pub fn len(&self) -> usize {
        self.corrections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.corrections.is_empty()
    }
}

// ─── Checking ───────────────────────────────────────────────────────────────

/// Report unrecognized words across a batch, with suggestions within
/// `max_distance` edits.
pub fn find_incorrect_spellings(
    input: impl Into<TextInput>,
    lexicon: &SpellingLexicon,
    max_distance: usize,
) -> Result<SpellingReport> {
    let batch = input.into().into_batch();

    // Suggestion cache scoped to this invocation only.
    let mut cache: FxHashMap<String, Option<String>> = FxHashMap::default();
    let mut report = SpellingReport::default();

    for doc in &batch {
        for token in tokenize(doc) {
            if !is_checkable(token) {
                continue;
            }
            let token = token.to_lowercase();
            if lexicon.contains(&token) {
                continue;
            }
            let suggestion = cache
                .entry(token.clone())
                .or_insert_with(|| {
                    lexicon
                        .suggest(&token, max_distance)
                        .map(str::to_string)
                })
                .clone();
            report.corrections.insert(token, suggestion);
        }
    }

    Ok(report)
}

/// A token is worth spell-checking when it is a plain ASCII-alphabetic
/// word. Mentions, hashtags, ordinals, numbers, URLs, and anything
/// non-ASCII are exempt.
fn is_checkable(token: &str) -> bool {
    if token.starts_with('@') || token.starts_with('#') {
        return false;
    }
    if ORDINAL.is_match(token) {
        return false;
    }
    !token.is_empty() && token.chars().all(|c| c.is_ascii_alphabetic())
}

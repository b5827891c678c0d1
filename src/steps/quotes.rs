//! Curly quote normalization.
//!
//! Maps a fixed set of Unicode quote code points to their ASCII
//! equivalents; everything else passes through unchanged. The mapping is
//! direction-unaware: left and right forms collapse to the same character.

use serde_json::{Map, Value};

use crate::error::Result;
use crate::steps::{map_documents, parse_options, NoOptions};
use crate::types::{ExecutionStrategy, TextInput};

/// The replaced code points: left/right single and double quotation marks
/// plus the double primes often used as double quotes.
const CURLY_QUOTES: [(char, char); 6] = [
    ('\u{2018}', '\''), // left single quotation mark
    ('\u{2019}', '\''), // right single quotation mark
    ('\u{201C}', '"'),  // left double quotation mark
    ('\u{201D}', '"'),  // right double quotation mark
    ('\u{2033}', '"'),  // double prime
    ('\u{2036}', '"'),  // reversed double prime
];

/// Replace Unicode curly quotes with straight ASCII ones.
pub fn replace_curly_quotes(input: impl Into<TextInput>) -> Vec<String> {
    apply(input.into().into_batch(), ExecutionStrategy::Sequential)
}

pub(crate) fn apply(batch: Vec<String>, strategy: ExecutionStrategy) -> Vec<String> {
    map_documents(batch, strategy, |doc| {
        doc.chars()
            .map(|c| {
                CURLY_QUOTES
                    .iter()
                    .find(|(curly, _)| *curly == c)
                    .map_or(c, |(_, straight)| *straight)
            })
            .collect()
    })
}

pub(crate) fn step(
    batch: Vec<String>,
    attributes: &Map<String, Value>,
    strategy: ExecutionStrategy,
) -> Result<Vec<String>> {
    parse_options::<NoOptions>("replace_curly_quotes", attributes)?;
    Ok(apply(batch, strategy))
}

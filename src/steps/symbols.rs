//! Platform symbol removal (hashtags, mentions, cashtags, ...).
//!
//! Each symbol carries a flag: when set, the symbol and the word run
//! directly attached to it are deleted together (`#flight` disappears
//! whole); when clear, only the symbol character is deleted and the
//! adjacent text stays (`@united` → `united`). Symbols apply in the given
//! order. A flagged symbol with no word character directly after it is
//! left in place.

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{CleanError, Result};
use crate::steps::{map_documents, parse_options};
use crate::types::{ExecutionStrategy, OneOrMany, TextInput};

/// Options for [`remove_symbols`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RemoveSymbolsOptions {
    /// One symbol or a list of symbols.
    pub symbols: OneOrMany<String>,
    /// One flag (broadcast over all symbols) or a per-symbol list.
    pub remove_keyword: OneOrMany<bool>,
}

/// Remove symbols and, where flagged, their attached keywords.
pub fn remove_symbols(
    input: impl Into<TextInput>,
    symbols: impl Into<OneOrMany<String>>,
    remove_keyword: impl Into<OneOrMany<bool>>,
) -> Result<Vec<String>> {
    let options = RemoveSymbolsOptions {
        symbols: symbols.into(),
        remove_keyword: remove_keyword.into(),
    };
    apply(
        input.into().into_batch(),
        &options,
        ExecutionStrategy::Sequential,
    )
}

enum SymbolRule {
    /// Delete the symbol plus the attached word run and trailing whitespace.
    WithKeyword(Regex),
    /// Delete every occurrence of the symbol alone.
    SymbolOnly(String),
}

pub(crate) fn apply(
    batch: Vec<String>,
    options: &RemoveSymbolsOptions,
    strategy: ExecutionStrategy,
) -> Result<Vec<String>> {
    let symbols = options.symbols.clone().into_vec();
    let flags = options
        .remove_keyword
        .clone()
        .broadcast(symbols.len(), "remove_keyword")?;

    // Compile once, outside the document loop.
    let rules = symbols
        .iter()
        .zip(&flags)
        .map(|(symbol, &with_keyword)| {
            if with_keyword {
                let pattern = format!(r"{}\w+\s*", regex::escape(symbol));
                let regex = Regex::new(&pattern).map_err(|err| {
                    CleanError::InvalidArgument(format!("remove_symbols: {err}"))
                })?;
                Ok(SymbolRule::WithKeyword(regex))
            } else {
                Ok(SymbolRule::SymbolOnly(symbol.clone()))
            }
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(map_documents(batch, strategy, move |doc| {
        let mut doc = doc.to_string();
        for rule in &rules {
            doc = match rule {
                SymbolRule::WithKeyword(regex) => {
                    regex.replace_all(&doc, "").trim().to_string()
                }
                SymbolRule::SymbolOnly(symbol) => doc.replace(symbol.as_str(), ""),
            };
        }
        doc
    }))
}

pub(crate) fn step(
    batch: Vec<String>,
    attributes: &Map<String, Value>,
    strategy: ExecutionStrategy,
) -> Result<Vec<String>> {
    let options: RemoveSymbolsOptions = parse_options("remove_symbols", attributes)?;
    apply(batch, &options, strategy)
}

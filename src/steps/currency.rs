//! Currency spacing.
//!
//! Collapses whitespace strictly between a currency symbol (£, €, $) and an
//! immediately following digit: `"$ 5"` → `"$5"`. A currency symbol not
//! followed by a digit (after the whitespace) is untouched.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};

use crate::error::Result;
use crate::steps::{map_documents, parse_options, NoOptions};
use crate::types::{ExecutionStrategy, TextInput};

static CURRENCY_GAP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([£€$])\s+(\d)").expect("currency pattern compiles"));

/// Remove whitespace between a currency symbol and a following digit.
pub fn remove_whitespace_currency(input: impl Into<TextInput>) -> Vec<String> {
    apply(input.into().into_batch(), ExecutionStrategy::Sequential)
}

pub(crate) fn apply(batch: Vec<String>, strategy: ExecutionStrategy) -> Vec<String> {
    map_documents(batch, strategy, |doc| {
        CURRENCY_GAP.replace_all(doc, "${1}${2}").into_owned()
    })
}

pub(crate) fn step(
    batch: Vec<String>,
    attributes: &Map<String, Value>,
    strategy: ExecutionStrategy,
) -> Result<Vec<String>> {
    parse_options::<NoOptions>("remove_whitespace_currency", attributes)?;
    Ok(apply(batch, strategy))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Price is $ 5 today", "Price is $5 today")]
    #[case("£ 10 please", "£10 please")]
    #[case("€  99 deal", "€99 deal")]
    #[case("$\t5", "$5")]
    fn test_gap_collapsed(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(
            remove_whitespace_currency(input),
            vec![expected.to_string()]
        );
    }

    #[test]
    fn test_symbol_without_digit_untouched() {
        let text = "costs $ many dollars";
        assert_eq!(remove_whitespace_currency(text), vec![text.to_string()]);
    }

    #[test]
    fn test_already_tight_untouched() {
        let text = "costs $5 flat";
        assert_eq!(remove_whitespace_currency(text), vec![text.to_string()]);
    }

    #[test]
    fn test_multiple_occurrences() {
        let out = remove_whitespace_currency("$ 1 and £ 2 and € 3");
        assert_eq!(out, vec!["$1 and £2 and €3".to_string()]);
    }

    #[test]
    fn test_other_currency_symbols_ignored() {
        let text = "¥ 100 stays";
        assert_eq!(remove_whitespace_currency(text), vec![text.to_string()]);
    }
}

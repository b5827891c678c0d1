//! Cleaning pipeline for short-form social media text.
//!
//! Tweets and similar posts arrive full of emoji, URLs, HTML fragments,
//! platform symbols, curly quotes, and stray whitespace. This crate cleans
//! them up ahead of vectorization: a registry of independent, stateless
//! transformation steps plus an executor that applies a caller-chosen,
//! ordered sequence of those steps to a batch of documents.
//!
//! # Quick start
//!
//! ```
//! use rapid_textclean::clean_text;
//!
//! // None = the default pipeline (emoji, URLs, HTML, #/@ symbols,
//! // curly quotes, currency spacing, whitespace).
//! let cleaned = clean_text("Fares from $ 5 !Wow http://t.co/x", None, false).unwrap();
//! assert_eq!(cleaned, vec!["Fares from $5! Wow".to_string()]);
//! ```
//!
//! # Configured pipelines
//!
//! Steps are addressed by name and configured through JSON-shaped
//! descriptors, so a pipeline can live in a config file:
//!
//! ```
//! use rapid_textclean::{clean_text, StepConfig};
//!
//! let config: StepConfig = serde_json::from_str(
//!     r#"[
//!         {"name": "remove_symbols",
//!          "attributes": {"symbols": "@", "remove_keyword": false}},
//!         {"name": "fix_whitespace"}
//!     ]"#,
//! ).unwrap();
//!
//! let cleaned = clean_text("thanks @united !", Some(&config), false).unwrap();
//! assert_eq!(cleaned, vec!["thanks united!".to_string()]);
//! ```
//!
//! # Contract
//!
//! Batches are ordered and immutable value-in/value-out: entry *i* of the
//! output derives only from entry *i* of the input, for every step and for
//! the pipeline as a whole. Steps share no state, perform no I/O, and are
//! deterministic for a fixed batch and option set. A failed step aborts the
//! whole call; no partially cleaned batch is ever returned.

pub mod error;
pub mod nlp;
pub mod pipeline;
pub mod steps;
pub mod types;

pub use error::{CleanError, Result};
pub use nlp::spelling::{
    find_incorrect_spellings, SpellingLexicon, SpellingReport, DEFAULT_EDIT_DISTANCE,
};
pub use pipeline::executor::{clean_text, TextCleaner};
pub use pipeline::registry::StepRegistry;
pub use pipeline::spec::{default_pipeline, StepConfig, StepDescriptor, StepName};
pub use steps::currency::remove_whitespace_currency;
pub use steps::emoji::remove_emoji;
pub use steps::html::remove_html;
pub use steps::quotes::replace_curly_quotes;
pub use steps::substring::replace_substring;
pub use steps::symbols::remove_symbols;
pub use steps::urls::remove_urls;
pub use steps::whitespace::fix_whitespace;
pub use types::{ExecutionStrategy, OneOrMany, TextInput};

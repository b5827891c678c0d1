//! Transformation steps.
//!
//! Each step is a pure function over a batch: same length out as in, entry
//! *i* of the output derived only from entry *i* of the input, no shared
//! state, no I/O. Every module exposes a typed public function plus a
//! `step` adapter with the registry signature that deserializes its options
//! from descriptor attributes.

pub mod currency;
pub mod emoji;
pub mod html;
pub mod quotes;
pub mod substring;
pub mod symbols;
pub mod urls;
pub mod whitespace;

use rayon::prelude::*;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::{CleanError, Result};
use crate::types::ExecutionStrategy;

/// Map a per-document transform over the batch, preserving order.
pub(crate) fn map_documents<F>(
    batch: Vec<String>,
    strategy: ExecutionStrategy,
    transform: F,
) -> Vec<String>
where
    F: Fn(&str) -> String + Send + Sync,
{
    match strategy {
        ExecutionStrategy::Sequential => batch.iter().map(|doc| transform(doc)).collect(),
        ExecutionStrategy::Parallel => batch.par_iter().map(|doc| transform(doc)).collect(),
    }
}

/// Deserialize a step's typed options from its descriptor attributes.
///
/// Unknown attributes and wrong-typed values both surface as
/// [`CleanError::InvalidArgument`] naming the step.
pub(crate) fn parse_options<T: DeserializeOwned>(
    step: &str,
    attributes: &Map<String, Value>,
) -> Result<T> {
    serde_json::from_value(Value::Object(attributes.clone()))
        .map_err(|err| CleanError::InvalidArgument(format!("{step}: {err}")))
}

/// Options type for steps that take none; any attribute is rejected.
#[derive(Debug, Clone, Copy, Default, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct NoOptions {}

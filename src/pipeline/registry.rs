//! Step registry — name-to-function resolution.
//!
//! The registry maps each [`StepName`] to its transformation function. It is
//! populated once, at construction, with the fixed step set; there is no
//! dynamic registration, so a resolved name always means the same behavior.
//! The executor owns a registry instance and passes descriptors through
//! [`StepRegistry::resolve`], which fails with [`CleanError::UnknownStep`]
//! for names outside the set.

use rustc_hash::FxHashMap;
use serde_json::{Map, Value};

use crate::error::{CleanError, Result};
use crate::pipeline::spec::StepName;
use crate::steps;
use crate::types::ExecutionStrategy;

/// A registered transformation: batch in, batch out, same length and order.
///
/// Attributes arrive as the raw descriptor map; each step deserializes its
/// own typed options and fails with [`CleanError::InvalidArgument`] on a
/// wrong shape or an unrecognized attribute.
pub type StepFn =
    fn(Vec<String>, &Map<String, Value>, ExecutionStrategy) -> Result<Vec<String>>;

/// Fixed mapping from step name to transformation function.
#[derive(Debug, Clone)]
pub struct StepRegistry {
    steps: FxHashMap<StepName, StepFn>,
}

impl StepRegistry {
    /// Registry pre-loaded with every step in [`StepName::ALL`].
    pub fn with_defaults() -> Self {
        let mut steps: FxHashMap<StepName, StepFn> = FxHashMap::default();
        steps.insert(StepName::RemoveEmoji, steps::emoji::step as StepFn);
        steps.insert(StepName::RemoveUrls, steps::urls::step as StepFn);
        steps.insert(StepName::RemoveHtml, steps::html::step as StepFn);
        steps.insert(StepName::RemoveSymbols, steps::symbols::step as StepFn);
        steps.insert(StepName::ReplaceCurlyQuotes, steps::quotes::step as StepFn);
        steps.insert(
            StepName::RemoveWhitespaceCurrency,
            steps::currency::step as StepFn,
        );
        steps.insert(StepName::FixWhitespace, steps::whitespace::step as StepFn);
        steps.insert(StepName::ReplaceSubstring, steps::substring::step as StepFn);
        Self { steps }
    }

    /// Resolve a step by its exact name.
    pub fn resolve(&self, name: &str) -> Result<(StepName, StepFn)> {
        let step = StepName::parse(name)
            .ok_or_else(|| CleanError::UnknownStep(name.to_string()))?;
        let func = self
            .steps
            .get(&step)
            .copied()
            .ok_or_else(|| CleanError::UnknownStep(name.to_string()))?;
        Ok((step, func))
    }

    /// Number of registered steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl Default for StepRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

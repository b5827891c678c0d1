//! Pipeline executor — resolves and applies steps in order.
//!
//! [`TextCleaner`] owns the step registry and an execution strategy. A call
//! to [`TextCleaner::clean`] normalizes the input to a batch, resolves each
//! descriptor against the registry, and threads the batch through the
//! resolved functions left to right. The output of step *i* is the input of
//! step *i+1*; the final step's output is returned.
//!
//! Errors abort the whole call at the point of detection — an unknown step
//! name or a malformed option set never yields a partially cleaned batch.

use once_cell::sync::Lazy;
use tracing::info;

use crate::error::Result;
use crate::pipeline::registry::StepRegistry;
use crate::pipeline::spec::{default_pipeline, StepConfig, StepDescriptor};
use crate::types::{ExecutionStrategy, TextInput};

static DEFAULT_PIPELINE: Lazy<Vec<StepDescriptor>> = Lazy::new(default_pipeline);

/// Executes ordered step sequences over text batches.
#[derive(Debug, Clone)]
pub struct TextCleaner {
    registry: StepRegistry,
    strategy: ExecutionStrategy,
}

impl TextCleaner {
    /// Cleaner with the default registry, mapping documents sequentially.
    pub fn new() -> Self {
        Self {
            registry: StepRegistry::with_defaults(),
            strategy: ExecutionStrategy::default(),
        }
    }

    /// Cleaner that maps documents with the given strategy inside each step.
    ///
    /// [`ExecutionStrategy::Parallel`] fans the per-document loop out over
    /// rayon; result order is preserved either way, and output is identical
    /// to sequential execution.
    pub fn with_strategy(strategy: ExecutionStrategy) -> Self {
        Self {
            registry: StepRegistry::with_defaults(),
            strategy,
        }
    }

    /// The registry this cleaner resolves step names against.
    pub fn registry(&self) -> &StepRegistry {
        &self.registry
    }

    /// Apply a step sequence to a batch.
    ///
    /// With `config = None` the default pipeline runs. An empty sequence
    /// returns the input batch untouched. When `verbose` is set, one trace
    /// event is emitted per executed step, naming the step and its non-empty
    /// attribute set; the events have no effect on the output.
    pub fn clean(
        &self,
        input: impl Into<TextInput>,
        config: Option<&StepConfig>,
        verbose: bool,
    ) -> Result<Vec<String>> {
        let steps = match config {
            Some(config) => config.steps(),
            None => DEFAULT_PIPELINE.as_slice(),
        };
        self.run(input.into().into_batch(), steps, verbose)
    }

    /// Like [`TextCleaner::clean`], but both input and configuration arrive
    /// as dynamic JSON values (e.g., straight from a config file or an RPC
    /// payload). Shape errors surface as [`crate::CleanError::InvalidArgument`]
    /// and [`crate::CleanError::InvalidConfig`] respectively.
    pub fn clean_value(
        &self,
        input: &serde_json::Value,
        config: &serde_json::Value,
        verbose: bool,
    ) -> Result<Vec<String>> {
        let input = TextInput::from_value(input)?;
        let config = StepConfig::from_value(config)?;
        self.clean(input, config.as_ref(), verbose)
    }

    fn run(
        &self,
        mut batch: Vec<String>,
        steps: &[StepDescriptor],
        verbose: bool,
    ) -> Result<Vec<String>> {
        for descriptor in steps {
            let (name, func) = self.registry.resolve(&descriptor.name)?;
            if verbose {
                if descriptor.attributes.is_empty() {
                    info!(step = %name, "applying step");
                } else {
                    let attributes = serde_json::Value::Object(descriptor.attributes.clone());
                    info!(step = %name, %attributes, "applying step");
                }
            }
            batch = func(batch, &descriptor.attributes, self.strategy)?;
        }
        Ok(batch)
    }
}

impl Default for TextCleaner {
    fn default() -> Self {
        Self::new()
    }
}

/// Clean a batch with a one-off default [`TextCleaner`].
///
/// `config = None` runs the default pipeline. See [`TextCleaner::clean`].
pub fn clean_text(
    input: impl Into<TextInput>,
    config: Option<&StepConfig>,
    verbose: bool,
) -> Result<Vec<String>> {
    TextCleaner::new().clean(input, config, verbose)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CleanError;
    use crate::pipeline::spec::StepName;
    use serde_json::json;

    #[test]
    fn test_empty_sequence_returns_input_untouched() {
        let config = StepConfig::Sequence(vec![]);
        let batch = vec!["  raw   text  ".to_string(), "".to_string()];
        let out = clean_text(batch.clone(), Some(&config), false).unwrap();
        assert_eq!(out, batch);
    }

    #[test]
    fn test_single_descriptor_config() {
        let config = StepConfig::from(StepDescriptor::from(StepName::FixWhitespace));
        let out = clean_text("so   much   space", Some(&config), false).unwrap();
        assert_eq!(out, vec!["so much space".to_string()]);
    }

    #[test]
    fn test_steps_thread_left_to_right() {
        // remove_urls leaves single spaces; fix_whitespace then tightens
        // punctuation. Reversed order would leave " !" intact.
        let config = StepConfig::Sequence(vec![
            StepDescriptor::new("remove_urls"),
            StepDescriptor::new("fix_whitespace"),
        ]);
        let out = clean_text("wow http://t.co/x !", Some(&config), false).unwrap();
        assert_eq!(out, vec!["wow!".to_string()]);
    }

    #[test]
    fn test_unknown_step_aborts_whole_call() {
        let config = StepConfig::Sequence(vec![
            StepDescriptor::new("fix_whitespace"),
            StepDescriptor::new("not_a_step"),
        ]);
        let err = clean_text("x", Some(&config), false).unwrap_err();
        assert_eq!(err, CleanError::UnknownStep("not_a_step".into()));
    }

    #[test]
    fn test_invalid_attributes_abort_whole_call() {
        let config = StepConfig::Single(
            StepDescriptor::new("remove_emoji").with_attribute("replace", "yes"),
        );
        let err = clean_text("x", Some(&config), false).unwrap_err();
        assert!(matches!(err, CleanError::InvalidArgument(_)));
    }

    #[test]
    fn test_single_string_normalizes_to_one_element_batch() {
        let out = clean_text("just one", None, false).unwrap();
        assert_eq!(out.len(), 1);
    }

    #[test]
    fn test_order_and_length_preserved() {
        let batch = vec![
            "first   doc".to_string(),
            "second http://x.io/y doc".to_string(),
            "third doc".to_string(),
        ];
        let out = clean_text(batch, None, false).unwrap();
        assert_eq!(out.len(), 3);
        assert_eq!(out[0], "first doc");
        assert_eq!(out[1], "second doc");
        assert_eq!(out[2], "third doc");
    }

    #[test]
    fn test_determinism() {
        let batch = vec!["OMG 😍  deal , right ?".to_string()];
        let first = clean_text(batch.clone(), None, false).unwrap();
        let second = clean_text(batch, None, false).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_parallel_strategy_matches_sequential() {
        let batch: Vec<String> = (0..64)
            .map(|i| format!("doc {i} with   spaces , and http://u.rl/{i} too !"))
            .collect();
        let sequential = TextCleaner::new().clean(batch.clone(), None, false).unwrap();
        let parallel = TextCleaner::with_strategy(ExecutionStrategy::Parallel)
            .clean(batch, None, false)
            .unwrap();
        assert_eq!(sequential, parallel);
    }

    #[test]
    fn test_clean_value_dynamic_shapes() {
        let cleaner = TextCleaner::new();

        let out = cleaner
            .clean_value(&json!("a   b"), &json!({"name": "fix_whitespace"}), false)
            .unwrap();
        assert_eq!(out, vec!["a b".to_string()]);

        // null config = default pipeline
        let out = cleaner.clean_value(&json!(["x  y"]), &json!(null), false).unwrap();
        assert_eq!(out, vec!["x y".to_string()]);

        let err = cleaner
            .clean_value(&json!(42), &json!(null), false)
            .unwrap_err();
        assert!(matches!(err, CleanError::InvalidArgument(_)));

        let err = cleaner
            .clean_value(&json!("x"), &json!("fix_whitespace"), false)
            .unwrap_err();
        assert!(matches!(err, CleanError::InvalidConfig(_)));
    }

    #[test]
    fn test_verbose_flag_does_not_change_output() {
        let batch = vec!["check http://t.co/abc  now !".to_string()];
        let quiet = clean_text(batch.clone(), None, false).unwrap();
        let loud = clean_text(batch, None, true).unwrap();
        assert_eq!(quiet, loud);
    }
}

//! Shared value types for the pipeline boundary.
//!
//! The external contract is duck-typed at the edges — a single string or a
//! list of strings, a scalar option or a per-symbol list. These types
//! normalize those shapes into one canonical form immediately on entry, so
//! no algorithm ever branches on shape mid-loop.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{CleanError, Result};

// ─── TextInput ──────────────────────────────────────────────────────────────

/// A single document or an ordered batch of documents.
///
/// Every transformation accepts either shape and normalizes a single string
/// to a one-element batch. Output is always a batch, same length and order
/// as the input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TextInput {
    Single(String),
    Batch(Vec<String>),
}

impl TextInput {
    /// Normalize to the canonical batch form.
    pub fn into_batch(self) -> Vec<String> {
        match self {
            Self::Single(doc) => vec![doc],
            Self::Batch(docs) => docs,
        }
    }

    /// Build from a dynamic JSON value.
    ///
    /// Accepts a string or an array of strings; any other shape fails with
    /// [`CleanError::InvalidArgument`].
    pub fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::String(s) => Ok(Self::Single(s.clone())),
            Value::Array(items) => {
                let docs = items
                    .iter()
                    .map(|item| match item {
                        Value::String(s) => Ok(s.clone()),
                        other => Err(CleanError::InvalidArgument(format!(
                            "text batch entries must be strings, got {other}"
                        ))),
                    })
                    .collect::<Result<Vec<_>>>()?;
                Ok(Self::Batch(docs))
            }
            other => Err(CleanError::InvalidArgument(format!(
                "text input must be a string or a list of strings, got {other}"
            ))),
        }
    }
}

impl From<&str> for TextInput {
    fn from(doc: &str) -> Self {
        Self::Single(doc.to_string())
    }
}

impl From<String> for TextInput {
    fn from(doc: String) -> Self {
        Self::Single(doc)
    }
}

impl From<Vec<String>> for TextInput {
    fn from(docs: Vec<String>) -> Self {
        Self::Batch(docs)
    }
}

impl From<&[String]> for TextInput {
    fn from(docs: &[String]) -> Self {
        Self::Batch(docs.to_vec())
    }
}

impl From<Vec<&str>> for TextInput {
    fn from(docs: Vec<&str>) -> Self {
        Self::Batch(docs.into_iter().map(str::to_string).collect())
    }
}

// ─── OneOrMany ──────────────────────────────────────────────────────────────

/// A scalar option or a list of options (e.g., `symbols`, `remove_keyword`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    /// Normalize to a list.
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Self::One(item) => vec![item],
            Self::Many(items) => items,
        }
    }

    /// Number of items after normalization.
    pub fn len(&self) -> usize {
        match self {
            Self::One(_) => 1,
            Self::Many(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: Clone> OneOrMany<T> {
    /// Normalize to exactly `len` items: a scalar broadcasts, a list must
    /// already match.
    pub fn broadcast(self, len: usize, option_name: &str) -> Result<Vec<T>> {
        match self {
            Self::One(item) => Ok(vec![item; len]),
            Self::Many(items) if items.len() == len => Ok(items),
            Self::Many(items) => Err(CleanError::InvalidArgument(format!(
                "{option_name} has {} entries but {len} are required",
                items.len()
            ))),
        }
    }
}

impl<T> From<T> for OneOrMany<T> {
    fn from(item: T) -> Self {
        Self::One(item)
    }
}

impl<T> From<Vec<T>> for OneOrMany<T> {
    fn from(items: Vec<T>) -> Self {
        Self::Many(items)
    }
}

// ─── ExecutionStrategy ──────────────────────────────────────────────────────

/// How the per-document loop inside each step runs.
///
/// Documents are independent, so a step may map over the batch in parallel;
/// result order is preserved either way. Sequential is the default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecutionStrategy {
    #[default]
    Sequential,
    Parallel,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_text_input_normalizes_single_string() {
        let input: TextInput = "hello".into();
        assert_eq!(input.into_batch(), vec!["hello".to_string()]);
    }

    #[test]
    fn test_text_input_preserves_batch_order() {
        let input: TextInput = vec!["a", "b", "c"].into();
        assert_eq!(
            input.into_batch(),
            vec!["a".to_string(), "b".to_string(), "c".to_string()]
        );
    }

    #[test]
    fn test_text_input_from_value_string() {
        let input = TextInput::from_value(&json!("one doc")).unwrap();
        assert_eq!(input, TextInput::Single("one doc".into()));
    }

    #[test]
    fn test_text_input_from_value_array() {
        let input = TextInput::from_value(&json!(["a", "b"])).unwrap();
        assert_eq!(input.into_batch().len(), 2);
    }

    #[test]
    fn test_text_input_rejects_number() {
        let err = TextInput::from_value(&json!(42)).unwrap_err();
        assert!(matches!(err, CleanError::InvalidArgument(_)));
    }

    #[test]
    fn test_text_input_rejects_mixed_array() {
        let err = TextInput::from_value(&json!(["a", 1])).unwrap_err();
        assert!(matches!(err, CleanError::InvalidArgument(_)));
    }

    #[test]
    fn test_one_or_many_scalar_broadcasts() {
        let flags: OneOrMany<bool> = true.into();
        assert_eq!(flags.broadcast(3, "remove_keyword").unwrap(), vec![true; 3]);
    }

    #[test]
    fn test_one_or_many_list_must_match_length() {
        let flags: OneOrMany<bool> = vec![true, false].into();
        let err = flags.broadcast(3, "remove_keyword").unwrap_err();
        assert!(matches!(err, CleanError::InvalidArgument(_)));
    }

    #[test]
    fn test_one_or_many_deserializes_both_shapes() {
        let one: OneOrMany<String> = serde_json::from_value(json!("#")).unwrap();
        assert_eq!(one.into_vec(), vec!["#".to_string()]);

        let many: OneOrMany<String> = serde_json::from_value(json!(["#", "@"])).unwrap();
        assert_eq!(many.len(), 2);
    }
}

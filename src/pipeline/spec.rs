//! Step descriptors and pipeline configuration.
//!
//! A pipeline is an ordered list of [`StepDescriptor`]s, each naming a
//! registered transformation plus its options. Descriptors are JSON-shaped
//! so pipelines can be stored in config files.
//!
//! # JSON shape
//!
//! ```json
//! [
//!   {"name": "remove_emoji", "attributes": {"replace": true}},
//!   {"name": "remove_urls"},
//!   {"name": "remove_symbols",
//!    "attributes": {"symbols": ["#", "@"], "remove_keyword": [true, true]}}
//! ]
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{CleanError, Result};

// ─── Step names ─────────────────────────────────────────────────────────────

/// The closed set of registered transformation steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepName {
    RemoveEmoji,
    RemoveUrls,
    RemoveHtml,
    RemoveSymbols,
    ReplaceCurlyQuotes,
    RemoveWhitespaceCurrency,
    FixWhitespace,
    ReplaceSubstring,
}

impl StepName {
    /// Every registered step.
    pub const ALL: [StepName; 8] = [
        Self::RemoveEmoji,
        Self::RemoveUrls,
        Self::RemoveHtml,
        Self::RemoveSymbols,
        Self::ReplaceCurlyQuotes,
        Self::RemoveWhitespaceCurrency,
        Self::FixWhitespace,
        Self::ReplaceSubstring,
    ];

    /// Returns the user-facing name used in descriptors and error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RemoveEmoji => "remove_emoji",
            Self::RemoveUrls => "remove_urls",
            Self::RemoveHtml => "remove_html",
            Self::RemoveSymbols => "remove_symbols",
            Self::ReplaceCurlyQuotes => "replace_curly_quotes",
            Self::RemoveWhitespaceCurrency => "remove_whitespace_currency",
            Self::FixWhitespace => "fix_whitespace",
            Self::ReplaceSubstring => "replace_substring",
        }
    }

    /// Look up a step by its exact name.
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|step| step.as_str() == name)
    }
}

impl std::fmt::Display for StepName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─── Step descriptor ────────────────────────────────────────────────────────

/// A named reference to a transformation step plus its options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepDescriptor {
    /// Registry name of the step (e.g., `"remove_urls"`).
    pub name: String,

    /// Named options passed to the step. Defaults to empty.
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub attributes: Map<String, Value>,
}

impl StepDescriptor {
    /// Descriptor with no attributes.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Map::new(),
        }
    }

    /// Add one attribute, builder style.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }
}

impl From<StepName> for StepDescriptor {
    fn from(name: StepName) -> Self {
        Self::new(name.as_str())
    }
}

// ─── Step configuration ─────────────────────────────────────────────────────

/// Caller-supplied pipeline configuration: one descriptor or an ordered
/// sequence of descriptors.
///
/// The sequence is immutable during a single execution; steps are applied
/// left to right exactly once each.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StepConfig {
    Single(StepDescriptor),
    Sequence(Vec<StepDescriptor>),
}

impl StepConfig {
    /// Normalize to a descriptor slice.
    pub fn steps(&self) -> &[StepDescriptor] {
        match self {
            Self::Single(descriptor) => std::slice::from_ref(descriptor),
            Self::Sequence(descriptors) => descriptors,
        }
    }

    /// Build from a dynamic JSON value.
    ///
    /// `null` means "use the default pipeline" and maps to `None`. An object
    /// is a single descriptor, an array is a sequence; any other shape fails
    /// with [`CleanError::InvalidConfig`].
    pub fn from_value(value: &Value) -> Result<Option<Self>> {
        fn descriptor(value: &Value) -> Result<StepDescriptor> {
            serde_json::from_value(value.clone())
                .map_err(|err| CleanError::InvalidConfig(err.to_string()))
        }

        match value {
            Value::Null => Ok(None),
            Value::Object(_) => Ok(Some(Self::Single(descriptor(value)?))),
            Value::Array(items) => {
                let descriptors = items.iter().map(descriptor).collect::<Result<Vec<_>>>()?;
                Ok(Some(Self::Sequence(descriptors)))
            }
            other => Err(CleanError::InvalidConfig(format!(
                "expected null, a step descriptor, or a list of step descriptors, got {other}"
            ))),
        }
    }
}

impl From<StepDescriptor> for StepConfig {
    fn from(descriptor: StepDescriptor) -> Self {
        Self::Single(descriptor)
    }
}

impl From<Vec<StepDescriptor>> for StepConfig {
    fn from(descriptors: Vec<StepDescriptor>) -> Self {
        Self::Sequence(descriptors)
    }
}

// ─── Default pipeline ───────────────────────────────────────────────────────

/// The fixed pipeline applied when the caller supplies no configuration.
///
/// Order matters: emoji are demojized before whitespace normalization so
/// their descriptions get spaced correctly, and `fix_whitespace` runs last
/// to clean up whatever the earlier steps left behind.
pub fn default_pipeline() -> Vec<StepDescriptor> {
    vec![
        StepDescriptor::new("remove_emoji").with_attribute("replace", true),
        StepDescriptor::new("remove_urls"),
        StepDescriptor::new("remove_html"),
        StepDescriptor::new("remove_symbols")
            .with_attribute("symbols", vec!["#", "@"])
            .with_attribute("remove_keyword", vec![true, true]),
        StepDescriptor::new("replace_curly_quotes"),
        StepDescriptor::new("remove_whitespace_currency"),
        StepDescriptor::new("fix_whitespace"),
    ]
}

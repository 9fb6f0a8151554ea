//! Options for the `spaced-comment` rule.
//!
//! Options are written as a positional list, the same shape every rule entry
//! in the config file uses:
//!
//! ```json
//! "spacedComment": ["always", { "exceptions": ["-", "="] }]
//! ```
//!
//! Both elements are optional. The list is validated eagerly when the config
//! is loaded; a malformed list is a configuration error and the rule never
//! runs.

use anyhow::{Context, Result, bail};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Whether comments must (`always`) or must not (`never`) start with whitespace.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Always,
    Never,
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::Always => write!(f, "always"),
            Mode::Never => write!(f, "never"),
        }
    }
}

/// Second element of the option list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct ExtraOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    exceptions: Option<Vec<String>>,
}

/// Validated, typed options for the `spaced-comment` rule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Value", into = "Value")]
pub struct SpacedCommentOptions {
    pub mode: Mode,
    /// Marker strings whose repetition exempts a comment in `always` mode.
    ///
    /// `None` means no exceptions were configured. `Some(vec![])` is kept
    /// distinct: the exception branch is still taken, it just never matches.
    pub exceptions: Option<Vec<String>>,
}

impl SpacedCommentOptions {
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            exceptions: None,
        }
    }

    pub fn with_exceptions<I, S>(mut self, exceptions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exceptions = Some(exceptions.into_iter().map(Into::into).collect());
        self
    }

    /// Parse and validate a positional option list: `[mode?, { exceptions? }?]`.
    pub fn from_value(value: &Value) -> Result<Self> {
        let Value::Array(items) = value else {
            bail!("expected a list like [\"always\", {{ \"exceptions\": [] }}], found {value}");
        };

        if items.len() > 2 {
            bail!(
                "expected at most 2 options ([mode, {{ exceptions }}]), found {}",
                items.len()
            );
        }

        let mode = match items.first() {
            Some(raw) => Mode::deserialize(raw)
                .with_context(|| format!("invalid mode {raw}, expected \"always\" or \"never\""))?,
            None => Mode::default(),
        };

        let extra = match items.get(1) {
            Some(raw) => ExtraOptions::deserialize(raw)
                .with_context(|| format!("invalid options object {raw}"))?,
            None => ExtraOptions::default(),
        };

        Ok(Self {
            mode,
            exceptions: extra.exceptions,
        })
    }

    /// Render back to the positional list form used in config files.
    pub fn to_value(&self) -> Value {
        let mut items = vec![Value::String(self.mode.to_string())];
        if let Some(exceptions) = &self.exceptions {
            items.push(serde_json::json!({ "exceptions": exceptions }));
        }
        Value::Array(items)
    }

    /// True when the `exceptions` key was given, even with an empty list.
    pub fn has_exceptions(&self) -> bool {
        self.exceptions.is_some()
    }
}

impl TryFrom<Value> for SpacedCommentOptions {
    type Error = anyhow::Error;

    fn try_from(value: Value) -> Result<Self> {
        Self::from_value(&value)
    }
}

impl From<SpacedCommentOptions> for Value {
    fn from(options: SpacedCommentOptions) -> Self {
        options.to_value()
    }
}

//! Exception matching for `spaced-comment`.
//!
//! A comment body is an "exception block" when it is made up entirely of one
//! configured marker repeated one or more times (`----`, `====`, `*-*-*-`).
//! Mixing two different markers in the same body does not count.

use anyhow::{Context, Result};
use regex::Regex;

/// Compiled predicate built once from the configured exceptions.
#[derive(Debug, Clone)]
pub struct ExceptionMatcher {
    /// `None` when there is nothing to match: every body is rejected.
    pattern: Option<Regex>,
}

impl ExceptionMatcher {
    /// Build a matcher from raw exception strings.
    ///
    /// Exceptions are matched literally. Empty strings are skipped since they
    /// cannot make up a non-empty body.
    pub fn new<S: AsRef<str>>(exceptions: &[S]) -> Result<Self> {
        let alternatives: Vec<String> = exceptions
            .iter()
            .map(|exception| exception.as_ref())
            .filter(|exception| !exception.is_empty())
            .map(|exception| format!("(?:{})+", regex::escape(exception)))
            .collect();

        if alternatives.is_empty() {
            return Ok(Self::reject_all());
        }

        let source = format!("^(?:{})$", alternatives.join("|"));
        let pattern = Regex::new(&source)
            .with_context(|| format!("Failed to compile exception pattern: {}", source))?;

        Ok(Self {
            pattern: Some(pattern),
        })
    }

    /// A matcher that accepts nothing.
    pub fn reject_all() -> Self {
        Self { pattern: None }
    }

    /// Whether `body` consists solely of repetitions of a single exception.
    pub fn is_match(&self, body: &str) -> bool {
        self.pattern
            .as_ref()
            .is_some_and(|pattern| pattern.is_match(body))
    }
}

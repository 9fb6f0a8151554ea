//! `spaced-comment` rule.
//!
//! Enforces consistent spacing right after the opening `//` or `/*` of a
//! comment.
//!
//! - `always` (default): the comment body must start with a space, a tab or a
//!   newline. Empty comments are fine. When exceptions are configured, a body
//!   made only of one repeated exception marker (e.g. `//-----`) is accepted
//!   too.
//! - `never`: the comment body must not start with a space or a tab. A leading
//!   newline is not flagged.
//!
//! ## Module Structure
//!
//! - `options`: Positional option list parsing and validation
//! - `matcher`: Exception block matching

mod matcher;
mod options;


use anyhow::Result;

pub use matcher::ExceptionMatcher;
pub use options::{Mode, SpacedCommentOptions};

use crate::core::{CommentKind, CommentNode, CommentRule, Diagnostic, RuleContext};

/// Why a comment failed the spacing check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpacingViolation {
    /// `always` without exceptions: no leading whitespace.
    MissingSpace,
    /// `always` with exceptions: no leading whitespace and not an exception block.
    MissingSpaceOrException,
    /// `never`: leading space or tab.
    UnexpectedSpace,
}

impl SpacingViolation {
    pub fn message(self, kind: CommentKind) -> String {
        let marker = kind.marker();
        match self {
            SpacingViolation::MissingSpace => {
                format!("Expected space or tab after {} in comment.", marker)
            }
            SpacingViolation::MissingSpaceOrException => format!(
                "Expected exception block, space or tab after {} in comment.",
                marker
            ),
            SpacingViolation::UnexpectedSpace => {
                format!("Unexpected space or tab after {} in comment.", marker)
            }
        }
    }
}

/// The compiled `spaced-comment` rule.
///
/// Built once per run from validated options. Holds no mutable state, so a
/// single instance is shared by every file checked in parallel.
#[derive(Debug, Clone)]
pub struct SpacedComment {
    mode: Mode,
    /// Present only when exceptions were configured.
    exceptions: Option<ExceptionMatcher>,
}

impl SpacedComment {
    pub const NAME: &'static str = "spaced-comment";

    pub fn new(options: &SpacedCommentOptions) -> Result<Self> {
        let exceptions = match &options.exceptions {
            Some(list) => Some(ExceptionMatcher::new(list)?),
            None => None,
        };

        Ok(Self {
            mode: options.mode,
            exceptions,
        })
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Classify a single comment body.
    pub fn classify(&self, body: &str) -> Option<SpacingViolation> {
        match self.mode {
            Mode::Always => {
                if body.is_empty() || body.starts_with([' ', '\t', '\n']) {
                    return None;
                }
                match &self.exceptions {
                    Some(matcher) if matcher.is_match(body) => None,
                    Some(_) => Some(SpacingViolation::MissingSpaceOrException),
                    None => Some(SpacingViolation::MissingSpace),
                }
            }
            Mode::Never => body
                .starts_with([' ', '\t'])
                .then_some(SpacingViolation::UnexpectedSpace),
        }
    }

    /// Check one comment, returning a diagnostic if it violates the rule.
    pub fn check<'n>(&self, node: &'n CommentNode) -> Option<Diagnostic<'n>> {
        self.classify(&node.body)
            .map(|violation| Diagnostic::new(node, violation.message(node.kind)))
    }

    fn check_into<'n>(&self, node: &'n CommentNode, ctx: &mut RuleContext<'n>) {
        if let Some(diagnostic) = self.check(node) {
            ctx.report_diagnostic(diagnostic);
        }
    }
}

impl CommentRule for SpacedComment {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn on_line_comment<'n>(&self, node: &'n CommentNode, ctx: &mut RuleContext<'n>) {
        self.check_into(node, ctx);
    }

    fn on_block_comment<'n>(&self, node: &'n CommentNode, ctx: &mut RuleContext<'n>) {
        self.check_into(node, ctx);
    }
}

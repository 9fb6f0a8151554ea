//! Comment dispatch - routes comment nodes to rule callbacks.
//!
//! Rules never walk source files themselves. The host hands every comment of a
//! file to [`run_rule`], which calls the rule back once per node depending on
//! the comment kind. Rules report violations through the [`RuleContext`] they
//! are given; the context is the only reporting channel they have.

use crate::core::data::{CommentKind, CommentNode};

/// A violation reported by a rule, tied to the comment that caused it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic<'n> {
    pub node: &'n CommentNode,
    pub message: String,
}

impl<'n> Diagnostic<'n> {
    pub fn new(node: &'n CommentNode, message: impl Into<String>) -> Self {
        Self {
            node,
            message: message.into(),
        }
    }
}

/// Reporting channel passed to rule callbacks.
///
/// Diagnostics are kept in the order they were reported.
#[derive(Debug, Default)]
pub struct RuleContext<'n> {
    diagnostics: Vec<Diagnostic<'n>>,
}

impl<'n> RuleContext<'n> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn report(&mut self, node: &'n CommentNode, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::new(node, message));
    }

    pub fn report_diagnostic(&mut self, diagnostic: Diagnostic<'n>) {
        self.diagnostics.push(diagnostic);
    }

    pub fn diagnostics(&self) -> &[Diagnostic<'n>] {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic<'n>> {
        self.diagnostics
    }
}

/// A rule that inspects comment tokens.
///
/// Implementations must be shareable across threads: the host runs the same
/// rule instance over many files in parallel.
pub trait CommentRule: Send + Sync {
    /// Rule identifier, as used in configuration and reports.
    fn name(&self) -> &'static str;

    /// Called for every `// ...` comment.
    fn on_line_comment<'n>(&self, node: &'n CommentNode, ctx: &mut RuleContext<'n>);

    /// Called for every `/* ... */` comment.
    fn on_block_comment<'n>(&self, node: &'n CommentNode, ctx: &mut RuleContext<'n>);
}

/// Run a rule over the comments of one file and collect what it reports.
pub fn run_rule<'n, R>(rule: &R, comments: &'n [CommentNode]) -> Vec<Diagnostic<'n>>
where
    R: CommentRule + ?Sized,
{
    let mut ctx = RuleContext::new();
    for node in comments {
        match node.kind {
            CommentKind::Line => rule.on_line_comment(node, &mut ctx),
            CommentKind::Block => rule.on_block_comment(node, &mut ctx),
        }
    }
    ctx.into_diagnostics()
}

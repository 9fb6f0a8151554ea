//! Core analysis engine.
//!
//! Turns source files into comment nodes and runs comment rules over them.
//!
//! ## Module Structure
//!
//! - `context`: CheckContext (config + scanned files + compiled rule)
//! - `data`: Shared data types (CommentNode, SourceContext, ...)
//! - `dispatch`: Routes comment nodes to rule callbacks
//! - `file_scanner`: Source file discovery
//! - `parsers`: swc-based parsing and comment extraction

pub mod context;
pub mod data;
pub mod dispatch;
pub mod file_scanner;
pub mod parsers;

pub use context::CheckContext;
pub use data::{CommentKind, CommentNode, SourceContext, SourceLocation};
pub use dispatch::{CommentRule, Diagnostic, RuleContext, run_rule};

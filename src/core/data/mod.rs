//! Core data types shared by the parser, the dispatcher and the rules.
//!
//! ## Module Structure
//!
//! - `comment`: Comment tokens (CommentKind, CommentNode)
//! - `source`: Source code location types (SourceContext, SourceLocation)

pub mod comment;
pub mod source;

pub use comment::{CommentKind, CommentNode};
pub use source::{SourceContext, SourceLocation};

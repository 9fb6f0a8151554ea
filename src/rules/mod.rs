//! Comment rules.
//!
//! Rules are pure: they receive comment nodes through the `CommentRule`
//! callbacks and report through the `RuleContext` they are handed.
//!
//! ## Module Structure
//!
//! - `spaced_comment`: Whitespace after `//` and `/*`

pub mod spaced_comment;

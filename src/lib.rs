//! spaced-comment - comment spacing linter for JavaScript and TypeScript
//!
//! Checks that every `//` and `/* */` comment starts with whitespace (or,
//! in `never` mode, does not). Comments made only of a repeated exception
//! marker such as `//-----` can be allowed.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (commands, report, exit status)
//! - `config`: Configuration file loading and parsing
//! - `core`: Parsing, comment extraction and rule dispatch
//! - `issues`: Issue type definitions and reporting
//! - `rules`: Comment rules

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
pub mod rules;

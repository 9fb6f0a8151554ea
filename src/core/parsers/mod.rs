//! Source parsers.
//!
//! - `jsx`: JS/TS/JSX/TSX parsing with swc and comment extraction

pub mod jsx;

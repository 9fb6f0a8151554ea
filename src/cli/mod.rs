//! Command-line interface layer.
//!
//! ## Module Structure
//!
//! - `args`: clap argument definitions
//! - `commands`: Command handlers (`check`, `init`) and their results
//! - `exit_status`: Process exit status
//! - `report`: Cargo-style output
//! - `run`: Command dispatch

pub mod args;
pub mod commands;
mod exit_status;
pub mod report;
mod run;

pub use args::{Arguments, Command};
pub use exit_status::ExitStatus;
pub use run::{run, run_cli};

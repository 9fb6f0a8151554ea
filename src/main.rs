use std::process::ExitCode;

use clap::Parser;
use spaced_comment::cli::{Arguments, ExitStatus};

fn main() -> ExitCode {
    let args = Arguments::parse();
    init_logging(args.verbose());

    match spaced_comment::cli::run_cli(args) {
        Ok(status) => status.into(),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitStatus::Error.into()
        }
    }
}

/// `RUST_LOG` wins over the defaults; `-v` turns on this crate's debug output.
fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "warn,spaced_comment=debug"
    } else {
        "warn"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

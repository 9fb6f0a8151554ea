use anyhow::{Result, bail};

use super::{
    args::{Arguments, Command},
    commands::{CommandResult, check::check, init::init},
    exit_status::ExitStatus,
    report,
};

/// Entry point for the CLI: run the command, print its report and map the
/// result to an exit status.
///
/// Prints help and succeeds when no command is given.
pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let verbose = args.verbose();

    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success);
    };

    let result = run(args)?;
    report::print(&result, verbose);

    Ok(result.exit_status())
}

/// Dispatch to the command handler without printing anything.
///
/// # Returns
/// - `Ok(CommandResult)` with issues and counts
/// - `Err` if the command fails (e.g., invalid config or rule options)
pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Check(cmd)) => check(cmd),
        Some(Command::Init) => init(),
        None => bail!("No command provided. Use --help to see available commands."),
    }
}

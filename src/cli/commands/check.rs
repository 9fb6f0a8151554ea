use anyhow::Result;

use super::super::args::CheckCommand;
use super::{CommandResult, CommandSummary, helper::finish};
use crate::core::CheckContext;

pub fn check(cmd: CheckCommand) -> Result<CommandResult> {
    let ctx = CheckContext::new(&cmd.args)?;
    log::debug!("Checking {} source file(s)", ctx.files.len());

    let issues = ctx.check_files();

    Ok(finish(CommandSummary::Check, issues, ctx.files.len()))
}

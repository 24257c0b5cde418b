use crate::cli::GlobalFlags;
use crate::cli::root_commands::GapArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `gw gap`.
pub fn handle(args: &GapArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let report = ctx.service.gap_analysis(&args.session)?;
    output(&report, flags.format)
}

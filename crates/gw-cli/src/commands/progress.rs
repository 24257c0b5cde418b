use crate::cli::GlobalFlags;
use crate::cli::root_commands::ProgressArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `gw progress`.
pub fn handle(args: &ProgressArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match args.content.as_deref() {
        Some(content_id) => output(
            &ctx.service.progress_record(&args.session, content_id)?,
            flags.format,
        ),
        None => output(&ctx.service.progress(&args.session)?, flags.format),
    }
}

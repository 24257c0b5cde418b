mod list;
mod start;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::SessionCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `gw session`.
pub fn handle(action: &SessionCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        SessionCommands::Start(args) => start::run(args, ctx, flags),
        SessionCommands::Get { id } => output(&ctx.service.get_session(id)?, flags.format),
        SessionCommands::List => list::run(ctx, flags),
        SessionCommands::Delete { id } => output(&ctx.service.delete_session(id)?, flags.format),
    }
}

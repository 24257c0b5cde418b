use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Standards(args) => commands::standards::handle(&args, ctx, flags),
        Commands::Session { action } => commands::session::handle(&action, ctx, flags),
        Commands::Assess { action } => commands::assess::handle(&action, ctx, flags),
        Commands::Gap(args) => commands::gap::handle(&args, ctx, flags),
        Commands::Path(args) => commands::path::handle(&args, ctx, flags),
        Commands::Content { action } => commands::content::handle(&action, ctx, flags),
        Commands::Complete(args) => commands::complete::handle(&args, ctx, flags),
        Commands::Progress(args) => commands::progress::handle(&args, ctx, flags),
    }
}

use gw_core::entities::UserProfile;
use gw_core::enums::RoleLevel;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::SessionStartArgs;
use crate::commands::shared::parse::parse_level;
use crate::context::AppContext;
use crate::output::output;

pub fn run(args: &SessionStartArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let profile = UserProfile {
        name: args.name.clone(),
        email: args.email.clone(),
        current_level: parse_level::<RoleLevel>(&args.current_level, "current level")?,
        target_level: parse_level::<RoleLevel>(&args.target_level, "target level")?,
        years_of_experience: args.years,
        primary_technologies: args.tech.clone(),
        additional_info: args.info.clone(),
    };
    let started = ctx.service.start_session(profile)?;
    output(&started, flags.format)
}

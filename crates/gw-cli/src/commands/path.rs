use anyhow::bail;
use gw_core::entities::SkillRating;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::PathArgs;
use crate::commands::shared::input::read_json_file;
use crate::context::AppContext;
use crate::output::output;

/// Handle `gw path`.
pub fn handle(args: &PathArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let role = args.role.as_deref();
    let plan = match (&args.session, &args.ratings) {
        (Some(session), None) => ctx.service.learning_plan_for_session(session, role)?,
        (None, Some(file)) => {
            let ratings: Vec<SkillRating> = read_json_file(file)?;
            ctx.service.learning_plan(role, &ratings)?
        }
        _ => bail!("pass either a session id or --ratings"),
    };
    output(&plan, flags.format)
}

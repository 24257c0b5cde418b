use gw_core::enums::RoleLevel;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::StandardsArgs;
use crate::commands::shared::parse::parse_level;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct MatrixRow<'a> {
    skill: &'a str,
    junior: String,
    senior: String,
    team_lead: String,
}

#[derive(Debug, Serialize)]
struct RoleRow<'a> {
    skill: &'a str,
    role: RoleLevel,
    required: String,
}

/// Handle `gw standards`.
pub fn handle(args: &StandardsArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let standard = ctx.service.standard();

    if let Some(raw) = args.level.as_deref() {
        let role: RoleLevel = parse_level(raw, "level")?;
        let rows: Vec<RoleRow<'_>> = standard
            .skills()
            .map(|skill| RoleRow {
                skill,
                role,
                required: standard.required(skill, role).to_string(),
            })
            .collect();
        return output(&rows, flags.format);
    }

    let rows: Vec<MatrixRow<'_>> = standard
        .skills()
        .map(|skill| MatrixRow {
            skill,
            junior: standard.required(skill, RoleLevel::Junior).to_string(),
            senior: standard.required(skill, RoleLevel::Senior).to_string(),
            team_lead: standard.required(skill, RoleLevel::TeamLead).to_string(),
        })
        .collect();
    output(&rows, flags.format)
}

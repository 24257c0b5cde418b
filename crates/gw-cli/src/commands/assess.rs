use gw_core::entities::SelfAssessmentAnswer;
use gw_engine::upstream::parse_assessment;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AssessCommands;
use crate::commands::shared::input::{read_json_file, read_text};
use crate::context::AppContext;
use crate::output::output;

/// Handle `gw assess`.
pub fn handle(action: &AssessCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        AssessCommands::Test { session } => {
            output(&ctx.service.assessment_test(session)?, flags.format)
        }
        AssessCommands::Ai { session, file } => {
            let assessment = parse_assessment(&read_text(file)?);
            let updated = ctx.service.record_ai_assessment(session, assessment)?;
            output(&updated, flags.format)
        }
        AssessCommands::Submit { session, file } => {
            let answers: Vec<SelfAssessmentAnswer> = read_json_file(file)?;
            let report = ctx.service.submit_self_assessment(session, &answers)?;
            output(&report, flags.format)
        }
    }
}

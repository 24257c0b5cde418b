use gw_core::entities::{CompletionRequest, QuizAnswer};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::CompleteArgs;
use crate::commands::shared::input::read_json_file;
use crate::context::AppContext;
use crate::output::output;

/// Handle `gw complete`.
pub fn handle(args: &CompleteArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut request = CompletionRequest::new(&args.content_id);
    if let Some(file) = &args.answers {
        request = request.with_answers(read_json_file::<Vec<QuizAnswer>>(file)?);
    }
    request.marked_as_read = !args.unread;

    let result = ctx.service.complete_content(&args.session, &request)?;
    output(&result, flags.format)
}

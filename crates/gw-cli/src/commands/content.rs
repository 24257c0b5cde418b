use gw_core::entities::ContentKey;
use gw_core::enums::ContentType;
use gw_engine::upstream::{Upstream, parse_content};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::{ContentCommands, ContentPutArgs};
use crate::commands::shared::input::read_text;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

/// Handle `gw content`.
pub fn handle(action: &ContentCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        ContentCommands::Put(args) => put(args, ctx, flags),
        ContentCommands::Get {
            session,
            content_id,
        } => output(&ctx.service.get_content(session, content_id)?, flags.format),
    }
}

fn put(args: &ContentPutArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let content_type: ContentType = parse_enum(&args.content_type, "type")?;
    let key = ContentKey {
        content_type,
        skill: args.skill.clone(),
        milestone_number: args.milestone,
    };
    let body = match &args.file {
        Some(file) => parse_content(content_type, &read_text(file)?),
        None => Upstream::fallback("no content supplied"),
    };
    let item = ctx.service.cache_content(&args.session, &key, body)?;
    output(&item, flags.format)
}

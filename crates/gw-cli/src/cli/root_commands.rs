use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::cli::subcommands::{AssessCommands, ContentCommands, SessionCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Show the configured skill standard.
    Standards(StandardsArgs),
    /// Assessment sessions.
    Session {
        #[command(subcommand)]
        action: SessionCommands,
    },
    /// Self-assessment test, AI assessment, and answer submission.
    Assess {
        #[command(subcommand)]
        action: AssessCommands,
    },
    /// Recompute the gap report for a session.
    Gap(GapArgs),
    /// Generate a learning plan.
    Path(PathArgs),
    /// Cached learning content.
    Content {
        #[command(subcommand)]
        action: ContentCommands,
    },
    /// Record completion of cached content and award XP.
    Complete(CompleteArgs),
    /// Show a session's XP ledger.
    Progress(ProgressArgs),
}

#[derive(Clone, Debug, Args)]
pub struct StandardsArgs {
    /// Only show requirements for this role level (junior, senior, team-lead).
    #[arg(long)]
    pub level: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct GapArgs {
    pub session: String,
}

#[derive(Clone, Debug, Args)]
pub struct PathArgs {
    /// Session whose gap report drives the plan.
    #[arg(required_unless_present = "ratings", conflicts_with = "ratings")]
    pub session: Option<String>,

    /// JSON file with `[{"skill": ..., "current_level": ...}]` instead of a session.
    #[arg(long)]
    pub ratings: Option<PathBuf>,

    /// Role label shown on the plan (defaults to general.default_role).
    #[arg(long)]
    pub role: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct CompleteArgs {
    pub session: String,
    pub content_id: String,

    /// JSON file with quiz answers: `[{"question_id": ..., "answer": ...}]`.
    #[arg(long)]
    pub answers: Option<PathBuf>,

    /// Submit a lesson as not read (no XP).
    #[arg(long)]
    pub unread: bool,
}

#[derive(Clone, Debug, Args)]
pub struct ProgressArgs {
    pub session: String,

    /// Show only the record for this content id.
    #[arg(long)]
    pub content: Option<String>,
}

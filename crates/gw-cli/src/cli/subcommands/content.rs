use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Content cache commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ContentCommands {
    /// Cache collaborator output for a milestone.
    Put(ContentPutArgs),
    /// Show a cached item.
    Get { session: String, content_id: String },
}

#[derive(Clone, Debug, Args)]
pub struct ContentPutArgs {
    pub session: String,

    /// lesson, quiz, coding-challenge, flashcards, summary
    #[arg(long = "type")]
    pub content_type: String,

    #[arg(long)]
    pub skill: String,

    #[arg(long)]
    pub milestone: u32,

    /// Raw collaborator output. Without it the canned fallback body is cached.
    #[arg(long)]
    pub file: Option<PathBuf>,
}

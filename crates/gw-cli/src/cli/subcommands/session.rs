use clap::{Args, Subcommand};

/// Session lifecycle commands.
#[derive(Clone, Debug, Subcommand)]
pub enum SessionCommands {
    /// Start a new assessment session.
    Start(SessionStartArgs),
    /// Show a session with everything recorded for it.
    Get { id: String },
    /// List sessions, newest first.
    List,
    /// Delete a session with its content and progress.
    Delete { id: String },
}

#[derive(Clone, Debug, Args)]
pub struct SessionStartArgs {
    #[arg(long)]
    pub name: String,

    /// Role level being assessed against (junior, senior, team-lead).
    #[arg(long)]
    pub target_level: String,

    #[arg(long, default_value = "junior")]
    pub current_level: String,

    #[arg(long)]
    pub email: Option<String>,

    /// Years of professional experience.
    #[arg(long)]
    pub years: Option<f64>,

    /// Primary technology (repeatable).
    #[arg(long)]
    pub tech: Vec<String>,

    /// Free-form notes about the person.
    #[arg(long)]
    pub info: Option<String>,
}

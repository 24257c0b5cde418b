use std::path::PathBuf;

use clap::Subcommand;

/// Assessment commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AssessCommands {
    /// Print the self-assessment test for a session.
    Test { session: String },
    /// Record the conversational AI assessment from a raw output file.
    ///
    /// Unparsable output is recorded as a fallback and analysed as empty.
    Ai {
        session: String,
        #[arg(long)]
        file: PathBuf,
    },
    /// Submit self-assessment answers and print the gap report.
    Submit {
        session: String,
        /// JSON file with `[{"question_id", "skill", "answer", "confidence"}]`.
        #[arg(long)]
        file: PathBuf,
    },
}

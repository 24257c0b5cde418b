mod assess;
mod content;
mod session;

pub use assess::AssessCommands;
pub use content::{ContentCommands, ContentPutArgs};
pub use session::{SessionCommands, SessionStartArgs};

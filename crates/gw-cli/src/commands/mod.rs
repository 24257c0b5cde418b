pub mod assess;
pub mod complete;
pub mod content;
pub mod dispatch;
pub mod gap;
pub mod path;
pub mod progress;
pub mod session;
pub mod shared;
pub mod standards;

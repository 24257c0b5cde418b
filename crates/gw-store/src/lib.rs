//! # gw-store
//!
//! Session storage and the service layer for Gapwise.
//!
//! - [`SessionStore`]: the injected store abstraction, with [`MemoryStore`]
//!   and [`FileStore`] implementations
//! - [`TrailWriter`]: append-only JSONL record of every mutation
//! - [`GapwiseService`]: runs the `gw-engine` pipeline over a store

pub mod error;
pub mod file;
pub mod memory;
pub mod record;
pub mod repos;
pub mod service;
pub mod store;
pub mod trail;

pub use error::StoreError;
pub use file::FileStore;
pub use memory::MemoryStore;
pub use record::SessionRecord;
pub use service::{GapwiseService, ServiceOptions};
pub use store::SessionStore;
pub use trail::TrailWriter;

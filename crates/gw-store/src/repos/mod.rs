//! Service operations, one module per pipeline stage.
//!
//! Each module adds methods to `GapwiseService` via `impl GapwiseService` blocks.

pub mod assessment;
pub mod content;
pub mod ledger;
pub mod path;
pub mod session;

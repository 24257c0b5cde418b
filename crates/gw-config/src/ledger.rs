//! Completion ledger configuration.

use gw_core::enums::AwardPolicy;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LedgerConfig {
    /// Whether re-completing a content id awards XP again.
    #[serde(default)]
    pub award_policy: AwardPolicy,
}

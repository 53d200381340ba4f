use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsResponse {
    pub total_alumni: u64,
    pub upcoming_events: u64,
    pub recent_donations: u64,
}

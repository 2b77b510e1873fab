//! Commands and results for the staged-trip flow.

use serde::{Deserialize, Serialize};

use crate::domain::models::Trip;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitStagedCommand {
    pub user_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitStagedResult {
    pub trip: Trip,
}

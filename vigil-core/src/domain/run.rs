//! Run domain type

use serde::{Deserialize, Serialize};

use crate::domain::status::{Conclusion, Status};

/// One execution instance of a multi-job remote workflow
///
/// Fetched fresh on every poll cycle; replaced wholesale, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Run {
    pub id: u64,
    pub name: String,
    pub status: Status,
    pub conclusion: Option<Conclusion>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl Run {
    /// Whether the run has reached a state from which it will not transition
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }
}

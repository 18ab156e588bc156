//! Status and conclusion enums
//!
//! Runs, jobs, and steps all report the same status/conclusion pair, so the
//! enums live here rather than on any one entity.

use serde::{Deserialize, Serialize};

/// Execution status of a run, job, or step
///
/// `Completed` is the only terminal status; everything else means the work
/// may still transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Queued,
    InProgress,
    Completed,
}

impl Status {
    /// Whether no further status transition can occur
    pub fn is_terminal(&self) -> bool {
        matches!(self, Status::Completed)
    }
}

/// Outcome recorded once a run, job, or step reaches terminal status
///
/// Meaningless while the status is non-terminal; the service may omit it or
/// report a stale value, and readers ignore it until `Status::is_terminal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Conclusion {
    Success,
    Failure,
    Cancelled,
    Neutral,
    Skipped,
    TimedOut,
    ActionRequired,
    Stale,
    Unknown,
}

//! Job and step domain types

use serde::{Deserialize, Serialize};

use crate::domain::status::{Conclusion, Status};

/// One unit of work within a run, composed of ordered steps
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    pub id: u64,
    pub run_id: u64,
    pub name: String,
    pub status: Status,
    pub conclusion: Option<Conclusion>,
    #[serde(default)]
    pub steps: Vec<Step>,
}

/// One step within a job
///
/// `number` is the step's position in the job and only matters for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Step {
    pub name: String,
    pub status: Status,
    pub conclusion: Option<Conclusion>,
    pub number: u32,
}

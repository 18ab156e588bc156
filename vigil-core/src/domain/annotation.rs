//! Annotation domain types

use serde::{Deserialize, Serialize};

/// Diagnostic message attached to a job
///
/// The watcher aggregates annotations across all jobs of a run snapshot into
/// one ordered sequence; whatever the service reports for a cycle is rendered
/// as-is, with no deduplication.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Annotation {
    pub level: AnnotationLevel,
    pub message: String,
    pub path: Option<String>,
    pub start_line: Option<u32>,
}

/// Severity of an annotation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnnotationLevel {
    Notice,
    Warning,
    Failure,
}

//! Run selector
//!
//! When the user gives no run ID, offers a single choice among the runs that
//! have not yet finished. Pure delegation: the service supplies candidates,
//! the prompter obtains the choice, and an empty or cancelled selection is an
//! error rather than a retry.

use colored::Colorize;
use inquire::Select;
use thiserror::Error;
use vigil_client::{ClientError, RunService};
use vigil_core::domain::run::Run;

/// Errors that can occur while selecting a run to watch
#[derive(Debug, Error)]
pub enum SelectError {
    /// Every candidate run had already finished
    #[error("found no in progress runs to watch")]
    NoInProgressRuns,

    /// The prompt failed or was cancelled
    #[error("prompt failed: {0}")]
    Prompt(String),

    /// The service could not supply candidates
    #[error(transparent)]
    Service(#[from] ClientError),
}

/// Obtains a single choice among candidate runs
pub trait Prompter {
    /// Present the candidates and return the chosen run's ID
    fn choose_run(&self, candidates: &[Run]) -> Result<u64, SelectError>;
}

/// Interactive prompter backed by an `inquire` select widget
pub struct InquirePrompter;

impl Prompter for InquirePrompter {
    fn choose_run(&self, candidates: &[Run]) -> Result<u64, SelectError> {
        let labels: Vec<String> = candidates.iter().map(run_label).collect();
        let choice = Select::new("Select a run to watch", labels)
            .raw_prompt()
            .map_err(|e| SelectError::Prompt(e.to_string()))?;

        Ok(candidates[choice.index].id)
    }
}

/// Pick an in-progress run to watch
///
/// Fetches up to `limit` recent runs, keeps the ones not yet in a terminal
/// status, and hands them to the prompter for a single choice.
///
/// # Errors
/// * `NoInProgressRuns` if every recent run has finished
/// * `Prompt` if the choice was cancelled or the widget failed
/// * `Service` if the candidate fetch failed
pub async fn select_run<S, P>(service: &S, prompter: &P, limit: usize) -> Result<u64, SelectError>
where
    S: RunService,
    P: Prompter,
{
    let runs = service.list_runs(limit).await?;

    let candidates: Vec<Run> = runs.into_iter().filter(|r| !r.is_terminal()).collect();
    if candidates.is_empty() {
        return Err(SelectError::NoInProgressRuns);
    }

    prompter.choose_run(&candidates)
}

/// One line describing a candidate run in the selection list
fn run_label(run: &Run) -> String {
    format!("{} {}", run.name, format!("({})", run.id).dimmed())
}

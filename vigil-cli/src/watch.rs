//! Watch loop
//!
//! The core of the tool: resolve a run, then fetch-and-redraw on a fixed
//! cadence until the run reaches a terminal status, and translate its
//! conclusion into a process outcome.
//!
//! Every cycle re-fetches the run itself by ID, not just its jobs, so a
//! status flip to terminal is observed within one interval even when
//! job-level data lags. No fetch is retried; the first collaborator error
//! ends the loop.

use std::io::Write;
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::debug;
use vigil_client::RunService;
use vigil_core::domain::annotation::Annotation;
use vigil_core::domain::run::Run;
use vigil_core::domain::status::Conclusion;

use crate::cancel::CancelToken;
use crate::screen::{self, Frame};
use crate::selector::{self, Prompter};

/// Options for one watch invocation
pub struct WatchOptions {
    /// Run to watch; `None` triggers interactive selection
    pub run_id: Option<u64>,
    /// Refresh cadence; strictly positive
    pub interval: Duration,
    /// Translate a non-success conclusion into a silent failure outcome
    pub exit_status: bool,
    /// Cap on how many candidates the selector offers
    pub limit: usize,
    /// Injected clock, so tests can pin the age computation
    pub now: fn() -> chrono::DateTime<chrono::Utc>,
    pub supports_cursor_addressing: bool,
}

/// How a completed watch translates into a process exit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Exit zero
    Success,
    /// Exit non-zero without printing anything; the last frame already
    /// explains the failure
    SilentFailure,
    /// Cancellation ended the loop before the run finished
    Interrupted,
}

/// Watch a run until it completes
///
/// Resolves the run (directly or via the selector), short-circuits if it has
/// already finished, and otherwise redraws the dashboard every interval until
/// the status turns terminal.
///
/// # Errors
/// Any selection or fetch failure aborts the loop immediately, wrapped with
/// the phase that failed. Nothing is retried.
pub async fn run_watch<S, P, W>(
    service: &S,
    prompter: &P,
    out: &mut W,
    opts: &WatchOptions,
    cancel: &CancelToken,
) -> Result<Outcome>
where
    S: RunService,
    P: Prompter,
    W: Write,
{
    let run_id = match opts.run_id {
        Some(id) => id,
        None => selector::select_run(service, prompter, opts.limit)
            .await
            .context("failed to select a run")?,
    };

    let mut run = service
        .get_run(run_id)
        .await
        .context("failed to get run")?;

    // Work that already finished gets no dashboard at all
    if run.is_terminal() {
        return Ok(outcome_for(&run, opts));
    }

    // Looked up once; a run without a pull request just has no suffix
    let pr_number = service
        .pull_request_for_run(run.id)
        .await
        .ok()
        .flatten();

    write!(out, "\x1b[2J")?;

    while !run.is_terminal() {
        run = match render_cycle(service, out, &run, pr_number, opts, cancel).await? {
            Some(fresh) => fresh,
            None => return Ok(Outcome::Interrupted),
        };

        if cancel.sleep(opts.interval).await {
            return Ok(Outcome::Interrupted);
        }
    }

    Ok(outcome_for(&run, opts))
}

/// Perform one fetch-and-redraw cycle, returning the fresh run snapshot
///
/// The cancel token is checked before each fetch phase; a cancelled cycle
/// stops fetching, draws nothing, and returns `None`.
async fn render_cycle<S, W>(
    service: &S,
    out: &mut W,
    run: &Run,
    pr_number: Option<u64>,
    opts: &WatchOptions,
    cancel: &CancelToken,
) -> Result<Option<Run>>
where
    S: RunService,
    W: Write,
{
    if cancel.is_cancelled() {
        return Ok(None);
    }
    let run = service
        .get_run(run.id)
        .await
        .context("failed to get run")?;
    let age = (opts.now)() - run.created_at;

    if cancel.is_cancelled() {
        return Ok(None);
    }
    let jobs = service
        .list_jobs(run.id)
        .await
        .context("failed to get jobs")?;

    // Aggregated in job order; the first failure suppresses the whole frame
    // rather than rendering a partial annotation list
    let mut annotations: Vec<Annotation> = Vec::new();
    for job in &jobs {
        if cancel.is_cancelled() {
            return Ok(None);
        }
        let mut batch = service
            .list_annotations(job.id)
            .await
            .context("failed to get annotations")?;
        annotations.append(&mut batch);
    }

    debug!(run_id = run.id, jobs = jobs.len(), "drawing frame");

    screen::render(
        out,
        &Frame {
            run: &run,
            jobs: &jobs,
            annotations: &annotations,
            age,
            interval: opts.interval,
            pr_number,
            supports_cursor_addressing: opts.supports_cursor_addressing,
        },
    )?;

    Ok(Some(run))
}

/// Translate a terminal run into a process outcome
fn outcome_for(run: &Run, opts: &WatchOptions) -> Outcome {
    if opts.exit_status && run.conclusion != Some(Conclusion::Success) {
        Outcome::SilentFailure
    } else {
        Outcome::Success
    }
}

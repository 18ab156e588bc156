//! Run service contract
//!
//! The watcher's poll loop is written against this trait so the HTTP client
//! can be swapped for a scripted double in tests.

use async_trait::async_trait;
use vigil_core::domain::annotation::Annotation;
use vigil_core::domain::job::Job;
use vigil_core::domain::run::Run;

use crate::ServiceClient;
use crate::error::Result;

/// Everything the watcher needs from the run service
#[async_trait]
pub trait RunService: Send + Sync {
    /// Fetch the current snapshot of a run by ID
    async fn get_run(&self, id: u64) -> Result<Run>;

    /// Fetch all jobs for a run
    async fn list_jobs(&self, run_id: u64) -> Result<Vec<Job>>;

    /// Fetch the annotations a job has produced
    async fn list_annotations(&self, job_id: u64) -> Result<Vec<Annotation>>;

    /// Fetch the most recent runs, newest first
    async fn list_runs(&self, limit: usize) -> Result<Vec<Run>>;

    /// Look up the pull request associated with a run, if any
    async fn pull_request_for_run(&self, run_id: u64) -> Result<Option<u64>>;
}

#[async_trait]
impl RunService for ServiceClient {
    async fn get_run(&self, id: u64) -> Result<Run> {
        ServiceClient::get_run(self, id).await
    }

    async fn list_jobs(&self, run_id: u64) -> Result<Vec<Job>> {
        ServiceClient::list_jobs(self, run_id).await
    }

    async fn list_annotations(&self, job_id: u64) -> Result<Vec<Annotation>> {
        ServiceClient::list_annotations(self, job_id).await
    }

    async fn list_runs(&self, limit: usize) -> Result<Vec<Run>> {
        ServiceClient::list_runs(self, limit).await
    }

    async fn pull_request_for_run(&self, run_id: u64) -> Result<Option<u64>> {
        ServiceClient::pull_request_for_run(self, run_id).await
    }
}

//! Run-related API endpoints

use serde::Deserialize;
use tracing::debug;
use vigil_core::domain::run::Run;

use crate::ServiceClient;
use crate::error::Result;

/// Pull-request association reported by the service
#[derive(Debug, Deserialize)]
struct PullRequestRef {
    number: u64,
}

impl ServiceClient {
    /// Get a run by ID
    ///
    /// # Arguments
    /// * `id` - The run ID
    ///
    /// # Returns
    /// The current run snapshot
    pub async fn get_run(&self, id: u64) -> Result<Run> {
        let url = format!("{}/api/runs/{}", self.base_url, id);
        debug!(run_id = id, "fetching run");
        let response = self.client.get(&url).send().await?;

        self.handle_response(response).await
    }

    /// List the most recent runs, newest first
    ///
    /// # Arguments
    /// * `limit` - Maximum number of runs to return
    pub async fn list_runs(&self, limit: usize) -> Result<Vec<Run>> {
        let url = format!("{}/api/runs?limit={}", self.base_url, limit);
        let response = self.client.get(&url).send().await?;

        self.handle_response(response).await
    }

    /// Look up the pull request associated with a run, if any
    ///
    /// A run without an associated pull request is not an error; the service
    /// reports it as 404 and this method maps that to `None`.
    pub async fn pull_request_for_run(&self, run_id: u64) -> Result<Option<u64>> {
        let url = format!("{}/api/runs/{}/pull-request", self.base_url, run_id);
        let response = self.client.get(&url).send().await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let pr: PullRequestRef = self.handle_response(response).await?;
        Ok(Some(pr.number))
    }
}

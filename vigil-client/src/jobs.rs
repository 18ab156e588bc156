//! Job and annotation API endpoints

use tracing::debug;
use vigil_core::domain::annotation::Annotation;
use vigil_core::domain::job::Job;

use crate::ServiceClient;
use crate::error::Result;

impl ServiceClient {
    /// List all jobs for a run
    ///
    /// # Arguments
    /// * `run_id` - The run ID
    ///
    /// # Returns
    /// The run's jobs in scheduling order, each with its steps
    pub async fn list_jobs(&self, run_id: u64) -> Result<Vec<Job>> {
        let url = format!("{}/api/runs/{}/jobs", self.base_url, run_id);
        debug!(run_id, "fetching jobs");
        let response = self.client.get(&url).send().await?;

        self.handle_response(response).await
    }

    /// List the annotations a job has produced
    ///
    /// # Arguments
    /// * `job_id` - The job ID
    pub async fn list_annotations(&self, job_id: u64) -> Result<Vec<Annotation>> {
        let url = format!("{}/api/jobs/{}/annotations", self.base_url, job_id);
        let response = self.client.get(&url).send().await?;

        self.handle_response(response).await
    }
}

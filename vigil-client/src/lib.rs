//! Vigil HTTP Client
//!
//! A simple, type-safe HTTP client for the run service API.
//!
//! The watcher consumes the [`RunService`] trait rather than the concrete
//! client, so tests can substitute a scripted implementation for the HTTP
//! transport.
//!
//! # Example
//!
//! ```no_run
//! use vigil_client::ServiceClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), vigil_client::ClientError> {
//!     let client = ServiceClient::new("http://localhost:8080");
//!
//!     let run = client.get_run(42).await?;
//!     println!("run {} is {:?}", run.id, run.status);
//!     Ok(())
//! }
//! ```

pub mod error;
mod jobs;
mod runs;
mod service;

// Re-export commonly used types
pub use error::{ClientError, Result};
pub use service::RunService;

use reqwest::Client;
use serde::de::DeserializeOwned;

/// HTTP client for the run service API
///
/// Provides methods for every endpoint the watcher touches:
/// - Run lookup and recent-run listing
/// - Job listing for a run
/// - Annotation listing for a job
/// - Pull-request association lookup
#[derive(Debug, Clone)]
pub struct ServiceClient {
    /// Base URL of the run service (e.g., "http://localhost:8080")
    base_url: String,
    /// HTTP client instance
    client: Client,
}

impl ServiceClient {
    /// Create a new service client
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the run service API
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    /// Create a new service client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the run service API
    /// * `client` - A configured reqwest Client
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    /// Get the base URL of the run service
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Handle an API response and deserialize JSON
    ///
    /// Checks the status code and returns an appropriate error if the request
    /// failed, or deserializes the response body if successful.
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
    }
}

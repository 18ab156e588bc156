//! Configuration module
//!
//! Handles CLI configuration including the run service URL.

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// URL of the run service
    pub service_url: String,
}

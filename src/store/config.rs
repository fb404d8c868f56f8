//! Connection settings for S3-compatible stores.
//!
//! The defaults target Backblaze B2's S3 endpoint with path-style addressing.
//! Credentials are always explicit: the ambient AWS credential chain is never
//! consulted.

use crate::error::{Error, Result};

/// Default S3 endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://s3.us-east-005.backblazeb2.com";
/// Default signing region.
pub const DEFAULT_REGION: &str = "us-east-005";

/// Configuration used to build an [`S3Store`](super::S3Store).
#[derive(Clone)]
pub struct S3Config {
    /// Access key ID.
    pub access_key: String,
    /// Secret access key.
    pub secret_key: String,
    /// Endpoint URL of the S3-compatible service.
    pub endpoint: String,
    /// Signing region.
    pub region: String,
}

impl std::fmt::Debug for S3Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("S3Config")
            .field("access_key", &self.access_key)
            .field("secret_key", &"<redacted>")
            .field("endpoint", &self.endpoint)
            .field("region", &self.region)
            .finish()
    }
}

impl S3Config {
    /// Create a config with the given credentials and the default endpoint.
    pub fn new(access_key: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            access_key: access_key.into(),
            secret_key: secret_key.into(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            region: DEFAULT_REGION.to_string(),
        }
    }

    /// Set the endpoint URL.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set the signing region.
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    /// Check the configuration before any network activity.
    pub fn validate(&self) -> Result<()> {
        if self.access_key.trim().is_empty() || self.secret_key.trim().is_empty() {
            return Err(Error::Config(
                "Missing access key or secret key".to_string(),
            ));
        }
        if self.endpoint.trim().is_empty() {
            return Err(Error::Config("Endpoint cannot be empty".to_string()));
        }
        if self.region.trim().is_empty() {
            return Err(Error::Config("Region cannot be empty".to_string()));
        }
        Ok(())
    }
}

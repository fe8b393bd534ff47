//! Client configuration
//!
//! Every client takes its configuration explicitly at construction; nothing
//! is read from global state after that point.

use std::time::Duration;

use crate::auth::{load_profile, normalize_region, AuthError, AuthProvider};
use crate::retry::RetryConfig;
use crate::waiter::WaiterConfig;

/// API version prefix of the Data Science service
pub const API_VERSION: &str = "/20190101";

/// Settings shared by every call a client makes
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub region: String,
    /// Overrides the endpoint derived from the region
    pub endpoint: Option<String>,
    /// Default retry policy; operations may override it per call
    pub retry: RetryConfig,
    /// Default polling settings for composite operations
    pub waiter: WaiterConfig,
    /// Per-request HTTP timeout
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(region: impl Into<String>) -> Self {
        Self {
            region: normalize_region(&region.into()),
            endpoint: None,
            retry: RetryConfig::default(),
            waiter: WaiterConfig::default(),
            timeout: Duration::from_secs(60),
        }
    }

    /// Read the region of a profile in an OCI config file
    ///
    /// # Arguments
    /// * `file_path` - Path to config file (defaults to ~/.oci/config)
    /// * `profile_name` - Profile name (defaults to "DEFAULT")
    pub fn from_file(
        file_path: Option<String>,
        profile_name: Option<String>,
    ) -> Result<Self, AuthError> {
        let (config, profile) = load_profile(file_path, profile_name)?;
        let region = config.get(&profile, "region").ok_or_else(|| {
            AuthError::ConfigError(format!("Missing 'region' in profile {}", profile))
        })?;
        Ok(Self::new(region))
    }

    /// Take the region from an authentication provider
    pub async fn from_auth(auth: &dyn AuthProvider) -> Result<Self, AuthError> {
        Ok(Self::new(auth.get_region().await?))
    }

    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    pub fn retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    pub fn waiter(mut self, waiter: WaiterConfig) -> Self {
        self.waiter = waiter;
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Endpoint requests are sent to, without the API version
    pub fn service_endpoint(&self) -> String {
        match &self.endpoint {
            Some(endpoint) => endpoint.trim_end_matches('/').to_string(),
            None => format!("https://datascience.{}.oci.oraclecloud.com", self.region),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_endpoint_uses_full_region_name() {
        let config = ClientConfig::new("phx");
        assert_eq!(config.region, "us-phoenix-1");
        assert_eq!(
            config.service_endpoint(),
            "https://datascience.us-phoenix-1.oci.oraclecloud.com"
        );
    }

    #[test]
    fn test_endpoint_override() {
        let config = ClientConfig::new("us-ashburn-1").endpoint("http://localhost:12000/");
        assert_eq!(config.service_endpoint(), "http://localhost:12000");
    }

    #[test]
    fn test_from_file_reads_profile_region() {
        let path = std::env::temp_dir().join(format!("oci_config_{}", std::process::id()));
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "[DEFAULT]\nregion=us-ashburn-1\n\n[DEV]\nregion=fra").unwrap();

        let path_str = path.to_string_lossy().to_string();
        let default = ClientConfig::from_file(Some(path_str.clone()), None).unwrap();
        let dev = ClientConfig::from_file(Some(path_str), Some("DEV".to_string())).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(default.region, "us-ashburn-1");
        assert_eq!(dev.region, "eu-frankfurt-1");
    }
}

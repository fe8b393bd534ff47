//! Client for the OCI Data Science service
//!
//! One method per REST operation. Each method checks its required
//! parameters and enum options, builds an [`ApiRequest`] and sends it
//! through the client's [`Transport`]; no request is sent when a check
//! fails.
//!
//! # Example
//!
//! ```no_run
//! use oci_datascience::auth::ConfigFileAuth;
//! use oci_datascience::data_science::{DataScienceClient, RequestOptions};
//! use oci_datascience::ClientConfig;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let auth = Arc::new(ConfigFileAuth::from_file(None, None)?);
//!     let config = ClientConfig::from_auth(auth.as_ref()).await?;
//!     let client = DataScienceClient::new(auth, config)?;
//!
//!     let job = client.get_job("ocid1.datasciencejob.oc1..example", &RequestOptions::default()).await?;
//!     println!("{:?}", job.data.lifecycle_state);
//!     Ok(())
//! }
//! ```

use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::auth::AuthProvider;
use crate::config::{ClientConfig, API_VERSION};
use crate::error::Result;
use crate::retry::{effective_retry_token, RetryConfig};
use crate::transport::{
    generate_request_id, ApiRequest, HttpTransport, Method, Response, Transport,
};

mod composite;
mod job_runs;
mod jobs;
mod models;
mod projects;
mod work_requests;

pub use composite::{DataScienceCompositeOperations, WorkRequestOutcome};
pub use job_runs::ListJobRunsOptions;
pub use jobs::{DeleteJobOptions, ListJobsOptions};
pub use models::ListModelsOptions;
pub use projects::ListProjectsOptions;
pub use work_requests::{ListWorkRequestsOptions, PageOptions};

/// Options of read operations
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// Caller-chosen id echoed by the service; one is generated when absent
    pub opc_request_id: Option<String>,
    /// Overrides the client's retry policy for this call
    pub retry_config: Option<RetryConfig>,
}

/// Options of create operations
#[derive(Debug, Clone, Default)]
pub struct CreateOptions {
    pub opc_request_id: Option<String>,
    /// Idempotency token; one is generated when absent
    pub opc_retry_token: Option<String>,
    pub retry_config: Option<RetryConfig>,
}

/// Options of update, delete and action operations
#[derive(Debug, Clone, Default)]
pub struct UpdateOptions {
    /// Only apply the change if the resource's etag still matches
    pub if_match: Option<String>,
    pub opc_request_id: Option<String>,
    pub retry_config: Option<RetryConfig>,
}

/// Client for the OCI Data Science service
///
/// Cheap to clone; clones share the transport.
#[derive(Clone)]
pub struct DataScienceClient {
    transport: Arc<dyn Transport>,
    config: ClientConfig,
}

impl DataScienceClient {
    /// Create a client that signs requests with `auth` and sends them over HTTPS
    pub fn new(auth: Arc<dyn AuthProvider>, config: ClientConfig) -> Result<Self> {
        let transport = HttpTransport::new(auth, config.service_endpoint(), config.timeout)?;
        Ok(Self::with_transport(Arc::new(transport), config))
    }

    /// Create a client for the region of `auth`, optionally at a custom endpoint
    pub async fn from_provider(
        auth: Arc<dyn AuthProvider>,
        service_endpoint: Option<String>,
    ) -> Result<Self> {
        let mut config = ClientConfig::from_auth(auth.as_ref()).await?;
        config.endpoint = service_endpoint;
        Self::new(auth, config)
    }

    /// Create a client over any transport
    pub fn with_transport(transport: Arc<dyn Transport>, config: ClientConfig) -> Self {
        Self { transport, config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn request(
        &self,
        operation: &'static str,
        method: Method,
        path: String,
        opc_request_id: Option<&str>,
        retry_config: Option<&RetryConfig>,
    ) -> ApiRequest {
        let request_id = opc_request_id
            .map(str::to_string)
            .unwrap_or_else(generate_request_id);
        ApiRequest::new(operation, method, format!("{}{}", API_VERSION, path))
            .header("accept", Some("application/json"))
            .header("content-type", Some("application/json"))
            .header("opc-request-id", Some(request_id))
            .retry(retry_config.cloned().unwrap_or_else(|| self.config.retry.clone()))
    }

    fn create_request(
        &self,
        operation: &'static str,
        path: String,
        options: &CreateOptions,
    ) -> ApiRequest {
        self.request(
            operation,
            Method::Post,
            path,
            options.opc_request_id.as_deref(),
            options.retry_config.as_ref(),
        )
        .header(
            "opc-retry-token",
            Some(effective_retry_token(options.opc_retry_token.as_deref())),
        )
    }

    fn update_request(
        &self,
        operation: &'static str,
        method: Method,
        path: String,
        options: &UpdateOptions,
    ) -> ApiRequest {
        self.request(
            operation,
            method,
            path,
            options.opc_request_id.as_deref(),
            options.retry_config.as_ref(),
        )
        .header("if-match", options.if_match.as_deref())
    }

    async fn send<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<Response<T>> {
        self.transport.call(request).await?.into_response()
    }

    async fn send_empty(&self, request: ApiRequest) -> Result<Response<()>> {
        Ok(self.transport.call(request).await?.into_empty())
    }
}

/// Percent-encode a value substituted into a path template
fn path_param(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_param_is_encoded() {
        assert_eq!(path_param("ocid1.job.oc1..a/b"), "ocid1.job.oc1..a%2Fb");
    }
}

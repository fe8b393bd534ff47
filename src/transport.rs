//! Wire-level request/response types and the transport seam
//!
//! Service operations describe a call as an [`ApiRequest`] and hand it to a
//! [`Transport`]. [`HttpTransport`] signs it with an [`AuthProvider`], sends
//! it with `reqwest` and applies the request's [`RetryConfig`]; tests swap in
//! their own implementation.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, instrument, warn};

use crate::auth::{encode_body, AuthProvider};
use crate::error::{Error, Result};
use crate::retry::RetryConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    /// Lowercase name, as used in the signing string
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "get",
            Method::Post => "post",
            Method::Put => "put",
            Method::Delete => "delete",
        }
    }
}

/// A fully described API call, before signing
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    /// Operation name, e.g. `get_job`
    pub operation: &'static str,
    pub method: Method,
    /// Path including the API version, path parameters already substituted
    pub path: String,
    pub query: Vec<(&'static str, String)>,
    pub headers: Vec<(&'static str, String)>,
    pub body: Option<Value>,
    pub retry: RetryConfig,
}

impl ApiRequest {
    pub fn new(operation: &'static str, method: Method, path: String) -> Self {
        Self {
            operation,
            method,
            path,
            query: Vec::new(),
            headers: Vec::new(),
            body: None,
            retry: RetryConfig::default(),
        }
    }

    /// Add a query parameter when a value is present
    pub fn query<V: ToString>(mut self, name: &'static str, value: Option<V>) -> Self {
        if let Some(value) = value {
            self.query.push((name, value.to_string()));
        }
        self
    }

    /// Add a header when a value is present
    pub fn header<V: Into<String>>(mut self, name: &'static str, value: Option<V>) -> Self {
        if let Some(value) = value {
            self.headers.push((name, value.into()));
        }
        self
    }

    pub fn body<T: Serialize>(mut self, body: &T) -> Result<Self> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }

    pub fn retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| *k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Path with the percent-encoded query string appended
    pub fn path_and_query(&self) -> String {
        if self.query.is_empty() {
            return self.path.clone();
        }
        let query = self
            .query
            .iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");
        format!("{}?{}", self.path, query)
    }
}

/// What came back from the service, body still untyped
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    /// Header names are lowercase
    pub headers: HashMap<String, String>,
    pub body: Option<Value>,
}

impl RawResponse {
    /// Deserialize the body into the operation's declared return type
    pub fn into_response<T: DeserializeOwned>(self) -> Result<Response<T>> {
        let body = self.body.unwrap_or(Value::Null);
        let data = serde_json::from_value(body).map_err(Error::from_wire)?;
        Ok(Response {
            status: self.status,
            headers: self.headers,
            data,
        })
    }

    /// For operations that return no body
    pub fn into_empty(self) -> Response<()> {
        Response {
            status: self.status,
            headers: self.headers,
            data: (),
        }
    }
}

/// A typed API response
#[derive(Debug, Clone, PartialEq)]
pub struct Response<T> {
    pub status: u16,
    pub headers: HashMap<String, String>,
    pub data: T,
}

impl<T> Response<T> {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    pub fn opc_request_id(&self) -> Option<&str> {
        self.header("opc-request-id")
    }

    /// Page token for the next page of a list call, if there is one
    pub fn opc_next_page(&self) -> Option<&str> {
        self.header("opc-next-page")
    }

    pub fn opc_work_request_id(&self) -> Option<&str> {
        self.header("opc-work-request-id")
    }

    pub fn etag(&self) -> Option<&str> {
        self.header("etag")
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Response<U> {
        Response {
            status: self.status,
            headers: self.headers,
            data: f(self.data),
        }
    }
}

impl<T: Serialize> Response<T> {
    /// Drop the static type, keeping the wire form of the body
    pub fn into_untyped(self) -> Response<Value> {
        let data = serde_json::to_value(&self.data).unwrap_or(Value::Null);
        Response {
            status: self.status,
            headers: self.headers,
            data,
        }
    }
}

/// Narrow interface to whatever signs and sends requests
#[async_trait]
pub trait Transport: Send + Sync {
    async fn call(&self, request: ApiRequest) -> Result<RawResponse>;
}

/// Service error body
#[derive(Debug, Deserialize)]
struct ServiceError {
    #[serde(default)]
    code: String,
    #[serde(default)]
    message: String,
}

pub(crate) fn generate_request_id() -> String {
    uuid::Uuid::new_v4().simple().to_string().to_uppercase()
}

fn create_date_header() -> String {
    Utc::now().format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

fn api_error(status: u16, body: &str, opc_request_id: Option<String>) -> Error {
    let parsed = serde_json::from_str::<ServiceError>(body).unwrap_or(ServiceError {
        code: String::new(),
        message: body.to_string(),
    });
    Error::Api {
        status,
        code: parsed.code,
        message: parsed.message,
        opc_request_id,
    }
}

fn header_value(value: &str) -> Result<HeaderValue> {
    value
        .parse()
        .map_err(|_| Error::Header(format!("Invalid header value: {}", value)))
}

/// Signing HTTP transport over `reqwest`
pub struct HttpTransport {
    auth: Arc<dyn AuthProvider>,
    client: reqwest::Client,
    endpoint: String,
}

impl HttpTransport {
    /// # Arguments
    /// * `auth` - Authentication provider used to sign every request
    /// * `endpoint` - Service endpoint without the API version, e.g.
    ///   `https://datascience.us-ashburn-1.oci.oraclecloud.com`
    /// * `timeout` - Per-request timeout
    pub fn new(
        auth: Arc<dyn AuthProvider>,
        endpoint: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            auth,
            client,
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
        })
    }

    /// Path, signed headers and body of a request, ready to send
    async fn prepare(&self, request: &ApiRequest) -> Result<(String, HeaderMap, Option<String>)> {
        let path = request.path_and_query();
        let mut headers = HeaderMap::new();

        headers.insert("date", header_value(&create_date_header())?);
        for (name, value) in &request.headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|_| Error::Header(format!("Invalid header name: {}", name)))?;
            headers.insert(name, header_value(value)?);
        }

        // POST and PUT always sign a body digest, of "" when there is no body
        let body = match (&request.body, request.method) {
            (Some(body), _) => Some(serde_json::to_string(body)?),
            (None, Method::Post | Method::Put) => Some(String::new()),
            (None, _) => None,
        };
        if let Some(body) = &body {
            headers.insert("content-length", header_value(&body.len().to_string())?);
            headers.insert("x-content-sha256", header_value(&encode_body(body))?);
        }

        self.auth
            .sign_request(&mut headers, request.method.as_str(), &path, &self.endpoint)
            .await?;

        Ok((path, headers, body))
    }

    async fn send_once(&self, request: &ApiRequest) -> Result<RawResponse> {
        let (path, headers, body) = self.prepare(request).await?;

        let url = format!("{}{}", self.endpoint, path);
        let mut builder = match request.method {
            Method::Get => self.client.get(&url),
            Method::Post => self.client.post(&url),
            Method::Put => self.client.put(&url),
            Method::Delete => self.client.delete(&url),
        };
        builder = builder.headers(headers);
        if let Some(body) = body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(k, v)| {
                v.to_str()
                    .ok()
                    .map(|v| (k.as_str().to_ascii_lowercase(), v.to_string()))
            })
            .collect::<HashMap<_, _>>();
        let text = response.text().await?;

        if !(200..300).contains(&status) {
            return Err(api_error(status, &text, headers.get("opc-request-id").cloned()));
        }

        let body = if text.trim().is_empty() {
            None
        } else {
            Some(serde_json::from_str(&text)?)
        };

        Ok(RawResponse {
            status,
            headers,
            body,
        })
    }
}

fn is_retryable(error: &Error, retry: &RetryConfig) -> bool {
    match error {
        Error::Api { status, .. } => retry.should_retry_status(*status),
        Error::Http(e) => e.is_connect() || e.is_timeout(),
        _ => false,
    }
}

/// Call `send` until it succeeds, fails with an error the policy does not
/// retry, or `retry.max_attempts` attempts have been made
async fn with_retries<F, Fut>(retry: &RetryConfig, mut send: F) -> Result<RawResponse>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<RawResponse>>,
{
    let mut attempt = 1;
    loop {
        match send().await {
            Ok(response) => {
                debug!(status = response.status, attempt, "Request completed");
                return Ok(response);
            }
            Err(e) if attempt < retry.max_attempts && is_retryable(&e, retry) => {
                let backoff = retry.backoff(attempt);
                warn!(attempt, error = %e, backoff_ms = backoff.as_millis() as u64, "Request failed, retrying");
                tokio::time::sleep(backoff).await;
                attempt += 1;
            }
            Err(e) => return Err(e),
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    #[instrument(skip(self, request), fields(operation = request.operation, method = request.method.as_str()))]
    async fn call(&self, request: ApiRequest) -> Result<RawResponse> {
        with_retries(&request.retry, || self.send_once(&request)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::AuthError;
    use serde_json::json;
    use std::cell::Cell;
    use std::sync::Mutex;

    /// Signer that records the method and header names it was asked to sign
    #[derive(Default)]
    struct RecordingAuth {
        signed: Mutex<Vec<(String, Vec<String>)>>,
    }

    #[async_trait]
    impl AuthProvider for RecordingAuth {
        async fn sign_request(
            &self,
            headers: &mut HeaderMap,
            method: &str,
            _path: &str,
            _host: &str,
        ) -> std::result::Result<(), AuthError> {
            let mut names: Vec<String> = headers.keys().map(|k| k.as_str().to_string()).collect();
            names.sort();
            self.signed.lock().unwrap().push((method.to_string(), names));
            Ok(())
        }

        async fn get_tenancy_id(&self) -> std::result::Result<String, AuthError> {
            Ok("ocid1.tenancy".to_string())
        }

        async fn get_region(&self) -> std::result::Result<String, AuthError> {
            Ok("us-ashburn-1".to_string())
        }
    }

    fn ok_response() -> RawResponse {
        RawResponse {
            status: 200,
            headers: HashMap::new(),
            body: None,
        }
    }

    #[tokio::test]
    async fn test_bodyless_post_signs_empty_body() {
        let auth = Arc::new(RecordingAuth::default());
        let transport =
            HttpTransport::new(auth.clone(), "https://h.example.com", Duration::from_secs(5))
                .unwrap();

        let post = ApiRequest::new(
            "activate_model",
            Method::Post,
            "/20190101/models/m/actions/activate".to_string(),
        );
        let (_, headers, body) = transport.prepare(&post).await.unwrap();
        assert_eq!(body.as_deref(), Some(""));
        assert_eq!(headers["content-length"], "0");
        assert_eq!(headers["x-content-sha256"], encode_body(""));

        let get = ApiRequest::new("get_model", Method::Get, "/20190101/models/m".to_string());
        let (_, headers, body) = transport.prepare(&get).await.unwrap();
        assert!(body.is_none());
        assert!(headers.get("x-content-sha256").is_none());

        let signed = auth.signed.lock().unwrap();
        assert_eq!(signed[0].0, "post");
        assert!(signed[0].1.contains(&"content-length".to_string()));
        assert!(signed[0].1.contains(&"x-content-sha256".to_string()));
        assert_eq!(signed[1].0, "get");
        assert!(!signed[1].1.contains(&"content-length".to_string()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_retryable_status_is_retried_up_to_max_attempts() {
        let attempts = Cell::new(0u32);
        let started = tokio::time::Instant::now();

        let err = with_retries(&RetryConfig::default().max_attempts(3), || {
            attempts.set(attempts.get() + 1);
            async { Err(api_error(503, "", None)) }
        })
        .await
        .unwrap_err();

        assert_eq!(attempts.get(), 3);
        assert_eq!(err.status(), Some(503));
        // backoff of 1s then 2s
        assert_eq!(started.elapsed(), Duration::from_secs(3));
    }

    #[tokio::test(start_paused = true)]
    async fn test_client_error_is_not_retried() {
        let attempts = Cell::new(0u32);

        let err = with_retries(&RetryConfig::default(), || {
            attempts.set(attempts.get() + 1);
            async { Err(api_error(400, "", None)) }
        })
        .await
        .unwrap_err();

        assert_eq!(attempts.get(), 1);
        assert_eq!(err.status(), Some(400));
    }

    #[tokio::test(start_paused = true)]
    async fn test_retry_stops_at_first_success() {
        let attempts = Cell::new(0u32);

        let response = with_retries(&RetryConfig::default(), || {
            attempts.set(attempts.get() + 1);
            let attempt = attempts.get();
            async move {
                if attempt == 1 {
                    Err(api_error(429, "", None))
                } else {
                    Ok(ok_response())
                }
            }
        })
        .await
        .unwrap();

        assert_eq!(response.status, 200);
        assert_eq!(attempts.get(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_single_attempt_policy_never_retries() {
        let attempts = Cell::new(0u32);

        let result = with_retries(&RetryConfig::none(), || {
            attempts.set(attempts.get() + 1);
            async { Err(api_error(503, "", None)) }
        })
        .await;

        assert!(result.is_err());
        assert_eq!(attempts.get(), 1);
    }

    #[test]
    fn test_query_skips_absent_values_and_encodes() {
        let request = ApiRequest::new("list_jobs", Method::Get, "/20190101/jobs".to_string())
            .query("compartmentId", Some("ocid1.compartment.oc1..x"))
            .query::<u32>("limit", None)
            .query("displayName", Some("my job&more"));

        assert_eq!(request.query_param("limit"), None);
        assert_eq!(
            request.path_and_query(),
            "/20190101/jobs?compartmentId=ocid1.compartment.oc1..x&displayName=my%20job%26more"
        );
    }

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let request = ApiRequest::new("get_job", Method::Get, "/x".to_string())
            .header("opc-request-id", Some("abc"))
            .header::<String>("if-match", None);
        assert_eq!(request.header_value("OPC-REQUEST-ID"), Some("abc"));
        assert_eq!(request.header_value("if-match"), None);
    }

    #[test]
    fn test_api_error_parses_service_body() {
        let err = api_error(
            404,
            r#"{"code":"NotAuthorizedOrNotFound","message":"not here"}"#,
            Some("req".to_string()),
        );
        match err {
            Error::Api {
                status,
                code,
                message,
                opc_request_id,
            } => {
                assert_eq!(status, 404);
                assert_eq!(code, "NotAuthorizedOrNotFound");
                assert_eq!(message, "not here");
                assert_eq!(opc_request_id.as_deref(), Some("req"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_api_error_keeps_unparseable_body() {
        let err = api_error(502, "Bad Gateway", None);
        assert!(matches!(err, Error::Api { ref message, .. } if message == "Bad Gateway"));
    }

    #[test]
    fn test_response_headers_and_untyped() {
        let raw = RawResponse {
            status: 200,
            headers: HashMap::from([
                ("opc-next-page".to_string(), "page-2".to_string()),
                ("etag".to_string(), "e1".to_string()),
            ]),
            body: Some(json!({"a": 1})),
        };
        let response: Response<Value> = raw.into_response().unwrap();
        assert_eq!(response.opc_next_page(), Some("page-2"));
        assert_eq!(response.header("ETag"), Some("e1"));
        assert_eq!(response.opc_work_request_id(), None);
        assert_eq!(response.clone().into_untyped().data, json!({"a": 1}));
    }

    #[test]
    fn test_retryable_classification() {
        let retry = RetryConfig::default();
        assert!(is_retryable(&api_error(503, "", None), &retry));
        assert!(!is_retryable(&api_error(400, "", None), &retry));
        assert!(!is_retryable(&Error::Header("x".to_string()), &retry));
    }
}

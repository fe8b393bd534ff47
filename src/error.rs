use crate::auth::AuthError;
use crate::transport::Response;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by the Data Science client
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Missing required parameter '{parameter}' when calling {operation}")]
    MissingParameter {
        operation: &'static str,
        parameter: &'static str,
    },
    #[error("Parameter '{parameter}' cannot be blank when calling {operation}")]
    BlankParameter {
        operation: &'static str,
        parameter: &'static str,
    },
    #[error("Invalid value '{value}' for '{parameter}', must be one of {}", allowed.join(", "))]
    InvalidEnumValue {
        parameter: &'static str,
        value: String,
        allowed: &'static [&'static str],
    },
    #[error("Conflicting keys in input: {0}")]
    ConflictingKeys(String),
    #[error("Authentication error: {0}")]
    Auth(#[from] AuthError),
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("API error (status {status}, code {code}): {message}")]
    Api {
        status: u16,
        code: String,
        message: String,
        opc_request_id: Option<String>,
    },
    #[error("Serialization error: {0}")]
    Wire(#[from] serde_json::Error),
    #[error("Header error: {0}")]
    Header(String),
    #[error("Incomplete response: {0}")]
    IncompleteResponse(String),
    #[error("Maximum wait time of {max_wait_seconds}s exceeded (last state: {last_state})")]
    MaxWaitExceeded {
        max_wait_seconds: u64,
        last_state: String,
    },
    #[error("Composite operation failed: {source}")]
    CompositeOperationFailed {
        /// Result of the initiating call, untyped
        partial: Box<Response<serde_json::Value>>,
        source: Box<Error>,
    },
}

impl Error {
    /// Classify a deserialization failure of a wire map.
    ///
    /// serde reports a field given under both its wire and idiomatic name as
    /// a duplicate field; that is an input conflict rather than a bad body.
    pub(crate) fn from_wire(err: serde_json::Error) -> Self {
        let message = err.to_string();
        if message.starts_with("duplicate field") {
            Error::ConflictingKeys(message)
        } else {
            Error::Wire(err)
        }
    }

    /// HTTP status of a service error, if this is one
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// True for client-side validation failures raised before any request
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::MissingParameter { .. }
                | Error::BlankParameter { .. }
                | Error::InvalidEnumValue { .. }
                | Error::ConflictingKeys(_)
        )
    }

    /// The initiating call's result carried by a composite failure
    pub fn partial_result(&self) -> Option<&Response<serde_json::Value>> {
        match self {
            Error::CompositeOperationFailed { partial, .. } => Some(partial),
            _ => None,
        }
    }
}

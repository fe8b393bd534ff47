#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use oci_datascience::error::{Error, Result};
use oci_datascience::transport::{ApiRequest, RawResponse, Transport};
use oci_datascience::{ClientConfig, DataScienceClient, RetryConfig};
use serde_json::Value;

#[derive(Debug, Clone)]
enum Reply {
    Ok(RawResponse),
    Fail { status: u16, code: String },
}

/// Transport that records every request and answers from per-operation
/// queues. The last reply of a queue repeats forever.
#[derive(Default)]
pub struct StubTransport {
    replies: Mutex<HashMap<String, VecDeque<Reply>>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl StubTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    fn push(&self, operation: &str, reply: Reply) {
        self.replies
            .lock()
            .unwrap()
            .entry(operation.to_string())
            .or_default()
            .push_back(reply);
    }

    pub fn reply(&self, operation: &str, status: u16, body: Value) {
        self.reply_with_headers(operation, status, &[], Some(body));
    }

    pub fn reply_with_headers(
        &self,
        operation: &str,
        status: u16,
        headers: &[(&str, &str)],
        body: Option<Value>,
    ) {
        let headers = headers
            .iter()
            .map(|(k, v)| (k.to_ascii_lowercase(), v.to_string()))
            .collect();
        self.push(
            operation,
            Reply::Ok(RawResponse {
                status,
                headers,
                body,
            }),
        );
    }

    pub fn fail(&self, operation: &str, status: u16, code: &str) {
        self.push(
            operation,
            Reply::Fail {
                status,
                code: code.to_string(),
            },
        );
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn calls(&self, operation: &str) -> usize {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.operation == operation)
            .count()
    }

    pub fn last(&self, operation: &str) -> ApiRequest {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .rev()
            .find(|r| r.operation == operation)
            .cloned()
            .unwrap_or_else(|| panic!("no {} request recorded", operation))
    }
}

#[async_trait]
impl Transport for StubTransport {
    async fn call(&self, request: ApiRequest) -> Result<RawResponse> {
        let operation = request.operation;
        self.requests.lock().unwrap().push(request);

        let reply = {
            let mut replies = self.replies.lock().unwrap();
            let queue = replies.get_mut(operation);
            match queue {
                Some(queue) if queue.len() > 1 => queue.pop_front(),
                Some(queue) => queue.front().cloned(),
                None => None,
            }
        };

        match reply {
            Some(Reply::Ok(response)) => Ok(response),
            Some(Reply::Fail { status, code }) => Err(Error::Api {
                status,
                code,
                message: "stubbed failure".to_string(),
                opc_request_id: None,
            }),
            None => Err(Error::Api {
                status: 500,
                code: "NoStub".to_string(),
                message: format!("no reply stubbed for {}", operation),
                opc_request_id: None,
            }),
        }
    }
}

pub fn client(stub: &Arc<StubTransport>) -> DataScienceClient {
    let config = ClientConfig::new("us-ashburn-1").retry(RetryConfig::none());
    DataScienceClient::with_transport(stub.clone(), config)
}

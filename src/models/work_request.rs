use serde::{Deserialize, Serialize};

use super::wire::skip_nulls;

wire_enum! {
    WorkRequestStatus {
        Accepted => "ACCEPTED",
        InProgress => "IN_PROGRESS",
        Failed => "FAILED",
        Succeeded => "SUCCEEDED",
        Canceling => "CANCELING",
        Canceled => "CANCELED",
    }
}

wire_enum! {
    WorkRequestOperationType {
        NotebookSessionCreate => "NOTEBOOK_SESSION_CREATE",
        NotebookSessionDelete => "NOTEBOOK_SESSION_DELETE",
        NotebookSessionActivate => "NOTEBOOK_SESSION_ACTIVATE",
        NotebookSessionDeactivate => "NOTEBOOK_SESSION_DEACTIVATE",
        ModelDeploymentCreate => "MODEL_DEPLOYMENT_CREATE",
        ModelDeploymentDelete => "MODEL_DEPLOYMENT_DELETE",
        ModelDeploymentActivate => "MODEL_DEPLOYMENT_ACTIVATE",
        ModelDeploymentDeactivate => "MODEL_DEPLOYMENT_DEACTIVATE",
        ModelDeploymentUpdate => "MODEL_DEPLOYMENT_UPDATE",
        ProjectDelete => "PROJECT_DELETE",
        WorkRequestCancel => "WORKREQUEST_CANCEL",
        JobDelete => "JOB_DELETE",
    }
}

wire_enum! {
    /// Sort key of `list_work_requests`
    WorkRequestSortBy {
        OperationType => "operationType",
        Status => "status",
        TimeAccepted => "timeAccepted",
    }
}

/// A resource touched by a work request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkRequestResource {
    #[serde(alias = "entity_type", skip_serializing_if = "Option::is_none")]
    pub entity_type: Option<String>,
    #[serde(alias = "action_type", skip_serializing_if = "Option::is_none")]
    pub action_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    #[serde(alias = "entity_uri", skip_serializing_if = "Option::is_none")]
    pub entity_uri: Option<String>,
}

/// An asynchronous operation tracked by the service
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(alias = "operation_type", skip_serializing_if = "Option::is_none")]
    pub operation_type: Option<WorkRequestOperationType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<WorkRequestStatus>,
    #[serde(alias = "compartment_id", skip_serializing_if = "Option::is_none")]
    pub compartment_id: Option<String>,
    #[serde(default, deserialize_with = "skip_nulls", skip_serializing_if = "Option::is_none")]
    pub resources: Option<Vec<WorkRequestResource>>,
    #[serde(alias = "percent_complete", skip_serializing_if = "Option::is_none")]
    pub percent_complete: Option<f64>,
    #[serde(alias = "time_accepted", skip_serializing_if = "Option::is_none")]
    pub time_accepted: Option<String>,
    #[serde(alias = "time_started", skip_serializing_if = "Option::is_none")]
    pub time_started: Option<String>,
    #[serde(alias = "time_finished", skip_serializing_if = "Option::is_none")]
    pub time_finished: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkRequestSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(alias = "operation_type", skip_serializing_if = "Option::is_none")]
    pub operation_type: Option<WorkRequestOperationType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<WorkRequestStatus>,
    #[serde(alias = "compartment_id", skip_serializing_if = "Option::is_none")]
    pub compartment_id: Option<String>,
    #[serde(default, deserialize_with = "skip_nulls", skip_serializing_if = "Option::is_none")]
    pub resources: Option<Vec<WorkRequestResource>>,
    #[serde(alias = "percent_complete", skip_serializing_if = "Option::is_none")]
    pub percent_complete: Option<f64>,
    #[serde(alias = "time_accepted", skip_serializing_if = "Option::is_none")]
    pub time_accepted: Option<String>,
    #[serde(alias = "time_started", skip_serializing_if = "Option::is_none")]
    pub time_started: Option<String>,
    #[serde(alias = "time_finished", skip_serializing_if = "Option::is_none")]
    pub time_finished: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkRequestError {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkRequestLogEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

wire_identity!(
    WorkRequestResource,
    WorkRequest,
    WorkRequestSummary,
    WorkRequestError,
    WorkRequestLogEntry,
);

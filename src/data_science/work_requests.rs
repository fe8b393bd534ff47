use tracing::instrument;

use super::{path_param, DataScienceClient, RequestOptions};
use crate::error::Result;
use crate::models::{
    SortOrder, WorkRequest, WorkRequestError, WorkRequestLogEntry, WorkRequestOperationType,
    WorkRequestSortBy, WorkRequestStatus, WorkRequestSummary,
};
use crate::retry::RetryConfig;
use crate::transport::{Method, Response};
use crate::validate;

/// Filters and paging of `list_work_requests`
#[derive(Debug, Clone, Default)]
pub struct ListWorkRequestsOptions {
    pub id: Option<String>,
    pub operation_type: Option<WorkRequestOperationType>,
    pub status: Option<WorkRequestStatus>,
    pub limit: Option<u32>,
    pub page: Option<String>,
    pub sort_order: Option<SortOrder>,
    pub sort_by: Option<WorkRequestSortBy>,
    pub opc_request_id: Option<String>,
    pub retry_config: Option<RetryConfig>,
}

/// Paging of the work request error and log listings
#[derive(Debug, Clone, Default)]
pub struct PageOptions {
    pub limit: Option<u32>,
    pub page: Option<String>,
    pub opc_request_id: Option<String>,
    pub retry_config: Option<RetryConfig>,
}

impl DataScienceClient {
    #[instrument(skip(self, options))]
    pub async fn get_work_request(
        &self,
        work_request_id: &str,
        options: &RequestOptions,
    ) -> Result<Response<WorkRequest>> {
        validate::required("get_work_request", "work_request_id", work_request_id)?;
        let request = self.request(
            "get_work_request",
            Method::Get,
            format!("/workRequests/{}", path_param(work_request_id)),
            options.opc_request_id.as_deref(),
            options.retry_config.as_ref(),
        );
        self.send(request).await
    }

    #[instrument(skip(self, options))]
    pub async fn list_work_requests(
        &self,
        compartment_id: &str,
        options: &ListWorkRequestsOptions,
    ) -> Result<Response<Vec<WorkRequestSummary>>> {
        validate::required("list_work_requests", "compartment_id", compartment_id)?;
        validate::allowed("operation_type", options.operation_type.as_ref())?;
        validate::allowed("status", options.status.as_ref())?;
        validate::allowed("sort_order", options.sort_order.as_ref())?;
        validate::allowed("sort_by", options.sort_by.as_ref())?;

        let request = self
            .request(
                "list_work_requests",
                Method::Get,
                "/workRequests".to_string(),
                options.opc_request_id.as_deref(),
                options.retry_config.as_ref(),
            )
            .query("compartmentId", Some(compartment_id))
            .query("id", options.id.as_deref())
            .query("operationType", options.operation_type.as_ref())
            .query("status", options.status.as_ref())
            .query("limit", options.limit)
            .query("page", options.page.as_deref())
            .query("sortOrder", options.sort_order.as_ref())
            .query("sortBy", options.sort_by.as_ref());
        self.send(request).await
    }

    #[instrument(skip(self, options))]
    pub async fn list_work_request_errors(
        &self,
        work_request_id: &str,
        options: &PageOptions,
    ) -> Result<Response<Vec<WorkRequestError>>> {
        validate::required("list_work_request_errors", "work_request_id", work_request_id)?;
        let request = self
            .request(
                "list_work_request_errors",
                Method::Get,
                format!("/workRequests/{}/errors", path_param(work_request_id)),
                options.opc_request_id.as_deref(),
                options.retry_config.as_ref(),
            )
            .query("limit", options.limit)
            .query("page", options.page.as_deref());
        self.send(request).await
    }

    #[instrument(skip(self, options))]
    pub async fn list_work_request_logs(
        &self,
        work_request_id: &str,
        options: &PageOptions,
    ) -> Result<Response<Vec<WorkRequestLogEntry>>> {
        validate::required("list_work_request_logs", "work_request_id", work_request_id)?;
        let request = self
            .request(
                "list_work_request_logs",
                Method::Get,
                format!("/workRequests/{}/logs", path_param(work_request_id)),
                options.opc_request_id.as_deref(),
                options.retry_config.as_ref(),
            )
            .query("limit", options.limit)
            .query("page", options.page.as_deref());
        self.send(request).await
    }
}

use tracing::instrument;

use super::{path_param, CreateOptions, DataScienceClient, RequestOptions, UpdateOptions};
use crate::error::Result;
use crate::models::{CreateJobRunDetails, JobRun, JobRunLifecycleState, JobRunSummary, ListSortBy, SortOrder};
use crate::retry::RetryConfig;
use crate::transport::{Method, Response};
use crate::validate;

/// Filters and paging of `list_job_runs`
#[derive(Debug, Clone, Default)]
pub struct ListJobRunsOptions {
    pub id: Option<String>,
    pub job_id: Option<String>,
    pub created_by: Option<String>,
    pub display_name: Option<String>,
    pub lifecycle_state: Option<JobRunLifecycleState>,
    pub limit: Option<u32>,
    pub page: Option<String>,
    pub sort_order: Option<SortOrder>,
    pub sort_by: Option<ListSortBy>,
    pub opc_request_id: Option<String>,
    pub retry_config: Option<RetryConfig>,
}

impl DataScienceClient {
    /// Start a run of an existing job
    #[instrument(skip(self, details, options))]
    pub async fn create_job_run(
        &self,
        details: &CreateJobRunDetails,
        options: &CreateOptions,
    ) -> Result<Response<JobRun>> {
        let request = self
            .create_request("create_job_run", "/jobRuns".to_string(), options)
            .body(details)?;
        self.send(request).await
    }

    #[instrument(skip(self, options))]
    pub async fn get_job_run(
        &self,
        job_run_id: &str,
        options: &RequestOptions,
    ) -> Result<Response<JobRun>> {
        validate::required("get_job_run", "job_run_id", job_run_id)?;
        let request = self.request(
            "get_job_run",
            Method::Get,
            format!("/jobRuns/{}", path_param(job_run_id)),
            options.opc_request_id.as_deref(),
            options.retry_config.as_ref(),
        );
        self.send(request).await
    }

    #[instrument(skip(self, options))]
    pub async fn list_job_runs(
        &self,
        compartment_id: &str,
        options: &ListJobRunsOptions,
    ) -> Result<Response<Vec<JobRunSummary>>> {
        validate::required("list_job_runs", "compartment_id", compartment_id)?;
        validate::allowed("lifecycle_state", options.lifecycle_state.as_ref())?;
        validate::allowed("sort_order", options.sort_order.as_ref())?;
        validate::allowed("sort_by", options.sort_by.as_ref())?;

        let request = self
            .request(
                "list_job_runs",
                Method::Get,
                "/jobRuns".to_string(),
                options.opc_request_id.as_deref(),
                options.retry_config.as_ref(),
            )
            .query("compartmentId", Some(compartment_id))
            .query("id", options.id.as_deref())
            .query("jobId", options.job_id.as_deref())
            .query("createdBy", options.created_by.as_deref())
            .query("displayName", options.display_name.as_deref())
            .query("lifecycleState", options.lifecycle_state.as_ref())
            .query("limit", options.limit)
            .query("page", options.page.as_deref())
            .query("sortOrder", options.sort_order.as_ref())
            .query("sortBy", options.sort_by.as_ref());
        self.send(request).await
    }

    /// Request cancellation of a run; the run moves through CANCELING
    #[instrument(skip(self, options))]
    pub async fn cancel_job_run(
        &self,
        job_run_id: &str,
        options: &UpdateOptions,
    ) -> Result<Response<()>> {
        validate::required("cancel_job_run", "job_run_id", job_run_id)?;
        let request = self.update_request(
            "cancel_job_run",
            Method::Post,
            format!("/jobRuns/{}/actions/cancelJobRun", path_param(job_run_id)),
            options,
        );
        self.send_empty(request).await
    }

    #[instrument(skip(self, options))]
    pub async fn delete_job_run(
        &self,
        job_run_id: &str,
        options: &UpdateOptions,
    ) -> Result<Response<()>> {
        validate::required("delete_job_run", "job_run_id", job_run_id)?;
        let request = self.update_request(
            "delete_job_run",
            Method::Delete,
            format!("/jobRuns/{}", path_param(job_run_id)),
            options,
        );
        self.send_empty(request).await
    }
}

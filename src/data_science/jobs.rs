use tracing::instrument;

use super::{path_param, CreateOptions, DataScienceClient, RequestOptions, UpdateOptions};
use crate::error::Result;
use crate::models::{
    CreateJobDetails, Job, JobLifecycleState, JobSummary, ListSortBy, SortOrder, UpdateJobDetails,
};
use crate::retry::RetryConfig;
use crate::transport::{Method, Response};
use crate::validate;

/// Filters and paging of `list_jobs`
#[derive(Debug, Clone, Default)]
pub struct ListJobsOptions {
    pub id: Option<String>,
    pub project_id: Option<String>,
    pub display_name: Option<String>,
    pub lifecycle_state: Option<JobLifecycleState>,
    pub created_by: Option<String>,
    pub limit: Option<u32>,
    pub page: Option<String>,
    pub sort_order: Option<SortOrder>,
    pub sort_by: Option<ListSortBy>,
    pub opc_request_id: Option<String>,
    pub retry_config: Option<RetryConfig>,
}

/// Options of `delete_job`
#[derive(Debug, Clone, Default)]
pub struct DeleteJobOptions {
    pub if_match: Option<String>,
    pub opc_request_id: Option<String>,
    /// Also delete the job's runs
    pub delete_related_job_runs: Option<bool>,
    pub retry_config: Option<RetryConfig>,
}

impl DataScienceClient {
    #[instrument(skip(self, details, options))]
    pub async fn create_job(
        &self,
        details: &CreateJobDetails,
        options: &CreateOptions,
    ) -> Result<Response<Job>> {
        let request = self
            .create_request("create_job", "/jobs".to_string(), options)
            .body(details)?;
        self.send(request).await
    }

    #[instrument(skip(self, options))]
    pub async fn get_job(&self, job_id: &str, options: &RequestOptions) -> Result<Response<Job>> {
        validate::required("get_job", "job_id", job_id)?;
        let request = self.request(
            "get_job",
            Method::Get,
            format!("/jobs/{}", path_param(job_id)),
            options.opc_request_id.as_deref(),
            options.retry_config.as_ref(),
        );
        self.send(request).await
    }

    #[instrument(skip(self, options))]
    pub async fn list_jobs(
        &self,
        compartment_id: &str,
        options: &ListJobsOptions,
    ) -> Result<Response<Vec<JobSummary>>> {
        validate::required("list_jobs", "compartment_id", compartment_id)?;
        validate::allowed("lifecycle_state", options.lifecycle_state.as_ref())?;
        validate::allowed("sort_order", options.sort_order.as_ref())?;
        validate::allowed("sort_by", options.sort_by.as_ref())?;

        let request = self
            .request(
                "list_jobs",
                Method::Get,
                "/jobs".to_string(),
                options.opc_request_id.as_deref(),
                options.retry_config.as_ref(),
            )
            .query("compartmentId", Some(compartment_id))
            .query("id", options.id.as_deref())
            .query("projectId", options.project_id.as_deref())
            .query("displayName", options.display_name.as_deref())
            .query("lifecycleState", options.lifecycle_state.as_ref())
            .query("createdBy", options.created_by.as_deref())
            .query("limit", options.limit)
            .query("page", options.page.as_deref())
            .query("sortOrder", options.sort_order.as_ref())
            .query("sortBy", options.sort_by.as_ref());
        self.send(request).await
    }

    #[instrument(skip(self, details, options))]
    pub async fn update_job(
        &self,
        job_id: &str,
        details: &UpdateJobDetails,
        options: &UpdateOptions,
    ) -> Result<Response<Job>> {
        validate::required("update_job", "job_id", job_id)?;
        let request = self
            .update_request(
                "update_job",
                Method::Put,
                format!("/jobs/{}", path_param(job_id)),
                options,
            )
            .body(details)?;
        self.send(request).await
    }

    /// Start deleting a job; the response carries the tracking work request id
    #[instrument(skip(self, options))]
    pub async fn delete_job(
        &self,
        job_id: &str,
        options: &DeleteJobOptions,
    ) -> Result<Response<()>> {
        validate::required("delete_job", "job_id", job_id)?;
        let request = self
            .request(
                "delete_job",
                Method::Delete,
                format!("/jobs/{}", path_param(job_id)),
                options.opc_request_id.as_deref(),
                options.retry_config.as_ref(),
            )
            .header("if-match", options.if_match.as_deref())
            .query("deleteRelatedJobRuns", options.delete_related_job_runs);
        self.send_empty(request).await
    }
}

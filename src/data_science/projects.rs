use tracing::instrument;

use super::{path_param, CreateOptions, DataScienceClient, RequestOptions, UpdateOptions};
use crate::error::Result;
use crate::models::{
    CreateProjectDetails, ListSortBy, Project, ProjectLifecycleState, ProjectSummary, SortOrder,
    UpdateProjectDetails,
};
use crate::retry::RetryConfig;
use crate::transport::{Method, Response};
use crate::validate;

/// Filters and paging of `list_projects`
#[derive(Debug, Clone, Default)]
pub struct ListProjectsOptions {
    pub id: Option<String>,
    pub display_name: Option<String>,
    pub lifecycle_state: Option<ProjectLifecycleState>,
    pub created_by: Option<String>,
    pub limit: Option<u32>,
    pub page: Option<String>,
    pub sort_order: Option<SortOrder>,
    pub sort_by: Option<ListSortBy>,
    pub opc_request_id: Option<String>,
    pub retry_config: Option<RetryConfig>,
}

impl DataScienceClient {
    /// Create a project in a compartment
    #[instrument(skip(self, details, options))]
    pub async fn create_project(
        &self,
        details: &CreateProjectDetails,
        options: &CreateOptions,
    ) -> Result<Response<Project>> {
        let request = self
            .create_request("create_project", "/projects".to_string(), options)
            .body(details)?;
        self.send(request).await
    }

    #[instrument(skip(self, options))]
    pub async fn get_project(
        &self,
        project_id: &str,
        options: &RequestOptions,
    ) -> Result<Response<Project>> {
        validate::required("get_project", "project_id", project_id)?;
        let request = self.request(
            "get_project",
            Method::Get,
            format!("/projects/{}", path_param(project_id)),
            options.opc_request_id.as_deref(),
            options.retry_config.as_ref(),
        );
        self.send(request).await
    }

    /// List projects in a compartment, one page at a time
    #[instrument(skip(self, options))]
    pub async fn list_projects(
        &self,
        compartment_id: &str,
        options: &ListProjectsOptions,
    ) -> Result<Response<Vec<ProjectSummary>>> {
        validate::required("list_projects", "compartment_id", compartment_id)?;
        validate::allowed("lifecycle_state", options.lifecycle_state.as_ref())?;
        validate::allowed("sort_order", options.sort_order.as_ref())?;
        validate::allowed("sort_by", options.sort_by.as_ref())?;

        let request = self
            .request(
                "list_projects",
                Method::Get,
                "/projects".to_string(),
                options.opc_request_id.as_deref(),
                options.retry_config.as_ref(),
            )
            .query("compartmentId", Some(compartment_id))
            .query("id", options.id.as_deref())
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
    pub async fn update_project(
        &self,
        project_id: &str,
        details: &UpdateProjectDetails,
        options: &UpdateOptions,
    ) -> Result<Response<Project>> {
        validate::required("update_project", "project_id", project_id)?;
        let request = self
            .update_request(
                "update_project",
                Method::Put,
                format!("/projects/{}", path_param(project_id)),
                options,
            )
            .body(details)?;
        self.send(request).await
    }

    /// Start deleting a project; the response carries the tracking work request id
    #[instrument(skip(self, options))]
    pub async fn delete_project(
        &self,
        project_id: &str,
        options: &UpdateOptions,
    ) -> Result<Response<()>> {
        validate::required("delete_project", "project_id", project_id)?;
        let request = self.update_request(
            "delete_project",
            Method::Delete,
            format!("/projects/{}", path_param(project_id)),
            options,
        );
        self.send_empty(request).await
    }
}

use tracing::instrument;

use super::{path_param, CreateOptions, DataScienceClient, RequestOptions, UpdateOptions};
use crate::error::Result;
use crate::models::{
    CreateModelDetails, ListSortBy, Model, ModelLifecycleState, ModelSummary, SortOrder,
    UpdateModelDetails,
};
use crate::retry::RetryConfig;
use crate::transport::{Method, Response};
use crate::validate;

/// Filters and paging of `list_models`
#[derive(Debug, Clone, Default)]
pub struct ListModelsOptions {
    pub id: Option<String>,
    pub project_id: Option<String>,
    pub display_name: Option<String>,
    pub lifecycle_state: Option<ModelLifecycleState>,
    pub created_by: Option<String>,
    pub limit: Option<u32>,
    pub page: Option<String>,
    pub sort_order: Option<SortOrder>,
    pub sort_by: Option<ListSortBy>,
    pub opc_request_id: Option<String>,
    pub retry_config: Option<RetryConfig>,
}

impl DataScienceClient {
    #[instrument(skip(self, details, options))]
    pub async fn create_model(
        &self,
        details: &CreateModelDetails,
        options: &CreateOptions,
    ) -> Result<Response<Model>> {
        let request = self
            .create_request("create_model", "/models".to_string(), options)
            .body(details)?;
        self.send(request).await
    }

    #[instrument(skip(self, options))]
    pub async fn get_model(
        &self,
        model_id: &str,
        options: &RequestOptions,
    ) -> Result<Response<Model>> {
        validate::required("get_model", "model_id", model_id)?;
        let request = self.request(
            "get_model",
            Method::Get,
            format!("/models/{}", path_param(model_id)),
            options.opc_request_id.as_deref(),
            options.retry_config.as_ref(),
        );
        self.send(request).await
    }

    #[instrument(skip(self, options))]
    pub async fn list_models(
        &self,
        compartment_id: &str,
        options: &ListModelsOptions,
    ) -> Result<Response<Vec<ModelSummary>>> {
        validate::required("list_models", "compartment_id", compartment_id)?;
        validate::allowed("lifecycle_state", options.lifecycle_state.as_ref())?;
        validate::allowed("sort_order", options.sort_order.as_ref())?;
        validate::allowed("sort_by", options.sort_by.as_ref())?;

        let request = self
            .request(
                "list_models",
                Method::Get,
                "/models".to_string(),
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
    pub async fn update_model(
        &self,
        model_id: &str,
        details: &UpdateModelDetails,
        options: &UpdateOptions,
    ) -> Result<Response<Model>> {
        validate::required("update_model", "model_id", model_id)?;
        let request = self
            .update_request(
                "update_model",
                Method::Put,
                format!("/models/{}", path_param(model_id)),
                options,
            )
            .body(details)?;
        self.send(request).await
    }

    #[instrument(skip(self, options))]
    pub async fn delete_model(&self, model_id: &str, options: &UpdateOptions) -> Result<Response<()>> {
        validate::required("delete_model", "model_id", model_id)?;
        let request = self.update_request(
            "delete_model",
            Method::Delete,
            format!("/models/{}", path_param(model_id)),
            options,
        );
        self.send_empty(request).await
    }

    /// Move an INACTIVE model back to ACTIVE
    #[instrument(skip(self, options))]
    pub async fn activate_model(
        &self,
        model_id: &str,
        options: &UpdateOptions,
    ) -> Result<Response<Model>> {
        validate::required("activate_model", "model_id", model_id)?;
        let request = self.update_request(
            "activate_model",
            Method::Post,
            format!("/models/{}/actions/activate", path_param(model_id)),
            options,
        );
        self.send(request).await
    }

    #[instrument(skip(self, options))]
    pub async fn deactivate_model(
        &self,
        model_id: &str,
        options: &UpdateOptions,
    ) -> Result<Response<Model>> {
        validate::required("deactivate_model", "model_id", model_id)?;
        let request = self.update_request(
            "deactivate_model",
            Method::Post,
            format!("/models/{}/actions/deactivate", path_param(model_id)),
            options,
        );
        self.send(request).await
    }
}

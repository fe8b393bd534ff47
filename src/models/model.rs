use serde::{Deserialize, Serialize};

use super::wire::skip_nulls;
use super::{DefinedTags, FreeformTags};

wire_enum! {
    ModelLifecycleState {
        Active => "ACTIVE",
        Deleted => "DELETED",
        Failed => "FAILED",
        Inactive => "INACTIVE",
    }
}

/// A key/value metadata entry attached to a model
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl Metadata {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            value: Some(value.into()),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(alias = "compartment_id", skip_serializing_if = "Option::is_none")]
    pub compartment_id: Option<String>,
    #[serde(alias = "project_id", skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(alias = "display_name", skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(alias = "lifecycle_state", skip_serializing_if = "Option::is_none")]
    pub lifecycle_state: Option<ModelLifecycleState>,
    #[serde(alias = "time_created", skip_serializing_if = "Option::is_none")]
    pub time_created: Option<String>,
    #[serde(alias = "created_by", skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    #[serde(
        alias = "custom_metadata_list",
        default,
        deserialize_with = "skip_nulls",
        skip_serializing_if = "Option::is_none"
    )]
    pub custom_metadata_list: Option<Vec<Metadata>>,
    #[serde(
        alias = "defined_metadata_list",
        default,
        deserialize_with = "skip_nulls",
        skip_serializing_if = "Option::is_none"
    )]
    pub defined_metadata_list: Option<Vec<Metadata>>,
    #[serde(alias = "input_schema", skip_serializing_if = "Option::is_none")]
    pub input_schema: Option<String>,
    #[serde(alias = "output_schema", skip_serializing_if = "Option::is_none")]
    pub output_schema: Option<String>,
    #[serde(alias = "freeform_tags", skip_serializing_if = "Option::is_none")]
    pub freeform_tags: Option<FreeformTags>,
    #[serde(alias = "defined_tags", skip_serializing_if = "Option::is_none")]
    pub defined_tags: Option<DefinedTags>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(alias = "compartment_id", skip_serializing_if = "Option::is_none")]
    pub compartment_id: Option<String>,
    #[serde(alias = "project_id", skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(alias = "display_name", skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(alias = "lifecycle_state", skip_serializing_if = "Option::is_none")]
    pub lifecycle_state: Option<ModelLifecycleState>,
    #[serde(alias = "time_created", skip_serializing_if = "Option::is_none")]
    pub time_created: Option<String>,
    #[serde(alias = "created_by", skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    #[serde(alias = "freeform_tags", skip_serializing_if = "Option::is_none")]
    pub freeform_tags: Option<FreeformTags>,
    #[serde(alias = "defined_tags", skip_serializing_if = "Option::is_none")]
    pub defined_tags: Option<DefinedTags>,
}

/// Body of `create_model`; `compartment_id` and `project_id` are required
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateModelDetails {
    #[serde(alias = "compartment_id", skip_serializing_if = "Option::is_none")]
    pub compartment_id: Option<String>,
    #[serde(alias = "project_id", skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(alias = "display_name", skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(
        alias = "custom_metadata_list",
        default,
        deserialize_with = "skip_nulls",
        skip_serializing_if = "Option::is_none"
    )]
    pub custom_metadata_list: Option<Vec<Metadata>>,
    #[serde(
        alias = "defined_metadata_list",
        default,
        deserialize_with = "skip_nulls",
        skip_serializing_if = "Option::is_none"
    )]
    pub defined_metadata_list: Option<Vec<Metadata>>,
    #[serde(alias = "input_schema", skip_serializing_if = "Option::is_none")]
    pub input_schema: Option<String>,
    #[serde(alias = "output_schema", skip_serializing_if = "Option::is_none")]
    pub output_schema: Option<String>,
    #[serde(alias = "freeform_tags", skip_serializing_if = "Option::is_none")]
    pub freeform_tags: Option<FreeformTags>,
    #[serde(alias = "defined_tags", skip_serializing_if = "Option::is_none")]
    pub defined_tags: Option<DefinedTags>,
}

impl CreateModelDetails {
    pub fn new(compartment_id: impl Into<String>, project_id: impl Into<String>) -> Self {
        Self {
            compartment_id: Some(compartment_id.into()),
            project_id: Some(project_id.into()),
            ..Default::default()
        }
    }

    pub fn display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    pub fn custom_metadata(mut self, entries: Vec<Metadata>) -> Self {
        self.custom_metadata_list = Some(entries);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateModelDetails {
    #[serde(alias = "display_name", skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(
        alias = "custom_metadata_list",
        default,
        deserialize_with = "skip_nulls",
        skip_serializing_if = "Option::is_none"
    )]
    pub custom_metadata_list: Option<Vec<Metadata>>,
    #[serde(
        alias = "defined_metadata_list",
        default,
        deserialize_with = "skip_nulls",
        skip_serializing_if = "Option::is_none"
    )]
    pub defined_metadata_list: Option<Vec<Metadata>>,
    #[serde(alias = "freeform_tags", skip_serializing_if = "Option::is_none")]
    pub freeform_tags: Option<FreeformTags>,
    #[serde(alias = "defined_tags", skip_serializing_if = "Option::is_none")]
    pub defined_tags: Option<DefinedTags>,
}

wire_identity!(
    Metadata,
    Model,
    ModelSummary,
    CreateModelDetails,
    UpdateModelDetails
);

use serde::{Deserialize, Serialize};

use super::{DefinedTags, FreeformTags};

wire_enum! {
    ProjectLifecycleState {
        Active => "ACTIVE",
        Deleting => "DELETING",
        Deleted => "DELETED",
    }
}

/// A Data Science project: a container for jobs, models and notebook sessions
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(alias = "time_created", skip_serializing_if = "Option::is_none")]
    pub time_created: Option<String>,
    #[serde(alias = "display_name", skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(alias = "compartment_id", skip_serializing_if = "Option::is_none")]
    pub compartment_id: Option<String>,
    #[serde(alias = "created_by", skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    #[serde(alias = "lifecycle_state", skip_serializing_if = "Option::is_none")]
    pub lifecycle_state: Option<ProjectLifecycleState>,
    #[serde(alias = "freeform_tags", skip_serializing_if = "Option::is_none")]
    pub freeform_tags: Option<FreeformTags>,
    #[serde(alias = "defined_tags", skip_serializing_if = "Option::is_none")]
    pub defined_tags: Option<DefinedTags>,
}

/// Element of the `list_projects` result
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(alias = "display_name", skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(alias = "compartment_id", skip_serializing_if = "Option::is_none")]
    pub compartment_id: Option<String>,
    #[serde(alias = "time_created", skip_serializing_if = "Option::is_none")]
    pub time_created: Option<String>,
    #[serde(alias = "created_by", skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    #[serde(alias = "lifecycle_state", skip_serializing_if = "Option::is_none")]
    pub lifecycle_state: Option<ProjectLifecycleState>,
    #[serde(alias = "freeform_tags", skip_serializing_if = "Option::is_none")]
    pub freeform_tags: Option<FreeformTags>,
    #[serde(alias = "defined_tags", skip_serializing_if = "Option::is_none")]
    pub defined_tags: Option<DefinedTags>,
}

/// Body of `create_project`; `compartment_id` is required by the service
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectDetails {
    #[serde(alias = "compartment_id", skip_serializing_if = "Option::is_none")]
    pub compartment_id: Option<String>,
    #[serde(alias = "display_name", skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(alias = "freeform_tags", skip_serializing_if = "Option::is_none")]
    pub freeform_tags: Option<FreeformTags>,
    #[serde(alias = "defined_tags", skip_serializing_if = "Option::is_none")]
    pub defined_tags: Option<DefinedTags>,
}

impl CreateProjectDetails {
    pub fn new(compartment_id: impl Into<String>) -> Self {
        Self {
            compartment_id: Some(compartment_id.into()),
            ..Default::default()
        }
    }

    pub fn display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProjectDetails {
    #[serde(alias = "display_name", skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(alias = "freeform_tags", skip_serializing_if = "Option::is_none")]
    pub freeform_tags: Option<FreeformTags>,
    #[serde(alias = "defined_tags", skip_serializing_if = "Option::is_none")]
    pub defined_tags: Option<DefinedTags>,
}

wire_identity!(Project, ProjectSummary, CreateProjectDetails, UpdateProjectDetails);

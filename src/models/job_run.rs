use serde::{Deserialize, Serialize};

use super::{
    DefinedTags, FreeformTags, JobConfigurationDetails, JobInfrastructureConfigurationDetails,
    JobLogConfigurationDetails,
};

wire_enum! {
    JobRunLifecycleState {
        Accepted => "ACCEPTED",
        InProgress => "IN_PROGRESS",
        Failed => "FAILED",
        Succeeded => "SUCCEEDED",
        Canceling => "CANCELING",
        Canceled => "CANCELED",
        Deleted => "DELETED",
        NeedsAttention => "NEEDS_ATTENTION",
    }
}

/// Log group and log a job run writes to
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRunLogDetails {
    #[serde(alias = "log_group_id", skip_serializing_if = "Option::is_none")]
    pub log_group_id: Option<String>,
    #[serde(alias = "log_id", skip_serializing_if = "Option::is_none")]
    pub log_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRun {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(alias = "time_accepted", skip_serializing_if = "Option::is_none")]
    pub time_accepted: Option<String>,
    #[serde(alias = "time_started", skip_serializing_if = "Option::is_none")]
    pub time_started: Option<String>,
    #[serde(alias = "time_finished", skip_serializing_if = "Option::is_none")]
    pub time_finished: Option<String>,
    #[serde(alias = "created_by", skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    #[serde(alias = "project_id", skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(alias = "compartment_id", skip_serializing_if = "Option::is_none")]
    pub compartment_id: Option<String>,
    #[serde(alias = "job_id", skip_serializing_if = "Option::is_none")]
    pub job_id: Option<String>,
    #[serde(alias = "display_name", skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(alias = "job_configuration_override_details", skip_serializing_if = "Option::is_none")]
    pub job_configuration_override_details: Option<JobConfigurationDetails>,
    #[serde(alias = "job_infrastructure_configuration_details", skip_serializing_if = "Option::is_none")]
    pub job_infrastructure_configuration_details: Option<JobInfrastructureConfigurationDetails>,
    #[serde(alias = "job_log_configuration_override_details", skip_serializing_if = "Option::is_none")]
    pub job_log_configuration_override_details: Option<JobLogConfigurationDetails>,
    #[serde(alias = "log_details", skip_serializing_if = "Option::is_none")]
    pub log_details: Option<JobRunLogDetails>,
    #[serde(alias = "lifecycle_state", skip_serializing_if = "Option::is_none")]
    pub lifecycle_state: Option<JobRunLifecycleState>,
    #[serde(alias = "lifecycle_details", skip_serializing_if = "Option::is_none")]
    pub lifecycle_details: Option<String>,
    #[serde(alias = "freeform_tags", skip_serializing_if = "Option::is_none")]
    pub freeform_tags: Option<FreeformTags>,
    #[serde(alias = "defined_tags", skip_serializing_if = "Option::is_none")]
    pub defined_tags: Option<DefinedTags>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRunSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(alias = "time_accepted", skip_serializing_if = "Option::is_none")]
    pub time_accepted: Option<String>,
    #[serde(alias = "time_started", skip_serializing_if = "Option::is_none")]
    pub time_started: Option<String>,
    #[serde(alias = "time_finished", skip_serializing_if = "Option::is_none")]
    pub time_finished: Option<String>,
    #[serde(alias = "created_by", skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    #[serde(alias = "project_id", skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(alias = "compartment_id", skip_serializing_if = "Option::is_none")]
    pub compartment_id: Option<String>,
    #[serde(alias = "job_id", skip_serializing_if = "Option::is_none")]
    pub job_id: Option<String>,
    #[serde(alias = "display_name", skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(alias = "lifecycle_state", skip_serializing_if = "Option::is_none")]
    pub lifecycle_state: Option<JobRunLifecycleState>,
    #[serde(alias = "lifecycle_details", skip_serializing_if = "Option::is_none")]
    pub lifecycle_details: Option<String>,
    #[serde(alias = "freeform_tags", skip_serializing_if = "Option::is_none")]
    pub freeform_tags: Option<FreeformTags>,
    #[serde(alias = "defined_tags", skip_serializing_if = "Option::is_none")]
    pub defined_tags: Option<DefinedTags>,
}

/// Body of `create_job_run`; `project_id`, `compartment_id` and `job_id`
/// are required by the service
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateJobRunDetails {
    #[serde(alias = "project_id", skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(alias = "compartment_id", skip_serializing_if = "Option::is_none")]
    pub compartment_id: Option<String>,
    #[serde(alias = "job_id", skip_serializing_if = "Option::is_none")]
    pub job_id: Option<String>,
    #[serde(alias = "display_name", skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(alias = "job_configuration_override_details", skip_serializing_if = "Option::is_none")]
    pub job_configuration_override_details: Option<JobConfigurationDetails>,
    #[serde(alias = "job_log_configuration_override_details", skip_serializing_if = "Option::is_none")]
    pub job_log_configuration_override_details: Option<JobLogConfigurationDetails>,
    #[serde(alias = "freeform_tags", skip_serializing_if = "Option::is_none")]
    pub freeform_tags: Option<FreeformTags>,
    #[serde(alias = "defined_tags", skip_serializing_if = "Option::is_none")]
    pub defined_tags: Option<DefinedTags>,
}

impl CreateJobRunDetails {
    pub fn new(
        project_id: impl Into<String>,
        compartment_id: impl Into<String>,
        job_id: impl Into<String>,
    ) -> Self {
        Self {
            project_id: Some(project_id.into()),
            compartment_id: Some(compartment_id.into()),
            job_id: Some(job_id.into()),
            ..Default::default()
        }
    }

    pub fn display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    pub fn configuration_override(mut self, configuration: JobConfigurationDetails) -> Self {
        self.job_configuration_override_details = Some(configuration);
        self
    }
}

wire_identity!(JobRunLogDetails, JobRun, JobRunSummary, CreateJobRunDetails);

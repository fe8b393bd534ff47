use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use tracing::warn;

use super::wire::{discriminator, serialize_tagged, variant};
use super::{DefinedTags, FreeformTags};

wire_enum! {
    JobLifecycleState {
        Creating => "CREATING",
        Active => "ACTIVE",
        Deleting => "DELETING",
        Failed => "FAILED",
        Deleted => "DELETED",
    }
}

/// What a job runs, resolved by `jobType`
#[derive(Debug, Clone, PartialEq)]
pub enum JobConfigurationDetails {
    /// `jobType: DEFAULT`
    Default(DefaultJobConfigurationDetails),
    /// A job type this SDK does not know, kept as received
    Unknown(Map<String, Value>),
}

impl JobConfigurationDetails {
    pub const DISCRIMINATOR: &'static str = "jobType";

    pub fn job_type(&self) -> Option<&str> {
        match self {
            Self::Default(_) => Some("DEFAULT"),
            Self::Unknown(map) => map.get(Self::DISCRIMINATOR).and_then(Value::as_str),
        }
    }
}

impl Serialize for JobConfigurationDetails {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Default(inner) => serialize_tagged(serializer, Self::DISCRIMINATOR, "DEFAULT", inner),
            Self::Unknown(map) => map.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for JobConfigurationDetails {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let map = Map::deserialize(deserializer)?;
        match discriminator::<D::Error>(&map, Self::DISCRIMINATOR, "job_type")?.as_deref() {
            Some("DEFAULT") => variant(map).map(Self::Default),
            other => {
                warn!(job_type = ?other, "Unknown job configuration type");
                Ok(Self::Unknown(map))
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DefaultJobConfigurationDetails {
    #[serde(alias = "environment_variables", skip_serializing_if = "Option::is_none")]
    pub environment_variables: Option<BTreeMap<String, String>>,
    #[serde(alias = "command_line_arguments", skip_serializing_if = "Option::is_none")]
    pub command_line_arguments: Option<String>,
    #[serde(alias = "maximum_runtime_in_minutes", skip_serializing_if = "Option::is_none")]
    pub maximum_runtime_in_minutes: Option<i64>,
}

/// Where a job runs, resolved by `jobInfrastructureType`
#[derive(Debug, Clone, PartialEq)]
pub enum JobInfrastructureConfigurationDetails {
    /// `STANDALONE`: runs in a customer subnet
    Standalone(StandaloneJobInfrastructureConfigurationDetails),
    /// `ME_STANDALONE`: runs with service-managed egress
    ManagedEgressStandalone(ManagedEgressStandaloneJobInfrastructureConfigurationDetails),
    Unknown(Map<String, Value>),
}

impl JobInfrastructureConfigurationDetails {
    pub const DISCRIMINATOR: &'static str = "jobInfrastructureType";

    pub fn infrastructure_type(&self) -> Option<&str> {
        match self {
            Self::Standalone(_) => Some("STANDALONE"),
            Self::ManagedEgressStandalone(_) => Some("ME_STANDALONE"),
            Self::Unknown(map) => map.get(Self::DISCRIMINATOR).and_then(Value::as_str),
        }
    }
}

impl Serialize for JobInfrastructureConfigurationDetails {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Standalone(inner) => {
                serialize_tagged(serializer, Self::DISCRIMINATOR, "STANDALONE", inner)
            }
            Self::ManagedEgressStandalone(inner) => {
                serialize_tagged(serializer, Self::DISCRIMINATOR, "ME_STANDALONE", inner)
            }
            Self::Unknown(map) => map.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for JobInfrastructureConfigurationDetails {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let map = Map::deserialize(deserializer)?;
        let tag = discriminator::<D::Error>(&map, Self::DISCRIMINATOR, "job_infrastructure_type")?;
        match tag.as_deref() {
            Some("STANDALONE") => variant(map).map(Self::Standalone),
            Some("ME_STANDALONE") => variant(map).map(Self::ManagedEgressStandalone),
            other => {
                warn!(infrastructure_type = ?other, "Unknown job infrastructure type");
                Ok(Self::Unknown(map))
            }
        }
    }
}

/// Shape resources for flexible shapes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobShapeConfigDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ocpus: Option<f64>,
    #[serde(alias = "memory_in_gbs", rename = "memoryInGBs", skip_serializing_if = "Option::is_none")]
    pub memory_in_gbs: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StandaloneJobInfrastructureConfigurationDetails {
    #[serde(alias = "shape_name", skip_serializing_if = "Option::is_none")]
    pub shape_name: Option<String>,
    #[serde(alias = "subnet_id", skip_serializing_if = "Option::is_none")]
    pub subnet_id: Option<String>,
    #[serde(alias = "block_storage_size_in_gbs", rename = "blockStorageSizeInGBs", skip_serializing_if = "Option::is_none")]
    pub block_storage_size_in_gbs: Option<i64>,
    #[serde(alias = "job_shape_config_details", skip_serializing_if = "Option::is_none")]
    pub job_shape_config_details: Option<JobShapeConfigDetails>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagedEgressStandaloneJobInfrastructureConfigurationDetails {
    #[serde(alias = "shape_name", skip_serializing_if = "Option::is_none")]
    pub shape_name: Option<String>,
    #[serde(alias = "block_storage_size_in_gbs", rename = "blockStorageSizeInGBs", skip_serializing_if = "Option::is_none")]
    pub block_storage_size_in_gbs: Option<i64>,
    #[serde(alias = "job_shape_config_details", skip_serializing_if = "Option::is_none")]
    pub job_shape_config_details: Option<JobShapeConfigDetails>,
}

/// Logging integration of a job's runs
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobLogConfigurationDetails {
    #[serde(alias = "enable_logging", skip_serializing_if = "Option::is_none")]
    pub enable_logging: Option<bool>,
    #[serde(alias = "enable_auto_log_creation", skip_serializing_if = "Option::is_none")]
    pub enable_auto_log_creation: Option<bool>,
    #[serde(alias = "log_group_id", skip_serializing_if = "Option::is_none")]
    pub log_group_id: Option<String>,
    #[serde(alias = "log_id", skip_serializing_if = "Option::is_none")]
    pub log_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(alias = "time_created", skip_serializing_if = "Option::is_none")]
    pub time_created: Option<String>,
    #[serde(alias = "created_by", skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    #[serde(alias = "project_id", skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(alias = "compartment_id", skip_serializing_if = "Option::is_none")]
    pub compartment_id: Option<String>,
    #[serde(alias = "display_name", skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(alias = "job_configuration_details", skip_serializing_if = "Option::is_none")]
    pub job_configuration_details: Option<JobConfigurationDetails>,
    #[serde(alias = "job_infrastructure_configuration_details", skip_serializing_if = "Option::is_none")]
    pub job_infrastructure_configuration_details: Option<JobInfrastructureConfigurationDetails>,
    #[serde(alias = "job_log_configuration_details", skip_serializing_if = "Option::is_none")]
    pub job_log_configuration_details: Option<JobLogConfigurationDetails>,
    #[serde(alias = "lifecycle_state", skip_serializing_if = "Option::is_none")]
    pub lifecycle_state: Option<JobLifecycleState>,
    #[serde(alias = "lifecycle_details", skip_serializing_if = "Option::is_none")]
    pub lifecycle_details: Option<String>,
    #[serde(alias = "freeform_tags", skip_serializing_if = "Option::is_none")]
    pub freeform_tags: Option<FreeformTags>,
    #[serde(alias = "defined_tags", skip_serializing_if = "Option::is_none")]
    pub defined_tags: Option<DefinedTags>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(alias = "time_created", skip_serializing_if = "Option::is_none")]
    pub time_created: Option<String>,
    #[serde(alias = "created_by", skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    #[serde(alias = "project_id", skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(alias = "compartment_id", skip_serializing_if = "Option::is_none")]
    pub compartment_id: Option<String>,
    #[serde(alias = "display_name", skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(alias = "job_infrastructure_configuration_details", skip_serializing_if = "Option::is_none")]
    pub job_infrastructure_configuration_details: Option<JobInfrastructureConfigurationDetails>,
    #[serde(alias = "lifecycle_state", skip_serializing_if = "Option::is_none")]
    pub lifecycle_state: Option<JobLifecycleState>,
    #[serde(alias = "lifecycle_details", skip_serializing_if = "Option::is_none")]
    pub lifecycle_details: Option<String>,
    #[serde(alias = "freeform_tags", skip_serializing_if = "Option::is_none")]
    pub freeform_tags: Option<FreeformTags>,
    #[serde(alias = "defined_tags", skip_serializing_if = "Option::is_none")]
    pub defined_tags: Option<DefinedTags>,
}

/// Body of `create_job`
///
/// `project_id`, `compartment_id`, `job_configuration_details` and
/// `job_infrastructure_configuration_details` are required by the service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateJobDetails {
    #[serde(alias = "project_id", skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(alias = "compartment_id", skip_serializing_if = "Option::is_none")]
    pub compartment_id: Option<String>,
    #[serde(alias = "display_name", skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(alias = "job_configuration_details", skip_serializing_if = "Option::is_none")]
    pub job_configuration_details: Option<JobConfigurationDetails>,
    #[serde(alias = "job_infrastructure_configuration_details", skip_serializing_if = "Option::is_none")]
    pub job_infrastructure_configuration_details: Option<JobInfrastructureConfigurationDetails>,
    #[serde(alias = "job_log_configuration_details", skip_serializing_if = "Option::is_none")]
    pub job_log_configuration_details: Option<JobLogConfigurationDetails>,
    #[serde(alias = "freeform_tags", skip_serializing_if = "Option::is_none")]
    pub freeform_tags: Option<FreeformTags>,
    #[serde(alias = "defined_tags", skip_serializing_if = "Option::is_none")]
    pub defined_tags: Option<DefinedTags>,
}

impl CreateJobDetails {
    pub fn new(
        project_id: impl Into<String>,
        compartment_id: impl Into<String>,
        configuration: JobConfigurationDetails,
        infrastructure: JobInfrastructureConfigurationDetails,
    ) -> Self {
        Self {
            project_id: Some(project_id.into()),
            compartment_id: Some(compartment_id.into()),
            job_configuration_details: Some(configuration),
            job_infrastructure_configuration_details: Some(infrastructure),
            ..Default::default()
        }
    }

    pub fn display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    pub fn log_configuration(mut self, log: JobLogConfigurationDetails) -> Self {
        self.job_log_configuration_details = Some(log);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateJobDetails {
    #[serde(alias = "display_name", skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(alias = "job_infrastructure_configuration_details", skip_serializing_if = "Option::is_none")]
    pub job_infrastructure_configuration_details: Option<JobInfrastructureConfigurationDetails>,
    #[serde(alias = "freeform_tags", skip_serializing_if = "Option::is_none")]
    pub freeform_tags: Option<FreeformTags>,
    #[serde(alias = "defined_tags", skip_serializing_if = "Option::is_none")]
    pub defined_tags: Option<DefinedTags>,
}

wire_identity!(
    JobConfigurationDetails,
    DefaultJobConfigurationDetails,
    JobInfrastructureConfigurationDetails,
    JobShapeConfigDetails,
    StandaloneJobInfrastructureConfigurationDetails,
    ManagedEgressStandaloneJobInfrastructureConfigurationDetails,
    JobLogConfigurationDetails,
    Job,
    JobSummary,
    CreateJobDetails,
    UpdateJobDetails,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WireModel;
    use serde_json::json;

    #[test]
    fn test_discriminator_selects_variant() {
        let details = JobInfrastructureConfigurationDetails::from_wire_map(json!({
            "jobInfrastructureType": "ME_STANDALONE",
            "shapeName": "VM.Standard2.1",
            "blockStorageSizeInGBs": 50
        }))
        .unwrap();

        match &details {
            JobInfrastructureConfigurationDetails::ManagedEgressStandalone(inner) => {
                assert_eq!(inner.shape_name.as_deref(), Some("VM.Standard2.1"));
                assert_eq!(inner.block_storage_size_in_gbs, Some(50));
            }
            other => panic!("unexpected variant: {other:?}"),
        }
        assert_eq!(details.infrastructure_type(), Some("ME_STANDALONE"));
    }

    #[test]
    fn test_unknown_discriminator_is_preserved() {
        let wire = json!({"jobType": "PIPELINE_STEP", "stepName": "train"});
        let details = JobConfigurationDetails::from_wire_map(wire.clone()).unwrap();
        assert_eq!(details.job_type(), Some("PIPELINE_STEP"));
        assert_eq!(Value::Object(details.to_wire_map().unwrap()), wire);
    }

    #[test]
    fn test_snake_case_discriminator_accepted() {
        let details = JobConfigurationDetails::from_wire_map(json!({
            "job_type": "DEFAULT",
            "command_line_arguments": "--epochs 3"
        }))
        .unwrap();
        assert_eq!(
            details,
            JobConfigurationDetails::Default(DefaultJobConfigurationDetails {
                command_line_arguments: Some("--epochs 3".to_string()),
                ..Default::default()
            })
        );
        // always emitted in wire form
        assert_eq!(
            Value::Object(details.to_wire_map().unwrap()),
            json!({"jobType": "DEFAULT", "commandLineArguments": "--epochs 3"})
        );
    }
}

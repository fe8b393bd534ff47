use std::collections::hash_map::DefaultHasher;
use std::collections::HashSet;
use std::hash::{Hash, Hasher};

use oci_datascience::models::{
    Job, JobConfigurationDetails, JobInfrastructureConfigurationDetails, JobLifecycleState,
    JobRun, JobRunLifecycleState, JobShapeConfigDetails, Model, Project, ProjectLifecycleState, WireEnum, WireModel,
    WorkRequest, WorkRequestOperationType,
};
use oci_datascience::Error;
use serde_json::{json, Value};

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

fn job_map() -> Value {
    json!({
        "id": "ocid1.datasciencejob.oc1..a",
        "projectId": "ocid1.datascienceproject.oc1..p",
        "compartmentId": "ocid1.compartment.oc1..c",
        "displayName": "train",
        "timeCreated": "2024-05-01T10:00:00.000Z",
        "lifecycleState": "ACTIVE",
        "jobConfigurationDetails": {
            "jobType": "DEFAULT",
            "environmentVariables": {"EPOCHS": "10"},
            "maximumRuntimeInMinutes": 60
        },
        "jobInfrastructureConfigurationDetails": {
            "jobInfrastructureType": "ME_STANDALONE",
            "shapeName": "VM.Standard.E4.Flex",
            "blockStorageSizeInGBs": 100,
            "jobShapeConfigDetails": {"ocpus": 1.1, "memoryInGBs": 15.3}
        },
        "freeformTags": {"team": "ml"},
        "definedTags": {"ops": {"cost-center": "42"}}
    })
}

#[test]
fn test_wire_map_round_trips() {
    let maps = [
        (
            "job",
            job_map(),
            Job::from_wire_map(job_map()).unwrap().to_wire_map().unwrap(),
        ),
        {
            let map = json!({
                "id": "p", "compartmentId": "c", "displayName": "d",
                "description": "x", "createdBy": "u", "lifecycleState": "DELETING"
            });
            let back = Project::from_wire_map(map.clone()).unwrap().to_wire_map().unwrap();
            ("project", map, back)
        },
        {
            let map = json!({
                "id": "m", "projectId": "p", "lifecycleState": "INACTIVE",
                "customMetadataList": [{"key": "UseCaseType", "value": "regression"}],
                "inputSchema": "{}"
            });
            let back = Model::from_wire_map(map.clone()).unwrap().to_wire_map().unwrap();
            ("model", map, back)
        },
        {
            let map = json!({
                "id": "wr", "operationType": "JOB_DELETE", "status": "IN_PROGRESS",
                "percentComplete": 33.3,
                "resources": [{"entityType": "job", "actionType": "DELETED", "identifier": "j"}]
            });
            let back = WorkRequest::from_wire_map(map.clone()).unwrap().to_wire_map().unwrap();
            ("work request", map, back)
        },
    ];

    for (name, original, back) in maps {
        assert_eq!(Value::Object(back), original, "{name} did not round-trip");
    }
}

#[test]
fn test_same_map_gives_equal_and_hash_equal_models() {
    let a = Job::from_wire_map(job_map()).unwrap();
    let b = Job::from_wire_map(job_map()).unwrap();
    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&b));

    let mut set = HashSet::new();
    set.insert(a);
    assert!(!set.insert(b));

    let mut other = job_map();
    other["displayName"] = json!("evaluate");
    let c = Job::from_wire_map(other).unwrap();
    assert!(!set.contains(&c));
}

#[test]
fn test_unknown_enum_values_become_sentinel() {
    let run = JobRun::from_wire_map(json!({"id": "r", "lifecycleState": "PAUSED"})).unwrap();
    let state = run.lifecycle_state.clone().unwrap();
    assert_eq!(state, JobRunLifecycleState::UnknownValue("PAUSED".to_string()));
    assert!(!state.is_known());
    assert_eq!(run.to_wire_map().unwrap()["lifecycleState"], "PAUSED");

    let wr = WorkRequest::from_wire_map(json!({"operationType": "PIPELINE_CREATE"})).unwrap();
    assert!(matches!(
        wr.operation_type,
        Some(WorkRequestOperationType::UnknownValue(_))
    ));

    assert_eq!(JobLifecycleState::from_wire("CREATING"), JobLifecycleState::Creating);
    assert!(JobLifecycleState::ALLOWED.contains(&"DELETED"));
}

#[test]
fn test_snake_case_keys_are_accepted() {
    let project = Project::from_wire_map(json!({
        "display_name": "legacy",
        "lifecycle_state": "ACTIVE",
        "unknownField": 1
    }))
    .unwrap();
    assert_eq!(project.display_name.as_deref(), Some("legacy"));
    assert_eq!(project.lifecycle_state, Some(ProjectLifecycleState::Active));
    assert_eq!(
        Value::Object(project.to_wire_map().unwrap()),
        json!({"displayName": "legacy", "lifecycleState": "ACTIVE"})
    );
}

#[test]
fn test_both_key_spellings_conflict() {
    let err = Model::from_wire_map(json!({"projectId": "a", "project_id": "b"})).unwrap_err();
    assert!(matches!(err, Error::ConflictingKeys(_)));
    assert!(err.is_validation());
}

#[test]
fn test_polymorphic_fields_resolve_by_discriminator() {
    let job = Job::from_wire_map(job_map()).unwrap();
    match job.job_configuration_details.unwrap() {
        JobConfigurationDetails::Default(config) => {
            assert_eq!(config.maximum_runtime_in_minutes, Some(60));
        }
        other => panic!("unexpected configuration: {other:?}"),
    }
    let infrastructure = job.job_infrastructure_configuration_details.unwrap();
    assert_eq!(infrastructure.infrastructure_type(), Some("ME_STANDALONE"));
    assert!(matches!(
        infrastructure,
        JobInfrastructureConfigurationDetails::ManagedEgressStandalone(_)
    ));
}

#[test]
fn test_null_list_elements_are_dropped() {
    let model = Model::from_wire_map(json!({
        "customMetadataList": [null, {"key": "k", "value": "v"}, null]
    }))
    .unwrap();
    let list = model.custom_metadata_list.unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].key.as_deref(), Some("k"));
}

#[test]
fn test_fractional_shape_values_are_sent_exactly() {
    let shape = JobShapeConfigDetails {
        ocpus: Some(1.1),
        memory_in_gbs: Some(15.3),
    };
    assert_eq!(
        Value::Object(shape.to_wire_map().unwrap()),
        json!({"ocpus": 1.1, "memoryInGBs": 15.3})
    );
    assert_eq!(
        serde_json::to_string(&shape).unwrap(),
        r#"{"ocpus":1.1,"memoryInGBs":15.3}"#
    );
}

#[test]
fn test_signed_zero_models_hash_alike() {
    let positive = JobShapeConfigDetails {
        ocpus: Some(0.0),
        memory_in_gbs: None,
    };
    let negative = JobShapeConfigDetails {
        ocpus: Some(-0.0),
        memory_in_gbs: None,
    };
    assert_eq!(positive, negative);
    assert_eq!(hash_of(&positive), hash_of(&negative));
}

//! Example demonstrating the Data Science composite operations
//!
//! This example shows how to:
//! - Create a client with ConfigFileAuth
//! - Create a job and wait until it is ACTIVE
//! - Start a run and wait for it to finish
//! - Read the run's final state, recovering the job id if waiting fails
//!
//! # Prerequisites
//! - OCI config file at ~/.oci/config
//! - A Data Science project and a subnet the job can run in
//!
//! # Running
//! ```bash
//! export OCI_PROJECT_ID="ocid1.datascienceproject.oc1..example"
//! export OCI_COMPARTMENT_ID="ocid1.compartment.oc1..example"
//! export OCI_SUBNET_ID="ocid1.subnet.oc1..example"
//! RUST_LOG=oci_datascience=debug cargo run --example create_job_and_wait
//! ```

use std::collections::BTreeMap;
use std::sync::Arc;

use oci_datascience::auth::ConfigFileAuth;
use oci_datascience::data_science::{
    CreateOptions, DataScienceClient, DataScienceCompositeOperations,
};
use oci_datascience::models::{
    CreateJobDetails, CreateJobRunDetails, DefaultJobConfigurationDetails,
    JobConfigurationDetails, JobInfrastructureConfigurationDetails, JobLifecycleState,
    JobRunLifecycleState, JobShapeConfigDetails,
    StandaloneJobInfrastructureConfigurationDetails,
};
use oci_datascience::{ClientConfig, Error, WaiterConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("oci_datascience=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let project_id = std::env::var("OCI_PROJECT_ID")?;
    let compartment_id = std::env::var("OCI_COMPARTMENT_ID")?;
    let subnet_id = std::env::var("OCI_SUBNET_ID")?;

    // Load auth from ~/.oci/config
    let auth = Arc::new(ConfigFileAuth::from_file(None, None)?);
    let config = ClientConfig::from_auth(auth.as_ref())
        .await?
        .waiter(WaiterConfig::new(15, 1800));
    let client = DataScienceClient::new(auth, config)?;
    let composite = DataScienceCompositeOperations::new(client);

    let configuration = DefaultJobConfigurationDetails {
        environment_variables: Some(BTreeMap::from([(
            "EPOCHS".to_string(),
            "5".to_string(),
        )])),
        maximum_runtime_in_minutes: Some(60),
        ..Default::default()
    };
    let infrastructure = StandaloneJobInfrastructureConfigurationDetails {
        shape_name: Some("VM.Standard.E4.Flex".to_string()),
        subnet_id: Some(subnet_id),
        block_storage_size_in_gbs: Some(50),
        job_shape_config_details: Some(JobShapeConfigDetails {
            ocpus: Some(1.0),
            memory_in_gbs: Some(16.0),
        }),
    };
    let details = CreateJobDetails::new(
        &project_id,
        &compartment_id,
        JobConfigurationDetails::Default(configuration),
        JobInfrastructureConfigurationDetails::Standalone(infrastructure),
    )
    .display_name("example-job");

    println!("Creating job...");
    let job = composite
        .create_job_and_wait_for_state(
            &details,
            &CreateOptions::default(),
            &[JobLifecycleState::Active, JobLifecycleState::Failed],
            None,
        )
        .await?;
    let job_id = job.data.id.clone().unwrap_or_default();
    println!("Job {} is {:?}", job_id, job.data.lifecycle_state);

    println!("\nStarting run...");
    let run_details = CreateJobRunDetails::new(&project_id, &compartment_id, &job_id)
        .display_name("example-run");
    let finished = [
        JobRunLifecycleState::Succeeded,
        JobRunLifecycleState::Failed,
        JobRunLifecycleState::Canceled,
    ];
    match composite
        .create_job_run_and_wait_for_state(&run_details, &CreateOptions::default(), &finished, None)
        .await
    {
        Ok(run) => {
            println!("Run finished: {:?}", run.data.lifecycle_state);
            if let Some(details) = run.data.lifecycle_details {
                println!("Details: {}", details);
            }
        }
        Err(e @ Error::CompositeOperationFailed { .. }) => {
            // The run was created; only waiting for it failed
            if let Some(partial) = e.partial_result() {
                eprintln!("Run {} did not finish: {}", partial.data["id"], e);
            }
        }
        Err(e) => return Err(e.into()),
    }

    Ok(())
}

//! Mutating calls followed by a wait for a target state
//!
//! Each method issues the base operation and, when target states are
//! given, polls the matching `get` (or the work request named by the
//! `opc-work-request-id` header) until one of them is observed. Any
//! failure while waiting is returned as
//! [`Error::CompositeOperationFailed`] carrying the initiating call's
//! response, so the caller still learns e.g. the id of a created job.

use std::future::Future;

use serde::Serialize;
use tracing::info;

use super::{CreateOptions, DataScienceClient, DeleteJobOptions, RequestOptions, UpdateOptions};
use crate::error::{Error, Result};
use crate::models::{
    CreateJobDetails, CreateJobRunDetails, CreateModelDetails, CreateProjectDetails, Job,
    JobLifecycleState, JobRun, JobRunLifecycleState, Model, ModelLifecycleState, Project,
    ProjectLifecycleState, UpdateJobDetails, UpdateModelDetails, UpdateProjectDetails, WireEnum,
    WorkRequest, WorkRequestStatus,
};
use crate::transport::Response;
use crate::waiter::{wait_for_state, WaitOutcome, WaiterConfig};

/// Result of an operation tracked through a work request
#[derive(Debug, Clone, PartialEq)]
pub struct WorkRequestOutcome {
    /// Response of the initiating call
    pub operation: Response<()>,
    /// Last poll of the work request; `None` when no target states were given
    pub work_request: Option<Response<WorkRequest>>,
}

/// Convenience wrappers pairing a mutating call with a wait
#[derive(Clone)]
pub struct DataScienceCompositeOperations {
    client: DataScienceClient,
}

fn project_state(project: &Project) -> Option<&str> {
    project.lifecycle_state.as_ref().map(WireEnum::as_str)
}

fn job_state(job: &Job) -> Option<&str> {
    job.lifecycle_state.as_ref().map(WireEnum::as_str)
}

fn job_run_state(run: &JobRun) -> Option<&str> {
    run.lifecycle_state.as_ref().map(WireEnum::as_str)
}

fn model_state(model: &Model) -> Option<&str> {
    model.lifecycle_state.as_ref().map(WireEnum::as_str)
}

fn work_request_status(work_request: &WorkRequest) -> Option<&str> {
    work_request.status.as_ref().map(WireEnum::as_str)
}

fn targets<S: WireEnum>(states: &[S]) -> Vec<String> {
    states.iter().map(|s| s.as_str().to_string()).collect()
}

fn failed<I: Serialize>(initial: Response<I>, source: Error) -> Error {
    Error::CompositeOperationFailed {
        partial: Box::new(initial.into_untyped()),
        source: Box::new(source),
    }
}

fn resource_id<I: Serialize>(initial: Response<I>, id: Option<&String>) -> Result<(Response<I>, String)> {
    match id.cloned() {
        Some(id) => Ok((initial, id)),
        None => Err(failed(
            initial,
            Error::IncompleteResponse("response carries no resource id to poll".to_string()),
        )),
    }
}

fn reached<I: Serialize, T>(initial: Response<I>, outcome: WaitOutcome<T>) -> Result<Response<T>> {
    match outcome {
        WaitOutcome::Reached(response) => Ok(response),
        WaitOutcome::NotFound => Err(failed(
            initial,
            Error::IncompleteResponse("resource disappeared while waiting".to_string()),
        )),
    }
}

fn reached_or_gone<T>(initial: Response<()>, outcome: WaitOutcome<T>) -> Response<Option<T>> {
    match outcome {
        WaitOutcome::Reached(response) => response.map(Some),
        WaitOutcome::NotFound => initial.map(|_| None),
    }
}

impl DataScienceCompositeOperations {
    pub fn new(client: DataScienceClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &DataScienceClient {
        &self.client
    }

    /// Run the wait loop, wrapping any failure with the initiating response
    async fn await_state<I, T, F, Fut>(
        &self,
        initial: Response<I>,
        targets: Vec<String>,
        succeed_on_not_found: bool,
        waiter: Option<WaiterConfig>,
        state_of: fn(&T) -> Option<&str>,
        poll: F,
    ) -> Result<(Response<I>, WaitOutcome<T>)>
    where
        I: Serialize,
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<Response<T>>>,
    {
        let config = waiter.unwrap_or_else(|| self.client.config().waiter.clone());
        info!(
            targets = ?targets,
            max_wait_seconds = config.max_wait_seconds,
            "Waiting for target state"
        );
        match wait_for_state(&config, &targets, succeed_on_not_found, state_of, poll).await {
            Ok(outcome) => Ok((initial, outcome)),
            Err(source) => Err(failed(initial, source)),
        }
    }

    async fn follow_work_request(
        &self,
        operation: Response<()>,
        wait_for_states: &[WorkRequestStatus],
        waiter: Option<WaiterConfig>,
    ) -> Result<WorkRequestOutcome> {
        if wait_for_states.is_empty() {
            return Ok(WorkRequestOutcome {
                operation,
                work_request: None,
            });
        }
        let work_request_id = match operation.opc_work_request_id() {
            Some(id) => id.to_string(),
            None => {
                return Err(failed(
                    operation,
                    Error::IncompleteResponse("missing opc-work-request-id header".to_string()),
                ))
            }
        };

        let poll_options = RequestOptions::default();
        let (operation, outcome) = self
            .await_state(
                operation,
                targets(wait_for_states),
                false,
                waiter,
                work_request_status,
                || self.client.get_work_request(&work_request_id, &poll_options),
            )
            .await?;
        let work_request = reached(operation.clone(), outcome)?;
        Ok(WorkRequestOutcome {
            operation,
            work_request: Some(work_request),
        })
    }

    pub async fn create_project_and_wait_for_state(
        &self,
        details: &CreateProjectDetails,
        options: &CreateOptions,
        wait_for_states: &[ProjectLifecycleState],
        waiter: Option<WaiterConfig>,
    ) -> Result<Response<Project>> {
        let created = self.client.create_project(details, options).await?;
        if wait_for_states.is_empty() {
            return Ok(created);
        }
        let id = created.data.id.clone();
        let (created, project_id) = resource_id(created, id.as_ref())?;
        let poll_options = RequestOptions::default();
        let (created, outcome) = self
            .await_state(
                created,
                targets(wait_for_states),
                false,
                waiter,
                project_state,
                || self.client.get_project(&project_id, &poll_options),
            )
            .await?;
        reached(created, outcome)
    }

    pub async fn update_project_and_wait_for_state(
        &self,
        project_id: &str,
        details: &UpdateProjectDetails,
        options: &UpdateOptions,
        wait_for_states: &[ProjectLifecycleState],
        waiter: Option<WaiterConfig>,
    ) -> Result<Response<Project>> {
        let updated = self.client.update_project(project_id, details, options).await?;
        if wait_for_states.is_empty() {
            return Ok(updated);
        }
        let poll_options = RequestOptions::default();
        let (updated, outcome) = self
            .await_state(
                updated,
                targets(wait_for_states),
                false,
                waiter,
                project_state,
                || self.client.get_project(project_id, &poll_options),
            )
            .await?;
        reached(updated, outcome)
    }

    /// Delete a project and wait on the work request tracking the deletion
    pub async fn delete_project_and_wait_for_work_request(
        &self,
        project_id: &str,
        options: &UpdateOptions,
        wait_for_states: &[WorkRequestStatus],
        waiter: Option<WaiterConfig>,
    ) -> Result<WorkRequestOutcome> {
        let deleted = self.client.delete_project(project_id, options).await?;
        self.follow_work_request(deleted, wait_for_states, waiter).await
    }

    pub async fn create_job_and_wait_for_state(
        &self,
        details: &CreateJobDetails,
        options: &CreateOptions,
        wait_for_states: &[JobLifecycleState],
        waiter: Option<WaiterConfig>,
    ) -> Result<Response<Job>> {
        let created = self.client.create_job(details, options).await?;
        if wait_for_states.is_empty() {
            return Ok(created);
        }
        let id = created.data.id.clone();
        let (created, job_id) = resource_id(created, id.as_ref())?;
        let poll_options = RequestOptions::default();
        let (created, outcome) = self
            .await_state(
                created,
                targets(wait_for_states),
                false,
                waiter,
                job_state,
                || self.client.get_job(&job_id, &poll_options),
            )
            .await?;
        reached(created, outcome)
    }

    pub async fn update_job_and_wait_for_state(
        &self,
        job_id: &str,
        details: &UpdateJobDetails,
        options: &UpdateOptions,
        wait_for_states: &[JobLifecycleState],
        waiter: Option<WaiterConfig>,
    ) -> Result<Response<Job>> {
        let updated = self.client.update_job(job_id, details, options).await?;
        if wait_for_states.is_empty() {
            return Ok(updated);
        }
        let poll_options = RequestOptions::default();
        let (updated, outcome) = self
            .await_state(
                updated,
                targets(wait_for_states),
                false,
                waiter,
                job_state,
                || self.client.get_job(job_id, &poll_options),
            )
            .await?;
        reached(updated, outcome)
    }

    /// Delete a job and wait on the work request tracking the deletion
    pub async fn delete_job_and_wait_for_work_request(
        &self,
        job_id: &str,
        options: &DeleteJobOptions,
        wait_for_states: &[WorkRequestStatus],
        waiter: Option<WaiterConfig>,
    ) -> Result<WorkRequestOutcome> {
        let deleted = self.client.delete_job(job_id, options).await?;
        self.follow_work_request(deleted, wait_for_states, waiter).await
    }

    pub async fn create_job_run_and_wait_for_state(
        &self,
        details: &CreateJobRunDetails,
        options: &CreateOptions,
        wait_for_states: &[JobRunLifecycleState],
        waiter: Option<WaiterConfig>,
    ) -> Result<Response<JobRun>> {
        let created = self.client.create_job_run(details, options).await?;
        if wait_for_states.is_empty() {
            return Ok(created);
        }
        let id = created.data.id.clone();
        let (created, job_run_id) = resource_id(created, id.as_ref())?;
        let poll_options = RequestOptions::default();
        let (created, outcome) = self
            .await_state(
                created,
                targets(wait_for_states),
                false,
                waiter,
                job_run_state,
                || self.client.get_job_run(&job_run_id, &poll_options),
            )
            .await?;
        reached(created, outcome)
    }

    /// Cancel a run and wait, typically for CANCELED
    pub async fn cancel_job_run_and_wait_for_state(
        &self,
        job_run_id: &str,
        options: &UpdateOptions,
        wait_for_states: &[JobRunLifecycleState],
        waiter: Option<WaiterConfig>,
    ) -> Result<Response<Option<JobRun>>> {
        let canceled = self.client.cancel_job_run(job_run_id, options).await?;
        if wait_for_states.is_empty() {
            return Ok(canceled.map(|_| None));
        }
        let poll_options = RequestOptions::default();
        let (canceled, outcome) = self
            .await_state(
                canceled,
                targets(wait_for_states),
                false,
                waiter,
                job_run_state,
                || self.client.get_job_run(job_run_id, &poll_options),
            )
            .await?;
        Ok(reached(canceled, outcome)?.map(Some))
    }

    /// Delete a run and wait; a 404 counts as DELETED when that is a target
    pub async fn delete_job_run_and_wait_for_state(
        &self,
        job_run_id: &str,
        options: &UpdateOptions,
        wait_for_states: &[JobRunLifecycleState],
        waiter: Option<WaiterConfig>,
    ) -> Result<Response<Option<JobRun>>> {
        let deleted = self.client.delete_job_run(job_run_id, options).await?;
        if wait_for_states.is_empty() {
            return Ok(deleted.map(|_| None));
        }
        let succeed_on_not_found = wait_for_states.contains(&JobRunLifecycleState::Deleted);
        let poll_options = RequestOptions::default();
        let (deleted, outcome) = self
            .await_state(
                deleted,
                targets(wait_for_states),
                succeed_on_not_found,
                waiter,
                job_run_state,
                || self.client.get_job_run(job_run_id, &poll_options),
            )
            .await?;
        Ok(reached_or_gone(deleted, outcome))
    }

    pub async fn create_model_and_wait_for_state(
        &self,
        details: &CreateModelDetails,
        options: &CreateOptions,
        wait_for_states: &[ModelLifecycleState],
        waiter: Option<WaiterConfig>,
    ) -> Result<Response<Model>> {
        let created = self.client.create_model(details, options).await?;
        if wait_for_states.is_empty() {
            return Ok(created);
        }
        let id = created.data.id.clone();
        let (created, model_id) = resource_id(created, id.as_ref())?;
        let poll_options = RequestOptions::default();
        let (created, outcome) = self
            .await_state(
                created,
                targets(wait_for_states),
                false,
                waiter,
                model_state,
                || self.client.get_model(&model_id, &poll_options),
            )
            .await?;
        reached(created, outcome)
    }

    pub async fn update_model_and_wait_for_state(
        &self,
        model_id: &str,
        details: &UpdateModelDetails,
        options: &UpdateOptions,
        wait_for_states: &[ModelLifecycleState],
        waiter: Option<WaiterConfig>,
    ) -> Result<Response<Model>> {
        let updated = self.client.update_model(model_id, details, options).await?;
        self.wait_for_model(updated, model_id, wait_for_states, waiter)
            .await
    }

    pub async fn activate_model_and_wait_for_state(
        &self,
        model_id: &str,
        options: &UpdateOptions,
        wait_for_states: &[ModelLifecycleState],
        waiter: Option<WaiterConfig>,
    ) -> Result<Response<Model>> {
        let activated = self.client.activate_model(model_id, options).await?;
        self.wait_for_model(activated, model_id, wait_for_states, waiter)
            .await
    }

    pub async fn deactivate_model_and_wait_for_state(
        &self,
        model_id: &str,
        options: &UpdateOptions,
        wait_for_states: &[ModelLifecycleState],
        waiter: Option<WaiterConfig>,
    ) -> Result<Response<Model>> {
        let deactivated = self.client.deactivate_model(model_id, options).await?;
        self.wait_for_model(deactivated, model_id, wait_for_states, waiter)
            .await
    }

    /// Delete a model and wait; a 404 counts as DELETED when that is a target
    pub async fn delete_model_and_wait_for_state(
        &self,
        model_id: &str,
        options: &UpdateOptions,
        wait_for_states: &[ModelLifecycleState],
        waiter: Option<WaiterConfig>,
    ) -> Result<Response<Option<Model>>> {
        let deleted = self.client.delete_model(model_id, options).await?;
        if wait_for_states.is_empty() {
            return Ok(deleted.map(|_| None));
        }
        let succeed_on_not_found = wait_for_states.contains(&ModelLifecycleState::Deleted);
        let poll_options = RequestOptions::default();
        let (deleted, outcome) = self
            .await_state(
                deleted,
                targets(wait_for_states),
                succeed_on_not_found,
                waiter,
                model_state,
                || self.client.get_model(model_id, &poll_options),
            )
            .await?;
        Ok(reached_or_gone(deleted, outcome))
    }

    async fn wait_for_model(
        &self,
        initial: Response<Model>,
        model_id: &str,
        wait_for_states: &[ModelLifecycleState],
        waiter: Option<WaiterConfig>,
    ) -> Result<Response<Model>> {
        if wait_for_states.is_empty() {
            return Ok(initial);
        }
        let poll_options = RequestOptions::default();
        let (initial, outcome) = self
            .await_state(
                initial,
                targets(wait_for_states),
                false,
                waiter,
                model_state,
                || self.client.get_model(model_id, &poll_options),
            )
            .await?;
        reached(initial, outcome)
    }
}

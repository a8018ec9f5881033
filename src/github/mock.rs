use crate::errors::{GhError, Result};
use crate::github::api::GitHubApi;
use crate::github::types::{
    DeploymentListOptions, DeploymentRequest, DeploymentStatusRequest, ListOptions, ReleaseEdit,
    ReleaseRequest,
};
use crate::repository::Repository;
use serde_json::{json, Value};
use std::sync::Mutex;

/// One recorded call against the API, with the request it carried
#[derive(Debug, Clone, PartialEq)]
pub enum ApiCall {
    GetDeployment(i64),
    ListDeployments(DeploymentListOptions),
    CreateDeployment(DeploymentRequest),
    ListDeploymentStatuses(i64, ListOptions),
    GetDeploymentStatus(i64, i64),
    CreateDeploymentStatus(i64, DeploymentStatusRequest),
    GetLatestRelease,
    GetRelease(i64),
    GetReleaseByTag(String),
    ListReleases(ListOptions),
    CreateRelease(ReleaseRequest),
    EditRelease(i64, ReleaseEdit),
    DeleteRelease(i64),
}

pub struct MockGitHubApi {
    pub response: Value,
    pub failure: Option<(u16, String)>,
    pub calls: Mutex<Vec<(Repository, ApiCall)>>,
}

impl MockGitHubApi {
    pub fn new() -> Self {
        Self {
            response: json!({ "id": 42 }),
            failure: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_response(mut self, response: Value) -> Self {
        self.response = response;
        self
    }

    pub fn failing_with(mut self, status: u16, message: &str) -> Self {
        self.failure = Some((status, message.to_string()));
        self
    }

    pub fn get_calls(&self) -> Vec<ApiCall> {
        self.calls.lock().unwrap().iter().map(|(_, call)| call.clone()).collect()
    }

    pub fn get_repositories(&self) -> Vec<Repository> {
        self.calls.lock().unwrap().iter().map(|(repository, _)| repository.clone()).collect()
    }

    fn record(&self, repository: &Repository, call: ApiCall) -> Result<Value> {
        self.calls.lock().unwrap().push((repository.clone(), call));
        match &self.failure {
            Some((status, message)) => Err(GhError::Api {
                status: *status,
                message: message.clone(),
            }),
            None => Ok(self.response.clone()),
        }
    }
}

impl GitHubApi for MockGitHubApi {
    fn get_deployment(&self, repository: &Repository, id: i64) -> Result<Value> {
        self.record(repository, ApiCall::GetDeployment(id))
    }

    fn list_deployments(&self, repository: &Repository, options: &DeploymentListOptions) -> Result<Value> {
        self.record(repository, ApiCall::ListDeployments(options.clone()))
    }

    fn create_deployment(&self, repository: &Repository, request: &DeploymentRequest) -> Result<Value> {
        self.record(repository, ApiCall::CreateDeployment(request.clone()))
    }

    fn list_deployment_statuses(&self, repository: &Repository, deployment_id: i64, options: &ListOptions) -> Result<Value> {
        self.record(repository, ApiCall::ListDeploymentStatuses(deployment_id, *options))
    }

    fn get_deployment_status(&self, repository: &Repository, deployment_id: i64, status_id: i64) -> Result<Value> {
        self.record(repository, ApiCall::GetDeploymentStatus(deployment_id, status_id))
    }

    fn create_deployment_status(&self, repository: &Repository, deployment_id: i64, request: &DeploymentStatusRequest) -> Result<Value> {
        self.record(repository, ApiCall::CreateDeploymentStatus(deployment_id, request.clone()))
    }

    fn get_latest_release(&self, repository: &Repository) -> Result<Value> {
        self.record(repository, ApiCall::GetLatestRelease)
    }

    fn get_release(&self, repository: &Repository, id: i64) -> Result<Value> {
        self.record(repository, ApiCall::GetRelease(id))
    }

    fn get_release_by_tag(&self, repository: &Repository, tag: &str) -> Result<Value> {
        self.record(repository, ApiCall::GetReleaseByTag(tag.to_string()))
    }

    fn list_releases(&self, repository: &Repository, options: &ListOptions) -> Result<Value> {
        self.record(repository, ApiCall::ListReleases(*options))
    }

    fn create_release(&self, repository: &Repository, request: &ReleaseRequest) -> Result<Value> {
        self.record(repository, ApiCall::CreateRelease(request.clone()))
    }

    fn edit_release(&self, repository: &Repository, id: i64, edit: &ReleaseEdit) -> Result<Value> {
        self.record(repository, ApiCall::EditRelease(id, edit.clone()))
    }

    fn delete_release(&self, repository: &Repository, id: i64) -> Result<()> {
        self.record(repository, ApiCall::DeleteRelease(id)).map(|_| ())
    }
}

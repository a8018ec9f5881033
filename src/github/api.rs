use crate::config::Config;
use crate::errors::{GhError, Result};
use crate::github::types::{
    DeploymentListOptions, DeploymentRequest, DeploymentStatusRequest, ListOptions, ReleaseEdit,
    ReleaseRequest,
};
use crate::repository::Repository;
use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::Url;
use serde::Deserialize;
use serde_json::Value;

const API_VERSION: &str = "2022-11-28";
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// The slice of the GitHub REST API this tool speaks.
///
/// Responses are handed back as raw JSON, their shape belongs to GitHub.
pub trait GitHubApi {
    fn get_deployment(&self, repository: &Repository, id: i64) -> Result<Value>;
    fn list_deployments(&self, repository: &Repository, options: &DeploymentListOptions) -> Result<Value>;
    fn create_deployment(&self, repository: &Repository, request: &DeploymentRequest) -> Result<Value>;

    fn list_deployment_statuses(&self, repository: &Repository, deployment_id: i64, options: &ListOptions) -> Result<Value>;
    fn get_deployment_status(&self, repository: &Repository, deployment_id: i64, status_id: i64) -> Result<Value>;
    fn create_deployment_status(&self, repository: &Repository, deployment_id: i64, request: &DeploymentStatusRequest) -> Result<Value>;

    fn get_latest_release(&self, repository: &Repository) -> Result<Value>;
    fn get_release(&self, repository: &Repository, id: i64) -> Result<Value>;
    fn get_release_by_tag(&self, repository: &Repository, tag: &str) -> Result<Value>;
    fn list_releases(&self, repository: &Repository, options: &ListOptions) -> Result<Value>;
    fn create_release(&self, repository: &Repository, request: &ReleaseRequest) -> Result<Value>;
    fn edit_release(&self, repository: &Repository, id: i64, edit: &ReleaseEdit) -> Result<Value>;
    fn delete_release(&self, repository: &Repository, id: i64) -> Result<()>;
}

#[derive(Deserialize)]
struct ApiErrorBody {
    message: String,
}

pub struct GitHubApiImpl {
    client: Client,
    base_url: Url,
}

impl GitHubApiImpl {
    pub fn new(config: &Config) -> Result<Self> {
        let base_url = Url::parse(&config.api_url)
            .map_err(|e| GhError::Config(format!("invalid GitHub API URL '{}': {}", config.api_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(GhError::Config(format!("invalid GitHub API URL '{}'", config.api_url)));
        }

        let mut authorization = HeaderValue::from_str(&format!("Bearer {}", config.token))
            .map_err(|_| GhError::Config("GITHUB_TOKEN contains characters not allowed in a header".to_string()))?;
        authorization.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, authorization);
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));
        headers.insert("x-github-api-version", HeaderValue::from_static(API_VERSION));

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()?;

        Ok(Self { client, base_url })
    }

    /// `{base}/repos/{owner}/{repo}/{segments...}`, each segment percent-encoded
    fn endpoint(&self, repository: &Repository, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| GhError::Config(format!("invalid GitHub API URL '{}'", self.base_url)))?
            .pop_if_empty()
            .extend(["repos", repository.owner.as_str(), repository.name.as_str()])
            .extend(segments);
        Ok(url)
    }

    fn send(&self, request: RequestBuilder) -> Result<Response> {
        let request = request.build()?;
        log::debug!("{} {}", request.method(), request.url());

        let response = self.client.execute(request)?;
        let status = response.status();
        log::debug!("GitHub responded with {}", status);

        if status.is_success() {
            return Ok(response);
        }

        let body = response.text()?;
        let message = serde_json::from_str::<ApiErrorBody>(&body)
            .map(|error| error.message)
            .unwrap_or(body);
        let message = if message.trim().is_empty() {
            status.canonical_reason().unwrap_or("no message").to_string()
        } else {
            message
        };

        Err(GhError::Api {
            status: status.as_u16(),
            message,
        })
    }

    fn send_json(&self, request: RequestBuilder) -> Result<Value> {
        let response = self.send(request)?;
        Ok(response.json()?)
    }

    fn get(&self, repository: &Repository, segments: &[&str]) -> Result<Value> {
        let url = self.endpoint(repository, segments)?;
        self.send_json(self.client.get(url))
    }
}

impl GitHubApi for GitHubApiImpl {
    fn get_deployment(&self, repository: &Repository, id: i64) -> Result<Value> {
        self.get(repository, &["deployments", &id.to_string()])
    }

    fn list_deployments(&self, repository: &Repository, options: &DeploymentListOptions) -> Result<Value> {
        let url = self.endpoint(repository, &["deployments"])?;
        self.send_json(self.client.get(url).query(&options.filters).query(&options.list))
    }

    fn create_deployment(&self, repository: &Repository, request: &DeploymentRequest) -> Result<Value> {
        log::info!("Creating deployment of {} to {} on {}", request.git_ref, request.environment, repository);
        let url = self.endpoint(repository, &["deployments"])?;
        self.send_json(self.client.post(url).json(request))
    }

    fn list_deployment_statuses(&self, repository: &Repository, deployment_id: i64, options: &ListOptions) -> Result<Value> {
        let url = self.endpoint(repository, &["deployments", &deployment_id.to_string(), "statuses"])?;
        self.send_json(self.client.get(url).query(options))
    }

    fn get_deployment_status(&self, repository: &Repository, deployment_id: i64, status_id: i64) -> Result<Value> {
        self.get(
            repository,
            &["deployments", &deployment_id.to_string(), "statuses", &status_id.to_string()],
        )
    }

    fn create_deployment_status(&self, repository: &Repository, deployment_id: i64, request: &DeploymentStatusRequest) -> Result<Value> {
        log::info!("Setting deployment {} of {} to {}", deployment_id, repository, request.state);
        let url = self.endpoint(repository, &["deployments", &deployment_id.to_string(), "statuses"])?;
        self.send_json(self.client.post(url).json(request))
    }

    fn get_latest_release(&self, repository: &Repository) -> Result<Value> {
        self.get(repository, &["releases", "latest"])
    }

    fn get_release(&self, repository: &Repository, id: i64) -> Result<Value> {
        self.get(repository, &["releases", &id.to_string()])
    }

    fn get_release_by_tag(&self, repository: &Repository, tag: &str) -> Result<Value> {
        self.get(repository, &["releases", "tags", tag])
    }

    fn list_releases(&self, repository: &Repository, options: &ListOptions) -> Result<Value> {
        let url = self.endpoint(repository, &["releases"])?;
        self.send_json(self.client.get(url).query(options))
    }

    fn create_release(&self, repository: &Repository, request: &ReleaseRequest) -> Result<Value> {
        log::info!("Creating release {} on {}", request.tag_name, repository);
        let url = self.endpoint(repository, &["releases"])?;
        self.send_json(self.client.post(url).json(request))
    }

    fn edit_release(&self, repository: &Repository, id: i64, edit: &ReleaseEdit) -> Result<Value> {
        log::info!("Editing release {} on {}", id, repository);
        let url = self.endpoint(repository, &["releases", &id.to_string()])?;
        self.send_json(self.client.patch(url).json(edit))
    }

    fn delete_release(&self, repository: &Repository, id: i64) -> Result<()> {
        log::info!("Deleting release {} on {}", id, repository);
        let url = self.endpoint(repository, &["releases", &id.to_string()])?;
        self.send(self.client.delete(url))?;
        Ok(())
    }
}

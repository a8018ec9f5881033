use crate::errors::{GhError, Result};
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Body of `POST /repos/{owner}/{repo}/deployments`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeploymentRequest {
    #[serde(rename = "ref")]
    pub git_ref: String,
    pub task: String,
    pub auto_merge: bool,
    /// Always serialized: an empty list tells GitHub to skip commit status checks.
    pub required_contexts: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<Value>,
    pub environment: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub transient_environment: bool,
    pub production_environment: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeploymentState {
    Error,
    Failure,
    Inactive,
    InProgress,
    Queued,
    Pending,
}

impl DeploymentState {
    pub const ALL: [DeploymentState; 6] = [
        DeploymentState::Error,
        DeploymentState::Failure,
        DeploymentState::Inactive,
        DeploymentState::InProgress,
        DeploymentState::Queued,
        DeploymentState::Pending,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DeploymentState::Error => "error",
            DeploymentState::Failure => "failure",
            DeploymentState::Inactive => "inactive",
            DeploymentState::InProgress => "in_progress",
            DeploymentState::Queued => "queued",
            DeploymentState::Pending => "pending",
        }
    }
}

impl FromStr for DeploymentState {
    type Err = GhError;

    fn from_str(value: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|state| state.as_str() == value)
            .ok_or_else(|| {
                GhError::Validation(format!(
                    "invalid state '{}': should be one of error, failure, inactive, in_progress, queued or pending",
                    value
                ))
            })
    }
}

impl fmt::Display for DeploymentState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of `POST /repos/{owner}/{repo}/deployments/{id}/statuses`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeploymentStatusRequest {
    pub state: DeploymentState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment_url: Option<String>,
    pub auto_inactive: bool,
}

/// Body of `POST /repos/{owner}/{repo}/releases`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReleaseRequest {
    pub tag_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_commitish: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    pub draft: bool,
    pub prerelease: bool,
}

/// Body of `PATCH /repos/{owner}/{repo}/releases/{id}`
///
/// Only the fields that are `Some` reach GitHub, everything else is left untouched
/// on the release.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ReleaseEdit {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_commitish: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub draft: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prerelease: Option<bool>,
}

/// Pagination query parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ListOptions {
    pub page: u32,
    pub per_page: u32,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: 10,
        }
    }
}

/// Filters for `GET /repos/{owner}/{repo}/deployments`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DeploymentFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sha: Option<String>,
    #[serde(rename = "ref", skip_serializing_if = "Option::is_none")]
    pub git_ref: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeploymentListOptions {
    pub filters: DeploymentFilters,
    pub list: ListOptions,
}

/// How `release get` addresses a release
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReleaseRef {
    Latest,
    Id(i64),
    Tag(String),
}

impl ReleaseRef {
    /// `latest` (any case) first, then a numeric id, then a tag name.
    ///
    /// A tag that looks like a number is always read as an id.
    pub fn resolve(value: &str) -> Self {
        if value.eq_ignore_ascii_case("latest") {
            return ReleaseRef::Latest;
        }

        match value.parse::<i64>() {
            Ok(id) => ReleaseRef::Id(id),
            Err(_) => ReleaseRef::Tag(value.to_string()),
        }
    }
}

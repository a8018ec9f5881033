pub mod api;
pub mod types;

#[cfg(test)]
pub mod mock;
#[cfg(test)]
mod tests;

pub use api::{GitHubApi, GitHubApiImpl};
pub use types::{
    DeploymentFilters, DeploymentListOptions, DeploymentRequest, DeploymentState,
    DeploymentStatusRequest, ListOptions, ReleaseEdit, ReleaseRef, ReleaseRequest,
};

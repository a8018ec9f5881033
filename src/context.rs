use crate::github::GitHubApi;
use crate::repository::Repository;

/// What every command runs against: the target repository and the API client for it.
///
/// Built once in `main` and handed down, nothing about it is global.
pub struct Context<A: GitHubApi> {
    pub repository: Repository,
    pub api: A,
}

impl<A: GitHubApi> Context<A> {
    pub fn new(repository: Repository, api: A) -> Self {
        Self { repository, api }
    }
}

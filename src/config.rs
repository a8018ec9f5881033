use crate::errors::{GhError, Result};
use crate::repository::Repository;

pub const TOKEN_VAR: &str = "GITHUB_TOKEN";
pub const REPOSITORY_VAR: &str = "GITHUB_REPOSITORY";
pub const API_URL_VAR: &str = "GITHUB_API_URL";

pub const DEFAULT_API_URL: &str = "https://api.github.com";

const TOKEN_HELP: &str = "https://docs.github.com/en/authentication/keeping-your-account-and-data-secure/managing-your-personal-access-tokens";

/// Everything a command needs before it can talk to GitHub
#[derive(Debug, Clone)]
pub struct Config {
    pub token: String,
    pub api_url: String,
    pub repository: Repository,
}

impl Config {
    pub fn from_env(repository_flag: Option<&str>) -> Result<Self> {
        Self::from_lookup(repository_flag, |key| std::env::var(key).ok())
    }

    /// Resolve the configuration with `lookup` standing in for the process environment.
    ///
    /// The `--repository` flag wins over `GITHUB_REPOSITORY`; empty values count as unset.
    pub fn from_lookup<F>(repository_flag: Option<&str>, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| lookup(key).filter(|value| !value.is_empty());

        let token = lookup(TOKEN_VAR).ok_or_else(|| {
            GhError::Config(format!(
                "please define {}. See documentation to obtain one if needed: {}",
                TOKEN_VAR, TOKEN_HELP
            ))
        })?;

        let repository = repository_flag
            .filter(|value| !value.is_empty())
            .map(str::to_string)
            .or_else(|| lookup(REPOSITORY_VAR))
            .ok_or_else(|| {
                GhError::Config(format!(
                    "GitHub repository is required. Use --repository or set {}",
                    REPOSITORY_VAR
                ))
            })?
            .parse::<Repository>()?;

        let api_url = lookup(API_URL_VAR).unwrap_or_else(|| DEFAULT_API_URL.to_string());

        log::debug!("Using repository {} on {}", repository, api_url);

        Ok(Self {
            token,
            api_url,
            repository,
        })
    }
}

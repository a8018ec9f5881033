use crate::errors::{GhError, Result};
use std::fmt;
use std::str::FromStr;

/// Owner and name of a GitHub repository, as in `octocat/Hello-World`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    pub owner: String,
    pub name: String,
}

impl FromStr for Repository {
    type Err = GhError;

    fn from_str(value: &str) -> Result<Self> {
        let mut parts = value.split('/');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(owner), Some(name), None) if !owner.is_empty() && !name.is_empty() => Ok(Self {
                owner: owner.to_string(),
                name: name.to_string(),
            }),
            _ => Err(GhError::Config(format!(
                "repository '{}' should respect the following format: <owner>/<repository>",
                value
            ))),
        }
    }
}

impl fmt::Display for Repository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_owner_and_name() {
        let repository: Repository = "octocat/Hello-World".parse().unwrap();
        assert_eq!(repository.owner, "octocat");
        assert_eq!(repository.name, "Hello-World");
        assert_eq!(repository.to_string(), "octocat/Hello-World");
    }

    #[test]
    fn test_parse_keeps_dots_and_dashes() {
        let repository: Repository = "my-org/my.repo_name".parse().unwrap();
        assert_eq!(repository.owner, "my-org");
        assert_eq!(repository.name, "my.repo_name");
    }

    #[test]
    fn test_parse_rejects_malformed_values() {
        for value in ["", "octocat", "/Hello-World", "octocat/", "/", "a/b/c", "octocat//x"] {
            let result = value.parse::<Repository>();
            assert!(
                matches!(result, Err(GhError::Config(_))),
                "expected a configuration error for {:?}",
                value
            );
        }
    }
}

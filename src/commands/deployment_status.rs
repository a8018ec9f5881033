use crate::{
    commands::{non_empty, PaginationArgs},
    context::Context,
    errors::Result,
    github::{DeploymentState, DeploymentStatusRequest, GitHubApi},
    output::{render_id, render_json},
};
use clap::{ArgAction, Args, Subcommand};
use std::io::Write;

#[derive(Debug, Args)]
pub struct DeploymentStatus {
    #[command(subcommand)]
    pub command: Option<DeploymentStatusCommand>,
}

#[derive(Debug, Subcommand)]
pub enum DeploymentStatusCommand {
    /// List deployment statuses
    #[command(visible_alias = "ls")]
    List {
        /// Deployment id
        deployment_id: i64,

        #[command(flatten)]
        pagination: PaginationArgs,
    },
    /// Get a single deployment status
    #[command(visible_alias = "g")]
    Get {
        /// Deployment id
        deployment_id: i64,
        /// Deployment status id
        status_id: i64,
    },
    /// Create a deployment status
    #[command(visible_alias = "c")]
    Create(DeploymentStatusCreateArgs),
}

#[derive(Debug, Args)]
pub struct DeploymentStatusCreateArgs {
    /// Deployment id
    pub deployment_id: i64,

    /// One of error, failure, inactive, in_progress, queued or pending
    pub state: String,

    /// The full URL of the deployment's output
    #[arg(long = "logURL")]
    pub log_url: Option<String>,

    /// A short description of the status. The maximum description length is 140 characters
    #[arg(short, long)]
    pub description: Option<String>,

    /// Name for the target deployment environment, which can be changed when setting a deploy status
    #[arg(short, long)]
    pub environment: Option<String>,

    /// Sets the URL for accessing your environment
    #[arg(short = 'u', long = "environmentURL")]
    pub environment_url: Option<String>,

    /// Adds a new inactive status to all prior non-transient, non-production environment deployments
    /// with the same repository and environment name as the created status's deployment
    #[arg(
        short = 'a',
        long = "autoInactive",
        default_value_t = true,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        action = ArgAction::Set
    )]
    pub auto_inactive: bool,
}

impl DeploymentStatusCreateArgs {
    /// Fails on an unknown state before anything is sent
    pub fn to_request(&self) -> Result<DeploymentStatusRequest> {
        let state: DeploymentState = self.state.parse()?;

        Ok(DeploymentStatusRequest {
            state,
            log_url: non_empty(&self.log_url),
            description: non_empty(&self.description),
            environment: non_empty(&self.environment),
            environment_url: non_empty(&self.environment_url),
            auto_inactive: self.auto_inactive,
        })
    }
}

impl DeploymentStatusCommand {
    pub fn execute<A: GitHubApi, W: Write>(&self, context: &Context<A>, out: &mut W) -> Result<()> {
        let repository = &context.repository;

        match self {
            DeploymentStatusCommand::List {
                deployment_id,
                pagination,
            } => {
                let statuses = context.api.list_deployment_statuses(
                    repository,
                    *deployment_id,
                    &pagination.to_options(),
                )?;
                render_json(out, &statuses)
            }
            DeploymentStatusCommand::Get {
                deployment_id,
                status_id,
            } => {
                let status = context
                    .api
                    .get_deployment_status(repository, *deployment_id, *status_id)?;
                render_json(out, &status)
            }
            DeploymentStatusCommand::Create(args) => {
                let request = args.to_request()?;
                let status = context
                    .api
                    .create_deployment_status(repository, args.deployment_id, &request)?;
                render_id(out, &status)
            }
        }
    }
}

use crate::{
    commands::{non_empty, PaginationArgs},
    context::Context,
    errors::Result,
    github::{DeploymentFilters, DeploymentListOptions, DeploymentRequest, GitHubApi},
    output::{render_id, render_json},
};
use clap::{ArgAction, Args, Subcommand};
use serde_json::Value;
use std::io::Write;

#[derive(Debug, Args)]
pub struct Deployment {
    #[command(subcommand)]
    pub command: Option<DeploymentCommand>,
}

#[derive(Debug, Subcommand)]
pub enum DeploymentCommand {
    /// Get a deployment
    #[command(visible_alias = "g")]
    Get {
        /// Deployment id
        id: i64,
    },
    /// List deployments
    #[command(visible_alias = "ls")]
    List(DeploymentListArgs),
    /// Create a deployment
    #[command(visible_alias = "c")]
    Create(DeploymentCreateArgs),
}

#[derive(Debug, Args)]
pub struct DeploymentListArgs {
    /// SHA of the deployment
    #[arg(short, long)]
    pub sha: Option<String>,

    /// List deployments for a given ref
    #[arg(long = "ref")]
    pub git_ref: Option<String>,

    /// List deployments for a given task
    #[arg(short, long)]
    pub task: Option<String>,

    /// List deployments for a given environment
    #[arg(short, long)]
    pub environment: Option<String>,

    #[command(flatten)]
    pub pagination: PaginationArgs,
}

impl DeploymentListArgs {
    pub fn to_options(&self) -> DeploymentListOptions {
        DeploymentListOptions {
            filters: DeploymentFilters {
                sha: non_empty(&self.sha),
                git_ref: non_empty(&self.git_ref),
                task: non_empty(&self.task),
                environment: non_empty(&self.environment),
            },
            list: self.pagination.to_options(),
        }
    }
}

#[derive(Debug, Args)]
pub struct DeploymentCreateArgs {
    /// The ref to deploy: a branch, tag, or SHA
    #[arg(value_name = "REF")]
    pub git_ref: String,

    /// Specifies a task to execute (e.g., deploy or deploy:migrations)
    #[arg(short, long, default_value = "deploy")]
    pub task: String,

    /// Attempts to automatically merge the default branch into the requested ref, if it's behind the default branch
    #[arg(
        short = 'a',
        long = "autoMerge",
        default_value_t = true,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        action = ArgAction::Set
    )]
    pub auto_merge: bool,

    /// The status contexts to verify against commit status checks. Leave empty to bypass checking entirely
    #[arg(short = 'c', long = "requiredContexts", value_delimiter = ',')]
    pub required_contexts: Vec<String>,

    /// JSON payload with extra information about the deployment
    #[arg(short, long)]
    pub payload: Option<String>,

    /// Name for the target deployment environment (e.g., production, staging, qa)
    #[arg(short, long, default_value = "production")]
    pub environment: String,

    /// Short description of the deployment
    #[arg(short, long)]
    pub description: Option<String>,

    /// Specifies if the given environment is specific to the deployment and will no longer exist at some point in the future
    #[arg(
        long = "transientEnvironment",
        default_value_t = false,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        action = ArgAction::Set
    )]
    pub transient_environment: bool,

    /// Specifies if the given environment is one that end-users directly interact with
    #[arg(
        short = 'i',
        long = "productionEnvironment",
        default_value_t = true,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        action = ArgAction::Set
    )]
    pub production_environment: bool,
}

impl DeploymentCreateArgs {
    pub fn to_request(&self) -> DeploymentRequest {
        DeploymentRequest {
            git_ref: self.git_ref.clone(),
            task: self.task.clone(),
            auto_merge: self.auto_merge,
            required_contexts: self
                .required_contexts
                .iter()
                .filter(|context| !context.is_empty())
                .cloned()
                .collect(),
            payload: non_empty(&self.payload).map(parse_payload),
            environment: self.environment.clone(),
            description: non_empty(&self.description),
            transient_environment: self.transient_environment,
            production_environment: self.production_environment,
        }
    }
}

/// A JSON object is sent as is, anything else as a plain string
fn parse_payload(payload: String) -> Value {
    match serde_json::from_str::<Value>(&payload) {
        Ok(value @ Value::Object(_)) => value,
        _ => Value::String(payload),
    }
}

impl DeploymentCommand {
    pub fn execute<A: GitHubApi, W: Write>(&self, context: &Context<A>, out: &mut W) -> Result<()> {
        let repository = &context.repository;

        match self {
            DeploymentCommand::Get { id } => {
                let deployment = context.api.get_deployment(repository, *id)?;
                render_json(out, &deployment)
            }
            DeploymentCommand::List(args) => {
                let deployments = context.api.list_deployments(repository, &args.to_options())?;
                render_json(out, &deployments)
            }
            DeploymentCommand::Create(args) => {
                let deployment = context.api.create_deployment(repository, &args.to_request())?;
                render_id(out, &deployment)
            }
        }
    }
}

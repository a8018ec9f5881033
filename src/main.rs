use clap::{CommandFactory, Parser, Subcommand};
use commands::deployment::Deployment;
use commands::deployment_status::DeploymentStatus;
use commands::release::Release;
use config::Config;
use context::Context;
use errors::Result;
use github::{GitHubApi, GitHubApiImpl};
use std::io::Write;

mod commands;
mod config;
mod context;
mod errors;
mod github;
mod output;
mod repository;

#[derive(Debug, Parser)] // requires `derive` feature
#[command(name = "ghrest")]
#[command(version)]
#[command(about = "An (unofficial) GitHub command line client for deployments and releases", long_about = None)]
struct Cli {
    /// The owner and repository name, for example octocat/Hello-World. GITHUB_REPOSITORY is used as a fallback
    #[arg(short, long, global = true)]
    repository: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Deployments
    #[command(visible_alias = "d")]
    Deployment(Deployment),
    /// Deployment statuses
    #[command(name = "deployment_status", visible_alias = "ds")]
    DeploymentStatus(DeploymentStatus),
    /// Releases
    #[command(visible_alias = "r")]
    Release(Release),
}

impl Commands {
    fn name(&self) -> &'static str {
        match self {
            Commands::Deployment(_) => "deployment",
            Commands::DeploymentStatus(_) => "deployment_status",
            Commands::Release(_) => "release",
        }
    }

    /// A bare group like `release` only shows its help and needs neither token nor repository
    fn has_action(&self) -> bool {
        match self {
            Commands::Deployment(group) => group.command.is_some(),
            Commands::DeploymentStatus(group) => group.command.is_some(),
            Commands::Release(group) => group.command.is_some(),
        }
    }

    fn execute<A: GitHubApi, W: Write>(&self, context: &Context<A>, out: &mut W) -> Result<()> {
        match self {
            Commands::Deployment(Deployment { command: Some(command) }) => command.execute(context, out),
            Commands::DeploymentStatus(DeploymentStatus { command: Some(command) }) => command.execute(context, out),
            Commands::Release(Release { command: Some(command) }) => command.execute(context, out),
            _ => Ok(()),
        }
    }
}

fn print_group_help(name: &str) -> Result<()> {
    let mut cli = Cli::command();
    cli.build();
    if let Some(group) = cli.find_subcommand_mut(name) {
        group.print_help()?;
    }
    Ok(())
}

fn run<W: Write>(cli: Cli, out: &mut W) -> Result<()> {
    if !cli.command.has_action() {
        return print_group_help(cli.command.name());
    }

    let config = Config::from_env(cli.repository.as_deref())?;
    let api = GitHubApiImpl::new(&config)?;
    let context = Context::new(config.repository, api);

    cli.command.execute(&context, out)?;
    out.flush()?;
    Ok(())
}

fn main() {
    env_logger::init();

    let args = match Cli::try_parse() {
        Ok(args) => args,
        Err(e) => {
            // --help and --version land here too, they are not failures
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if let Err(e) = run(args, &mut out) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

use crate::{
    commands::{non_empty, PaginationArgs},
    context::Context,
    errors::Result,
    github::{GitHubApi, ReleaseEdit, ReleaseRef, ReleaseRequest},
    output::{render_id, render_json},
};
use clap::{ArgAction, Args, Subcommand};
use std::io::{self, Read, Write};

#[derive(Debug, Args)]
pub struct Release {
    #[command(subcommand)]
    pub command: Option<ReleaseCommand>,
}

#[derive(Debug, Subcommand)]
pub enum ReleaseCommand {
    /// Get a release by id, by tag, or the latest one
    #[command(
        visible_alias = "g",
        after_help = "Examples:\n  release get latest\n  release get 133742\n  release get 19.01.2"
    )]
    Get {
        /// `latest`, a release id, or a tag name
        #[arg(value_name = "ID|LATEST|TAG")]
        reference: String,
    },
    /// List releases
    #[command(visible_alias = "ls")]
    List(PaginationArgs),
    /// Create a release
    #[command(visible_alias = "c")]
    Create(ReleaseCreateArgs),
    /// Edit a release, only the given options are changed
    #[command(
        visible_alias = "e",
        after_help = "Examples:\n  release edit 133742 --draft=false    # publish a release\n  echo \"notes\" | release edit 133742 --body -"
    )]
    Edit(ReleaseEditArgs),
    /// Delete a release
    #[command(visible_alias = "d")]
    Delete {
        /// Release id
        id: i64,
    },
}

#[derive(Debug, Args)]
pub struct ReleaseCreateArgs {
    /// The name of the tag
    #[arg(value_name = "TAG_NAME")]
    pub tag_name: String,

    /// The commitish value that determines where the Git tag is created from. Unused if the Git tag already exists
    #[arg(short = 'c', long = "targetCommitish")]
    pub target_commitish: Option<String>,

    /// The name of the release
    #[arg(short, long)]
    pub name: Option<String>,

    /// Text describing the contents of the tag, `-` reads it from stdin
    #[arg(short, long)]
    pub body: Option<String>,

    /// true to create a draft (unpublished) release, false to create a published one
    #[arg(
        short,
        long,
        default_value_t = false,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        action = ArgAction::Set
    )]
    pub draft: bool,

    /// true to identify the release as a prerelease, false to identify the release as a full release
    #[arg(
        short,
        long,
        default_value_t = false,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        action = ArgAction::Set
    )]
    pub prerelease: bool,
}

impl ReleaseCreateArgs {
    pub fn to_request<R: Read>(&self, stdin: &mut R) -> Result<ReleaseRequest> {
        Ok(ReleaseRequest {
            tag_name: self.tag_name.clone(),
            target_commitish: non_empty(&self.target_commitish),
            name: non_empty(&self.name),
            body: read_body(non_empty(&self.body), stdin)?,
            draft: self.draft,
            prerelease: self.prerelease,
        })
    }
}

#[derive(Debug, Args)]
pub struct ReleaseEditArgs {
    /// Release id
    pub id: i64,

    /// The name of the tag
    #[arg(short = 't', long = "tagName")]
    pub tag_name: Option<String>,

    /// The commitish value that determines where the Git tag is created from. Unused if the Git tag already exists
    #[arg(short = 'c', long = "targetCommitish")]
    pub target_commitish: Option<String>,

    /// The name of the release
    #[arg(short, long)]
    pub name: Option<String>,

    /// Text describing the contents of the tag, `-` reads it from stdin
    #[arg(short, long)]
    pub body: Option<String>,

    /// true to turn the release into a draft, false to publish it
    #[arg(
        short,
        long,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        action = ArgAction::Set
    )]
    pub draft: Option<bool>,

    /// true to identify the release as a prerelease, false to identify the release as a full release
    #[arg(
        short,
        long,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        action = ArgAction::Set
    )]
    pub prerelease: Option<bool>,
}

impl ReleaseEditArgs {
    /// Only options present on the command line end up in the edit.
    ///
    /// Unlike create, an explicitly empty string is kept: `--body=` clears the body.
    pub fn to_edit<R: Read>(&self, stdin: &mut R) -> Result<ReleaseEdit> {
        Ok(ReleaseEdit {
            tag_name: self.tag_name.clone(),
            target_commitish: self.target_commitish.clone(),
            name: self.name.clone(),
            body: read_body(self.body.clone(), stdin)?,
            draft: self.draft,
            prerelease: self.prerelease,
        })
    }
}

fn read_body<R: Read>(body: Option<String>, stdin: &mut R) -> Result<Option<String>> {
    match body.as_deref() {
        Some("-") => {
            let mut content = String::new();
            stdin.read_to_string(&mut content)?;
            Ok(Some(content))
        }
        _ => Ok(body),
    }
}

impl ReleaseCommand {
    pub fn execute<A: GitHubApi, W: Write>(&self, context: &Context<A>, out: &mut W) -> Result<()> {
        self.execute_with_input(context, out, &mut io::stdin().lock())
    }

    pub fn execute_with_input<A: GitHubApi, W: Write, R: Read>(
        &self,
        context: &Context<A>,
        out: &mut W,
        stdin: &mut R,
    ) -> Result<()> {
        let repository = &context.repository;

        match self {
            ReleaseCommand::Get { reference } => {
                let release = match ReleaseRef::resolve(reference) {
                    ReleaseRef::Latest => context.api.get_latest_release(repository)?,
                    ReleaseRef::Id(id) => context.api.get_release(repository, id)?,
                    ReleaseRef::Tag(tag) => context.api.get_release_by_tag(repository, &tag)?,
                };
                render_json(out, &release)
            }
            ReleaseCommand::List(pagination) => {
                let releases = context.api.list_releases(repository, &pagination.to_options())?;
                render_json(out, &releases)
            }
            ReleaseCommand::Create(args) => {
                let release = context.api.create_release(repository, &args.to_request(stdin)?)?;
                render_id(out, &release)
            }
            ReleaseCommand::Edit(args) => {
                context.api.edit_release(repository, args.id, &args.to_edit(stdin)?)?;
                Ok(())
            }
            ReleaseCommand::Delete { id } => context.api.delete_release(repository, *id),
        }
    }
}

pub mod deployment;
pub mod deployment_status;
pub mod release;

use crate::github::ListOptions;
use clap::Args;

#[derive(Debug, Args)]
pub struct PaginationArgs {
    /// For paginated result sets, page of results to retrieve
    #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub page: u32,

    /// For paginated result sets, the number of results to include per page
    #[arg(short = 'l', long = "perPage", default_value_t = 10, value_parser = clap::value_parser!(u32).range(1..))]
    pub per_page: u32,
}

impl PaginationArgs {
    pub fn to_options(&self) -> ListOptions {
        ListOptions {
            page: self.page,
            per_page: self.per_page,
        }
    }
}

/// An option given as an empty string counts as not given
fn non_empty(value: &Option<String>) -> Option<String> {
    value.clone().filter(|value| !value.is_empty())
}

//! Pagination argument types for list commands

use clap::Args;

/// Shared pagination arguments for list commands.
///
/// Flatten this into any command that supports pagination:
/// ```ignore
/// List {
///     #[command(flatten)]
///     pagination: PaginationArgs,
/// }
/// ```
#[derive(Args, Debug, Default, Clone)]
pub struct PaginationArgs {
    /// Items requested per page (defaults to the config preference)
    #[arg(long, short = 'n', value_parser = clap::value_parser!(u64).range(1..))]
    pub page_size: Option<u64>,

    /// Keep loading until the last page
    #[arg(long, short = 'a')]
    pub all: bool,
}

impl PaginationArgs {
    /// Page size, falling back to `default`
    pub fn page_size_or(&self, default: usize) -> usize {
        self.page_size
            .and_then(|n| usize::try_from(n).ok())
            .unwrap_or(default)
            .max(1)
    }
}

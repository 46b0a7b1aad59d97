//! Argument types shared across commands
//!
//! Pagination is flattened into every list command; global options are
//! lifted off the top-level parser once and passed down.

mod common;
mod global;
mod pagination;

pub use common::OutputFormat;
pub use global::GlobalOptions;
pub use pagination::PaginationArgs;

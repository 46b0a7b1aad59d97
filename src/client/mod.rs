//! Journal API client

pub mod api;
pub mod journal;
#[cfg(test)]
pub mod mock;
pub mod models;
pub mod pagination;
pub mod rate_limit;

pub use api::{AuthApi, ListingApi, MutationApi};
pub use journal::JournalClient;
#[cfg(test)]
pub use mock::MockJournalClient;
pub use pagination::PaginationParams;


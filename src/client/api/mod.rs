//! API trait definitions split by responsibility
//!
//! This module organizes the Journal API surface into focused sub-traits:
//! - [`AuthApi`] - Sign-in, sign-up and the current user
//! - [`ListingApi`] - Paged collection reads
//! - [`MutationApi`] - Create operations behind the forms

mod auth;
mod listing;
mod mutation;

pub use auth::AuthApi;
pub use listing::ListingApi;
pub use mutation::MutationApi;

//! Reusable command handlers

pub mod create;
pub mod list;
pub mod picker;

pub use create::{create_listed, submit_modal};
pub use list::run_feed;
pub use picker::pick;

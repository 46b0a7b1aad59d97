//! Display model implementations for table and JSON output
//!
//! Display models transform API response types into CLI-friendly formats
//! with appropriate column names and serialization.

mod booking;
mod org;
mod service;
mod specialist;
mod user;

pub use booking::{AppointmentDisplay, BookingDisplay};
pub use org::OrgDisplay;
pub use service::ServiceDisplay;
pub use specialist::{SpecialistDisplay, SpecialistServiceDisplay};
pub use user::UserDisplay;

/// Placeholder for a missing value
pub(crate) const NONE: &str = "--";

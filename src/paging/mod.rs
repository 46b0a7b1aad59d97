//! Incremental paging shared by every list view
//!
//! - [`loader`] - the generic single-flight page loader
//! - [`trigger`] - viewport events and the strategies that turn them into loads
//! - [`sources`] - one [`PageSource`] per list endpoint

pub mod loader;
pub mod sources;
pub mod trigger;

pub use loader::{FeedLabels, LoadOutcome, PageSource, PagedLoader};
pub use sources::{
    AppointmentFeed, BookingFeed, OrganizationFeed, ServiceFeed, SpecialistFeed,
    SpecialistServiceFeed,
};
pub use trigger::{
    LastItemVisible, PICKER_SCROLL_THRESHOLD, ScrollThreshold, Trigger, ViewportEvent,
};

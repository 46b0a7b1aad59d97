//! Display models for CLI output
//!
//! API response types converted into table rows and JSON records.

pub mod display;

pub use display::{
    AppointmentDisplay, BookingDisplay, OrgDisplay, ServiceDisplay, SpecialistDisplay,
    SpecialistServiceDisplay, UserDisplay,
};

//! Booking form

use async_trait::async_trait;

use super::{CreateForm, parse_time, required};
use crate::client::MutationApi;
use crate::client::models::{Booking, CreateBookingRequest};
use crate::error::Result;

/// Message shown after a booking went through
pub const BOOKING_SUCCESS: &str = "Booked successfully";

/// Book a specialist service
#[derive(Debug, Clone, Default)]
pub struct BookingForm {
    pub specialist_service_id: String,
    /// Optional comment for the specialist
    pub note: String,
    /// `datetime-local` value
    pub time: String,
}

impl BookingForm {
    pub fn for_specialist_service(specialist_service_id: impl Into<String>) -> Self {
        Self {
            specialist_service_id: specialist_service_id.into(),
            ..Self::default()
        }
    }
}

#[async_trait]
impl CreateForm for BookingForm {
    type Request = CreateBookingRequest;
    type Created = Booking;

    fn validate(&self) -> Result<CreateBookingRequest> {
        Ok(CreateBookingRequest {
            specialist_service_id: required("specialist_service_id", &self.specialist_service_id)?,
            note: self.note.trim().to_string(),
            time: parse_time("time", &self.time)?,
        })
    }

    fn clear(&mut self) {
        self.note.clear();
        self.time.clear();
    }

    async fn send<C: MutationApi + ?Sized>(
        &self,
        client: &C,
        request: CreateBookingRequest,
    ) -> Result<Booking> {
        client.create_booking(request).await
    }
}

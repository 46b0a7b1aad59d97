//! Booking and appointment display models

use serde::Serialize;
use tabled::Tabled;

use super::NONE;
use crate::client::models::Booking;
use crate::output::formatters::{format_minutes, format_price, format_time, truncate};

const NOTE_WIDTH: usize = 30;

fn or_none(value: Option<String>) -> String {
    value
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| NONE.to_string())
}

/// Duration denormalized onto the booking
fn duration_of(booking: &Booking) -> String {
    booking
        .duration
        .map(format_minutes)
        .unwrap_or_else(|| NONE.to_string())
}

fn price_of(booking: &Booking) -> String {
    booking
        .service
        .as_ref()
        .map(|s| format_price(s.price))
        .unwrap_or_else(|| NONE.to_string())
}

/// One of the signed-in user's bookings
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct BookingDisplay {
    #[tabled(rename = "BOOKING ID")]
    pub id: String,

    #[tabled(rename = "TIME")]
    pub time: String,

    #[tabled(rename = "SERVICE")]
    pub service: String,

    #[tabled(rename = "PRICE")]
    pub price: String,

    #[tabled(rename = "SPECIALIST")]
    pub specialist: String,

    #[tabled(rename = "DURATION")]
    pub duration: String,

    #[tabled(rename = "NOTE")]
    pub note: String,

    #[tabled(skip)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specialist_service_id: Option<String>,
}

impl From<Booking> for BookingDisplay {
    fn from(booking: Booking) -> Self {
        let duration = duration_of(&booking);
        let price = price_of(&booking);
        Self {
            id: or_none(Some(booking.id)),
            time: format_time(&booking.time),
            service: or_none(booking.service.map(|s| s.title)),
            price,
            specialist: or_none(booking.specialist.map(|s| s.fio)),
            duration,
            note: or_none(booking.note.map(|n| truncate(&n, NOTE_WIDTH))),
            specialist_service_id: booking.specialist_service.map(|r| r.id().to_string()),
        }
    }
}

/// A booking seen from the organization side, with the client
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct AppointmentDisplay {
    #[tabled(rename = "BOOKING ID")]
    pub id: String,

    #[tabled(rename = "TIME")]
    pub time: String,

    #[tabled(rename = "CLIENT")]
    pub client: String,

    #[tabled(rename = "EMAIL")]
    pub email: String,

    #[tabled(rename = "SERVICE")]
    pub service: String,

    #[tabled(rename = "PRICE")]
    pub price: String,

    #[tabled(rename = "SPECIALIST")]
    pub specialist: String,

    #[tabled(rename = "DURATION")]
    pub duration: String,

    #[tabled(rename = "NOTE")]
    pub note: String,
}

impl From<Booking> for AppointmentDisplay {
    fn from(booking: Booking) -> Self {
        let duration = duration_of(&booking);
        let price = price_of(&booking);
        let (client, email) = match booking.user {
            Some(user) => (or_none(Some(user.fio)), or_none(Some(user.email))),
            None => (NONE.to_string(), NONE.to_string()),
        };

        Self {
            id: booking.id,
            time: format_time(&booking.time),
            client,
            email,
            service: or_none(booking.service.map(|s| s.title)),
            price,
            specialist: or_none(booking.specialist.map(|s| s.fio)),
            duration,
            note: or_none(booking.note.map(|n| truncate(&n, NOTE_WIDTH))),
        }
    }
}

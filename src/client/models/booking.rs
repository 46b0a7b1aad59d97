//! Booking (registration) models

use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{Reference, Service, Specialist, User};

/// A user's registration for a specialist service.
///
/// Service, specialist and duration are denormalized by the backend so a
/// booking can be rendered without further lookups.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,

    #[serde(
        default,
        alias = "specialist_service_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub specialist_service: Option<Reference>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service: Option<Service>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specialist: Option<Specialist>,

    /// Client that booked (present on organization appointments)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,

    pub time: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,

    /// Duration in minutes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
}

impl Booking {
    /// Booking answered by `POST /registrations`.
    ///
    /// The booking exists once the POST succeeds, whatever the body holds,
    /// so a body that is not a full booking falls back to the submitted fields.
    pub fn from_created(body: Value, request: &CreateBookingRequest) -> Self {
        let id = ["_id", "id"]
            .iter()
            .find_map(|key| body.get(*key).and_then(Value::as_str))
            .unwrap_or_default()
            .to_string();

        match serde_json::from_value::<Booking>(body) {
            Ok(booking) => booking,
            Err(e) => {
                debug!("Booking response is partial ({}), using the submitted fields", e);
                Booking {
                    id,
                    specialist_service: Some(Reference::Id(
                        request.specialist_service_id.clone(),
                    )),
                    service: None,
                    specialist: None,
                    user: None,
                    time: request.time.clone(),
                    note: Some(request.note.clone()).filter(|n| !n.is_empty()),
                    duration: None,
                }
            }
        }
    }
}

/// Body for `POST /registrations`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateBookingRequest {
    pub specialist_service_id: String,
    pub note: String,
    pub time: String,
}

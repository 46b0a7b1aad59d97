//! Journal API data models
//!
//! Domain types exchanged with the booking backend, organized by resource.

mod auth;
mod booking;
mod org;
mod service;
mod specialist;
mod user;

use serde::{Deserialize, Serialize};

pub use auth::{SignInRequest, SignInResponse, SignUpRequest};
pub use booking::{Booking, CreateBookingRequest};
pub use org::{CreateOrganizationRequest, Organization};
pub use service::{CreateServiceRequest, Service};
pub use specialist::{AssignServiceRequest, CreateSpecialistRequest, Specialist, SpecialistService};
pub use user::{Role, User};

/// Link to another resource: either a bare id or an embedded document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Reference {
    Id(String),
    Embedded {
        #[serde(rename = "_id")]
        id: String,
    },
}

impl Reference {
    pub fn id(&self) -> &str {
        match self {
            Reference::Id(id) => id,
            Reference::Embedded { id } => id,
        }
    }
}

/// Envelope returned by every list endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemsResponse<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_accepts_bare_id() {
        let r: Reference = serde_json::from_str(r#""org-1""#).unwrap();
        assert_eq!(r.id(), "org-1");
    }

    #[test]
    fn test_reference_accepts_embedded_document() {
        let r: Reference = serde_json::from_str(r#"{"_id": "org-2", "name": "Clinic"}"#).unwrap();
        assert_eq!(r.id(), "org-2");
    }

    #[test]
    fn test_items_response_missing_items_is_empty() {
        let r: ItemsResponse<Organization> = serde_json::from_str("{}").unwrap();
        assert!(r.items.is_empty());
    }
}

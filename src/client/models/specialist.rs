//! Specialist and specialist-service assignment models

use serde::{Deserialize, Serialize};

use super::{Reference, Service};

/// Specialist working at an organization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Specialist {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,

    /// Full name
    pub fio: String,

    #[serde(
        default,
        alias = "organization_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub organization: Option<Reference>,
}

/// A service as performed by one specialist, with its duration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpecialistService {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,

    #[serde(
        default,
        alias = "specialist_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub specialist: Option<Reference>,

    pub service: Service,

    /// Duration in minutes
    #[serde(default)]
    pub duration: u32,
}

/// Body for `POST /specialists`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateSpecialistRequest {
    pub fio: String,
    pub organization_id: String,
}

/// Body for `POST /specialists/assign-service`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssignServiceRequest {
    pub specialist_id: String,
    pub service_id: String,
    pub duration: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_specialist_service_with_embedded_service() {
        let ss: SpecialistService = serde_json::from_str(
            r#"{
                "_id": "ss-1",
                "specialist": "spec-1",
                "service": {"_id": "svc-1", "title": "Cleaning", "price": 1500},
                "duration": 45
            }"#,
        )
        .unwrap();

        assert_eq!(ss.service.title, "Cleaning");
        assert_eq!(ss.service.price, 1500.0);
        assert_eq!(ss.duration, 45);
        assert_eq!(ss.specialist.unwrap().id(), "spec-1");
    }
}

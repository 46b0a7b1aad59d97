//! Service models

use serde::{Deserialize, Serialize};

use super::Reference;

/// Service offered by an organization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Service {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,

    pub title: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub price: f64,

    /// Owning organization (absent when embedded in a booking)
    #[serde(
        default,
        alias = "organization_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub organization: Option<Reference>,
}

/// Body for `POST /services`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateServiceRequest {
    pub title: String,
    pub price: f64,
    pub description: String,
    pub organization_id: String,
}

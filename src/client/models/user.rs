//! User models

use serde::{Deserialize, Serialize};

/// Account role as reported by `/auth/me`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    User,
    Admin,
    #[default]
    #[serde(other)]
    Unknown,
}

/// Signed-in user, or the client attached to an appointment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,

    /// Full name
    #[serde(default)]
    pub fio: String,

    #[serde(default)]
    pub email: String,

    #[serde(default)]
    pub role: Role,
}

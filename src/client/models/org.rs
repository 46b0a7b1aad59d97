//! Organization models

use serde::{Deserialize, Serialize};

/// Organization resource
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Organization {
    /// Organization ID
    #[serde(rename = "_id", alias = "id")]
    pub id: String,

    /// Organization name
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub location: String,

    /// Whether the signed-in user owns this organization
    #[serde(default, alias = "isOwner")]
    pub is_owner: bool,
}

/// Body for `POST /organizations`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateOrganizationRequest {
    pub name: String,
    pub description: String,
    pub location: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_organization_from_backend_document() {
        let org: Organization = serde_json::from_str(
            r#"{"_id": "org-1", "name": "Clinic", "description": "Dental", "location": "Bishkek", "created_at": "2024-01-01"}"#,
        )
        .unwrap();

        assert_eq!(org.id, "org-1");
        assert_eq!(org.location, "Bishkek");
        assert!(!org.is_owner);
    }

    #[test]
    fn test_organization_owner_flag() {
        let org: Organization =
            serde_json::from_str(r#"{"_id": "org-1", "name": "Mine", "is_owner": true}"#).unwrap();
        assert!(org.is_owner);
        assert!(org.description.is_empty());
    }
}

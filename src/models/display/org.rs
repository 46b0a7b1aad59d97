//! Organization display model

use serde::Serialize;
use tabled::Tabled;

use crate::client::models::Organization;
use crate::output::formatters::truncate;

const DESCRIPTION_WIDTH: usize = 40;

/// Organization display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct OrgDisplay {
    #[tabled(rename = "ORG ID")]
    pub id: String,

    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "LOCATION")]
    pub location: String,

    #[tabled(rename = "DESCRIPTION")]
    pub description: String,

    /// Marked when the signed-in user owns the organization
    #[tabled(rename = "OWNER")]
    #[serde(skip)]
    pub owner: &'static str,

    #[tabled(skip)]
    pub is_owner: bool,
}

impl From<Organization> for OrgDisplay {
    fn from(org: Organization) -> Self {
        Self {
            id: org.id,
            name: org.name,
            location: org.location,
            description: truncate(&org.description, DESCRIPTION_WIDTH),
            owner: if org.is_owner { "yes" } else { "" },
            is_owner: org.is_owner,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::mock::fixtures::org;

    #[test]
    fn test_org_display_from_organization() {
        let display = OrgDisplay::from(org(3));

        assert_eq!(display.id, "org-3");
        assert_eq!(display.name, "Organization 3");
        assert_eq!(display.location, "Location 3");
        assert!(!display.is_owner);
        assert_eq!(display.owner, "");
    }

    #[test]
    fn test_long_description_is_truncated() {
        let mut o = org(1);
        o.description = "x".repeat(100);
        let display = OrgDisplay::from(o);
        assert_eq!(display.description.chars().count(), DESCRIPTION_WIDTH);
        assert!(display.description.ends_with("..."));
    }
}

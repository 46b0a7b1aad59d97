//! New organization form

use async_trait::async_trait;

use super::{CreateForm, required};
use crate::client::MutationApi;
use crate::client::models::{CreateOrganizationRequest, Organization};
use crate::error::Result;

#[derive(Debug, Clone, Default)]
pub struct OrganizationForm {
    pub name: String,
    pub description: String,
    pub location: String,
}

#[async_trait]
impl CreateForm for OrganizationForm {
    type Request = CreateOrganizationRequest;
    type Created = Organization;

    fn validate(&self) -> Result<CreateOrganizationRequest> {
        Ok(CreateOrganizationRequest {
            name: required("name", &self.name)?,
            description: required("description", &self.description)?,
            location: required("location", &self.location)?,
        })
    }

    fn clear(&mut self) {
        *self = Self::default();
    }

    async fn send<C: MutationApi + ?Sized>(
        &self,
        client: &C,
        request: CreateOrganizationRequest,
    ) -> Result<Organization> {
        client.create_organization(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_fields_rejected() {
        let form = OrganizationForm {
            name: "Clinic".to_string(),
            description: " ".to_string(),
            location: "Osh".to_string(),
        };
        let err = form.validate().unwrap_err();
        assert!(err.to_string().contains("description"));
    }
}

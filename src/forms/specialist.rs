//! New specialist and assign-service forms

use async_trait::async_trait;

use super::{CreateForm, required};
use crate::client::MutationApi;
use crate::client::models::{
    AssignServiceRequest, CreateSpecialistRequest, Specialist, SpecialistService,
};
use crate::error::{Error, Result};

#[derive(Debug, Clone, Default)]
pub struct SpecialistForm {
    /// Full name
    pub fio: String,
    pub organization_id: String,
}

impl SpecialistForm {
    pub fn for_organization(organization_id: impl Into<String>) -> Self {
        Self {
            organization_id: organization_id.into(),
            ..Self::default()
        }
    }
}

#[async_trait]
impl CreateForm for SpecialistForm {
    type Request = CreateSpecialistRequest;
    type Created = Specialist;

    fn validate(&self) -> Result<CreateSpecialistRequest> {
        Ok(CreateSpecialistRequest {
            fio: required("fio", &self.fio)?,
            organization_id: required("organization_id", &self.organization_id)?,
        })
    }

    fn clear(&mut self) {
        self.fio.clear();
    }

    async fn send<C: MutationApi + ?Sized>(
        &self,
        client: &C,
        request: CreateSpecialistRequest,
    ) -> Result<Specialist> {
        client.create_specialist(request).await
    }
}

/// Attach one of the organization's services to a specialist
#[derive(Debug, Clone, Default)]
pub struct AssignServiceForm {
    pub specialist_id: String,
    pub service_id: String,
    /// Raw number input, minutes
    pub duration: String,
}

impl AssignServiceForm {
    pub fn for_specialist(specialist_id: impl Into<String>) -> Self {
        Self {
            specialist_id: specialist_id.into(),
            ..Self::default()
        }
    }
}

#[async_trait]
impl CreateForm for AssignServiceForm {
    type Request = AssignServiceRequest;
    type Created = SpecialistService;

    fn validate(&self) -> Result<AssignServiceRequest> {
        let raw = required("duration", &self.duration)?;
        let duration: u32 = raw
            .parse()
            .ok()
            .filter(|minutes| *minutes >= 1)
            .ok_or_else(|| {
                Error::Validation(format!("duration must be a whole number of minutes, got '{}'", raw))
            })?;

        Ok(AssignServiceRequest {
            specialist_id: required("specialist_id", &self.specialist_id)?,
            service_id: required("service", &self.service_id)?,
            duration,
        })
    }

    fn clear(&mut self) {
        self.service_id.clear();
        self.duration.clear();
    }

    async fn send<C: MutationApi + ?Sized>(
        &self,
        client: &C,
        request: AssignServiceRequest,
    ) -> Result<SpecialistService> {
        client.assign_service(request).await
    }
}

//! Mutation API trait for create operations

use async_trait::async_trait;

use crate::client::models::{
    AssignServiceRequest, Booking, CreateBookingRequest, CreateOrganizationRequest,
    CreateServiceRequest, CreateSpecialistRequest, Organization, Service, Specialist,
    SpecialistService,
};
use crate::error::Result;

/// Create operations for the Journal API. Each is a single POST.
#[async_trait]
pub trait MutationApi: Send + Sync {
    async fn create_organization(&self, request: CreateOrganizationRequest)
    -> Result<Organization>;

    async fn create_service(&self, request: CreateServiceRequest) -> Result<Service>;

    async fn create_specialist(&self, request: CreateSpecialistRequest) -> Result<Specialist>;

    /// Attach a service to a specialist with a duration
    async fn assign_service(&self, request: AssignServiceRequest) -> Result<SpecialistService>;

    /// Book a specialist service
    async fn create_booking(&self, request: CreateBookingRequest) -> Result<Booking>;
}

//! Listing API trait for paged collection reads

use async_trait::async_trait;

use crate::client::models::{Booking, Organization, Service, Specialist, SpecialistService};
use crate::client::pagination::PaginationParams;
use crate::error::Result;

/// Collection listing operations for the Journal API
///
/// Every method fetches exactly one page. Scope filters (organization or
/// specialist id) are passed alongside the pagination params.
#[async_trait]
pub trait ListingApi: Send + Sync {
    /// `GET /organizations`
    async fn list_organizations(&self, params: &PaginationParams) -> Result<Vec<Organization>>;

    /// `GET /services?organization_id=`
    async fn list_services(&self, org_id: &str, params: &PaginationParams)
    -> Result<Vec<Service>>;

    /// `GET /services/list/by-specialist?specialist_id=`
    async fn list_specialist_services(
        &self,
        specialist_id: &str,
        params: &PaginationParams,
    ) -> Result<Vec<SpecialistService>>;

    /// `GET /specialists?organization_id=`
    async fn list_specialists(
        &self,
        org_id: &str,
        params: &PaginationParams,
    ) -> Result<Vec<Specialist>>;

    /// `GET /registrations` - bookings of the signed-in user
    async fn list_bookings(&self, params: &PaginationParams) -> Result<Vec<Booking>>;

    /// `GET /registrations/org/appointments?org_id=` - bookings made with an organization
    async fn list_appointments(
        &self,
        org_id: &str,
        params: &PaginationParams,
    ) -> Result<Vec<Booking>>;
}

//! Mock Journal API client for testing
//!
//! Serves scripted pages per endpoint and records every call, so views and
//! forms can be exercised without a backend.

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::api::{AuthApi, ListingApi, MutationApi};
use super::models::{
    AssignServiceRequest, Booking, CreateBookingRequest, CreateOrganizationRequest,
    CreateServiceRequest, CreateSpecialistRequest, Organization, Reference, Role, Service,
    SignUpRequest, Specialist, SpecialistService, User,
};
use super::pagination::PaginationParams;
use crate::error::{ApiError, Result};
use crate::session::Session;

/// Mock API client for testing.
///
/// # Example
/// ```ignore
/// let mock = MockJournalClient::new()
///     .with_organization_pages(vec![orgs_page_1, orgs_page_2]);
///
/// let page = mock.list_organizations(&PaginationParams::new()).await?;
/// ```
pub struct MockJournalClient {
    organization_pages: Vec<Vec<Organization>>,
    service_pages: Vec<Vec<Service>>,
    specialist_pages: Vec<Vec<Specialist>>,
    specialist_service_pages: Vec<Vec<SpecialistService>>,
    booking_pages: Vec<Vec<Booking>>,
    appointment_pages: Vec<Vec<Booking>>,
    user: Option<User>,
    /// Error to return (if any) - consumed on first use
    error: Mutex<Option<ApiError>>,
    captured_requests: Mutex<Vec<CapturedRequest>>,
    session: Session,
}

/// A captured API request for test assertions.
#[derive(Debug, Clone, PartialEq)]
pub struct CapturedRequest {
    /// The API method called (e.g., "list_services")
    pub method: &'static str,
    /// Scope id passed with the request, if any
    pub scope: Option<String>,
    /// Page requested by list calls
    pub page: Option<usize>,
    /// Page size requested by list calls
    pub limit: Option<usize>,
}

impl Default for MockJournalClient {
    fn default() -> Self {
        Self {
            organization_pages: Vec::new(),
            service_pages: Vec::new(),
            specialist_pages: Vec::new(),
            specialist_service_pages: Vec::new(),
            booking_pages: Vec::new(),
            appointment_pages: Vec::new(),
            user: None,
            error: Mutex::new(None),
            captured_requests: Mutex::new(Vec::new()),
            session: Session::in_memory(None),
        }
    }
}

fn page_of<T: Clone>(pages: &[Vec<T>], params: &PaginationParams) -> Vec<T> {
    pages.get(params.page.saturating_sub(1)).cloned().unwrap_or_default()
}

impl MockJournalClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_organization_pages(mut self, pages: Vec<Vec<Organization>>) -> Self {
        self.organization_pages = pages;
        self
    }

    pub fn with_service_pages(mut self, pages: Vec<Vec<Service>>) -> Self {
        self.service_pages = pages;
        self
    }

    pub fn with_specialist_pages(mut self, pages: Vec<Vec<Specialist>>) -> Self {
        self.specialist_pages = pages;
        self
    }

    pub fn with_specialist_service_pages(mut self, pages: Vec<Vec<SpecialistService>>) -> Self {
        self.specialist_service_pages = pages;
        self
    }

    pub fn with_booking_pages(mut self, pages: Vec<Vec<Booking>>) -> Self {
        self.booking_pages = pages;
        self
    }

    pub fn with_appointment_pages(mut self, pages: Vec<Vec<Booking>>) -> Self {
        self.appointment_pages = pages;
        self
    }

    pub fn with_user(mut self, user: User) -> Self {
        self.user = Some(user);
        self
    }

    /// Fail the next call with `error`.
    pub fn with_error(self, error: ApiError) -> Self {
        *self.error.try_lock().expect("mock not shared yet") = Some(error);
        self
    }

    /// Fail the next call with `error`, on an already shared mock.
    pub async fn fail_next(&self, error: ApiError) {
        *self.error.lock().await = Some(error);
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// All calls made so far, in order.
    pub async fn captured_requests(&self) -> Vec<CapturedRequest> {
        self.captured_requests.lock().await.clone()
    }

    /// Number of calls to `method`.
    pub async fn call_count(&self, method: &str) -> usize {
        self.captured_requests
            .lock()
            .await
            .iter()
            .filter(|r| r.method == method)
            .count()
    }

    async fn record(
        &self,
        method: &'static str,
        scope: Option<&str>,
        params: Option<&PaginationParams>,
    ) -> Result<()> {
        self.captured_requests.lock().await.push(CapturedRequest {
            method,
            scope: scope.map(str::to_string),
            page: params.map(|p| p.page),
            limit: params.map(|p| p.limit),
        });

        match self.error.lock().await.take() {
            Some(err) => Err(err.into()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl AuthApi for MockJournalClient {
    async fn sign_in(&self, _email: &str, _password: &str) -> Result<()> {
        self.record("sign_in", None, None).await?;
        self.session.sign_in("mock-token")
    }

    async fn sign_up(&self, _request: SignUpRequest) -> Result<()> {
        self.record("sign_up", None, None).await
    }

    async fn current_user(&self) -> Result<User> {
        self.record("current_user", None, None).await?;
        self.user.clone().ok_or_else(|| ApiError::Unauthorized.into())
    }

    fn sign_out(&self) -> Result<()> {
        self.session.sign_out()
    }
}

#[async_trait]
impl ListingApi for MockJournalClient {
    async fn list_organizations(&self, params: &PaginationParams) -> Result<Vec<Organization>> {
        self.record("list_organizations", None, Some(params)).await?;
        Ok(page_of(&self.organization_pages, params))
    }

    async fn list_services(
        &self,
        org_id: &str,
        params: &PaginationParams,
    ) -> Result<Vec<Service>> {
        self.record("list_services", Some(org_id), Some(params))
            .await?;
        Ok(page_of(&self.service_pages, params))
    }

    async fn list_specialist_services(
        &self,
        specialist_id: &str,
        params: &PaginationParams,
    ) -> Result<Vec<SpecialistService>> {
        self.record("list_specialist_services", Some(specialist_id), Some(params))
            .await?;
        Ok(page_of(&self.specialist_service_pages, params))
    }

    async fn list_specialists(
        &self,
        org_id: &str,
        params: &PaginationParams,
    ) -> Result<Vec<Specialist>> {
        self.record("list_specialists", Some(org_id), Some(params))
            .await?;
        Ok(page_of(&self.specialist_pages, params))
    }

    async fn list_bookings(&self, params: &PaginationParams) -> Result<Vec<Booking>> {
        self.record("list_bookings", None, Some(params)).await?;
        Ok(page_of(&self.booking_pages, params))
    }

    async fn list_appointments(
        &self,
        org_id: &str,
        params: &PaginationParams,
    ) -> Result<Vec<Booking>> {
        self.record("list_appointments", Some(org_id), Some(params))
            .await?;
        Ok(page_of(&self.appointment_pages, params))
    }
}

#[async_trait]
impl MutationApi for MockJournalClient {
    async fn create_organization(
        &self,
        request: CreateOrganizationRequest,
    ) -> Result<Organization> {
        self.record("create_organization", None, None).await?;
        Ok(Organization {
            id: "org-new".to_string(),
            name: request.name,
            description: request.description,
            location: request.location,
            is_owner: true,
        })
    }

    async fn create_service(&self, request: CreateServiceRequest) -> Result<Service> {
        self.record("create_service", Some(&request.organization_id), None)
            .await?;
        Ok(Service {
            id: "svc-new".to_string(),
            title: request.title,
            description: request.description,
            price: request.price,
            organization: Some(Reference::Id(request.organization_id)),
        })
    }

    async fn create_specialist(&self, request: CreateSpecialistRequest) -> Result<Specialist> {
        self.record("create_specialist", Some(&request.organization_id), None)
            .await?;
        Ok(Specialist {
            id: "spec-new".to_string(),
            fio: request.fio,
            organization: Some(Reference::Id(request.organization_id)),
        })
    }

    async fn assign_service(&self, request: AssignServiceRequest) -> Result<SpecialistService> {
        self.record("assign_service", Some(&request.specialist_id), None)
            .await?;
        Ok(SpecialistService {
            id: "ss-new".to_string(),
            specialist: Some(Reference::Id(request.specialist_id)),
            service: Service {
                id: request.service_id,
                title: String::new(),
                description: String::new(),
                price: 0.0,
                organization: None,
            },
            duration: request.duration,
        })
    }

    async fn create_booking(&self, request: CreateBookingRequest) -> Result<Booking> {
        self.record("create_booking", Some(&request.specialist_service_id), None)
            .await?;
        Ok(Booking {
            id: "b-new".to_string(),
            specialist_service: Some(Reference::Id(request.specialist_service_id)),
            service: None,
            specialist: None,
            user: None,
            time: request.time,
            note: Some(request.note).filter(|n| !n.is_empty()),
            duration: None,
        })
    }
}

/// Shorthand fixtures shared by tests across modules.
pub mod fixtures {
    use super::*;

    pub fn org(n: usize) -> Organization {
        Organization {
            id: format!("org-{}", n),
            name: format!("Organization {}", n),
            description: format!("Description {}", n),
            location: format!("Location {}", n),
            is_owner: false,
        }
    }

    /// `count` organizations numbered from `start`
    pub fn orgs(start: usize, count: usize) -> Vec<Organization> {
        (start..start + count).map(org).collect()
    }

    pub fn service(n: usize) -> Service {
        Service {
            id: format!("svc-{}", n),
            title: format!("Service {}", n),
            description: String::new(),
            price: 100.0 * n as f64,
            organization: Some(Reference::Id("org-1".to_string())),
        }
    }

    pub fn specialist(n: usize) -> Specialist {
        Specialist {
            id: format!("spec-{}", n),
            fio: format!("Specialist {}", n),
            organization: Some(Reference::Id("org-1".to_string())),
        }
    }

    pub fn specialist_service(n: usize) -> SpecialistService {
        SpecialistService {
            id: format!("ss-{}", n),
            specialist: Some(Reference::Id("spec-1".to_string())),
            service: service(n),
            duration: 30,
        }
    }

    pub fn booking(n: usize) -> Booking {
        Booking {
            id: format!("b-{}", n),
            specialist_service: Some(Reference::Id(format!("ss-{}", n))),
            service: Some(service(n)),
            specialist: Some(specialist(1)),
            user: Some(user(Role::User)),
            time: "2025-03-01T10:30".to_string(),
            note: None,
            duration: Some(30),
        }
    }

    /// `count` items built by `make`, numbered from `start`
    pub fn numbered<T>(start: usize, count: usize, make: fn(usize) -> T) -> Vec<T> {
        (start..start + count).map(make).collect()
    }

    pub fn user(role: Role) -> User {
        User {
            id: "u-1".to_string(),
            fio: "Aida Test".to_string(),
            email: "aida@example.com".to_string(),
            role,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;

    #[tokio::test]
    async fn test_mock_serves_pages_by_number() {
        let mock =
            MockJournalClient::new().with_organization_pages(vec![orgs(1, 10), orgs(11, 4)]);

        let first = mock.list_organizations(&PaginationParams::new()).await.unwrap();
        let second = mock
            .list_organizations(&PaginationParams::new().page(2))
            .await
            .unwrap();
        let third = mock
            .list_organizations(&PaginationParams::new().page(3))
            .await
            .unwrap();

        assert_eq!(first.len(), 10);
        assert_eq!(second.len(), 4);
        assert!(third.is_empty());
        assert_eq!(mock.call_count("list_organizations").await, 3);
    }

    #[tokio::test]
    async fn test_mock_error_is_consumed_once() {
        let mock = MockJournalClient::new()
            .with_service_pages(vec![vec![service(1)]])
            .with_error(ApiError::ServerError("boom".to_string()));

        let params = PaginationParams::new();
        assert!(mock.list_services("org-1", &params).await.is_err());
        assert_eq!(mock.list_services("org-1", &params).await.unwrap().len(), 1);

        let captured = mock.captured_requests().await;
        assert_eq!(captured[0].scope.as_deref(), Some("org-1"));
        assert_eq!(captured[0].limit, Some(10));
    }
}

//! Journal API client implementation

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::{Client as HttpClient, Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::api::{AuthApi, ListingApi, MutationApi};
use super::models::{
    AssignServiceRequest, Booking, CreateBookingRequest, CreateOrganizationRequest,
    CreateServiceRequest, CreateSpecialistRequest, ItemsResponse, Organization, Service,
    SignInRequest, SignInResponse, SignUpRequest, Specialist, SpecialistService, User,
};
use super::pagination::PaginationParams;
use super::rate_limit::RequestThrottle;
use crate::error::{ApiError, Result};
use crate::session::Session;

/// HTTP transport timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Journal API client
pub struct JournalClient {
    http: HttpClient,
    base_url: String,
    throttle: RequestThrottle,
    session: Session,
}

impl JournalClient {
    /// Create a client for `base_url` (e.g. `http://localhost:3000`).
    pub fn new(base_url: impl Into<String>, session: Session) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            throttle: RequestThrottle::default(),
            session,
        })
    }

    /// Replace the request throttle
    pub fn with_throttle(mut self, throttle: RequestThrottle) -> Self {
        self.throttle = throttle;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Effective request budget after clamping
    pub fn requests_per_second(&self) -> u32 {
        self.throttle.per_second()
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: Vec<(&'static str, String)>,
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {} {:?}", url, query);
        let request = self.http.get(&url).query(&query);
        self.send(request).await
    }

    async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!("POST {}", url);
        let request = self.http.request(Method::POST, &url).json(body);
        self.send(request).await
    }

    /// List one page of an endpoint that answers with `{ "items": [...] }`
    async fn get_items<T: DeserializeOwned>(
        &self,
        path: &str,
        scope: Option<(&'static str, &str)>,
        params: &PaginationParams,
    ) -> Result<Vec<T>> {
        let mut query = Vec::with_capacity(3);
        if let Some((key, id)) = scope {
            query.push((key, id.to_string()));
        }
        query.extend(params.to_query_params());

        let response: ItemsResponse<T> = self.get(path, query).await?;
        debug!("{} page {} returned {} items", path, params.page, response.items.len());
        Ok(response.items)
    }

    /// POST whose response body is optional; a missing or non-JSON body is `Null`.
    async fn post_lenient<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Value> {
        let url = format!("{}{}", self.base_url, path);
        debug!("POST {}", url);
        let response = self
            .checked(self.http.request(Method::POST, &url).json(body))
            .await?;
        let bytes = response.bytes().await.map_err(ApiError::from)?;
        Ok(serde_json::from_slice(&bytes).unwrap_or(Value::Null))
    }

    /// Throttle, attach the session headers, send, and decode.
    async fn send<T: DeserializeOwned>(&self, request: reqwest::RequestBuilder) -> Result<T> {
        let response = self.checked(request).await?;
        let data = response.json::<T>().await.map_err(|e| {
            ApiError::InvalidResponse(format!("Failed to parse response: {}", e))
        })?;
        Ok(data)
    }

    /// Send and map every non-success status to an [`ApiError`].
    async fn checked(&self, request: reqwest::RequestBuilder) -> Result<reqwest::Response> {
        self.throttle.until_ready().await;

        // Token is read per request so sign-in/out take effect immediately
        let response = request
            .headers(self.session.auth_headers())
            .send()
            .await
            .map_err(ApiError::from)?;

        let status = response.status();
        match status {
            status if status.is_success() => Ok(response),
            StatusCode::UNAUTHORIZED => Err(ApiError::Unauthorized.into()),
            StatusCode::FORBIDDEN => Err(ApiError::Forbidden.into()),
            StatusCode::NOT_FOUND => {
                let error_msg = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Resource not found".to_string());
                Err(ApiError::NotFound(error_msg).into())
            }
            StatusCode::BAD_REQUEST | StatusCode::CONFLICT | StatusCode::UNPROCESSABLE_ENTITY => {
                let error_msg = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Bad request".to_string());
                Err(ApiError::BadRequest(error_msg).into())
            }
            status if status.is_server_error() => {
                let error_msg = response
                    .text()
                    .await
                    .unwrap_or_else(|_| format!("Server error: {}", status));
                Err(ApiError::ServerError(error_msg).into())
            }
            _ => {
                let error_msg = format!("Unexpected status code: {}", status);
                Err(ApiError::InvalidResponse(error_msg).into())
            }
        }
    }
}

#[async_trait]
impl AuthApi for JournalClient {
    async fn sign_in(&self, email: &str, password: &str) -> Result<()> {
        let body = SignInRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let response: SignInResponse = self.post("/auth/sign-in", &body).await?;

        match response.access_token {
            Some(token) => self.session.sign_in(&token),
            None => Err(ApiError::InvalidResponse(
                "Sign-in response did not include an access token".to_string(),
            )
            .into()),
        }
    }

    async fn sign_up(&self, request: SignUpRequest) -> Result<()> {
        let _: serde_json::Value = self.post("/auth/signup", &request).await?;
        Ok(())
    }

    async fn current_user(&self) -> Result<User> {
        self.get("/auth/me", Vec::new()).await
    }

    fn sign_out(&self) -> Result<()> {
        self.session.sign_out()
    }
}

#[async_trait]
impl ListingApi for JournalClient {
    async fn list_organizations(&self, params: &PaginationParams) -> Result<Vec<Organization>> {
        self.get_items("/organizations", None, params).await
    }

    async fn list_services(
        &self,
        org_id: &str,
        params: &PaginationParams,
    ) -> Result<Vec<Service>> {
        self.get_items("/services", Some(("organization_id", org_id)), params)
            .await
    }

    async fn list_specialist_services(
        &self,
        specialist_id: &str,
        params: &PaginationParams,
    ) -> Result<Vec<SpecialistService>> {
        self.get_items(
            "/services/list/by-specialist",
            Some(("specialist_id", specialist_id)),
            params,
        )
        .await
    }

    async fn list_specialists(
        &self,
        org_id: &str,
        params: &PaginationParams,
    ) -> Result<Vec<Specialist>> {
        self.get_items("/specialists", Some(("organization_id", org_id)), params)
            .await
    }

    async fn list_bookings(&self, params: &PaginationParams) -> Result<Vec<Booking>> {
        self.get_items("/registrations", None, params).await
    }

    async fn list_appointments(
        &self,
        org_id: &str,
        params: &PaginationParams,
    ) -> Result<Vec<Booking>> {
        self.get_items(
            "/registrations/org/appointments",
            Some(("org_id", org_id)),
            params,
        )
        .await
    }
}

#[async_trait]
impl MutationApi for JournalClient {
    async fn create_organization(
        &self,
        request: CreateOrganizationRequest,
    ) -> Result<Organization> {
        self.post("/organizations", &request).await
    }

    async fn create_service(&self, request: CreateServiceRequest) -> Result<Service> {
        self.post("/services", &request).await
    }

    async fn create_specialist(&self, request: CreateSpecialistRequest) -> Result<Specialist> {
        self.post("/specialists", &request).await
    }

    async fn assign_service(&self, request: AssignServiceRequest) -> Result<SpecialistService> {
        self.post("/specialists/assign-service", &request).await
    }

    async fn create_booking(&self, request: CreateBookingRequest) -> Result<Booking> {
        let body = self.post_lenient("/registrations", &request).await?;
        Ok(Booking::from_created(body, &request))
    }
}

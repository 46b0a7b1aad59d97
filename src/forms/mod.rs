//! Create forms
//!
//! Each form is a plain struct of the raw field values a user typed.
//! [`CreateForm::validate`] turns it into a typed request body; a
//! [`CreateModal`] owns one form plus its open/closed state and performs the
//! single POST on submit.

mod booking;
mod organization;
mod service;
mod specialist;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDateTime};
use log::{debug, warn};

use crate::client::MutationApi;
use crate::error::{Error, Result};
use crate::paging::{PageSource, PagedLoader};

pub use booking::{BOOKING_SUCCESS, BookingForm};
pub use organization::OrganizationForm;
pub use service::ServiceForm;
pub use specialist::{AssignServiceForm, SpecialistForm};

/// Format produced by an HTML `datetime-local` input
pub const DATETIME_LOCAL_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// A form that creates one backend record.
#[async_trait]
pub trait CreateForm: Send + Sync {
    type Request: Send + 'static;
    type Created: Send + 'static;

    /// Check required fields and build the request body.
    fn validate(&self) -> Result<Self::Request>;

    /// Empty the user-entered fields. Context ids supplied by the view stay.
    fn clear(&mut self);

    async fn send<C: MutationApi + ?Sized>(
        &self,
        client: &C,
        request: Self::Request,
    ) -> Result<Self::Created>;
}

/// Modal dialog wrapping a create form.
#[derive(Debug, Default)]
pub struct CreateModal<F> {
    pub form: F,
    open: bool,
    submitting: bool,
}

impl<F: CreateForm> CreateModal<F> {
    /// A closed modal holding `form`
    pub fn new(form: F) -> Self {
        Self {
            form,
            open: false,
            submitting: false,
        }
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    #[cfg(test)]
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Validate and POST the form.
    ///
    /// On success the modal closes and the form is cleared. On failure both
    /// stay as they were so the user can correct and resubmit.
    pub async fn submit<C: MutationApi + ?Sized>(&mut self, client: &C) -> Result<F::Created> {
        let request = self.form.validate()?;

        self.submitting = true;
        let result = self.form.send(client, request).await;
        self.submitting = false;

        match result {
            Ok(created) => {
                debug!("Create succeeded, closing form");
                self.form.clear();
                self.open = false;
                Ok(created)
            }
            Err(e) => {
                warn!("Create failed: {}", e);
                Err(e)
            }
        }
    }

    /// Submit and put the created record at the front of `loader`.
    pub async fn submit_into<C, S>(
        &mut self,
        client: &C,
        loader: &PagedLoader<S>,
    ) -> Result<F::Created>
    where
        C: MutationApi + ?Sized,
        S: PageSource<Item = F::Created>,
        F::Created: Clone,
    {
        let created = self.submit(client).await?;
        loader.prepend(created.clone()).await;
        Ok(created)
    }
}

/// Trimmed value of a required text field
pub(crate) fn required(field: &str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(Error::Validation(format!("{} is required", field)));
    }
    Ok(trimmed.to_string())
}

/// Accepts `datetime-local` (`2025-03-01T10:30`) or RFC 3339.
pub(crate) fn parse_time(field: &str, value: &str) -> Result<String> {
    let value = required(field, value)?;
    let valid = NaiveDateTime::parse_from_str(&value, DATETIME_LOCAL_FORMAT).is_ok()
        || DateTime::parse_from_rfc3339(&value).is_ok();

    if valid {
        Ok(value)
    } else {
        Err(Error::Validation(format!(
            "{} must look like 2025-03-01T10:30",
            field
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::MockJournalClient;
    use crate::client::mock::fixtures::orgs;
    use crate::error::ApiError;
    use crate::paging::OrganizationFeed;
    use std::sync::Arc;

    fn filled_org_form() -> OrganizationForm {
        OrganizationForm {
            name: "Smile Dental".to_string(),
            description: "Family dentistry".to_string(),
            location: "Bishkek".to_string(),
        }
    }

    #[test]
    fn test_required_trims_and_rejects_blank() {
        assert_eq!(required("name", "  Clinic ").unwrap(), "Clinic");
        assert!(matches!(required("name", "   "), Err(Error::Validation(_))));
    }

    #[test]
    fn test_parse_time_formats() {
        assert!(parse_time("time", "2025-03-01T10:30").is_ok());
        assert!(parse_time("time", "2025-03-01T10:30:00+06:00").is_ok());
        assert!(parse_time("time", "tomorrow").is_err());
        assert!(parse_time("time", "").is_err());
    }

    #[tokio::test]
    async fn test_submit_prepends_closes_and_resets() {
        let mock = Arc::new(MockJournalClient::new().with_organization_pages(vec![orgs(1, 3)]));
        let loader = PagedLoader::new(OrganizationFeed::new(mock.clone()), (), 10);
        loader.load_next().await;

        let mut modal = CreateModal::new(filled_org_form());
        modal.open();

        let created = modal.submit_into(mock.as_ref(), &loader).await.unwrap();

        assert_eq!(created.name, "Smile Dental");
        let state = loader.snapshot().await;
        assert_eq!(state.items.len(), 4);
        assert_eq!(state.items[0].id, "org-new");
        assert!(!modal.is_open());
        assert!(modal.form.name.is_empty());
        assert!(modal.form.description.is_empty());
        assert!(modal.form.location.is_empty());
        assert_eq!(mock.call_count("create_organization").await, 1);
    }

    #[tokio::test]
    async fn test_invalid_form_is_not_sent() {
        let mock = MockJournalClient::new();
        let mut modal = CreateModal::new(OrganizationForm {
            location: String::new(),
            ..filled_org_form()
        });
        modal.open();

        let result = modal.submit(&mock).await;

        assert!(matches!(result, Err(Error::Validation(_))));
        assert!(modal.is_open());
        assert_eq!(modal.form.name, "Smile Dental");
        assert_eq!(mock.call_count("create_organization").await, 0);
    }

    #[tokio::test]
    async fn test_failed_post_keeps_modal_open_and_fields() {
        let mock = Arc::new(
            MockJournalClient::new().with_error(ApiError::ServerError("down".to_string())),
        );
        let loader = PagedLoader::new(OrganizationFeed::new(mock.clone()), (), 10);
        let mut modal = CreateModal::new(filled_org_form());
        modal.open();

        let result = modal.submit_into(mock.as_ref(), &loader).await;

        assert!(result.is_err());
        assert!(modal.is_open());
        assert!(!modal.is_submitting());
        assert_eq!(modal.form.location, "Bishkek");
        assert_eq!(loader.len().await, 0);
    }
}

//! New service form

use async_trait::async_trait;

use super::{CreateForm, required};
use crate::client::MutationApi;
use crate::client::models::{CreateServiceRequest, Service};
use crate::error::{Error, Result};

/// Service form; `organization_id` comes from the view, not the user.
#[derive(Debug, Clone, Default)]
pub struct ServiceForm {
    pub title: String,
    /// Raw number input
    pub price: String,
    pub description: String,
    pub organization_id: String,
}

impl ServiceForm {
    pub fn for_organization(organization_id: impl Into<String>) -> Self {
        Self {
            organization_id: organization_id.into(),
            ..Self::default()
        }
    }
}

#[async_trait]
impl CreateForm for ServiceForm {
    type Request = CreateServiceRequest;
    type Created = Service;

    fn validate(&self) -> Result<CreateServiceRequest> {
        let title = required("title", &self.title)?;
        let raw_price = required("price", &self.price)?;
        let price: f64 = raw_price
            .parse()
            .map_err(|_| Error::Validation(format!("price must be a number, got '{}'", raw_price)))?;
        if !price.is_finite() || price < 0.0 {
            return Err(Error::Validation("price cannot be negative".to_string()));
        }

        Ok(CreateServiceRequest {
            title,
            price,
            description: self.description.trim().to_string(),
            organization_id: required("organization_id", &self.organization_id)?,
        })
    }

    fn clear(&mut self) {
        self.title.clear();
        self.price.clear();
        self.description.clear();
    }

    async fn send<C: MutationApi + ?Sized>(
        &self,
        client: &C,
        request: CreateServiceRequest,
    ) -> Result<Service> {
        client.create_service(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(price: &str) -> ServiceForm {
        ServiceForm {
            title: "Cleaning".to_string(),
            price: price.to_string(),
            description: String::new(),
            organization_id: "org-1".to_string(),
        }
    }

    #[test]
    fn test_price_parsing() {
        assert_eq!(form("1500").validate().unwrap().price, 1500.0);
        assert_eq!(form(" 99.5 ").validate().unwrap().price, 99.5);
        assert!(form("-1").validate().is_err());
        assert!(form("cheap").validate().is_err());
        assert!(form("").validate().is_err());
    }

    #[test]
    fn test_description_is_optional() {
        let request = form("10").validate().unwrap();
        assert!(request.description.is_empty());
    }

    #[test]
    fn test_clear_keeps_organization() {
        let mut f = form("10");
        f.clear();
        assert!(f.title.is_empty());
        assert!(f.price.is_empty());
        assert_eq!(f.organization_id, "org-1");
    }
}

//! Service display model

use serde::Serialize;
use tabled::Tabled;

use super::NONE;
use crate::client::models::Service;
use crate::output::formatters::format_price;

#[derive(Debug, Clone, Tabled, Serialize)]
pub struct ServiceDisplay {
    #[tabled(rename = "SERVICE ID")]
    pub id: String,

    #[tabled(rename = "TITLE")]
    pub title: String,

    #[tabled(rename = "PRICE")]
    #[serde(skip)]
    pub price_label: String,

    #[tabled(skip)]
    pub price: f64,

    #[tabled(rename = "DESCRIPTION")]
    pub description: String,
}

impl From<Service> for ServiceDisplay {
    fn from(service: Service) -> Self {
        let description = if service.description.is_empty() {
            NONE.to_string()
        } else {
            service.description
        };

        Self {
            id: service.id,
            title: service.title,
            price_label: format_price(service.price),
            price: service.price,
            description,
        }
    }
}

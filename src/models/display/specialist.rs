//! Specialist display models

use serde::Serialize;
use tabled::Tabled;

use crate::client::models::{Specialist, SpecialistService};
use crate::output::formatters::{format_minutes, format_price};

#[derive(Debug, Clone, Tabled, Serialize)]
pub struct SpecialistDisplay {
    #[tabled(rename = "SPECIALIST ID")]
    pub id: String,

    #[tabled(rename = "NAME")]
    pub fio: String,
}

impl From<Specialist> for SpecialistDisplay {
    fn from(specialist: Specialist) -> Self {
        Self {
            id: specialist.id,
            fio: specialist.fio,
        }
    }
}

/// A service as performed by one specialist
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct SpecialistServiceDisplay {
    /// Id to book with `journal booking create --specialist-service`
    #[tabled(rename = "ID")]
    pub id: String,

    #[tabled(rename = "SERVICE")]
    pub title: String,

    #[tabled(rename = "PRICE")]
    pub price: String,

    #[tabled(rename = "DURATION")]
    #[serde(skip)]
    pub duration_label: String,

    #[tabled(skip)]
    pub duration: u32,
}

impl From<SpecialistService> for SpecialistServiceDisplay {
    fn from(ss: SpecialistService) -> Self {
        Self {
            id: ss.id,
            title: ss.service.title,
            price: format_price(ss.service.price),
            duration_label: format_minutes(ss.duration),
            duration: ss.duration,
        }
    }
}

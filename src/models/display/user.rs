//! User display model

use serde::Serialize;
use tabled::Tabled;

use crate::client::models::{Role, User};

#[derive(Debug, Clone, Tabled, Serialize)]
pub struct UserDisplay {
    #[tabled(rename = "USER ID")]
    pub id: String,

    #[tabled(rename = "NAME")]
    pub fio: String,

    #[tabled(rename = "EMAIL")]
    pub email: String,

    #[tabled(rename = "ROLE")]
    pub role: String,
}

pub(crate) fn role_label(role: Role) -> &'static str {
    match role {
        Role::User => "USER",
        Role::Admin => "ADMIN",
        Role::Unknown => "--",
    }
}

impl From<User> for UserDisplay {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            fio: user.fio,
            email: user.email,
            role: role_label(user.role).to_string(),
        }
    }
}

impl UserDisplay {
    /// Field/value rows for a details table
    pub fn details(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Name", self.fio.clone()),
            ("Email", self.email.clone()),
            ("Role", self.role.clone()),
            ("User ID", self.id.clone()),
        ]
    }
}

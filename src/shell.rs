//! Path routing and navigation links
//!
//! `journal open <PATH>` accepts the same paths the web client uses, so a
//! link copied from the browser lands in the matching terminal view.

use std::fmt;

use reqwest::Url;

use crate::client::models::{Role, User};
use crate::error::{Error, Result};

/// A resolved view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Organizations,
    Login,
    Register,
    Profile,
    Logout,
    Services { organization_id: String },
    Specialists { organization_id: String },
    SpecialistServices { specialist_id: String },
    Bookings,
    Appointments { organization_id: String },
}

impl Route {
    /// Parse a path such as `/services?organization_id=abc`.
    pub fn parse(path: &str) -> Result<Self> {
        let trimmed = path.trim();
        let relative = if trimmed.starts_with('/') {
            trimmed.to_string()
        } else {
            format!("/{}", trimmed)
        };

        let url = Url::parse("journal://app")
            .and_then(|base| base.join(&relative))
            .map_err(|e| Error::Routing(format!("Invalid path '{}': {}", path, e)))?;

        let route = match url.path().trim_end_matches('/') {
            "" => Route::Home,
            "/organizations" => Route::Organizations,
            "/login" => Route::Login,
            "/register" => Route::Register,
            "/profile" => Route::Profile,
            "/logout" => Route::Logout,
            "/bookings" => Route::Bookings,
            "/services" => Route::Services {
                organization_id: query_id(&url, "organization_id")?,
            },
            "/specialists" => Route::Specialists {
                organization_id: query_id(&url, "organization_id")?,
            },
            "/specialist/services" => Route::SpecialistServices {
                specialist_id: query_id(&url, "specialist_id")?,
            },
            "/appointments" => Route::Appointments {
                organization_id: query_id(&url, "organization_id")?,
            },
            other => return Err(Error::Routing(format!("No view at '{}'", other))),
        };

        log::debug!("Resolved '{}' to {:?}", path, route);
        Ok(route)
    }

    /// Whether the view needs a signed-in user
    pub fn requires_session(&self) -> bool {
        matches!(
            self,
            Route::Profile | Route::Bookings | Route::Appointments { .. }
        )
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Home => write!(f, "/"),
            Route::Organizations => write!(f, "/organizations"),
            Route::Login => write!(f, "/login"),
            Route::Register => write!(f, "/register"),
            Route::Profile => write!(f, "/profile"),
            Route::Logout => write!(f, "/logout"),
            Route::Bookings => write!(f, "/bookings"),
            Route::Services { organization_id } => {
                write!(f, "/services?organization_id={}", organization_id)
            }
            Route::Specialists { organization_id } => {
                write!(f, "/specialists?organization_id={}", organization_id)
            }
            Route::SpecialistServices { specialist_id } => {
                write!(f, "/specialist/services?specialist_id={}", specialist_id)
            }
            Route::Appointments { organization_id } => {
                write!(f, "/appointments?organization_id={}", organization_id)
            }
        }
    }
}

fn query_id(url: &Url, key: &'static str) -> Result<String> {
    url.query_pairs()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| Error::Routing(format!("{} is missing from the URL", key)))
}

/// One entry of the navigation bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub label: String,
    pub path: &'static str,
}

impl NavLink {
    fn new(label: impl Into<String>, path: &'static str) -> Self {
        Self {
            label: label.into(),
            path,
        }
    }
}

/// Links shown for the current session.
///
/// Only the `USER` role counts as signed in for the account links; `ADMIN`
/// gets the Admin link on top of Login and Register.
pub fn nav_links(user: Option<&User>) -> Vec<NavLink> {
    let mut links = vec![
        NavLink::new("Organizations", "/organizations"),
        NavLink::new("Bookings", "/bookings"),
    ];

    match user {
        Some(user) if user.role == Role::User => {
            let name = if user.fio.is_empty() {
                user.email.clone()
            } else {
                user.fio.clone()
            };
            links.push(NavLink::new(name, "/profile"));
            links.push(NavLink::new("Logout", "/logout"));
        }
        _ => {
            links.push(NavLink::new("Login", "/login"));
            links.push(NavLink::new("Register", "/register"));
        }
    }

    if user.is_some_and(|u| u.role == Role::Admin) {
        links.push(NavLink::new("Admin", "/admin"));
    }

    links
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::mock::fixtures::user;

    #[test]
    fn test_parse_plain_routes() {
        assert_eq!(Route::parse("/").unwrap(), Route::Home);
        assert_eq!(Route::parse("").unwrap(), Route::Home);
        assert_eq!(Route::parse("/organizations").unwrap(), Route::Organizations);
        assert_eq!(Route::parse("bookings").unwrap(), Route::Bookings);
        assert_eq!(Route::parse("/logout/").unwrap(), Route::Logout);
    }

    #[test]
    fn test_parse_scoped_routes() {
        assert_eq!(
            Route::parse("/services?organization_id=org-1").unwrap(),
            Route::Services {
                organization_id: "org-1".to_string()
            }
        );
        assert_eq!(
            Route::parse("/specialist/services?specialist_id=spec-9&x=1").unwrap(),
            Route::SpecialistServices {
                specialist_id: "spec-9".to_string()
            }
        );
    }

    #[test]
    fn test_missing_scope_id_is_routing_error() {
        for path in ["/services", "/specialists?organization_id=", "/appointments?org=1"] {
            match Route::parse(path) {
                Err(Error::Routing(msg)) => {
                    assert_eq!(msg, "organization_id is missing from the URL")
                }
                other => panic!("{} parsed as {:?}", path, other),
            }
        }

        let err = Route::parse("/specialist/services").unwrap_err();
        assert_eq!(err.to_string(), "specialist_id is missing from the URL");
    }

    #[test]
    fn test_unknown_path_rejected() {
        assert!(matches!(Route::parse("/admin/panel"), Err(Error::Routing(_))));
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        let route = Route::Appointments {
            organization_id: "org-3".to_string(),
        };
        assert_eq!(Route::parse(&route.to_string()).unwrap(), route);
    }

    #[test]
    fn test_nav_links_signed_out() {
        let labels: Vec<_> = nav_links(None).into_iter().map(|l| l.label).collect();
        assert_eq!(labels, ["Organizations", "Bookings", "Login", "Register"]);
    }

    #[test]
    fn test_nav_links_for_roles() {
        let regular = user(Role::User);
        let labels: Vec<_> = nav_links(Some(&regular))
            .into_iter()
            .map(|l| l.label)
            .collect();
        assert_eq!(labels, ["Organizations", "Bookings", "Aida Test", "Logout"]);

        let admin = user(Role::Admin);
        let labels: Vec<_> = nav_links(Some(&admin))
            .into_iter()
            .map(|l| l.label)
            .collect();
        assert_eq!(labels, ["Organizations", "Bookings", "Login", "Register", "Admin"]);

        let unknown = user(Role::Unknown);
        let links = nav_links(Some(&unknown));
        assert!(links.iter().any(|l| l.label == "Login"));
    }
}

//! Authentication models

use serde::{Deserialize, Serialize};

/// Body for `POST /auth/sign-in`
#[derive(Debug, Clone, Serialize)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

/// Response from `POST /auth/sign-in`
#[derive(Debug, Clone, Deserialize)]
pub struct SignInResponse {
    #[serde(default)]
    pub access_token: Option<String>,
}

/// Body for `POST /auth/signup`
#[derive(Debug, Clone, Serialize)]
pub struct SignUpRequest {
    pub fio: String,
    pub email: String,
    pub password: String,
}

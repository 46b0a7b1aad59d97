//! Session and authorization header provider
//!
//! The bearer token is held behind a [`TokenStore`] that is handed to the
//! client explicitly. Every request reads the token at call time, so a
//! sign-in or sign-out is visible to the next request without rebuilding
//! the client.

use std::path::PathBuf;
use std::sync::{Arc, RwLock};

use chrono::{DateTime, Utc};
use log::{debug, warn};
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use serde::Deserialize;

use crate::config::Config;
use crate::error::{ApiError, Error, Result};

/// Read/write access to the persisted access token.
pub trait TokenStore: Send + Sync {
    /// Current token, if any
    fn load(&self) -> Option<String>;

    /// Persist a new token
    fn save(&self, token: &str) -> Result<()>;

    /// Forget the token
    fn clear(&self) -> Result<()>;
}

/// Token store backed by the YAML config file.
pub struct ConfigTokenStore {
    path: PathBuf,
}

impl ConfigTokenStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn load_config(&self) -> Result<Config> {
        match Config::load_from(&self.path) {
            Err(Error::Config(crate::error::ConfigError::NotFound)) => Ok(Config::default()),
            other => other,
        }
    }
}

impl TokenStore for ConfigTokenStore {
    fn load(&self) -> Option<String> {
        match self.load_config() {
            Ok(config) => config.access_token,
            Err(e) => {
                warn!("Could not read token from {}: {}", self.path.display(), e);
                None
            }
        }
    }

    fn save(&self, token: &str) -> Result<()> {
        let mut config = self.load_config()?;
        config.access_token = Some(token.to_string());
        config.save_to(&self.path)
    }

    fn clear(&self) -> Result<()> {
        let mut config = self.load_config()?;
        if config.access_token.take().is_some() {
            config.save_to(&self.path)?;
        }
        Ok(())
    }
}

/// Process-local token store, used for `--token` and in tests.
#[derive(Default)]
pub struct MemoryTokenStore {
    token: RwLock<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new(token: Option<String>) -> Self {
        Self {
            token: RwLock::new(token),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.token.read().ok().and_then(|t| t.clone())
    }

    fn save(&self, token: &str) -> Result<()> {
        let mut guard = self
            .token
            .write()
            .map_err(|e| Error::Other(format!("token store poisoned: {}", e)))?;
        *guard = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        let mut guard = self
            .token
            .write()
            .map_err(|e| Error::Other(format!("token store poisoned: {}", e)))?;
        *guard = None;
        Ok(())
    }
}

/// Explicit session handle passed to the API client.
#[derive(Clone)]
pub struct Session {
    store: Arc<dyn TokenStore>,
}

impl Session {
    pub fn new(store: Arc<dyn TokenStore>) -> Self {
        Self { store }
    }

    /// Session that never touches disk
    #[cfg(test)]
    pub fn in_memory(token: Option<String>) -> Self {
        Self::new(Arc::new(MemoryTokenStore::new(token)))
    }

    pub fn token(&self) -> Option<String> {
        self.store.load().filter(|t| !t.is_empty())
    }

    pub fn is_signed_in(&self) -> bool {
        self.token().is_some()
    }

    pub fn sign_in(&self, token: &str) -> Result<()> {
        debug!("Storing access token");
        self.store.save(token)
    }

    pub fn sign_out(&self) -> Result<()> {
        debug!("Clearing access token");
        self.store.clear()
    }

    /// Headers for an authenticated request: empty without a token,
    /// `Authorization: Bearer <token>` otherwise.
    pub fn auth_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        if let Some(token) = self.token() {
            match HeaderValue::from_str(&format!("Bearer {}", token)) {
                Ok(value) => {
                    headers.insert(AUTHORIZATION, value);
                }
                Err(_) => warn!("Stored access token is not a valid header value, sending none"),
            }
        }
        headers
    }
}

/// Decode base64url (URL-safe base64 without padding)
fn base64_decode_url(input: &str) -> std::result::Result<Vec<u8>, String> {
    use base64::{Engine as _, engine::general_purpose};

    general_purpose::URL_SAFE_NO_PAD
        .decode(input.trim_end_matches('='))
        .map_err(|e| e.to_string())
}

/// Read the `exp` claim of a JWT access token without verifying it.
pub fn token_expiry(token: &str) -> Result<DateTime<Utc>> {
    #[derive(Deserialize)]
    struct JwtPayload {
        exp: i64,
    }

    let parts: Vec<&str> = token.split('.').collect();
    let [_, payload_b64, _] = parts.as_slice() else {
        return Err(ApiError::InvalidToken.into());
    };

    let payload_bytes = base64_decode_url(payload_b64)
        .map_err(|e| ApiError::InvalidResponse(format!("Failed to decode JWT payload: {}", e)))?;

    let payload: JwtPayload = serde_json::from_slice(&payload_bytes)
        .map_err(|e| ApiError::InvalidResponse(format!("Failed to parse JWT payload: {}", e)))?;

    DateTime::from_timestamp(payload.exp, 0).ok_or_else(|| {
        ApiError::InvalidResponse("Invalid JWT expiration timestamp".to_string()).into()
    })
}

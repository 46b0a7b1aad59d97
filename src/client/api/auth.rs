//! Authentication API trait

use async_trait::async_trait;

use crate::client::models::{SignUpRequest, User};
use crate::error::Result;

/// Authentication operations for the Journal API
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Sign in and store the returned access token in the session
    async fn sign_in(&self, email: &str, password: &str) -> Result<()>;

    /// Register a new account
    async fn sign_up(&self, request: SignUpRequest) -> Result<()>;

    /// Fetch the signed-in user
    async fn current_user(&self) -> Result<User>;

    /// Forget the stored access token
    fn sign_out(&self) -> Result<()>;
}

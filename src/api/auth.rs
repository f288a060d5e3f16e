//! Login and admin-account provisioning. The client never sees password
//! hashes or token internals; the bearer token is opaque and simply stored.

use crate::client::{ApiClient, ApiError};
use crate::models::{AdminUser, AdminUserCreate, LoginRequest, LoginResponse};

impl ApiClient {
    /// login
    ///
    /// POST /auth/login. On success the caller persists all four response
    /// fields via `session::establish`; this method itself does not touch the
    /// session store, so a login form can confirm before committing.
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        self.post_json("/auth/login", request, "sign in").await
    }

    /// register
    ///
    /// POST /auth/register. Only valid for first-run bootstrap: the backend
    /// rejects it once any admin account exists.
    pub async fn register(&self, request: &AdminUserCreate) -> Result<serde_json::Value, ApiError> {
        self.post_json("/auth/register", request, "register initial admin")
            .await
    }

    /// create_user
    ///
    /// [Bearer-protected] POST /auth/users. Super-admin provisioning of new
    /// accounts; the backend enforces the role check.
    pub async fn create_user(
        &self,
        request: &AdminUserCreate,
    ) -> Result<serde_json::Value, ApiError> {
        self.post_authed("/auth/users", request, "create admin user")
            .await
    }

    /// users
    ///
    /// [Bearer-protected] GET /auth/users: the full admin account list for
    /// the user-management screen.
    pub async fn users(&self) -> Result<Vec<AdminUser>, ApiError> {
        self.get_authed("/auth/users", "list admin users").await
    }
}

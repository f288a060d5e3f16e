use reqwest::RequestBuilder;
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::config::AppConfig;
use crate::session::SessionState;

/// ApiError
///
/// The client-side failure taxonomy. `Http` carries whatever `detail` text
/// the backend supplied so forms can show the server's own message; its
/// `Display` output always contains the status code and the detail verbatim.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Non-2xx response with whatever detail text could be recovered.
    #[error("{context}: HTTP {status}: {detail}")]
    Http {
        context: String,
        status: u16,
        detail: String,
    },

    /// Transport failure (connection refused, DNS, malformed body, ...).
    #[error("{context}: {source}")]
    Transport {
        context: String,
        #[source]
        source: reqwest::Error,
    },

    /// Client-side required-field check failed; no request was issued.
    #[error("{0}")]
    Validation(String),

    /// A bearer-protected operation was attempted with no persisted session.
    /// Raised before any network I/O.
    #[error("未登录：请先登录管理后台")]
    NotAuthenticated,
}

impl ApiError {
    /// The HTTP status code, when the failure was an HTTP-level rejection.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Error body shape used by the backend for structured failures.
#[derive(serde::Deserialize)]
struct ErrorBody {
    detail: String,
}

/// ApiClient
///
/// The single HTTP wrapper every read/write in the crate goes through. It
/// joins relative paths onto `<origin>/api`, attaches JSON bodies, attaches
/// `Authorization: Bearer <token>` (read from the shared session store) for
/// protected endpoints, and normalizes non-2xx responses into `ApiError`.
///
/// The entity-level operations live in the `api` module, segregated the same
/// way the backend segregates its routers: `api::public` (anonymous reads and
/// application submissions), `api::auth` (login and user provisioning), and
/// `api::admin` (bearer-protected CRUD).
pub struct ApiClient {
    http: reqwest::Client,
    origin: String,
    session: Option<SessionState>,
}

impl ApiClient {
    /// An anonymous client for the public marketing surfaces.
    pub fn new(config: &AppConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            origin: config.api_origin.trim_end_matches('/').to_string(),
            session: None,
        }
    }

    /// A client wired to a session store, able to call protected endpoints.
    pub fn with_session(config: &AppConfig, session: SessionState) -> Self {
        Self {
            session: Some(session),
            ..Self::new(config)
        }
    }

    /// Absolute URL for an `/api`-prefixed path.
    fn api_url(&self, path: &str) -> String {
        format!("{}/api{}", self.origin, path)
    }

    /// health
    ///
    /// GET on the backend origin root (no `/api` prefix). Used by the startup
    /// smoke check; failures propagate so the operator sees them.
    pub async fn health(&self) -> Result<serde_json::Value, ApiError> {
        let request = self.http.get(format!("{}/", self.origin));
        self.execute(request, "health check").await
    }

    /// Resolves the bearer token from the session store, failing *before any
    /// network I/O* when nothing is persisted. This is the second half of the
    /// route-guard contract: an unauthenticated admin entry never produces a
    /// protected-resource request.
    fn bearer(&self) -> Result<String, ApiError> {
        let store = self.session.as_ref().ok_or(ApiError::NotAuthenticated)?;
        let session = store.load().ok_or(ApiError::NotAuthenticated)?;
        Ok(session.access_token)
    }

    // --- Request helpers (anonymous) ---

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        context: &str,
    ) -> Result<T, ApiError> {
        self.execute(self.http.get(self.api_url(path)), context).await
    }

    pub(crate) async fn post_json<T, B>(
        &self,
        path: &str,
        body: &B,
        context: &str,
    ) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized + Sync,
    {
        self.execute(self.http.post(self.api_url(path)).json(body), context)
            .await
    }

    // --- Request helpers (bearer-protected) ---

    pub(crate) async fn get_authed<T: DeserializeOwned>(
        &self,
        path: &str,
        context: &str,
    ) -> Result<T, ApiError> {
        let token = self.bearer()?;
        self.execute(self.http.get(self.api_url(path)).bearer_auth(token), context)
            .await
    }

    pub(crate) async fn post_authed<T, B>(
        &self,
        path: &str,
        body: &B,
        context: &str,
    ) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized + Sync,
    {
        let token = self.bearer()?;
        self.execute(
            self.http.post(self.api_url(path)).bearer_auth(token).json(body),
            context,
        )
        .await
    }

    pub(crate) async fn put_authed<T, B>(
        &self,
        path: &str,
        body: &B,
        context: &str,
    ) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized + Sync,
    {
        let token = self.bearer()?;
        self.execute(
            self.http.put(self.api_url(path)).bearer_auth(token).json(body),
            context,
        )
        .await
    }

    pub(crate) async fn delete_authed<T: DeserializeOwned>(
        &self,
        path: &str,
        context: &str,
    ) -> Result<T, ApiError> {
        let token = self.bearer()?;
        self.execute(
            self.http.delete(self.api_url(path)).bearer_auth(token),
            context,
        )
        .await
    }

    /// execute
    ///
    /// Issues the request and normalizes the outcome. On a non-2xx response it
    /// attempts to parse the body as `{"detail": ...}`; if that fails, the raw
    /// response text becomes the detail. The resulting error message combines
    /// the caller-supplied context, the status code, and the recovered detail.
    async fn execute<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        context: &str,
    ) -> Result<T, ApiError> {
        let response = request.send().await.map_err(|source| ApiError::Transport {
            context: context.to_string(),
            source,
        })?;

        let status = response.status();
        if status.is_success() {
            return response.json::<T>().await.map_err(|source| ApiError::Transport {
                context: context.to_string(),
                source,
            });
        }

        let raw = response.text().await.unwrap_or_default();
        let detail = match serde_json::from_str::<ErrorBody>(&raw) {
            Ok(body) => body.detail,
            Err(_) => raw,
        };

        Err(ApiError::Http {
            context: context.to_string(),
            status: status.as_u16(),
            detail,
        })
    }
}

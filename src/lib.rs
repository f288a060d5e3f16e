use std::sync::Arc;

// --- Module Structure ---

// Core client services and components.
pub mod catalog;
pub mod client;
pub mod config;
pub mod models;
pub mod session;
pub mod storage;
pub mod views;

// Module for API operation segregation (Public, Auth, Admin).
pub mod api;

// --- Public Re-exports ---

// Makes core state types easily accessible to the binary entry point and to
// embedding frontends.
pub use client::{ApiClient, ApiError};
pub use config::{AppConfig, Env};
pub use session::{FileSessionStore, Gate, MemorySessionStore, Session, SessionState};
pub use storage::{MockUploadService, S3UploadClient, UploadState};

/// AppState
///
/// The single, thread-safe, immutable container holding all client services
/// and configuration: the API client, the session store, the upload
/// collaborator, and the loaded configuration. Views and admin managers all
/// borrow from this one state rather than reading scattered globals.
#[derive(Clone)]
pub struct AppState {
    /// The HTTP wrapper every REST operation goes through.
    pub api: Arc<ApiClient>,
    /// Session persistence: token/username/role, the only session state.
    pub session: SessionState,
    /// Object-storage collaborator backing image/logo fields.
    pub uploads: UploadState,
    /// The loaded, immutable environment configuration.
    pub config: AppConfig,
}

use std::env;
use std::path::PathBuf;

/// AppConfig
///
/// Holds the client's entire configuration state: the backend origin, the
/// object-storage credentials for admin uploads, and the session-file
/// location. Immutable once loaded, and shared via the application state.
#[derive(Clone)]
pub struct AppConfig {
    // Backend origin; all REST paths are joined as `<origin>/api/...`,
    // except the health check which hits the origin root.
    pub api_origin: String,
    // S3-compatible storage endpoint URL (MinIO in local, Supabase in prod).
    pub s3_endpoint: String,
    // S3 region (often a stub for local/Supabase).
    pub s3_region: String,
    // Access Key ID for S3-compatible storage.
    pub s3_key: String,
    // Secret Access Key for S3-compatible storage.
    pub s3_secret: String,
    // The bucket name used for all image/logo uploads.
    pub s3_bucket: String,
    // Where the admin session (token/username/role) is persisted on disk.
    pub session_file: PathBuf,
    // Runtime environment marker. Controls logging format and local bucket setup.
    pub env: Env,
}

/// Env
///
/// Defines the runtime context, used to switch between development
/// conveniences (MinIO defaults, pretty logs) and production infrastructure
/// (Supabase Storage, JSON logs, mandatory secrets).
#[derive(Clone, PartialEq, Debug)]
pub enum Env {
    Local,
    Production,
}

impl Default for AppConfig {
    /// Provides a safe, non-panicking AppConfig instance primarily used for
    /// test setup, without needing any environment variables.
    fn default() -> Self {
        Self {
            api_origin: "http://localhost:8000".to_string(),
            s3_endpoint: "http://localhost:9000".to_string(),
            s3_region: "us-east-1".to_string(),
            s3_key: "admin".to_string(),
            s3_secret: "password".to_string(),
            s3_bucket: "fanfei-test".to_string(),
            session_file: env::temp_dir().join("fanfei_admin_session.json"),
            env: Env::Local,
        }
    }
}

impl AppConfig {
    /// load
    ///
    /// The canonical function for initializing configuration at startup.
    /// Reads all parameters from environment variables with the fail-fast
    /// principle for Production.
    ///
    /// # Panics
    /// Panics if a critical environment variable required for the current
    /// runtime environment (especially Production) is not found.
    pub fn load() -> Self {
        let env_str = env::var("APP_ENV").unwrap_or_else(|_| "local".to_string());
        let env = match env_str.as_str() {
            "production" => Env::Production,
            _ => Env::Local,
        };

        let session_file = env::var("SESSION_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| env::temp_dir().join("fanfei_admin_session.json"));

        match env {
            Env::Local => Self {
                env: Env::Local,
                // Local backend default matches the dev server port.
                api_origin: env::var("API_ORIGIN")
                    .unwrap_or_else(|_| "http://localhost:8000".to_string()),
                // Local storage (MinIO) uses known default credentials.
                s3_endpoint: "http://localhost:9000".to_string(),
                s3_region: "us-east-1".to_string(),
                s3_key: "admin".to_string(),
                s3_secret: "password".to_string(),
                s3_bucket: "fanfei-uploads".to_string(),
                session_file,
            },
            Env::Production => {
                // Production demands explicit setting of all infrastructure
                // endpoints and secrets.
                let api_origin =
                    env::var("API_ORIGIN").expect("FATAL: API_ORIGIN required in prod");
                let project_url =
                    env::var("SUPABASE_URL").expect("FATAL: SUPABASE_URL required in prod");
                // The S3 endpoint for Supabase's Storage API gateway.
                let s3_endpoint = format!("{}/storage/v1/s3", project_url);

                Self {
                    env: Env::Production,
                    api_origin,
                    s3_endpoint,
                    // The region is a stub when proxying through Supabase.
                    s3_region: "stub".to_string(),
                    s3_key: env::var("S3_ACCESS_KEY")
                        .expect("FATAL: S3_ACCESS_KEY required in prod"),
                    s3_secret: env::var("S3_SECRET_KEY")
                        .expect("FATAL: S3_SECRET_KEY required in prod"),
                    s3_bucket: env::var("S3_BUCKET_NAME")
                        .unwrap_or_else(|_| "fanfei-uploads".to_string()),
                    session_file,
                }
            }
        }
    }
}

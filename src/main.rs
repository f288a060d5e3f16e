use fanfei_portal::{
    AppState,
    client::ApiClient,
    config::{AppConfig, Env},
    session::{FileSessionStore, SessionState},
    storage::{S3UploadClient, UploadState},
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// main
///
/// The entry point for the portal client: initializes Configuration, Logging,
/// the Session store, Storage, and the API client, then runs a startup smoke
/// check (backend health + content prefetch) so a misconfigured deployment
/// fails loudly instead of rendering empty pages.
#[tokio::main]
async fn main() {
    // 1. Configuration & Environment Loading (Fail-Fast)
    dotenv::dotenv().ok();
    let config = AppConfig::load();

    // 2. Logging Filter Setup
    // Prioritizes RUST_LOG, falling back to sensible local defaults.
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "fanfei_portal=debug,reqwest=info".into());

    // 3. Initialize Logging based on Environment
    match config.env {
        Env::Local => {
            // LOCAL: pretty output for human readability.
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().pretty())
                .init();
        }
        Env::Production => {
            // PROD: JSON output for centralized log aggregators.
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
    }

    tracing::info!("Portal client starting in {:?} mode", config.env);

    // 4. Session Store Initialization
    // File-backed persistence of token/username/role (the localStorage analog).
    let session: SessionState = Arc::new(FileSessionStore::new(config.session_file.clone()));

    // 5. Storage Initialization (S3/MinIO)
    let s3_client = S3UploadClient::new(
        &config.s3_endpoint,
        &config.s3_region,
        &config.s3_key,
        &config.s3_secret,
        &config.s3_bucket,
    )
    .await;

    // LOCAL-ONLY: ensure the MinIO bucket exists for the Dockerized setup.
    if config.env == Env::Local {
        use fanfei_portal::storage::UploadService;
        s3_client.ensure_bucket_exists().await;
    }

    let uploads: UploadState = Arc::new(s3_client);

    // 6. Unified State Assembly
    let api = Arc::new(ApiClient::with_session(&config, session.clone()));
    let state = AppState {
        api,
        session,
        uploads,
        config,
    };

    // 7. Startup Smoke Check
    // Health first; content prefetch after. Reader degradation means the
    // prefetch never aborts startup, but empty counts are worth a warning.
    match state.api.health().await {
        Ok(body) => tracing::info!(?body, "backend healthy"),
        Err(error) => {
            tracing::error!(%error, "backend health check failed");
            std::process::exit(1);
        }
    }

    let solutions = state.api.solutions().await;
    let products = state.api.products().await;
    let news = state.api.news().await;
    let exhibitions = state.api.exhibitions().await;

    tracing::info!(
        solutions = solutions.len(),
        products = products.len(),
        news = news.len(),
        exhibitions = exhibitions.len(),
        "content prefetch complete"
    );

    if solutions.is_empty() && products.is_empty() {
        tracing::warn!("no marketing content returned; check backend seed data");
    }
}

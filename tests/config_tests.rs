use fanfei_portal::config::{AppConfig, Env};
use serial_test::serial;
use std::env;
use std::path::PathBuf;

// Env-var mutation is process-global, so every test here is serialized.

fn set(key: &str, value: &str) {
    unsafe { env::set_var(key, value) }
}

fn unset(key: &str) {
    unsafe { env::remove_var(key) }
}

fn reset_env() {
    for key in [
        "APP_ENV",
        "API_ORIGIN",
        "SUPABASE_URL",
        "S3_ACCESS_KEY",
        "S3_SECRET_KEY",
        "S3_BUCKET_NAME",
        "SESSION_FILE",
    ] {
        unset(key);
    }
}

#[test]
#[serial]
fn test_default_config_needs_no_environment() {
    let config = AppConfig::default();
    assert_eq!(config.env, Env::Local);
    assert_eq!(config.api_origin, "http://localhost:8000");
    assert_eq!(config.s3_bucket, "fanfei-test");
}

#[test]
#[serial]
fn test_load_defaults_to_local() {
    reset_env();

    let config = AppConfig::load();
    assert_eq!(config.env, Env::Local);
    assert_eq!(config.api_origin, "http://localhost:8000");
    // Local storage points at the Dockerized MinIO with known credentials.
    assert_eq!(config.s3_endpoint, "http://localhost:9000");
    assert_eq!(config.s3_bucket, "fanfei-uploads");
}

#[test]
#[serial]
fn test_local_origin_override() {
    reset_env();
    set("API_ORIGIN", "http://127.0.0.1:9001");

    let config = AppConfig::load();
    assert_eq!(config.api_origin, "http://127.0.0.1:9001");

    unset("API_ORIGIN");
}

#[test]
#[serial]
fn test_production_reads_infrastructure_from_environment() {
    reset_env();
    set("APP_ENV", "production");
    set("API_ORIGIN", "https://api.fanfei.example.com");
    set("SUPABASE_URL", "https://project.supabase.co");
    set("S3_ACCESS_KEY", "prod-key");
    set("S3_SECRET_KEY", "prod-secret");

    let config = AppConfig::load();
    assert_eq!(config.env, Env::Production);
    assert_eq!(config.api_origin, "https://api.fanfei.example.com");
    // The storage endpoint is derived from the project URL.
    assert_eq!(
        config.s3_endpoint,
        "https://project.supabase.co/storage/v1/s3"
    );
    assert_eq!(config.s3_key, "prod-key");
    // Bucket name falls back when not set explicitly.
    assert_eq!(config.s3_bucket, "fanfei-uploads");

    reset_env();
}

#[test]
#[serial]
fn test_session_file_override() {
    reset_env();
    set("SESSION_FILE", "/tmp/custom_session.json");

    let config = AppConfig::load();
    assert_eq!(config.session_file, PathBuf::from("/tmp/custom_session.json"));

    reset_env();
}

use async_trait::async_trait;
use aws_sdk_s3 as s3;
use s3::primitives::ByteStream;
use std::sync::Arc;
use uuid::Uuid;

// 1. UploadService Contract

/// UploadService
///
/// Defines the abstract contract for the object-storage collaborator behind
/// every image/logo field in the admin forms. The admin managers never touch
/// file bytes themselves; they store the public URL this service returns.
/// The trait allows swapping the real S3 client (S3UploadClient) for the
/// in-memory mock (MockUploadService) during testing.
#[async_trait]
pub trait UploadService: Send + Sync {
    /// Ensures the configured bucket exists. Used in the `Env::Local` setup
    /// to automatically provision the bucket in MinIO. No-op in production.
    async fn ensure_bucket_exists(&self);

    /// Uploads the file and returns its public URL, ready to be stored on the
    /// entity record.
    async fn upload(
        &self,
        filename: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<String, String>;
}

/// UploadState
///
/// The concrete type used to share upload access across the application state.
pub type UploadState = Arc<dyn UploadService>;

/// object_key
///
/// Derives a unique object key (`uploads/<uuid>.<ext>`) from the original
/// filename. The extension is the only part of the user-supplied name that
/// survives, which also neutralizes path traversal in one step.
fn object_key(filename: &str) -> String {
    let extension = std::path::Path::new(filename)
        .extension()
        .and_then(std::ffi::OsStr::to_str)
        .unwrap_or("bin");
    format!("uploads/{}.{}", Uuid::new_v4(), extension)
}

/// sanitize_key
///
/// Utility function to prevent path traversal by removing directory
/// navigation components (`..`, `.`) from a user-provided key segment.
fn sanitize_key(key: &str) -> String {
    key.split('/')
        .filter(|segment| !segment.is_empty() && *segment != ".." && *segment != ".")
        .collect::<Vec<_>>()
        .join("/")
}

// 2. The Real Implementation (S3/MinIO/Supabase)

/// S3UploadClient
///
/// The concrete implementation using the AWS SDK for S3. Due to S3
/// compatibility, this client transparently handles connections to:
/// - **Local:** Dockerized MinIO instance.
/// - **Production:** Supabase Storage endpoint.
///
/// The `force_path_style(true)` is critical for MinIO and Supabase
/// compatibility; it also makes the public URL shape predictable
/// (`<endpoint>/<bucket>/<key>`).
#[derive(Clone)]
pub struct S3UploadClient {
    client: s3::Client,
    endpoint: String,
    bucket_name: String,
}

impl S3UploadClient {
    /// Constructs the S3 client using credentials from AppConfig.
    pub async fn new(
        endpoint: &str,
        region: &str,
        access_key: &str,
        secret_key: &str,
        bucket: &str,
    ) -> Self {
        let credentials =
            s3::config::Credentials::new(access_key, secret_key, None, None, "static");

        let config = s3::Config::builder()
            .credentials_provider(credentials)
            .endpoint_url(endpoint)
            .region(s3::config::Region::new(region.to_string()))
            .behavior_version_latest()
            // Path-style addressing (http://endpoint/bucket/key) is required
            // for MinIO and the Supabase Storage API gateway.
            .force_path_style(true)
            .build();

        Self {
            client: s3::Client::from_conf(config),
            endpoint: endpoint.trim_end_matches('/').to_string(),
            bucket_name: bucket.to_string(),
        }
    }
}

#[async_trait]
impl UploadService for S3UploadClient {
    /// Calls the S3 CreateBucket API. Idempotent, so it is safe at startup.
    async fn ensure_bucket_exists(&self) {
        let _ = self
            .client
            .create_bucket()
            .bucket(&self.bucket_name)
            .send()
            .await;
    }

    async fn upload(
        &self,
        filename: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<String, String> {
        let key = object_key(filename);

        self.client
            .put_object()
            .bucket(&self.bucket_name)
            .key(&key)
            .content_type(content_type)
            .body(ByteStream::from(bytes))
            .send()
            .await
            .map_err(|e| e.to_string())?;

        // Public-read bucket: the object URL doubles as the stored image URL.
        Ok(format!("{}/{}/{}", self.endpoint, self.bucket_name, key))
    }
}

// 3. The Mock Implementation (For Unit Tests)

/// MockUploadService
///
/// A mock `UploadService` used exclusively for testing. Keys derive from the
/// sanitized original filename so assertions stay deterministic.
#[derive(Clone)]
pub struct MockUploadService {
    /// When true, all operations return a simulated failure.
    pub should_fail: bool,
}

impl MockUploadService {
    pub fn new() -> Self {
        Self { should_fail: false }
    }

    pub fn new_failing() -> Self {
        Self { should_fail: true }
    }
}

impl Default for MockUploadService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UploadService for MockUploadService {
    async fn ensure_bucket_exists(&self) {
        // No-op in mock environment.
    }

    async fn upload(
        &self,
        filename: &str,
        _content_type: &str,
        _bytes: Vec<u8>,
    ) -> Result<String, String> {
        if self.should_fail {
            return Err("Mock Upload Error: Simulation requested".to_string());
        }

        let key = sanitize_key(filename);
        Ok(format!("http://localhost:9000/mock-bucket/uploads/{}", key))
    }
}

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::OnceCell;
use uuid::Uuid;

use crate::modules::media::application::ports::outgoing::media_store::{
    MediaStore, MediaStoreError, StoredMedia,
};

/// google-cloud-storage uses a bucket resource name format:
/// `projects/_/buckets/{bucket}`
fn bucket_resource(bucket: &str) -> String {
    format!("projects/_/buckets/{}", bucket)
}

fn extension_for(content_type: &str) -> &'static str {
    match content_type.to_lowercase().as_str() {
        "image/jpeg" => "jpg",
        "image/png" => "png",
        "application/pdf" => "pdf",
        _ => "bin",
    }
}

/// Internal seam so the adapter is testable without mocking
/// google-cloud-storage types.
#[async_trait]
trait GcsClient: Send + Sync {
    async fn upload_object(
        &self,
        bucket_resource: &str,
        object_name: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<(), String>;

    async fn delete_object(&self, bucket_resource: &str, object_name: &str)
        -> Result<(), String>;
}

#[cfg(test)]
struct ArcGcsClient(Arc<dyn GcsClient>);

#[cfg(test)]
#[async_trait]
impl GcsClient for ArcGcsClient {
    async fn upload_object(
        &self,
        bucket_resource: &str,
        object_name: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<(), String> {
        self.0
            .upload_object(bucket_resource, object_name, bytes, content_type)
            .await
    }

    async fn delete_object(
        &self,
        bucket_resource: &str,
        object_name: &str,
    ) -> Result<(), String> {
        self.0.delete_object(bucket_resource, object_name).await
    }
}

/// Stores objects in a public GCS bucket. `public_id` is the object
/// name inside the bucket; `secure_url` is the canonical
/// storage.googleapis.com URL.
#[derive(Clone)]
pub struct GcsMediaStore {
    client: Arc<OnceCell<Box<dyn GcsClient>>>,
    bucket_name: String,
}

impl GcsMediaStore {
    /// Synchronous constructor; the client is initialized lazily on
    /// first use.
    pub fn new(bucket_name: String) -> Self {
        Self {
            client: Arc::new(OnceCell::new()),
            bucket_name,
        }
    }

    async fn get_client(&self) -> Result<&dyn GcsClient, Box<dyn std::error::Error + Send + Sync>> {
        self.client
            .get_or_try_init(|| async {
                let real_client = RealGcsClient::new().await?;
                Ok(Box::new(real_client) as Box<dyn GcsClient>)
            })
            .await
            .map(|boxed| &**boxed)
    }

    #[cfg(test)]
    fn with_client(client: Arc<dyn GcsClient>, bucket_name: String) -> Self {
        let once = OnceCell::new();
        let _ = once.set(Box::new(ArcGcsClient(client)) as Box<dyn GcsClient>);

        Self {
            client: Arc::new(once),
            bucket_name,
        }
    }
}

#[async_trait]
impl MediaStore for GcsMediaStore {
    async fn upload(
        &self,
        bytes: Vec<u8>,
        content_type: &str,
        folder: &str,
    ) -> Result<StoredMedia, MediaStoreError> {
        let client = self
            .get_client()
            .await
            .map_err(|e| MediaStoreError::UploadFailed(e.to_string()))?;

        // Object names are generated here so a replaced file never
        // collides with the one it supersedes.
        let object_name = format!(
            "{}/{}.{}",
            folder.trim_matches('/'),
            Uuid::new_v4(),
            extension_for(content_type)
        );

        client
            .upload_object(
                &bucket_resource(&self.bucket_name),
                &object_name,
                bytes,
                content_type,
            )
            .await
            .map_err(MediaStoreError::UploadFailed)?;

        Ok(StoredMedia {
            secure_url: format!(
                "https://storage.googleapis.com/{}/{}",
                self.bucket_name, object_name
            ),
            public_id: object_name,
        })
    }

    async fn delete(&self, public_id: &str) -> Result<(), MediaStoreError> {
        let client = self
            .get_client()
            .await
            .map_err(|e| MediaStoreError::DeleteFailed(e.to_string()))?;

        client
            .delete_object(&bucket_resource(&self.bucket_name), public_id)
            .await
            .map_err(MediaStoreError::DeleteFailed)
    }
}

// ============================================================================
// Real Google Cloud Storage client (google-cloud-storage)
// ============================================================================

struct RealGcsClient {
    storage: google_cloud_storage::client::Storage,
    control: google_cloud_storage::client::StorageControl,
}

impl RealGcsClient {
    async fn new() -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        tracing::info!("Initializing GCS client...");

        let storage = google_cloud_storage::client::Storage::builder()
            .build()
            .await
            .map_err(|e| {
                tracing::error!("Failed to build GCS storage client: {:?}", e);
                e
            })?;

        let control = google_cloud_storage::client::StorageControl::builder()
            .build()
            .await
            .map_err(|e| {
                tracing::error!("Failed to build GCS control client: {:?}", e);
                e
            })?;

        tracing::info!("GCS client ready");

        Ok(Self { storage, control })
    }
}

#[async_trait]
impl GcsClient for RealGcsClient {
    async fn upload_object(
        &self,
        bucket_resource: &str,
        object_name: &str,
        bytes: Vec<u8>,
        _content_type: &str,
    ) -> Result<(), String> {
        self.storage
            .write_object(
                bucket_resource.to_string(),
                object_name.to_string(),
                bytes::Bytes::from(bytes),
            )
            .send_unbuffered()
            .await
            .map_err(|e| e.to_string())?;

        Ok(())
    }

    async fn delete_object(
        &self,
        bucket_resource: &str,
        object_name: &str,
    ) -> Result<(), String> {
        self.control
            .delete_object()
            .set_bucket(bucket_resource.to_string())
            .set_object(object_name.to_string())
            .send()
            .await
            .map_err(|e| e.to_string())?;

        Ok(())
    }
}

use super::object_store_repository::ObjectStoreRepository;
use crate::domain::delivery::ObjectLocation;
use async_trait::async_trait;
use aws_sdk_s3::{primitives::ByteStream, Client as S3Client};
use std::sync::Arc;

/// AWS S3 implementation of the object store repository
pub struct S3ObjectStoreRepository {
    s3_client: Arc<S3Client>,
}

impl S3ObjectStoreRepository {
    pub fn new(s3_client: Arc<S3Client>) -> Self {
        Self { s3_client }
    }
}

#[async_trait]
impl ObjectStoreRepository for S3ObjectStoreRepository {
    async fn get(&self, location: &ObjectLocation) -> Result<Vec<u8>, String> {
        tracing::debug!(bucket = %location.bucket, key = %location.key, "S3 get_object");

        let output = self
            .s3_client
            .get_object()
            .bucket(&location.bucket)
            .key(&location.key)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(
                    error = ?e,
                    bucket = %location.bucket,
                    key = %location.key,
                    "S3 get_object failed"
                );
                format!("S3 error: {}", e)
            })?;

        let body = output
            .body
            .collect()
            .await
            .map_err(|e| format!("Failed to read object body: {}", e))?
            .into_bytes()
            .to_vec();

        tracing::debug!(
            bucket = %location.bucket,
            key = %location.key,
            size = body.len(),
            "S3 object fetched"
        );

        Ok(body)
    }

    async fn put(
        &self,
        location: &ObjectLocation,
        body: Vec<u8>,
        content_type: &str,
    ) -> Result<(), String> {
        let size = body.len();

        self.s3_client
            .put_object()
            .bucket(&location.bucket)
            .key(&location.key)
            .body(ByteStream::from(body))
            .content_type(content_type)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(
                    error = ?e,
                    bucket = %location.bucket,
                    key = %location.key,
                    "S3 put_object failed"
                );
                format!("S3 error: {}", e)
            })?;

        tracing::info!(
            bucket = %location.bucket,
            key = %location.key,
            size,
            content_type,
            "S3 object stored"
        );

        Ok(())
    }
}

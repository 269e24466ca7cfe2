use crate::domain::delivery::ObjectLocation;
use async_trait::async_trait;

/// Repository for key-addressed binary storage
#[async_trait]
pub trait ObjectStoreRepository: Send + Sync {
    /// Fetch the full body of an object
    async fn get(&self, location: &ObjectLocation) -> Result<Vec<u8>, String>;

    /// Store `body` at `location`, replacing whatever was there
    async fn put(
        &self,
        location: &ObjectLocation,
        body: Vec<u8>,
        content_type: &str,
    ) -> Result<(), String>;
}

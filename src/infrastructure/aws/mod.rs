use crate::domain::delivery::DeliveryPipeline;
use crate::infrastructure::config::Config;
use crate::infrastructure::repositories::{
    LocalFileRepository, PollyTtsRepository, S3ObjectStoreRepository,
};
use std::sync::Arc;

/// SDK clients shared by every invocation of a process
#[derive(Clone)]
pub struct AwsClients {
    pub polly: Arc<aws_sdk_polly::Client>,
    pub s3: Arc<aws_sdk_s3::Client>,
}

impl AwsClients {
    /// Resolve credentials and region through the default provider chain.
    /// No request is sent until a client is used.
    pub async fn load(config: &Config) -> Self {
        tracing::info!("Initializing AWS clients with region: {}", config.aws_region);

        let has_access_key = std::env::var("AWS_ACCESS_KEY_ID").is_ok();
        let has_secret_key = std::env::var("AWS_SECRET_ACCESS_KEY").is_ok();
        tracing::debug!(
            has_access_key_id = has_access_key,
            has_secret_access_key = has_secret_key,
            "AWS credentials environment check"
        );

        let aws_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(aws_config::Region::new(config.aws_region.clone()))
            .load()
            .await;

        tracing::info!(region = ?aws_config.region(), "AWS configuration loaded");

        Self {
            polly: Arc::new(aws_sdk_polly::Client::new(&aws_config)),
            s3: Arc::new(aws_sdk_s3::Client::new(&aws_config)),
        }
    }

    /// Wire the production repositories into a pipeline
    pub fn pipeline(&self) -> DeliveryPipeline {
        DeliveryPipeline::new(
            Arc::new(PollyTtsRepository::new(self.polly.clone())),
            Arc::new(S3ObjectStoreRepository::new(self.s3.clone())),
            Arc::new(LocalFileRepository::new()),
        )
    }
}

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::{
    domain::delivery::DeliveryPipelineApi,
    error::{AppError, AppResult},
    infrastructure::config::{Config, DeliveryTarget},
};

/// Response returned to the function runtime
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct InvocationResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    /// JSON-encoded [`DeliveredTo`]
    pub body: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct DeliveredTo {
    pub bucket: String,
    pub prefix: String,
}

pub struct InvocationController {
    pipeline: Arc<dyn DeliveryPipelineApi>,
    config: Arc<Config>,
}

impl InvocationController {
    pub fn new(pipeline: Arc<dyn DeliveryPipelineApi>, config: Arc<Config>) -> Self {
        Self { pipeline, config }
    }

    /// Run one delivery against the configured bucket. The event payload is ignored.
    pub async fn handle(&self, _payload: serde_json::Value) -> AppResult<InvocationResponse> {
        let DeliveryTarget::ObjectStore { bucket, prefix } = &self.config.target else {
            return Err(AppError::InvalidConfiguration(
                "function invocations require the s3 delivery target".to_string(),
            ));
        };

        let report = self.pipeline.deliver(&self.config.plan()).await.map_err(|e| {
            tracing::error!(error = %e, kind = e.kind(), "Invocation failed");
            AppError::from(e)
        })?;

        tracing::info!(
            bucket = %bucket,
            prefix = %prefix,
            audio_size_bytes = report.audio_bytes_written,
            "Invocation succeeded"
        );

        let body = serde_json::to_string(&DeliveredTo {
            bucket: bucket.clone(),
            prefix: prefix.clone(),
        })
        .map_err(|e| AppError::Internal(e.to_string()))?;

        Ok(InvocationResponse {
            status_code: 200,
            body,
        })
    }
}

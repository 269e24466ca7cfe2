use crate::domain::delivery::location::normalize_prefix;
use crate::domain::delivery::DeliveryPlan;
use crate::error::{AppError, AppResult};
use std::env;
use std::path::PathBuf;

pub const DEFAULT_LOCAL_INPUT: &str = "speech.txt";
pub const DEFAULT_LOCAL_OUTPUT: &str = "polly_output.mp3";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub target: DeliveryTarget,
    pub aws_region: String,
    pub log_format: LogFormat,
}

/// Where text is read from and audio is written to
#[derive(Debug, Clone, PartialEq)]
pub enum DeliveryTarget {
    Local {
        input_path: PathBuf,
        output_path: PathBuf,
    },
    /// `prefix` is stored with leading and trailing slashes removed
    ObjectStore { bucket: String, prefix: String },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TargetKind {
    Local,
    S3,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl Config {
    /// Load configuration from the process environment (and `.env`, if present)
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok(), None)
    }

    /// Like [`Config::from_env`], but ignores `DELIVERY_TARGET`
    pub fn from_env_with_target(kind: TargetKind) -> AppResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok(), Some(kind))
    }

    pub fn from_lookup<F>(lookup: F, forced_target: Option<TargetKind>) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let kind = match forced_target {
            Some(kind) => kind,
            None => match lookup("DELIVERY_TARGET")
                .unwrap_or_else(|| "s3".to_string())
                .to_lowercase()
                .as_str()
            {
                "s3" => TargetKind::S3,
                "local" => TargetKind::Local,
                other => {
                    return Err(AppError::InvalidConfiguration(format!(
                        "DELIVERY_TARGET must be 's3' or 'local', got '{}'",
                        other
                    )))
                }
            },
        };

        let target = match kind {
            TargetKind::S3 => {
                let bucket = lookup("S3_Bucket")
                    .map(|b| b.trim().to_string())
                    .filter(|b| !b.is_empty())
                    .ok_or_else(|| AppError::ConfigurationMissing("S3_Bucket".to_string()))?;
                let prefix = normalize_prefix(&lookup("S3_Bucket_Prefix").unwrap_or_default());
                DeliveryTarget::ObjectStore { bucket, prefix }
            }
            TargetKind::Local => DeliveryTarget::Local {
                input_path: lookup("LOCAL_INPUT_PATH")
                    .unwrap_or_else(|| DEFAULT_LOCAL_INPUT.to_string())
                    .into(),
                output_path: lookup("LOCAL_OUTPUT_PATH")
                    .unwrap_or_else(|| DEFAULT_LOCAL_OUTPUT.to_string())
                    .into(),
            },
        };

        let config = Config {
            target,
            aws_region: lookup("AWS_REGION").unwrap_or_else(|| "us-east-1".to_string()),
            log_format: lookup("LOG_FORMAT")
                .map(|s| match s.to_lowercase().as_str() {
                    "json" => LogFormat::Json,
                    _ => LogFormat::Pretty,
                })
                .unwrap_or(LogFormat::Pretty),
        };

        Ok(config)
    }

    /// Source and sink for one invocation
    pub fn plan(&self) -> DeliveryPlan {
        match &self.target {
            DeliveryTarget::Local {
                input_path,
                output_path,
            } => DeliveryPlan::local(input_path.clone(), output_path.clone()),
            DeliveryTarget::ObjectStore { bucket, prefix } => {
                DeliveryPlan::object_store(bucket, prefix)
            }
        }
    }
}

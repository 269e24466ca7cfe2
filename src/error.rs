use crate::domain::delivery::DeliveryServiceError;

/// Main application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Missing required configuration: {0}")]
    ConfigurationMissing(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error(transparent)]
    Delivery(#[from] DeliveryServiceError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Stable label used in structured logs
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ConfigurationMissing(_) => "configuration_missing",
            Self::InvalidConfiguration(_) => "invalid_configuration",
            Self::Delivery(err) => err.kind(),
            Self::Internal(_) => "internal",
        }
    }
}

/// Custom result type for the application
pub type AppResult<T> = Result<T, AppError>;

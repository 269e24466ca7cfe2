use crate::infrastructure::config::LogFormat;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_FILTER: &str = "speech_delivery=debug,aws_config=warn";

/// Install the global tracing subscriber. `RUST_LOG` overrides the default filter.
pub fn init_logging(log_format: &LogFormat) {
    if *log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| DEFAULT_FILTER.into()),
            )
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| DEFAULT_FILTER.into()),
            )
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}

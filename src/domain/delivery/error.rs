#[derive(Debug, thiserror::Error)]
pub enum DeliveryServiceError {
    #[error("source unavailable: {0}")]
    SourceUnavailable(String),
    #[error("synthesis failed: {0}")]
    Synthesis(String),
    #[error("failed to read audio stream: {0}")]
    StreamRead(String),
    #[error("failed to write audio: {0}")]
    SinkWrite(String),
}

impl DeliveryServiceError {
    /// Stable label used in structured logs
    pub fn kind(&self) -> &'static str {
        match self {
            Self::SourceUnavailable(_) => "source_unavailable",
            Self::Synthesis(_) => "synthesis_error",
            Self::StreamRead(_) => "stream_read_error",
            Self::SinkWrite(_) => "sink_write_error",
        }
    }
}

use super::audio::looks_like_mp3;
use super::error::DeliveryServiceError;
use super::location::{DeliveryPlan, Location};
use super::synthesis::{SynthesisRequest, AUDIO_CONTENT_TYPE};
use crate::infrastructure::repositories::{
    LocalFileRepository, ObjectStoreRepository, TtsRepository,
};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Instant;

/// Outcome of a successful delivery
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryReport {
    pub plan: DeliveryPlan,
    pub characters_read: usize,
    pub audio_bytes_written: usize,
}

pub struct DeliveryPipeline {
    tts_repo: Arc<dyn TtsRepository>,
    object_store: Arc<dyn ObjectStoreRepository>,
    local_files: Arc<LocalFileRepository>,
}

impl DeliveryPipeline {
    pub fn new(
        tts_repo: Arc<dyn TtsRepository>,
        object_store: Arc<dyn ObjectStoreRepository>,
        local_files: Arc<LocalFileRepository>,
    ) -> Self {
        Self {
            tts_repo,
            object_store,
            local_files,
        }
    }
}

#[async_trait]
pub trait DeliveryPipelineApi: Send + Sync {
    /// Read text from the plan's source, synthesize it and write the audio
    /// to the plan's sink.
    ///
    /// This operation:
    /// - Reads the source exactly once
    /// - Calls the synthesis service once with the whole text
    /// - Drains the returned audio stream into memory
    /// - Overwrites the sink with the audio
    ///
    /// Any failure aborts the run. Nothing is retried or rolled back.
    async fn deliver(&self, plan: &DeliveryPlan) -> Result<DeliveryReport, DeliveryServiceError>;
}

#[async_trait]
impl DeliveryPipelineApi for DeliveryPipeline {
    async fn deliver(&self, plan: &DeliveryPlan) -> Result<DeliveryReport, DeliveryServiceError> {
        let start_time = Instant::now();

        tracing::info!(
            source = %plan.source,
            sink = %plan.sink,
            "Speech delivery started"
        );

        // 1. Read source text
        let text = self.read_text(&plan.source).await?;
        let characters_read = text.chars().count();

        tracing::info!(
            source = %plan.source,
            text_length = text.len(),
            characters = characters_read,
            "Source text read"
        );

        // 2. Synthesize and 3. drain the audio stream
        let request = SynthesisRequest::new(text);
        let audio = self.synthesize(&request).await?;

        if !looks_like_mp3(&audio) {
            tracing::warn!(
                audio_size = audio.len(),
                "Synthesized audio does not start with an MP3 frame header"
            );
        }

        // 4. Write audio to sink
        let audio_bytes_written = audio.len();
        self.write_audio(&plan.sink, audio).await?;

        tracing::info!(
            source = %plan.source,
            sink = %plan.sink,
            characters = characters_read,
            audio_size_bytes = audio_bytes_written,
            latency_ms = start_time.elapsed().as_millis(),
            "Speech delivery completed"
        );

        Ok(DeliveryReport {
            plan: plan.clone(),
            characters_read,
            audio_bytes_written,
        })
    }
}

impl DeliveryPipeline {
    async fn read_text(&self, source: &Location) -> Result<String, DeliveryServiceError> {
        let bytes = match source {
            Location::Local(path) => self.local_files.read(path).await,
            Location::Object(object) => self.object_store.get(object).await,
        }
        .map_err(|e| {
            tracing::error!(source = %source, error = %e, "Failed to read source text");
            DeliveryServiceError::SourceUnavailable(format!("{}: {}", source, e))
        })?;

        String::from_utf8(bytes).map_err(|e| {
            DeliveryServiceError::SourceUnavailable(format!(
                "{}: text is not valid UTF-8 ({})",
                source, e
            ))
        })
    }

    async fn synthesize(&self, request: &SynthesisRequest) -> Result<Vec<u8>, DeliveryServiceError> {
        let audio_stream = self
            .tts_repo
            .synthesize(request)
            .await
            .map_err(DeliveryServiceError::Synthesis)?;

        // The stream is consumed here whether or not collection succeeds
        let audio = audio_stream
            .collect()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Failed to collect synthesized audio stream");
                DeliveryServiceError::StreamRead(e.to_string())
            })?
            .into_bytes()
            .to_vec();

        if audio.is_empty() {
            return Err(DeliveryServiceError::StreamRead(
                "synthesis returned an empty audio stream".to_string(),
            ));
        }

        tracing::debug!(audio_size = audio.len(), "Audio stream collected");

        Ok(audio)
    }

    async fn write_audio(&self, sink: &Location, audio: Vec<u8>) -> Result<(), DeliveryServiceError> {
        let result = match sink {
            Location::Local(path) => self.local_files.write(path, &audio).await,
            Location::Object(object) => self.object_store.put(object, audio, AUDIO_CONTENT_TYPE).await,
        };

        result.map_err(|e| {
            tracing::error!(sink = %sink, error = %e, "Failed to write audio");
            DeliveryServiceError::SinkWrite(format!("{}: {}", sink, e))
        })
    }
}

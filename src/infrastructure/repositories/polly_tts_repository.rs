use super::tts_repository::TtsRepository;
use crate::domain::delivery::SynthesisRequest;
use async_trait::async_trait;
use aws_sdk_polly::{
    primitives::ByteStream,
    types::{LanguageCode, OutputFormat, VoiceId},
    Client as PollyClient,
};
use std::sync::Arc;

/// AWS Polly implementation of TTS repository
pub struct PollyTtsRepository {
    polly_client: Arc<PollyClient>,
}

impl PollyTtsRepository {
    pub fn new(polly_client: Arc<PollyClient>) -> Self {
        Self { polly_client }
    }
}

#[async_trait]
impl TtsRepository for PollyTtsRepository {
    async fn synthesize(&self, request: &SynthesisRequest) -> Result<ByteStream, String> {
        let start_time = std::time::Instant::now();

        let language_code = LanguageCode::from(request.language_code);
        let voice_id = VoiceId::from(request.voice_id);
        let output_format = OutputFormat::from(request.output_format);

        tracing::info!(
            language = request.language_code,
            voice = request.voice_id,
            output_format = request.output_format,
            text_length = request.text.len(),
            text_preview = request.preview(),
            "Calling AWS Polly synthesize_speech"
        );

        let result = self
            .polly_client
            .synthesize_speech()
            .language_code(language_code)
            .voice_id(voice_id)
            .output_format(output_format)
            .text(&request.text)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(
                    error = ?e,
                    error_display = %e,
                    language = request.language_code,
                    voice = request.voice_id,
                    text_length = request.text.len(),
                    "AWS Polly synthesize_speech failed"
                );
                format!("AWS Polly error: {}", e)
            })?;

        tracing::info!(
            provider = "polly",
            latency_ms = start_time.elapsed().as_millis(),
            content_type = result.content_type().unwrap_or("unknown"),
            request_characters = result.request_characters(),
            "AWS Polly synthesize_speech successful"
        );

        Ok(result.audio_stream)
    }
}

use crate::domain::delivery::SynthesisRequest;
use async_trait::async_trait;
use aws_sdk_polly::primitives::ByteStream;

/// Repository for TTS synthesis operations.
/// Abstracts the underlying TTS provider (AWS Polly in production, stubs in tests)
///
/// Implementations submit the whole text as a single request and hand back
/// the provider's audio stream unread. The caller owns the stream and is
/// responsible for draining it.
#[async_trait]
pub trait TtsRepository: Send + Sync {
    /// Synthesize text to speech
    ///
    /// # Arguments
    /// * `request` - Text plus language, voice and output format
    ///
    /// # Errors
    /// Returns error if the provider rejects the request or is unreachable
    async fn synthesize(&self, request: &SynthesisRequest) -> Result<ByteStream, String>;
}

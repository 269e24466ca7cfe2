/// BCP-47 language code sent with every request
pub const LANGUAGE_CODE: &str = "en-US";
/// Polly voice used for every request
pub const VOICE_ID: &str = "Matthew";
/// Polly output format
pub const OUTPUT_FORMAT: &str = "mp3";
/// Content type stored alongside the audio object
pub const AUDIO_CONTENT_TYPE: &str = "audio/mpeg";

/// Parameters for a single synthesis call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesisRequest {
    pub text: String,
    pub language_code: &'static str,
    pub voice_id: &'static str,
    pub output_format: &'static str,
}

impl SynthesisRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            language_code: LANGUAGE_CODE,
            voice_id: VOICE_ID,
            output_format: OUTPUT_FORMAT,
        }
    }

    /// First characters of the text, safe to put in a log line
    pub fn preview(&self) -> &str {
        match self.text.char_indices().nth(200) {
            Some((index, _)) => &self.text[..index],
            None => &self.text,
        }
    }
}

use aws_sdk_polly::operation::synthesize_speech::SynthesizeSpeechOutput;
use aws_sdk_s3::error::ErrorMetadata;
use aws_sdk_s3::operation::get_object::{GetObjectError, GetObjectOutput};
use aws_sdk_s3::operation::put_object::{PutObjectError, PutObjectOutput};
use aws_sdk_s3::types::error::NoSuchKey;
use aws_smithy_mocks_experimental::{mock, mock_client, RuleMode};

pub fn mock_audio_bytes() -> Vec<u8> {
    // Minimal MP3 payload: one frame header plus padding
    vec![
        0xFF, 0xFB, 0x90, 0x00, // MPEG-1 Layer III, 128 kbps, 44.1 kHz
        0x00, 0x00, 0x00, 0x00,
    ]
}

/// Polly client whose synthesize_speech always returns [`mock_audio_bytes`]
/// for a Matthew / en-US / mp3 request
pub fn mock_polly_client() -> aws_sdk_polly::Client {
    let synthesize = mock!(aws_sdk_polly::Client::synthesize_speech)
        .match_requests(|req| {
            req.voice_id().map(|v| v.as_str()) == Some("Matthew")
                && req.language_code().map(|l| l.as_str()) == Some("en-US")
                && req.output_format().map(|f| f.as_str()) == Some("mp3")
        })
        .then_output(|| {
            SynthesizeSpeechOutput::builder()
                .audio_stream(aws_sdk_polly::primitives::ByteStream::from(mock_audio_bytes()))
                .content_type("audio/mpeg")
                .request_characters(11)
                .build()
        });

    mock_client!(aws_sdk_polly, RuleMode::MatchAny, [&synthesize])
}

/// S3 client serving `text` at `bucket/source_key` and accepting an
/// `audio/mpeg` upload at `bucket/sink_key`. Any other request fails.
pub fn mock_s3_client(bucket: &str, source_key: &str, sink_key: &str, text: &str) -> aws_sdk_s3::Client {
    let (get_bucket, get_key) = (bucket.to_string(), source_key.to_string());
    let text = text.to_string();
    let get = mock!(aws_sdk_s3::Client::get_object)
        .match_requests(move |req| {
            req.bucket() == Some(get_bucket.as_str()) && req.key() == Some(get_key.as_str())
        })
        .then_output(move || {
            GetObjectOutput::builder()
                .body(aws_sdk_s3::primitives::ByteStream::from(text.clone().into_bytes()))
                .build()
        });

    let (put_bucket, put_key) = (bucket.to_string(), sink_key.to_string());
    let put = mock!(aws_sdk_s3::Client::put_object)
        .match_requests(move |req| {
            req.bucket() == Some(put_bucket.as_str())
                && req.key() == Some(put_key.as_str())
                && req.content_type() == Some("audio/mpeg")
        })
        .then_output(|| PutObjectOutput::builder().build());

    mock_client!(aws_sdk_s3, RuleMode::MatchAny, [&get, &put])
}

/// S3 client that answers every get_object with NoSuchKey
pub fn mock_s3_client_without_objects() -> aws_sdk_s3::Client {
    let get = mock!(aws_sdk_s3::Client::get_object)
        .then_error(|| GetObjectError::NoSuchKey(NoSuchKey::builder().build()));

    mock_client!(aws_sdk_s3, RuleMode::MatchAny, [&get])
}

/// S3 client serving `text` at `bucket/source_key` and refusing every
/// put_object with AccessDenied
pub fn mock_s3_client_rejecting_uploads(bucket: &str, source_key: &str, text: &str) -> aws_sdk_s3::Client {
    let (get_bucket, get_key) = (bucket.to_string(), source_key.to_string());
    let text = text.to_string();
    let get = mock!(aws_sdk_s3::Client::get_object)
        .match_requests(move |req| {
            req.bucket() == Some(get_bucket.as_str()) && req.key() == Some(get_key.as_str())
        })
        .then_output(move || {
            GetObjectOutput::builder()
                .body(aws_sdk_s3::primitives::ByteStream::from(text.clone().into_bytes()))
                .build()
        });

    let put = mock!(aws_sdk_s3::Client::put_object).then_error(|| {
        PutObjectError::generic(
            ErrorMetadata::builder()
                .code("AccessDenied")
                .message("Access Denied")
                .build(),
        )
    });

    mock_client!(aws_sdk_s3, RuleMode::MatchAny, [&get, &put])
}

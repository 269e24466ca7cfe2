use crate::helpers;

use helpers::aws_mocks::{
    mock_audio_bytes, mock_polly_client, mock_s3_client, mock_s3_client_rejecting_uploads,
    mock_s3_client_without_objects,
};
use helpers::fakes::RecordingTts;
use helpers::TEST_BUCKET;
use pretty_assertions::assert_eq;
use speech_delivery::domain::delivery::{
    DeliveryPipeline, DeliveryPipelineApi, DeliveryPlan, DeliveryServiceError, ObjectLocation,
    SynthesisRequest,
};
use speech_delivery::infrastructure::repositories::{
    LocalFileRepository, ObjectStoreRepository, PollyTtsRepository, S3ObjectStoreRepository,
    TtsRepository,
};
use std::sync::Arc;

#[tokio::test]
async fn it_should_return_polly_audio_stream() {
    let repo = PollyTtsRepository::new(Arc::new(mock_polly_client()));

    let stream = repo
        .synthesize(&SynthesisRequest::new("Hello world"))
        .await
        .unwrap();
    let audio = stream.collect().await.unwrap().into_bytes().to_vec();

    assert_eq!(audio, mock_audio_bytes());
}

#[tokio::test]
async fn it_should_get_object_body_from_s3() {
    let repo = S3ObjectStoreRepository::new(Arc::new(mock_s3_client(
        TEST_BUCKET,
        "speech.txt",
        "speech.mp3",
        "Hello world",
    )));

    let body = repo
        .get(&ObjectLocation::new(TEST_BUCKET, "speech.txt"))
        .await
        .unwrap();

    assert_eq!(body, b"Hello world");
}

#[tokio::test]
async fn it_should_report_missing_s3_object() {
    let repo = S3ObjectStoreRepository::new(Arc::new(mock_s3_client_without_objects()));

    let err = repo
        .get(&ObjectLocation::new(TEST_BUCKET, "speech.txt"))
        .await
        .unwrap_err();

    assert!(err.starts_with("S3 error"), "unexpected error: {}", err);
}

#[tokio::test]
async fn it_should_deliver_through_mocked_polly_and_s3() {
    let pipeline = DeliveryPipeline::new(
        Arc::new(PollyTtsRepository::new(Arc::new(mock_polly_client()))),
        Arc::new(S3ObjectStoreRepository::new(Arc::new(mock_s3_client(
            TEST_BUCKET,
            "audio/speech.txt",
            "audio/speech.mp3",
            "Hello world",
        )))),
        Arc::new(LocalFileRepository::new()),
    );

    let report = pipeline
        .deliver(&DeliveryPlan::object_store(TEST_BUCKET, "audio/"))
        .await
        .unwrap();

    assert_eq!(report.characters_read, 11);
    assert_eq!(report.audio_bytes_written, mock_audio_bytes().len());
}

#[tokio::test]
async fn it_should_not_call_synthesis_when_s3_object_is_missing() {
    let tts = Arc::new(RecordingTts::default());
    let pipeline = DeliveryPipeline::new(
        tts.clone(),
        Arc::new(S3ObjectStoreRepository::new(Arc::new(
            mock_s3_client_without_objects(),
        ))),
        Arc::new(LocalFileRepository::new()),
    );

    let err = pipeline
        .deliver(&DeliveryPlan::object_store(TEST_BUCKET, "audio/"))
        .await
        .unwrap_err();

    assert!(matches!(err, DeliveryServiceError::SourceUnavailable(_)));
    assert!(tts.requests().is_empty());
}

#[tokio::test]
async fn it_should_report_sink_write_when_s3_rejects_upload() {
    let pipeline = DeliveryPipeline::new(
        Arc::new(PollyTtsRepository::new(Arc::new(mock_polly_client()))),
        Arc::new(S3ObjectStoreRepository::new(Arc::new(
            mock_s3_client_rejecting_uploads(TEST_BUCKET, "audio/speech.txt", "Hello world"),
        ))),
        Arc::new(LocalFileRepository::new()),
    );

    let err = pipeline
        .deliver(&DeliveryPlan::object_store(TEST_BUCKET, "audio/"))
        .await
        .unwrap_err();

    assert!(matches!(err, DeliveryServiceError::SinkWrite(_)));
    assert_eq!(err.kind(), "sink_write_error");
    assert!(
        err.to_string().contains("s3://speech-bucket/audio/speech.mp3"),
        "unexpected error: {}",
        err
    );
}

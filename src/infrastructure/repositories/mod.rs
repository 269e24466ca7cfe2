pub mod local_file_repository;
pub mod object_store_repository;
pub mod polly_tts_repository;
pub mod s3_object_store_repository;
pub mod tts_repository;

pub use local_file_repository::LocalFileRepository;
pub use object_store_repository::ObjectStoreRepository;
pub use polly_tts_repository::PollyTtsRepository;
pub use s3_object_store_repository::S3ObjectStoreRepository;
pub use tts_repository::TtsRepository;

use std::fmt;
use std::path::PathBuf;

/// Object key of the source text, relative to the configured prefix
pub const TEXT_OBJECT_NAME: &str = "speech.txt";
/// Object key of the synthesized audio, relative to the configured prefix
pub const AUDIO_OBJECT_NAME: &str = "speech.mp3";

/// A (bucket, key) pair in the object store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectLocation {
    pub bucket: String,
    pub key: String,
}

impl ObjectLocation {
    pub fn new(bucket: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            key: key.into(),
        }
    }
}

/// Where text is read from or audio is written to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    Local(PathBuf),
    Object(ObjectLocation),
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Local(path) => write!(f, "{}", path.display()),
            Location::Object(object) => write!(f, "s3://{}/{}", object.bucket, object.key),
        }
    }
}

/// Resolved input and output for a single invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryPlan {
    pub source: Location,
    pub sink: Location,
}

impl DeliveryPlan {
    pub fn local(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            source: Location::Local(input.into()),
            sink: Location::Local(output.into()),
        }
    }

    /// Text at `<prefix>/speech.txt`, audio at `<prefix>/speech.mp3`.
    /// An empty prefix places both objects at the bucket root.
    pub fn object_store(bucket: &str, prefix: &str) -> Self {
        let prefix = normalize_prefix(prefix);
        Self {
            source: Location::Object(ObjectLocation::new(
                bucket,
                object_key(&prefix, TEXT_OBJECT_NAME),
            )),
            sink: Location::Object(ObjectLocation::new(
                bucket,
                object_key(&prefix, AUDIO_OBJECT_NAME),
            )),
        }
    }
}

/// Strip leading and trailing slashes from a key prefix
pub fn normalize_prefix(prefix: &str) -> String {
    prefix.trim_matches('/').to_string()
}

fn object_key(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{}/{}", prefix, name)
    }
}

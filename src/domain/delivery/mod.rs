pub mod audio;
pub mod error;
pub mod location;
pub mod service;
pub mod synthesis;

pub use error::DeliveryServiceError;
pub use location::{DeliveryPlan, Location, ObjectLocation};
pub use service::{DeliveryPipeline, DeliveryPipelineApi, DeliveryReport};
pub use synthesis::SynthesisRequest;

pub mod recommendations_store;
pub mod upload_store;

pub use recommendations_store::{resolve_recommendations, RecommendationsState};
pub use upload_store::{UploadOutcome, UploadStage, UploadStep, UploadStore};

pub mod api_client;
pub mod backend;
pub mod error;
pub mod recommendation_store;

pub use api_client::ApiClient;
pub use backend::ResumeBackend;
pub use error::{ApiError, StoreError};
pub use recommendation_store::{RecommendationStore, SessionRecommendationStore};

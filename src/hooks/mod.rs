pub mod recommendations_context;
pub mod use_drawer;
pub mod use_recommendations;
pub mod use_upload;

pub use recommendations_context::{RecommendationsHandle, RecommendationsProvider};
pub use use_drawer::{use_drawer, DrawerState, UseDrawerHandle};
pub use use_recommendations::use_recommendations;
pub use use_upload::{use_upload, UseUploadHandle};

pub mod upload_viewmodel;

pub use upload_viewmodel::{PipelineError, UploadViewModel};

pub mod sample_jobs;

pub use sample_jobs::{sample_jobs, SAMPLE_JOBS};

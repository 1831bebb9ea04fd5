pub mod app;
pub mod job_card;
pub mod job_grid;
pub mod job_listings;
pub mod navbar;
pub mod not_found;
pub mod recommended_jobs;
pub mod resume_upload;

pub use app::App;
pub use job_card::JobCard;
pub use job_grid::JobGrid;
pub use job_listings::JobListings;
pub use navbar::Navbar;
pub use not_found::NotFound;
pub use recommended_jobs::RecommendedJobs;
pub use resume_upload::ResumeUpload;

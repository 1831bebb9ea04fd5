pub mod job;
pub mod resume;

pub use job::{ExtractedSkills, Job, MatchedJobs, SkillsResponse};
pub use resume::{validate_resume, SelectedResume, UploadError, PDF_MIME};

use async_trait::async_trait;

use crate::models::{ExtractedSkills, MatchedJobs};
use crate::services::error::ApiError;

/// Backend de extracción + matching. `File` es lo que se sube en el paso 1
#[async_trait(?Send)]
pub trait ResumeBackend {
    type File;

    /// Paso 1: CV -> skills
    async fn upload_resume(&self, file: &Self::File) -> Result<ExtractedSkills, ApiError>;

    /// Paso 2: skills -> empleos ordenados
    async fn match_jobs(&self, skills: &ExtractedSkills) -> Result<MatchedJobs, ApiError>;
}

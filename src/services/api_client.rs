// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio, solo hace requests HTTP y decodifica
// ============================================================================

use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use web_sys::{File, FormData};

use crate::config::{AppConfig, CONFIG};
use crate::models::{ExtractedSkills, Job, MatchedJobs, SkillsResponse};
use crate::services::backend::ResumeBackend;
use crate::services::error::ApiError;
use crate::utils::constants::{MATCH_JOBS_PATH, RESUME_FORM_FIELD, UPLOAD_RESUME_PATH};

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    config: AppConfig,
}

impl ApiClient {
    pub fn new() -> Self {
        Self::from_config(&CONFIG)
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    pub fn endpoint(&self, path: &str) -> String {
        self.config.endpoint(path)
    }

    /// Subir CV (multipart, campo `file`)
    pub async fn upload_resume(&self, file: &File) -> Result<ExtractedSkills, ApiError> {
        let url = self.endpoint(UPLOAD_RESUME_PATH);
        log::info!("📤 [API] Subiendo CV '{}' ({} bytes)", file.name(), file.size());

        let form = FormData::new()
            .map_err(|e| ApiError::Serialization(format!("{:?}", e)))?;
        form.append_with_blob_and_filename(RESUME_FORM_FIELD, file, &file.name())
            .map_err(|e| ApiError::Serialization(format!("{:?}", e)))?;

        let response = Request::post(&url)
            .body(form)
            .map_err(|e| ApiError::Serialization(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let body = read_body(response).await?;
        parse_skills_response(&body)
    }

    /// Enviar skills y obtener empleos. El body ES el array, sin envoltorio
    pub async fn match_jobs(&self, skills: &ExtractedSkills) -> Result<MatchedJobs, ApiError> {
        let url = self.endpoint(MATCH_JOBS_PATH);
        log::info!("🎯 [API] Pidiendo matching para {} skills", skills.len());

        let response = Request::post(&url)
            .json(&skills.0)
            .map_err(|e| ApiError::Serialization(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let body = read_body(response).await?;
        parse_match_response(body)
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl ResumeBackend for ApiClient {
    type File = File;

    async fn upload_resume(&self, file: &File) -> Result<ExtractedSkills, ApiError> {
        ApiClient::upload_resume(self, file).await
    }

    async fn match_jobs(&self, skills: &ExtractedSkills) -> Result<MatchedJobs, ApiError> {
        ApiClient::match_jobs(self, skills).await
    }
}

async fn read_body(response: Response) -> Result<String, ApiError> {
    if !response.ok() {
        let status = response.status();
        let body = response.text().await
            .unwrap_or_else(|_| "Unknown error".to_string());
        return Err(ApiError::Http { status, body });
    }
    response.text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))
}

pub fn parse_skills_response(body: &str) -> Result<ExtractedSkills, ApiError> {
    let response: SkillsResponse = serde_json::from_str(body)
        .map_err(|e| ApiError::Parse(e.to_string()))?;
    response.skills
        .map(ExtractedSkills)
        .ok_or(ApiError::MissingSkills)
}

pub fn parse_match_response(body: String) -> Result<MatchedJobs, ApiError> {
    let jobs: Vec<Job> = serde_json::from_str(&body)
        .map_err(|e| ApiError::Parse(e.to_string()))?;
    Ok(MatchedJobs { jobs, raw: body })
}

use serde::{Deserialize, Serialize};

/// Oferta de empleo tal como la devuelve `/match_jobs` (o el listado local)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Job {
    pub job_title: String,
    pub company: String,
    pub location: String,
    #[serde(default)]
    pub skills: Vec<String>,
    /// Texto de justificación del matching
    #[serde(default)]
    pub reason: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

impl Job {
    /// Etiqueta de puntuación, solo si el backend la envió
    pub fn score_label(&self) -> Option<String> {
        self.score.map(|score| format!("Score: {}", score))
    }
}

/// Respuesta de `/upload_resume`
#[derive(Debug, Clone, Deserialize)]
pub struct SkillsResponse {
    pub skills: Option<Vec<String>>,
}

/// Resultado intermedio del pipeline: skills extraídas del CV
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(transparent)]
pub struct ExtractedSkills(pub Vec<String>);

impl ExtractedSkills {
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Resultado final del pipeline. `raw` es el body exacto de `/match_jobs`
#[derive(Debug, Clone, PartialEq)]
pub struct MatchedJobs {
    pub jobs: Vec<Job>,
    pub raw: String,
}

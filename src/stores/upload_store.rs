// ============================================================================
// UPLOAD STORE - Estado de la vista de subida de CV
// ============================================================================
// Compatible con use_state: el hook clona, muta y hace set()
// ============================================================================

use web_sys::File;

use crate::models::{validate_resume, ExtractedSkills, Job, MatchedJobs, SelectedResume, UploadError};
use crate::utils::constants::MSG_ANALYSIS_FAILED;
use crate::viewmodels::PipelineError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UploadStep {
    Extraction,
    Matching,
}

#[derive(Clone, Debug, PartialEq)]
pub enum UploadStage {
    Idle,
    Extracting,
    Matching,
    Completed,
    Failed { step: UploadStep, message: String },
}

/// Qué tiene que hacer la vista cuando termina el pipeline
#[derive(Clone, Debug, PartialEq)]
pub enum UploadOutcome {
    /// Publicar y navegar a `/recommendedjobs`
    ShowResults(Vec<Job>),
    Alert(&'static str),
    /// No había pipeline en curso
    Ignored,
}

#[derive(Clone, Debug, PartialEq)]
pub struct UploadStore<F = File> {
    pub selected: Option<SelectedResume<F>>,
    pub stage: UploadStage,
    /// Skills del paso 1, reutilizadas si el paso 2 falla
    pub skills: Option<ExtractedSkills>,
}

impl<F> Default for UploadStore<F> {
    fn default() -> Self {
        Self {
            selected: None,
            stage: UploadStage::Idle,
            skills: None,
        }
    }
}

impl<F> UploadStore<F> {
    pub fn loading(&self) -> bool {
        matches!(self.stage, UploadStage::Extracting | UploadStage::Matching)
    }

    pub fn can_submit(&self) -> bool {
        self.selected.is_some() && !self.loading()
    }

    /// Cambia el archivo elegido. Un archivo no-PDF deja el estado intacto
    pub fn select(&mut self, candidate: SelectedResume<F>) -> Result<(), UploadError> {
        validate_resume(&candidate)?;

        // Cada selección es un File nuevo: las skills cacheadas ya no valen
        self.skills = None;
        if !self.loading() {
            self.stage = UploadStage::Idle;
        }
        self.selected = Some(candidate);
        Ok(())
    }

    /// Arranca el pipeline y devuelve el primer paso a ejecutar
    pub fn begin(&mut self) -> Option<UploadStep> {
        if !self.can_submit() {
            return None;
        }
        if self.skills.is_some() {
            self.stage = UploadStage::Matching;
            Some(UploadStep::Matching)
        } else {
            self.stage = UploadStage::Extracting;
            Some(UploadStep::Extraction)
        }
    }

    pub fn skills_extracted(&mut self, skills: ExtractedSkills) {
        self.skills = Some(skills);
        self.stage = UploadStage::Matching;
    }

    pub fn fail(&mut self, step: UploadStep, message: impl Into<String>) {
        self.stage = UploadStage::Failed {
            step,
            message: message.into(),
        };
    }

    pub fn complete(&mut self) {
        self.stage = UploadStage::Completed;
    }

    /// Cierra el pipeline en curso; solo el primer resultado cuenta
    pub fn finish(&mut self, result: Result<MatchedJobs, PipelineError>) -> UploadOutcome {
        if !self.loading() {
            log::warn!("⚠️ [UPLOAD] Resultado sin pipeline en curso, ignorado");
            return UploadOutcome::Ignored;
        }
        match result {
            Ok(matched) => {
                self.complete();
                UploadOutcome::ShowResults(matched.jobs)
            }
            Err(e) => {
                log::error!("❌ [UPLOAD] {}", e);
                self.fail(e.step, e.to_string());
                UploadOutcome::Alert(MSG_ANALYSIS_FAILED)
            }
        }
    }

    pub fn button_label(&self) -> &'static str {
        if self.loading() {
            "Analyzing..."
        } else {
            "Analyze My Resume & Find Jobs"
        }
    }

    pub fn status_line(&self) -> Option<&'static str> {
        match &self.stage {
            UploadStage::Extracting => Some("Extracting skills…"),
            UploadStage::Matching => Some("Matching jobs…"),
            UploadStage::Failed { step: UploadStep::Extraction, .. } => {
                Some("Could not read your resume. Try again.")
            }
            UploadStage::Failed { step: UploadStep::Matching, .. } => {
                Some("Could not match jobs. Try again, your skills are kept.")
            }
            UploadStage::Idle | UploadStage::Completed => None,
        }
    }
}

// ============================================================================
// UPLOAD VIEWMODEL - PIPELINE CV -> SKILLS -> EMPLEOS
// ============================================================================
// Dos pasos secuenciales, cada uno con su propio error.
// Devuelve valores, el hook actualiza el estado y navega.
// ============================================================================

use thiserror::Error;

use crate::models::{ExtractedSkills, MatchedJobs};
use crate::services::backend::ResumeBackend;
use crate::services::error::ApiError;
use crate::services::recommendation_store::RecommendationStore;
use crate::stores::UploadStep;

#[derive(Debug, Clone, Error, PartialEq)]
#[error("{step:?} failed: {source}")]
pub struct PipelineError {
    pub step: UploadStep,
    pub source: ApiError,
}

impl PipelineError {
    fn extraction(source: ApiError) -> Self {
        Self { step: UploadStep::Extraction, source }
    }

    fn matching(source: ApiError) -> Self {
        Self { step: UploadStep::Matching, source }
    }
}

pub struct UploadViewModel<B, S> {
    backend: B,
    store: S,
}

impl<B: ResumeBackend, S: RecommendationStore> UploadViewModel<B, S> {
    pub fn new(backend: B, store: S) -> Self {
        Self { backend, store }
    }

    /// Paso 1
    pub async fn extract_skills(&self, file: &B::File) -> Result<ExtractedSkills, PipelineError> {
        let skills = self.backend
            .upload_resume(file)
            .await
            .map_err(PipelineError::extraction)?;
        log::info!("🧠 [UPLOAD] Skills recibidas: {:?}", skills.as_slice());
        Ok(skills)
    }

    /// Paso 2 + persistencia del body tal cual llegó
    pub async fn match_and_store(&self, skills: &ExtractedSkills) -> Result<MatchedJobs, PipelineError> {
        let matched = self.backend
            .match_jobs(skills)
            .await
            .map_err(PipelineError::matching)?;
        log::info!("✅ [UPLOAD] Empleos recibidos: {}", matched.jobs.len());

        // El contexto en memoria ya tiene el resultado; sin sessionStorage solo se pierde el reload
        if let Err(e) = self.store.save_raw(&matched.raw) {
            log::warn!("⚠️ [STORE] No se pudo guardar en sessionStorage: {}", e);
        }
        Ok(matched)
    }

    /// Pipeline completo. Si hay skills cacheadas se salta el paso 1
    pub async fn run<C>(
        &self,
        file: &B::File,
        cached: Option<ExtractedSkills>,
        mut on_skills: C,
    ) -> Result<MatchedJobs, PipelineError>
    where
        C: FnMut(&ExtractedSkills),
    {
        let skills = match cached {
            Some(skills) => {
                log::info!("♻️ [UPLOAD] Reutilizando {} skills ya extraídas", skills.len());
                skills
            }
            None => {
                let skills = self.extract_skills(file).await?;
                on_skills(&skills);
                skills
            }
        };
        self.match_and_store(&skills).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::api_client::parse_match_response;
    use crate::models::{SelectedResume, PDF_MIME};
    use crate::services::recommendation_store::testing::MemoryRecommendationStore;
    use crate::stores::{UploadOutcome, UploadStore};
    use crate::utils::constants::MSG_ANALYSIS_FAILED;
    use async_trait::async_trait;
    use futures::executor::block_on;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    const EXAMPLE_MATCH: &str = r#"[{"job_title":"Data Analyst","company":"Acme","location":"Remote","skills":["Python","SQL"],"reason":"matched 2 skills","score":87}]"#;

    #[derive(Default)]
    struct Calls {
        upload: Cell<usize>,
        matching: Cell<usize>,
        sent_skills: RefCell<Option<ExtractedSkills>>,
    }

    struct FakeBackend {
        skills: Result<ExtractedSkills, ApiError>,
        matched: Result<String, ApiError>,
        calls: Rc<Calls>,
    }

    impl FakeBackend {
        fn new(skills: Result<ExtractedSkills, ApiError>, matched: Result<&str, ApiError>) -> Self {
            Self {
                skills,
                matched: matched.map(str::to_string),
                calls: Rc::new(Calls::default()),
            }
        }
    }

    #[async_trait(?Send)]
    impl ResumeBackend for FakeBackend {
        type File = &'static str;

        async fn upload_resume(&self, _file: &&'static str) -> Result<ExtractedSkills, ApiError> {
            self.calls.upload.set(self.calls.upload.get() + 1);
            self.skills.clone()
        }

        async fn match_jobs(&self, skills: &ExtractedSkills) -> Result<MatchedJobs, ApiError> {
            self.calls.matching.set(self.calls.matching.get() + 1);
            *self.calls.sent_skills.borrow_mut() = Some(skills.clone());
            parse_match_response(self.matched.clone()?)
        }
    }

    fn python_sql() -> ExtractedSkills {
        ExtractedSkills(vec!["Python".into(), "SQL".into()])
    }

    #[test]
    fn happy_path_stores_match_body_verbatim() {
        let backend = FakeBackend::new(Ok(python_sql()), Ok(EXAMPLE_MATCH));
        let store = MemoryRecommendationStore::default();
        let calls = backend.calls.clone();
        let vm = UploadViewModel::new(backend, &store);

        let mut seen = Vec::new();
        let matched = block_on(vm.run(&"resume.pdf", None, |s| seen.push(s.clone()))).unwrap();

        assert_eq!(seen, vec![python_sql()]);
        assert_eq!(calls.sent_skills.borrow().clone(), Some(python_sql()));
        assert_eq!(store.slot.borrow().as_deref(), Some(EXAMPLE_MATCH));
        assert_eq!(store.writes.get(), 1);
        assert_eq!(matched.jobs[0].job_title, "Data Analyst");
        assert_eq!(matched.jobs[0].score_label().as_deref(), Some("Score: 87"));
    }

    #[test]
    fn extraction_failure_stops_before_matching() {
        let backend = FakeBackend::new(Err(ApiError::Network("offline".into())), Ok(EXAMPLE_MATCH));
        let store = MemoryRecommendationStore::default();
        let calls = backend.calls.clone();
        let vm = UploadViewModel::new(backend, &store);

        let err = block_on(vm.run(&"resume.pdf", None, |_| {})).unwrap_err();

        assert_eq!(err.step, UploadStep::Extraction);
        assert_eq!(calls.matching.get(), 0);
        assert_eq!(store.writes.get(), 0);
    }

    #[test]
    fn matching_failure_writes_nothing() {
        let backend = FakeBackend::new(
            Ok(python_sql()),
            Err(ApiError::Http { status: 500, body: "boom".into() }),
        );
        let store = MemoryRecommendationStore::with_raw("[]");
        let vm = UploadViewModel::new(backend, &store);

        let err = block_on(vm.run(&"resume.pdf", None, |_| {})).unwrap_err();

        assert_eq!(err.step, UploadStep::Matching);
        assert_eq!(store.writes.get(), 0);
        assert_eq!(store.slot.borrow().as_deref(), Some("[]"));
    }

    #[test]
    fn malformed_match_body_is_a_matching_failure() {
        let backend = FakeBackend::new(Ok(python_sql()), Ok(r#"{"error":"nope"}"#));
        let store = MemoryRecommendationStore::default();
        let vm = UploadViewModel::new(backend, &store);

        let err = block_on(vm.run(&"resume.pdf", None, |_| {})).unwrap_err();
        assert_eq!(err.step, UploadStep::Matching);
        assert!(matches!(err.source, ApiError::Parse(_)));
    }

    #[test]
    fn record_without_required_fields_stores_nothing() {
        // Falta `location` en el segundo registro
        let body = r#"[{"job_title":"A","company":"Acme","location":"Remote"},{"job_title":"B","company":"Acme"}]"#;
        let backend = FakeBackend::new(Ok(python_sql()), Ok(body));
        let store = MemoryRecommendationStore::default();
        let vm = UploadViewModel::new(backend, &store);

        let err = block_on(vm.run(&"resume.pdf", None, |_| {})).unwrap_err();

        assert_eq!(err.step, UploadStep::Matching);
        assert!(matches!(err.source, ApiError::Parse(_)));
        assert_eq!(store.writes.get(), 0);
        assert!(store.slot.borrow().is_none());
    }

    #[test]
    fn finished_pipeline_navigates_once_or_alerts() {
        let mut progress = UploadStore::<&'static str>::default();
        progress
            .select(SelectedResume::new("resume.pdf", PDF_MIME, 10.0, "resume.pdf"))
            .unwrap();
        assert_eq!(progress.begin(), Some(UploadStep::Extraction));

        let store = MemoryRecommendationStore::default();
        let vm = UploadViewModel::new(FakeBackend::new(Ok(python_sql()), Ok(EXAMPLE_MATCH)), &store);
        let result = block_on(vm.run(&"resume.pdf", None, |_| {}));

        let mut navigations = 0;
        for outcome in [progress.finish(result), progress.finish(Ok(parse_match_response("[]".into()).unwrap()))] {
            if let UploadOutcome::ShowResults(_) = outcome {
                navigations += 1;
            }
        }
        assert_eq!(navigations, 1);

        // Fallo en el matching: alerta, sin navegación, el archivo sigue elegido
        progress.begin();
        let vm = UploadViewModel::new(
            FakeBackend::new(Ok(python_sql()), Err(ApiError::Network("offline".into()))),
            &store,
        );
        let result = block_on(vm.run(&"resume.pdf", None, |_| {}));
        assert_eq!(progress.finish(result), UploadOutcome::Alert(MSG_ANALYSIS_FAILED));
        assert!(!progress.loading());
        assert!(progress.selected.is_some());
    }

    #[test]
    fn cached_skills_skip_extraction() {
        let backend = FakeBackend::new(Err(ApiError::Network("should not be called".into())), Ok("[]"));
        let store = MemoryRecommendationStore::default();
        let calls = backend.calls.clone();
        let vm = UploadViewModel::new(backend, &store);

        let mut callbacks = 0;
        let matched = block_on(vm.run(&"resume.pdf", Some(python_sql()), |_| callbacks += 1)).unwrap();

        assert_eq!(calls.upload.get(), 0);
        assert_eq!(callbacks, 0);
        assert!(matched.jobs.is_empty());
        assert_eq!(store.slot.borrow().as_deref(), Some("[]"));
    }

    #[test]
    fn storage_failure_does_not_fail_pipeline() {
        let backend = FakeBackend::new(Ok(python_sql()), Ok(EXAMPLE_MATCH));
        let store = MemoryRecommendationStore::unavailable();
        let vm = UploadViewModel::new(backend, &store);

        let matched = block_on(vm.run(&"resume.pdf", None, |_| {})).unwrap();
        assert_eq!(matched.jobs.len(), 1);
    }
}

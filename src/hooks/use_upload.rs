// ============================================================================
// USE UPLOAD HOOK - Selección de CV + pipeline de dos pasos
// ============================================================================

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::recommendations_context::RecommendationsHandle;
use crate::models::SelectedResume;
use crate::router::Route;
use crate::services::{ApiClient, SessionRecommendationStore};
use crate::stores::{UploadOutcome, UploadStep, UploadStore};
use crate::utils::constants::MSG_PDF_ONLY;
use crate::utils::dialogs::alert;
use crate::viewmodels::UploadViewModel;

#[derive(Clone)]
pub struct UseUploadHandle {
    pub state: UseStateHandle<UploadStore>,
    pub on_file_change: Callback<Event>,
    pub on_submit: Callback<MouseEvent>,
}

#[hook]
pub fn use_upload() -> UseUploadHandle {
    let state = use_state(UploadStore::default);
    let navigator = use_navigator();
    let recommendations = use_context::<RecommendationsHandle>();

    // Selección de archivo
    let on_file_change = {
        let state = state.clone();
        Callback::from(move |e: Event| {
            let Some(input) = e.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) else {
                return;
            };
            // Diálogo cancelado: nada que hacer
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };

            let candidate = SelectedResume::new(file.name(), file.type_(), file.size(), file);
            let mut new_state = (*state).clone();
            match new_state.select(candidate) {
                Ok(()) => {
                    log::info!("📄 [UPLOAD] CV seleccionado");
                    state.set(new_state);
                }
                Err(e) => {
                    log::warn!("⚠️ [UPLOAD] Archivo rechazado: {}", e);
                    alert(MSG_PDF_ONLY);
                }
            }
        })
    };

    // Analizar CV
    let on_submit = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            let mut progress = (*state).clone();
            let Some(step) = progress.begin() else {
                return;
            };
            let Some(selected) = progress.selected.clone() else {
                return;
            };
            state.set(progress.clone());

            let cached = match step {
                UploadStep::Matching => progress.skills.clone(),
                UploadStep::Extraction => None,
            };
            let state = state.clone();
            let navigator = navigator.clone();
            let recommendations = recommendations.clone();

            spawn_local(async move {
                let vm = UploadViewModel::new(ApiClient::new(), SessionRecommendationStore);
                let progress_handle = state.clone();

                let result = vm
                    .run(&selected.handle, cached, |skills| {
                        progress.skills_extracted(skills.clone());
                        progress_handle.set(progress.clone());
                    })
                    .await;

                let outcome = progress.finish(result);
                state.set(progress);

                match outcome {
                    UploadOutcome::ShowResults(jobs) => {
                        match &recommendations {
                            Some(ctx) => ctx.publish(jobs),
                            None => log::warn!("⚠️ [UPLOAD] Sin RecommendationsProvider, solo queda sessionStorage"),
                        }
                        match &navigator {
                            Some(nav) => nav.push(&Route::RecommendedJobs),
                            None => log::error!("❌ [UPLOAD] Sin router, no se puede navegar a resultados"),
                        }
                    }
                    UploadOutcome::Alert(message) => alert(message),
                    UploadOutcome::Ignored => {}
                }
            });
        })
    };

    UseUploadHandle {
        state,
        on_file_change,
        on_submit,
    }
}

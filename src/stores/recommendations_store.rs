// ============================================================================
// RECOMMENDATIONS STORE - Estado de la vista de empleos recomendados
// ============================================================================

use std::rc::Rc;

use crate::models::Job;
use crate::router::Route;
use crate::services::error::StoreError;
use crate::services::recommendation_store::RecommendationStore;

#[derive(Clone, Debug, PartialEq)]
pub enum RecommendationsState {
    Loading,
    Ready(Rc<Vec<Job>>),
    /// Nada que mostrar: la vista redirige a la subida
    Missing,
    /// Había algo guardado pero no se pudo decodificar
    Corrupted(String),
}

impl RecommendationsState {
    /// A dónde mandar al usuario al montar la vista
    pub fn redirect_target(&self) -> Option<Route> {
        match self {
            RecommendationsState::Missing => Some(Route::Upload),
            _ => None,
        }
    }
}

/// Contexto en memoria primero, sessionStorage después
pub fn resolve_recommendations<S: RecommendationStore>(
    in_memory: Option<Rc<Vec<Job>>>,
    store: &S,
) -> RecommendationsState {
    if let Some(jobs) = in_memory {
        log::debug!("📋 [RECOMMENDED] {} empleos desde el contexto", jobs.len());
        return RecommendationsState::Ready(jobs);
    }

    match store.load() {
        Ok(Some(jobs)) => {
            log::info!("💾 [RECOMMENDED] {} empleos restaurados de sessionStorage", jobs.len());
            RecommendationsState::Ready(Rc::new(jobs))
        }
        Ok(None) => RecommendationsState::Missing,
        Err(StoreError::Malformed(message)) => {
            log::error!("❌ [RECOMMENDED] Payload guardado inválido: {}", message);
            if let Err(e) = store.clear() {
                log::warn!("⚠️ [STORE] No se pudo borrar el payload inválido: {}", e);
            }
            RecommendationsState::Corrupted(message)
        }
        Err(e) => {
            log::warn!("⚠️ [STORE] {}", e);
            RecommendationsState::Missing
        }
    }
}

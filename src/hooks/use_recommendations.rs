use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::recommendations_context::RecommendationsHandle;
use crate::services::SessionRecommendationStore;
use crate::stores::{resolve_recommendations, RecommendationsState};

/// Resuelve el resultado al montar; si no hay nada vuelve a la subida
#[hook]
pub fn use_recommendations() -> UseStateHandle<RecommendationsState> {
    let state = use_state(|| RecommendationsState::Loading);
    let navigator = use_navigator();
    let context = use_context::<RecommendationsHandle>();

    {
        let state = state.clone();
        use_effect_with((), move |_| {
            let in_memory = context.and_then(|ctx| ctx.current());
            let resolved = resolve_recommendations(in_memory, &SessionRecommendationStore);

            if let Some(target) = resolved.redirect_target() {
                log::info!("↩️ [RECOMMENDED] Sin resultados, volviendo a la subida");
                match navigator {
                    Some(nav) => nav.push(&target),
                    None => log::error!("❌ [RECOMMENDED] Sin router para redirigir"),
                }
            }
            state.set(resolved);
            || ()
        });
    }

    state
}

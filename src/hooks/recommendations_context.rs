// ============================================================================
// RECOMMENDATIONS CONTEXT - Resultado del matching compartido entre vistas
// ============================================================================
// Usa Context API de Yew: la subida publica, la vista de resultados lee
// ============================================================================

use std::rc::Rc;
use yew::prelude::*;

use crate::models::Job;

#[derive(Clone, PartialEq)]
pub struct RecommendationsHandle {
    jobs: UseStateHandle<Option<Rc<Vec<Job>>>>,
}

impl RecommendationsHandle {
    pub fn publish(&self, jobs: Vec<Job>) {
        self.jobs.set(Some(Rc::new(jobs)));
    }

    pub fn current(&self) -> Option<Rc<Vec<Job>>> {
        (*self.jobs).clone()
    }
}

#[derive(Properties, PartialEq)]
pub struct RecommendationsProviderProps {
    pub children: Children,
}

/// Provider que envuelve la app
#[function_component(RecommendationsProvider)]
pub fn recommendations_provider(props: &RecommendationsProviderProps) -> Html {
    let jobs = use_state(|| None);
    let handle = RecommendationsHandle { jobs };

    html! {
        <ContextProvider<RecommendationsHandle> context={handle}>
            {props.children.clone()}
        </ContextProvider<RecommendationsHandle>>
    }
}

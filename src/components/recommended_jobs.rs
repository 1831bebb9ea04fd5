use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::JobGrid;
use crate::hooks::use_recommendations;
use crate::router::Route;
use crate::stores::RecommendationsState;

#[function_component(RecommendedJobs)]
pub fn recommended_jobs() -> Html {
    let state = use_recommendations();

    let body = match &*state {
        // Missing: el hook ya está redirigiendo
        RecommendationsState::Loading | RecommendationsState::Missing => html! {},
        RecommendationsState::Ready(jobs) if jobs.is_empty() => html! {
            <p class="text-center text-gray-600">{"No matching jobs found"}</p>
        },
        RecommendationsState::Ready(jobs) => html! {
            <JobGrid jobs={jobs.clone()} />
        },
        RecommendationsState::Corrupted(_) => html! {
            <div class="recommendations-error max-w-xl mx-auto p-6 bg-red-50 border border-red-200 rounded-lg text-center space-y-3">
                <p class="font-semibold text-red-700">{"We couldn't read your saved recommendations."}</p>
                <Link<Route> to={Route::Upload} classes="text-blue-600 hover:underline">
                    {"Upload your resume again"}
                </Link<Route>>
            </div>
        },
    };

    html! {
        <div class="min-h-screen bg-gray-50 py-10">
            <div class="container mx-auto px-4">
                <h1 class="text-4xl font-bold text-center mb-8 text-blue-600">
                    {"Recommended Jobs"}
                </h1>
                {body}
            </div>
        </div>
    }
}

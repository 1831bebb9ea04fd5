use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{JobListings, NotFound, RecommendedJobs, ResumeUpload};

#[derive(Clone, Debug, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Upload,
    #[at("/joblistings")]
    JobListings,
    #[at("/recommendedjobs")]
    RecommendedJobs,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Upload => html! { <ResumeUpload /> },
        Route::JobListings => html! { <JobListings /> },
        Route::RecommendedJobs => html! { <RecommendedJobs /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

use yew::prelude::*;

use crate::components::JobGrid;
use crate::data::SAMPLE_JOBS;

#[function_component(JobListings)]
pub fn job_listings() -> Html {
    let jobs = use_memo((), |_| SAMPLE_JOBS.clone());

    html! {
        <JobGrid jobs={jobs} />
    }
}

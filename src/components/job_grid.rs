use std::rc::Rc;
use yew::prelude::*;

use crate::components::JobCard;
use crate::models::Job;

#[derive(Properties, PartialEq)]
pub struct JobGridProps {
    pub jobs: Rc<Vec<Job>>,
}

/// Una card por empleo, en el orden recibido
#[function_component(JobGrid)]
pub fn job_grid(props: &JobGridProps) -> Html {
    html! {
        <div class="container mx-auto px-4 py-10">
            <div class="job-grid grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6">
                { for props.jobs.iter().enumerate().map(|(idx, job)| html! {
                    <JobCard key={idx} job={job.clone()} />
                })}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::task::LocalSet;
    use yew::LocalServerRenderer;

    fn job(title: &str, score: Option<f64>) -> Job {
        Job {
            job_title: title.into(),
            company: "Acme".into(),
            location: "Remote".into(),
            skills: vec!["Rust".into()],
            reason: "matched 1 skills".into(),
            score,
        }
    }

    async fn render(jobs: Vec<Job>) -> String {
        let props = JobGridProps { jobs: Rc::new(jobs) };
        LocalSet::new()
            .run_until(LocalServerRenderer::<JobGrid>::with_props(props).render())
            .await
    }

    #[tokio::test]
    async fn renders_one_card_per_job_in_order() {
        let html = render(vec![job("First", None), job("Second", None), job("Third", None)]).await;

        assert_eq!(html.matches("class=\"job-card ").count(), 3);
        let first = html.find("First").unwrap();
        let second = html.find("Second").unwrap();
        let third = html.find("Third").unwrap();
        assert!(first < second && second < third);
    }

    #[tokio::test]
    async fn empty_list_renders_no_cards() {
        let html = render(vec![]).await;
        assert!(html.contains("job-grid"));
        assert_eq!(html.matches("class=\"job-card ").count(), 0);
    }

    #[tokio::test]
    async fn score_shows_only_on_scored_jobs() {
        let html = render(vec![job("Scored", Some(87.0)), job("Plain", None)]).await;

        assert_eq!(html.matches("class=\"job-score ").count(), 1);
        assert!(html.contains("Score: 87"));
    }
}

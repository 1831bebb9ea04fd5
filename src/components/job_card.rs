use yew::prelude::*;

use crate::models::Job;

#[derive(Properties, PartialEq, Clone)]
pub struct JobCardProps {
    pub job: Job,
}

#[function_component(JobCard)]
pub fn job_card(props: &JobCardProps) -> Html {
    let job = &props.job;

    html! {
        <div class="job-card p-6 bg-white rounded-lg shadow hover:shadow-lg transition-shadow flex flex-col h-full">
            <div class="mb-3">
                <h3 class="job-title text-lg font-semibold text-gray-800">{&job.job_title}</h3>
                <div class="flex items-center gap-2 text-sm text-gray-500 mt-1">
                    <span aria-hidden="true">{"🏢"}</span>
                    <span class="job-company">{&job.company}</span>
                </div>
            </div>

            <div class="flex items-center gap-1 text-sm text-gray-500 mb-3">
                <span aria-hidden="true">{"📍"}</span>
                <span class="job-location">{&job.location}</span>
            </div>

            // Solo si el backend envió puntuación
            if let Some(label) = job.score_label() {
                <div class="job-score flex items-center gap-2 text-sm text-yellow-600 mb-3">
                    <span aria-hidden="true">{"⭐"}</span>
                    <span>{label}</span>
                </div>
            }

            <p class="job-reason text-sm text-gray-500 mb-3">
                <strong>{"Skills:"}</strong>{" "}{&job.reason}
            </p>

            <div class="flex flex-wrap gap-2 mb-3">
                { for job.skills.iter().enumerate().map(|(idx, skill)| html! {
                    <span key={idx} class="skill-tag px-2 py-1 text-xs font-medium bg-blue-100 text-green-800 rounded">
                        {skill}
                    </span>
                })}
            </div>

            <button
                type="button"
                class="w-full py-2 mt-auto rounded-lg bg-blue-500 hover:bg-blue-600 text-white font-semibold transition-colors"
            >
                {"View Details"}
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::task::LocalSet;
    use yew::LocalServerRenderer;

    async fn render(score: Option<f64>) -> String {
        let job = Job {
            job_title: "Data Analyst".into(),
            company: "Acme".into(),
            location: "Remote".into(),
            skills: vec!["Python".into(), "SQL".into()],
            reason: "matched 2 skills".into(),
            score,
        };
        LocalSet::new()
            .run_until(LocalServerRenderer::<JobCard>::with_props(JobCardProps { job }).render())
            .await
    }

    #[tokio::test]
    async fn card_shows_title_company_location_and_skills() {
        let html = render(None).await;

        assert!(html.contains("Data Analyst"));
        assert!(html.contains("Acme"));
        assert!(html.contains("Remote"));
        assert!(html.contains("matched 2 skills"));
        assert_eq!(html.matches("class=\"skill-tag ").count(), 2);
    }

    #[tokio::test]
    async fn score_indicator_follows_score_field() {
        let scored = render(Some(87.0)).await;
        assert!(scored.contains("job-score"));
        assert!(scored.contains("Score: 87"));

        let plain = render(None).await;
        assert!(!plain.contains("job-score"));
        assert!(!plain.contains("Score:"));
    }
}

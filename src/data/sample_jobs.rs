use lazy_static::lazy_static;

use crate::models::Job;

fn job(title: &str, company: &str, location: &str, skills: &[&str], reason: &str) -> Job {
    Job {
        job_title: title.to_string(),
        company: company.to_string(),
        location: location.to_string(),
        skills: skills.iter().map(|s| s.to_string()).collect(),
        reason: reason.to_string(),
        score: None,
    }
}

/// Listado estático para `/joblistings`, sin puntuación
pub fn sample_jobs() -> Vec<Job> {
    vec![
        job(
            "Junior Data Analyst",
            "Northwind Analytics",
            "Remote",
            &["Python", "SQL", "Excel", "Tableau"],
            "Python, SQL, Excel, Tableau",
        ),
        job(
            "Frontend Developer Intern",
            "Brightpath Labs",
            "Bengaluru, India",
            &["JavaScript", "React", "HTML", "CSS"],
            "JavaScript, React, HTML, CSS",
        ),
        job(
            "Associate Software Engineer",
            "Cobalt Systems",
            "Pune, India",
            &["Java", "Spring Boot", "Git", "REST"],
            "Java, Spring Boot, Git, REST",
        ),
        job(
            "Machine Learning Trainee",
            "Vector Minds",
            "Hyderabad, India",
            &["Python", "Pandas", "scikit-learn", "Statistics"],
            "Python, Pandas, scikit-learn, Statistics",
        ),
        job(
            "Backend Developer (Entry Level)",
            "Harbor Cloud",
            "Remote",
            &["Rust", "PostgreSQL", "Docker", "Linux"],
            "Rust, PostgreSQL, Docker, Linux",
        ),
        job(
            "QA Automation Engineer",
            "Keystone Software",
            "Chennai, India",
            &["Selenium", "Python", "CI/CD", "Jira"],
            "Selenium, Python, CI/CD, Jira",
        ),
        job(
            "Cloud Support Associate",
            "Stratus Networks",
            "Noida, India",
            &["AWS", "Linux", "Networking", "Bash"],
            "AWS, Linux, Networking, Bash",
        ),
        job(
            "Business Intelligence Intern",
            "Meridian Retail",
            "Mumbai, India",
            &["Power BI", "SQL", "Data Modeling"],
            "Power BI, SQL, Data Modeling",
        ),
        job(
            "Mobile App Developer",
            "Pocketforge",
            "Remote",
            &["Kotlin", "Android", "Firebase"],
            "Kotlin, Android, Firebase",
        ),
    ]
}

lazy_static! {
    pub static ref SAMPLE_JOBS: Vec<Job> = sample_jobs();
}

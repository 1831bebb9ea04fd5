/// Clave de sessionStorage con el último resultado de matching
pub const RECOMMENDED_JOBS_KEY: &str = "recommendedJobs";

pub const UPLOAD_RESUME_PATH: &str = "/upload_resume";
pub const MATCH_JOBS_PATH: &str = "/match_jobs";

/// Nombre del campo multipart que espera `/upload_resume`
pub const RESUME_FORM_FIELD: &str = "file";

pub const BRAND_NAME: &str = "JobWise";

pub const MSG_PDF_ONLY: &str = "❌ Please upload a PDF file only.";
pub const MSG_ANALYSIS_FAILED: &str = "❌ Error analyzing resume. Try again.";

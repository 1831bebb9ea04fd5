use thiserror::Error;

/// Errores de comunicación con el backend
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Response has no `skills` field")]
    MissingSkills,
}

/// Errores del almacenamiento de recomendaciones (sessionStorage)
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StoreError {
    #[error("sessionStorage is not available")]
    Unavailable,

    #[error("Could not write to sessionStorage")]
    Write,

    #[error("Stored recommendations are malformed: {0}")]
    Malformed(String),
}

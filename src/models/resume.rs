use thiserror::Error;

pub const PDF_MIME: &str = "application/pdf";

/// Archivo elegido por el usuario. `F` es el `web_sys::File` en el navegador
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedResume<F> {
    pub name: String,
    pub mime: String,
    pub size: f64,
    pub handle: F,
}

impl<F> SelectedResume<F> {
    pub fn new(name: impl Into<String>, mime: impl Into<String>, size: f64, handle: F) -> Self {
        Self {
            name: name.into(),
            mime: mime.into(),
            size,
            handle,
        }
    }

    pub fn is_pdf(&self) -> bool {
        self.mime == PDF_MIME
    }
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum UploadError {
    #[error("{name} is not a PDF (declared type: {mime:?})")]
    NotPdf { name: String, mime: String },
}

pub fn validate_resume<F>(candidate: &SelectedResume<F>) -> Result<(), UploadError> {
    if candidate.is_pdf() {
        Ok(())
    } else {
        Err(UploadError::NotPdf {
            name: candidate.name.clone(),
            mime: candidate.mime.clone(),
        })
    }
}

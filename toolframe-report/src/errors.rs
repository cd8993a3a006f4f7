use thiserror::Error;
use toolframe_assembly::AssemblyError;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error(transparent)]
    Assembly(#[from] AssemblyError),

    #[error("render error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type ReportResult<T> = Result<T, ReportError>;

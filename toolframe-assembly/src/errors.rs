use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssemblyError {
    #[error("no occurrence found for a component named '{0}'")]
    TargetNotFound(String),

    #[error("document error: {0}")]
    Document(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type AssemblyResult<T> = Result<T, AssemblyError>;

use toli_types::UnknownScript;

/// Rejected caller input; the engine itself never produces these
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    #[error("Invalid limit: {0}")]
    InvalidLimit(String),

    #[error(transparent)]
    UnknownScript(#[from] UnknownScript),

    #[error("Missing required field: {0}")]
    MissingField(&'static str),
}

/// Failure while loading an entry corpus
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Invalid format: {0}")]
    InvalidFormat(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

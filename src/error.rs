pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown stage: {0}")]
    UnknownStage(String),

    #[error("Application not found: {0}")]
    ApplicationNotFound(uuid::Uuid),

    #[error("Rating must be between 0 and 5, got {0}")]
    RatingOutOfRange(u8),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Reqwest(#[from] reqwest::Error),
}

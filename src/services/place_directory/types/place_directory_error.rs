use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlaceDirectoryError {
    #[error("Directory responded with status {0}")]
    Status(String),
    #[error("Directory returned no results")]
    NoResults,
    #[error("Internal error: {0}")]
    Internal(String),
}

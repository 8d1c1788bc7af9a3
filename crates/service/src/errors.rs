use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("seed source unavailable: {0}")]
    Upstream(String),
    #[error("model error: {0}")]
    Model(#[from] models::errors::ModelError),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self { Self::NotFound(format!("{} not found", entity)) }
}

impl From<common::CoreError> for ServiceError {
    fn from(e: common::CoreError) -> Self { Self::Upstream(e.to_string()) }
}

use models::errors::ModelError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    #[error("invalid post data, missing fields: {}", .missing_fields.join(", "))]
    Validation { missing_fields: Vec<String> },
    #[error("invalid sort or direction parameter")]
    InvalidQuery,
    #[error("post not found")]
    NotFound,
}

impl From<ModelError> for ServiceError {
    fn from(err: ModelError) -> Self {
        match err {
            ModelError::MissingFields(missing_fields) => Self::Validation { missing_fields },
        }
    }
}

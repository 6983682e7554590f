use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<String>),
}

use crate::types::DbId;
use crate::validation::FieldFailure;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed on {} field(s)", .0.len())]
    Validation(Vec<FieldFailure>),

    #[error("Forbidden: {0}")]
    Forbidden(String),
}

use crate::{ErrorCodes, ShoalError};
use thiserror::Error;

#[derive(Debug, Error)]
#[error("Validation error: {0}")]
pub struct ShoalValidationError(#[from] validator::ValidationError);

impl ShoalError for ShoalValidationError {
    fn code(&self) -> ErrorCodes {
        ErrorCodes::InvalidArgument
    }
}

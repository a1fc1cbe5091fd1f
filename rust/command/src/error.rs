use shoal_error::{ErrorCodes, ShoalError, ShoalValidationError};
use shoal_types::SchemaError;
use thiserror::Error;

/// Everything that can go wrong while turning an index creation command into
/// an [`shoal_types::IndexSchema`]. Positions are zero-based indices into the
/// argument vector handed to the parser.
#[derive(Debug, Error)]
pub enum CreateIndexError {
    #[error("Unknown argument `{token}` at position {position}")]
    UnknownArgument { token: String, position: usize },
    #[error("Missing value for {keyword}")]
    MissingRequiredValue { keyword: String, position: usize },
    #[error("Field `{field}` is missing required parameter {parameter}")]
    MissingRequiredField {
        field: String,
        parameter: &'static str,
    },
    #[error("Invalid value `{token}` for {keyword} at position {position}: expected {expected}")]
    InvalidValue {
        keyword: String,
        token: String,
        position: usize,
        expected: String,
    },
    #[error("Value {value} for {keyword} is out of range [{min}, {max}]")]
    InvalidRange {
        keyword: String,
        value: i64,
        min: i64,
        max: i64,
    },
    #[error("Duplicate option {keyword} at position {position}")]
    DuplicateOption { keyword: String, position: usize },
    #[error("Options {first} and {second} are mutually exclusive")]
    MutuallyExclusiveOptions {
        first: &'static str,
        second: &'static str,
    },
    #[error("Unexpected end of input while parsing {context}")]
    UnexpectedEndOfInput { context: &'static str },
    #[error(transparent)]
    InvalidIndexName(#[from] ShoalValidationError),
    #[error(transparent)]
    Schema(#[from] SchemaError),
}

impl CreateIndexError {
    pub(crate) fn duplicate_option(keyword: &str, position: usize) -> Self {
        CreateIndexError::DuplicateOption {
            keyword: keyword.to_string(),
            position,
        }
    }
}

impl ShoalError for CreateIndexError {
    fn code(&self) -> ErrorCodes {
        match self {
            CreateIndexError::InvalidRange { .. } => ErrorCodes::OutOfRange,
            CreateIndexError::InvalidIndexName(err) => err.code(),
            CreateIndexError::Schema(err) => err.code(),
            _ => ErrorCodes::InvalidArgument,
        }
    }

    // Rejected commands are client mistakes, not server faults.
    fn should_trace_error(&self) -> bool {
        false
    }
}

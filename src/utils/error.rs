use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Client input rejected before any lookup work runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    PageRequired,
    PageSizeRequired,
    InvalidSortBy,
    InvalidDirection,
    IdRequired,
    /// Query string could not be decoded (e.g. a repeated key)
    MalformedQuery,
}

impl ValidationError {
    /// Stable wire message; clients match on it.
    pub fn message(&self) -> &'static str {
        match self {
            ValidationError::PageRequired => "Parameter 'page' is required.",
            ValidationError::PageSizeRequired => "Parameter 'pageSize' is required.",
            ValidationError::InvalidSortBy => {
                "Parameter 'sortBy' can be only 'createdAt', 'updatedAt'."
            }
            ValidationError::InvalidDirection => "Parameter 'direction' can be only 'ASC' or 'DESC'.",
            ValidationError::IdRequired => "Parameter 'id' is required.",
            ValidationError::MalformedQuery => "Query string is malformed.",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for ValidationError {}

#[derive(Debug)]
pub enum AppError {
    Validation(ValidationError),
    NotFound(String),
    DataLoad(String),
    Config(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Validation(err) => write!(f, "{}", err),
            AppError::NotFound(msg) => write!(f, "{}", msg),
            AppError::DataLoad(msg) => write!(f, "Data load error: {}", msg),
            AppError::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::Validation(err)
    }
}

impl From<AppError> for std::io::Error {
    fn from(err: AppError) -> Self {
        std::io::Error::other(err.to_string())
    }
}

/// Body of every 4xx answer
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "Parameter 'page' is required.")]
    pub message: String,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::PRECONDITION_FAILED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::DataLoad(_) | AppError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            message: self.to_string(),
        })
    }
}

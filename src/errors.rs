use astra::Response;
// errors.rs
use crate::forms::InvalidInput;
use thiserror::Error;

/// Errors a request handler can end with. Each one maps to an HTTP status
/// in `responses::error_to_response`.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Invalid input data. Please check your form. ({0})")]
    InvalidInput(#[from] InvalidInput),

    #[error("Internal Server Error")]
    InternalError,
}

impl ServerError {
    pub fn status(&self) -> u16 {
        match self {
            ServerError::NotFound => 404,
            ServerError::BadRequest(_) | ServerError::InvalidInput(_) => 400,
            ServerError::InternalError => 500,
        }
    }
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;

use actix_web::{
    http::{header, StatusCode},
    HttpResponse,
};
use thiserror::Error;

/// Errors returned to the browser or the SDK. The body is the message as
/// plain text, so every variant carries a sentence the user can act on.
#[derive(Error, Debug)]
pub enum KeeperError {
    #[error("Something went wrong while handling the request, see the server logs")]
    InternalError,
    #[error("The submitted domain data was rejected: {0}")]
    BadClientData(String),
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    Unauthorized(String),
    #[error("{0}")]
    NotFound(String),
}

impl actix_web::error::ResponseError for KeeperError {
    fn status_code(&self) -> StatusCode {
        match *self {
            Self::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
            Self::BadClientData(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .insert_header((header::CONTENT_TYPE, "text/plain; charset=utf-8"))
            .body(self.to_string())
    }
}

use axum::{
    Json,
    extract::{FromRequest, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use smartrecipe_shared::Error;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Domain(#[from] Error),

    #[error("{0}")]
    BadRequest(String),

    #[error("{}", .0.body_text())]
    Body(#[from] JsonRejection),
}

pub type AppResult<T> = std::result::Result<T, AppError>;

/// JSON request body whose rejections answer with an `{"error"}` body.
#[derive(FromRequest)]
#[from_request(via(Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::Domain(Error::Validate(_)) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Domain(Error::NotFound(_)) => StatusCode::NOT_FOUND,
            AppError::Domain(Error::Server(_)) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Domain(Error::Unknown(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Body(rejection) => rejection.status(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            AppError::Domain(Error::Unknown(e)) => {
                tracing::error!("Internal error: {:?}", e);
                "An unexpected error occurred. Please try again later.".to_owned()
            }
            other => other.to_string(),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

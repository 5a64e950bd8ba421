use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use utoipa::ToSchema;
use validator::ValidationErrors;

use crate::application::ports::book_repository::BookRepositoryError;
use crate::presentation::http::books::Book;

/// Uniform body for every response, errors included. `status` repeats the HTTP status code.
/// Router-level 404/405/408 responses are wrapped by [`route_not_found`] and [`wrap_bare_errors`].
#[derive(Debug, Serialize, ToSchema)]
#[aliases(
    BookEnvelope = ApiResponse<Book>,
    BookListEnvelope = ApiResponse<Vec<Book>>,
    MessageEnvelope = ApiResponse<serde_json::Value>
)]
pub struct ApiResponse<T> {
    pub status: u16,
    pub message: String,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Json<Self> {
        Json(Self {
            status: StatusCode::OK.as_u16(),
            message: "success".into(),
            data: Some(data),
        })
    }
}

impl ApiResponse<serde_json::Value> {
    pub fn message(message: impl Into<String>) -> Json<Self> {
        Json(Self {
            status: StatusCode::OK.as_u16(),
            message: message.into(),
            data: None,
        })
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct FieldError {
    pub field: String,
    pub code: String,
    pub message: Option<String>,
}

#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("validation failed")]
    Validation(#[from] ValidationErrors),
    #[error("{0}")]
    NotFound(String),
    #[error(transparent)]
    Internal(anyhow::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) | ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<BookRepositoryError> for ApiError {
    fn from(err: BookRepositoryError) -> Self {
        match err {
            BookRepositoryError::NotFound(_) => ApiError::NotFound(err.to_string()),
            BookRepositoryError::Unexpected(e) => ApiError::Internal(e),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

fn field_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    let mut out: Vec<FieldError> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            let field = field.to_string();
            errs.iter().map(move |e| FieldError {
                field: field.clone(),
                code: e.code.to_string(),
                message: e.message.as_ref().map(|m| m.to_string()),
            })
        })
        .collect();
    out.sort_by(|a, b| a.field.cmp(&b.field));
    out
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (message, data) = match &self {
            ApiError::Validation(errors) => (
                self.to_string(),
                serde_json::to_value(field_errors(errors)).ok(),
            ),
            ApiError::Internal(e) => {
                tracing::error!(error = ?e, "book_repository_failed");
                (format!("{e:#}"), None)
            }
            _ => (self.to_string(), None),
        };
        envelope(status, message, data)
    }
}

fn envelope(status: StatusCode, message: String, data: Option<serde_json::Value>) -> Response {
    let body = ApiResponse::<serde_json::Value> {
        status: status.as_u16(),
        message,
        data,
    };
    (status, Json(body)).into_response()
}

pub async fn route_not_found() -> ApiError {
    ApiError::NotFound("route not found".into())
}

/// Replaces the empty bodies axum and tower-http emit for 405 and 408 with the envelope.
pub async fn wrap_bare_errors(res: Response) -> Response {
    let message = match res.status() {
        StatusCode::METHOD_NOT_ALLOWED => "method not allowed",
        StatusCode::REQUEST_TIMEOUT => "request timed out",
        _ => return res,
    };
    envelope(res.status(), message.into(), None)
}

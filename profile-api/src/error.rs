use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use profile_domain::domain::errors::DomainError;
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let AppError::Domain(e) = self;

        let status = match e {
            DomainError::UserExisted | DomainError::EmailExisted => StatusCode::CONFLICT,
            DomainError::UsernameIsMissing | DomainError::Validation { .. } => {
                StatusCode::BAD_REQUEST
            }
            DomainError::MissingUserLocation => StatusCode::BAD_GATEWAY,
            DomainError::Store { .. } | DomainError::Uncategorized => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(json!({
            "code": e.code(),
            "error": e.to_string(),
        }));

        (status, body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

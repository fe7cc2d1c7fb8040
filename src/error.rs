use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::error;

pub type ApiResult<T> = std::result::Result<T, ApiError>;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ApiError {
    #[error("Please add a paste")]
    MissingPasteBody,
    #[error("Please add a comment")]
    MissingCommentBody,
    #[error("invalid id: '{value}'")]
    InvalidId { value: String },
    #[error("database error")]
    Database { source: sqlx::Error },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status_code = match &self {
            ApiError::MissingPasteBody => StatusCode::BAD_REQUEST,
            ApiError::MissingCommentBody => StatusCode::BAD_REQUEST,
            ApiError::InvalidId { .. } => StatusCode::BAD_REQUEST,
            ApiError::Database { source } => {
                // details stay server-side; the client gets a fixed advisory
                error!("database error: {source}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status_code, format!("{self}")).into_response()
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(source: sqlx::Error) -> Self {
        ApiError::Database { source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_failures_are_bad_requests() {
        let response = ApiError::MissingPasteBody.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = ApiError::MissingCommentBody.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = ApiError::InvalidId {
            value: "abc".to_owned(),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn store_failures_are_server_errors() {
        let response = ApiError::from(sqlx::Error::RowNotFound).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn advisory_messages_match_the_wire_contract() {
        assert_eq!(ApiError::MissingPasteBody.to_string(), "Please add a paste");
        assert_eq!(
            ApiError::MissingCommentBody.to_string(),
            "Please add a comment"
        );
    }
}

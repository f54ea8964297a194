use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum_extra::extract::QueryRejection;
use diesel::result::DatabaseErrorKind;
use serde::Serialize;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid parameter {0}")]
    InvalidParameter(&'static str),
    #[error("Could not parse date from {0:?}")]
    InvalidDate(String),
    #[error(transparent)]
    ExtractPath(#[from] PathRejection),
    #[error(transparent)]
    ExtractQuery(#[from] QueryRejection),
    #[error(transparent)]
    ExtractJson(#[from] JsonRejection),
    #[error("Song does not satisfy storage constraint: {0}")]
    Validation(String),

    #[error("Could not find song with id {0}")]
    SongNotFound(i64),
    #[error("Could not find route {0}")]
    RouteNotFound(String),
    #[error("Method {0} is not allowed")]
    MethodNotAllowed(axum::http::Method),

    #[error("Could not contact the enrichment service")]
    UpstreamUnavailable(#[source] reqwest::Error),
    #[error("Enrichment service returned status {0}")]
    UpstreamStatus(reqwest::StatusCode),
    #[error("Could not decode the enrichment service response")]
    UpstreamDecode(#[source] reqwest::Error),

    #[error("Could not checkout a connection from connection pool")]
    CheckoutConnectionPool,
    #[error(transparent)]
    Internal(#[from] color_eyre::Report),
}

#[derive(Debug, Serialize)]
struct Body {
    error: String,
}

impl Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Error::InvalidParameter(_)
            | Error::InvalidDate(_)
            | Error::ExtractPath(_)
            | Error::ExtractQuery(_)
            | Error::ExtractJson(_)
            | Error::Validation(_) => StatusCode::BAD_REQUEST,
            Error::SongNotFound(_) | Error::RouteNotFound(_) => StatusCode::NOT_FOUND,
            Error::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            Error::UpstreamUnavailable(_) | Error::UpstreamStatus(_) => StatusCode::BAD_GATEWAY,
            Error::UpstreamDecode(_) | Error::CheckoutConnectionPool | Error::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<diesel::result::Error> for Error {
    fn from(error: diesel::result::Error) -> Self {
        match error {
            diesel::result::Error::DatabaseError(
                DatabaseErrorKind::CheckViolation | DatabaseErrorKind::NotNullViolation,
                info,
            ) => Self::Validation(info.message().to_owned()),
            error => Self::Internal(error.into()),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status_code = self.status_code();
        let message = match &self {
            Error::CheckoutConnectionPool | Error::Internal(_) => "Internal server error".into(),
            _ => self.to_string(),
        };

        if status_code.is_server_error() {
            tracing::error!(error = ?self);
        } else {
            tracing::debug!(error =% self);
        }
        (status_code, Json(Body { error: message })).into_response()
    }
}

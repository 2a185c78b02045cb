// src/presentation/http/error.rs
use crate::application::{Rejected, Rejection};
use crate::domain::errors::ErrorKind;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Map, Value};

#[derive(Debug)]
pub struct HttpError {
    kind: ErrorKind,
    message: String,
    errors: Map<String, Value>,
}

impl HttpError {
    pub fn from_rejection(rejection: Rejection) -> Self {
        match rejection {
            Rejection::Normalized(err) => {
                let errors = err.fields_json();
                Self::new(err.kind(), err.message().to_string(), errors)
            }
            // Anything we could not classify surfaces as a general error.
            Rejection::Unchanged(raw) => Self::new(
                ErrorKind::GeneralError,
                raw.message,
                raw.errors.unwrap_or_default(),
            ),
            Rejection::Malformed(err) => {
                Self::new(ErrorKind::GeneralError, err.to_string(), Map::new())
            }
        }
    }

    fn new(kind: ErrorKind, message: String, errors: Map<String, Value>) -> Self {
        Self {
            kind,
            message,
            errors,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self.kind {
            ErrorKind::BadRequest => StatusCode::BAD_REQUEST,
            ErrorKind::Conflict => StatusCode::CONFLICT,
            ErrorKind::GeneralError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<Rejection> for HttpError {
    fn from(value: Rejection) -> Self {
        Self::from_rejection(value)
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = self.status();
        let payload = ErrorBody {
            name: self.kind.name(),
            message: self.message,
            code: status.as_u16(),
            class_name: self.kind.class_name(),
            errors: self.errors,
        };
        (status, Json(payload)).into_response()
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ErrorBody {
    name: &'static str,
    message: String,
    code: u16,
    class_name: &'static str,
    errors: Map<String, Value>,
}

pub type HttpResult<T> = Result<T, HttpError>;

pub trait IntoHttpResult<T> {
    fn into_http(self) -> HttpResult<T>;
}

impl<T> IntoHttpResult<T> for Rejected<T> {
    fn into_http(self) -> HttpResult<T> {
        self.map_err(HttpError::from_rejection)
    }
}

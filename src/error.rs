use std::collections::BTreeMap;

use actix_web::http::StatusCode;
use actix_web::http::header::{self, HeaderValue};
use actix_web::{HttpResponse, ResponseError};
use sea_orm::DbErr;
use serde::Serialize;
use serde_json::json;
use thiserror::Error;
use utoipa::ToSchema;

use crate::security::jwt::TokenError;

/// Per-field validation messages, serialized as `{"field": ["message", ...]}`
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, ToSchema)]
#[serde(transparent)]
pub struct Validation(BTreeMap<String, Vec<String>>);

impl Validation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add<F: ToString, M: ToString>(&mut self, field: F, message: M) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.to_string());
    }

    /// Adds the standard message when `value` is blank.
    pub fn required(&mut self, field: &str, value: &str) {
        if value.trim().is_empty() {
            self.add(field, "This field is required.");
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    Unauthorized(String),
    #[error("{0}")]
    BadRequest(String),
    #[error("validation failed")]
    Validation(Validation),
    #[error(transparent)]
    Database(#[from] DbErr),
    #[error("failed to sign token: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),
    #[error("password hashing failed: {0}")]
    PasswordHash(argon2::password_hash::Error),
}

impl Error {
    pub fn unauthorized<T: ToString>(detail: T) -> Self {
        Self::Unauthorized(detail.to_string())
    }

    pub fn bad_request<T: ToString>(message: T) -> Self {
        Self::BadRequest(message.to_string())
    }
}

impl From<Validation> for Error {
    fn from(validation: Validation) -> Self {
        Self::Validation(validation)
    }
}

impl From<argon2::password_hash::Error> for Error {
    fn from(error: argon2::password_hash::Error) -> Self {
        Self::PasswordHash(error)
    }
}

impl From<TokenError> for Error {
    fn from(error: TokenError) -> Self {
        ::tracing::debug!("Rejected token: {}", error);

        Self::unauthorized("Given token not valid for any token type")
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::BadRequest(_) | Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Database(_) | Self::Token(_) | Self::PasswordHash(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let mut response = HttpResponse::build(self.status_code());

        match self {
            Self::Unauthorized(detail) => {
                response.insert_header((
                    header::WWW_AUTHENTICATE,
                    HeaderValue::from_static("Bearer realm=\"api\""),
                ));
                response.json(json!({ "detail": detail }))
            }
            Self::BadRequest(message) => response.json(json!({ "error": message })),
            Self::Validation(validation) => response.json(validation),
            Self::Database(_) | Self::Token(_) | Self::PasswordHash(_) => {
                ::tracing::error!("Internal error: {}", self);

                response.json(json!({ "detail": "Internal server error" }))
            }
        }
    }
}

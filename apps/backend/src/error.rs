use actix_web::error::ResponseError;
use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde::Serialize;
use thiserror::Error;

use crate::errors::{DomainError, ErrorCode};

#[derive(Serialize)]
pub struct ProblemDetails {
    #[serde(rename = "type")]
    pub type_: String,
    pub title: String,
    pub status: u16,
    pub detail: String,
    pub code: ErrorCode,
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {detail}")]
    Config { detail: String },
    #[error("Bad request: {detail}")]
    BadRequest { code: ErrorCode, detail: String },
    #[error("Room is full")]
    RoomFull,
    #[error("Connection already joined this room")]
    AlreadyJoined,
    #[error("Delivery failed: {detail}")]
    Delivery { detail: String },
    #[error("Serialization error: {detail}")]
    Serialization { detail: String },
    #[error("Internal error: {detail}")]
    Internal { detail: String },
}

impl AppError {
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Config { .. } => ErrorCode::ConfigError,
            AppError::BadRequest { code, .. } => *code,
            AppError::RoomFull => ErrorCode::RoomFull,
            AppError::AlreadyJoined => ErrorCode::AlreadyJoined,
            AppError::Delivery { .. } => ErrorCode::DeliveryFailed,
            AppError::Serialization { .. } => ErrorCode::SerializationFailed,
            AppError::Internal { .. } => ErrorCode::Internal,
        }
    }

    /// Human-readable detail, safe to show to clients.
    pub fn detail(&self) -> String {
        match self {
            AppError::Config { detail }
            | AppError::BadRequest { detail, .. }
            | AppError::Delivery { detail }
            | AppError::Serialization { detail }
            | AppError::Internal { detail } => detail.clone(),
            AppError::RoomFull => "Room already has two players".to_string(),
            AppError::AlreadyJoined => "Connection is already seated".to_string(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::RoomFull | AppError::AlreadyJoined => StatusCode::CONFLICT,
            AppError::Config { .. }
            | AppError::Delivery { .. }
            | AppError::Serialization { .. }
            | AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }

    pub fn bad_request(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::BadRequest {
            code,
            detail: detail.into(),
        }
    }

    pub fn delivery(detail: impl Into<String>) -> Self {
        Self::Delivery {
            detail: detail.into(),
        }
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self::Internal {
            detail: detail.into(),
        }
    }

    fn humanize_code(code: &str) -> String {
        code.split('_')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    None => String::new(),
                    Some(first) => first
                        .to_uppercase()
                        .chain(chars.flat_map(char::to_lowercase))
                        .collect(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl From<DomainError> for AppError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::RoomFull => AppError::RoomFull,
            DomainError::AlreadySeated => AppError::AlreadyJoined,
            other => AppError::internal(format!("domain invariant violated: {other}")),
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Serialization {
            detail: e.to_string(),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        self.status()
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status();
        let code = self.code();

        let problem_details = ProblemDetails {
            type_: format!("about:blank#{}", code.as_str().to_lowercase()),
            title: Self::humanize_code(code.as_str()),
            status: status.as_u16(),
            detail: self.detail(),
            code,
        };

        HttpResponse::build(status)
            .content_type("application/problem+json")
            .json(problem_details)
    }
}

//! Ошибки доменной логики и их отображение в HTTP-ответы.

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, LayoutError>;

/// Ошибки вычислений над схемой зала.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum LayoutError {
    /// Пустая метка или символ вне A..Z.
    #[error("invalid row label: {0:?}")]
    InvalidLabel(String),

    #[error("row label {0:?} is too long")]
    LabelOverflow(String),

    #[error("unknown block type: {0:?}")]
    UnknownBlockType(String),

    #[error("unknown seat status: {0:?}")]
    UnknownSeatStatus(String),

    #[error("block {0} is not a seated grid")]
    NotSeatedGrid(String),

    /// Место должно принадлежать ровно одному ряду или блоку.
    #[error("seat {0} appears more than once in the layout")]
    DuplicateSeat(String),

    #[error("seat {0} carries a booking status inside a template")]
    StatusInTemplate(String),
}

impl LayoutError {
    pub fn code(&self) -> &'static str {
        match self {
            LayoutError::InvalidLabel(_) => "INVALID_LABEL",
            LayoutError::LabelOverflow(_) => "LABEL_OVERFLOW",
            LayoutError::UnknownBlockType(_) => "UNKNOWN_BLOCK_TYPE",
            LayoutError::UnknownSeatStatus(_) => "UNKNOWN_SEAT_STATUS",
            LayoutError::NotSeatedGrid(_) => "NOT_SEATED_GRID",
            LayoutError::DuplicateSeat(_) => "DUPLICATE_SEAT",
            LayoutError::StatusInTemplate(_) => "STATUS_IN_TEMPLATE",
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            LayoutError::InvalidLabel(_) | LayoutError::LabelOverflow(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

/// Ошибка HTTP-слоя: код ответа + машинный код + сообщение.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    code: &'static str,
    message: String,
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            code: "VALIDATION_ERROR",
            message: message.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl From<LayoutError> for ApiError {
    fn from(err: LayoutError) -> Self {
        Self { status: err.status(), code: err.code(), message: err.to_string() }
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(err: validator::ValidationErrors) -> Self {
        ApiError::validation(err.to_string())
    }
}

// Ошибки разбора тела/параметров отдаем в том же JSON-формате
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self { status: rejection.status(), code: "INVALID_PAYLOAD", message: rejection.body_text() }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self { status: rejection.status(), code: "INVALID_QUERY", message: rejection.body_text() }
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    code: &'a str,
    message: &'a str,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(status = %self.status, code = self.code, "{}", self.message);
        } else {
            tracing::debug!(status = %self.status, code = self.code, "{}", self.message);
        }

        let body = ErrorBody { code: self.code, message: &self.message };
        (self.status, Json(body)).into_response()
    }
}

//! Rejection reasons for incoming reports

use bytes::Bytes;
use http::header::CONTENT_TYPE;
use http::{HeaderValue, Response, StatusCode};
use tgateway_integrity::IntegrityError;
use thiserror::Error;

/// Why an incoming report was not accepted
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReportRejection {
    /// A required header is absent
    #[error("Header missing from request: {0}")]
    MissingHeader(String),

    /// A header is present but cannot be parsed
    #[error("Header has an invalid value: {0}")]
    InvalidHeader(String),

    /// Body exceeds the configured limit
    #[error("Payload too large: {size} bytes (max: {limit})")]
    PayloadTooLarge { size: usize, limit: usize },

    /// Timestamp or signature check failed
    #[error(transparent)]
    Integrity(#[from] IntegrityError),

    /// Authentic report whose body does not match the expected shape
    #[error("Invalid request body: {0}")]
    MalformedPayload(String),
}

impl ReportRejection {
    /// HTTP status to answer the sender with
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingHeader(_) | Self::InvalidHeader(_) => StatusCode::BAD_REQUEST,
            Self::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            Self::Integrity(IntegrityError::TimestampOutOfRange { .. }) => StatusCode::BAD_REQUEST,
            Self::Integrity(IntegrityError::SignatureInvalid) => StatusCode::FORBIDDEN,
            Self::MalformedPayload(_) => StatusCode::BAD_REQUEST,
        }
    }

    /// Short description safe to return to the sender
    pub fn detail(&self) -> &'static str {
        match self {
            Self::MissingHeader(_) => "Missing required header",
            Self::InvalidHeader(_) => "Invalid header value",
            Self::PayloadTooLarge { .. } => "Payload too large",
            Self::Integrity(IntegrityError::TimestampOutOfRange { .. }) => "Timestamp out of range",
            Self::Integrity(IntegrityError::SignatureInvalid) => "Invalid signature",
            Self::MalformedPayload(_) => "Invalid request body",
        }
    }

    /// Render as a JSON error response
    pub fn into_response(&self) -> Response<Bytes> {
        json_response(
            self.status_code(),
            serde_json::json!({ "detail": self.detail() }),
        )
    }
}

/// The response for an accepted report
pub fn accepted_response() -> Response<Bytes> {
    json_response(StatusCode::OK, serde_json::json!({ "ok": true }))
}

fn json_response(status: StatusCode, body: serde_json::Value) -> Response<Bytes> {
    let mut response = Response::new(Bytes::from(body.to_string()));
    *response.status_mut() = status;
    response
        .headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    response
}

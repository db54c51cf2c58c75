//! Gateway API error classification.
//!
//! Failed calls come back as `{"ok": false, "error": "<CODE>"}`. The code is
//! mapped onto [`ApiErrorCode`] so callers can branch on it; codes this crate
//! does not know are preserved verbatim in [`ApiErrorCode::Other`].

use serde_json::Value;
use std::borrow::Cow;
use std::fmt;
use std::time::Duration;
use thiserror::Error;

const FLOOD_WAIT_PREFIX: &str = "FLOOD_WAIT_";

/// Error code returned by the gateway.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ApiErrorCode {
    AccessTokenInvalid,
    AccessTokenRequired,
    BalanceNotEnough,
    CallbackUrlInvalid,
    CodeInvalid,
    CodeLengthInvalid,
    CodeLengthRequired,
    PayloadInvalid,
    PhoneNumberInvalid,
    PhoneNumberNotFound,
    RequestIdInvalid,
    RequestIdRequired,
    SenderNotOwned,
    SenderNotVerified,
    SenderUsernameInvalid,
    TtlInvalid,
    UnknownMethod,
    /// Too many requests; retry after the given number of seconds
    FloodWait { seconds: u64 },
    /// Any code not listed above
    Other(String),
}

impl ApiErrorCode {
    /// Classify a raw error code
    pub fn parse(code: &str) -> Self {
        if let Some(seconds) = code
            .strip_prefix(FLOOD_WAIT_PREFIX)
            .and_then(|s| s.parse().ok())
        {
            return Self::FloodWait { seconds };
        }

        match code {
            "ACCESS_TOKEN_INVALID" => Self::AccessTokenInvalid,
            "ACCESS_TOKEN_REQUIRED" => Self::AccessTokenRequired,
            "BALANCE_NOT_ENOUGH" => Self::BalanceNotEnough,
            "CALLBACK_URL_INVALID" => Self::CallbackUrlInvalid,
            "CODE_INVALID" => Self::CodeInvalid,
            "CODE_LENGTH_INVALID" => Self::CodeLengthInvalid,
            "CODE_LENGTH_REQUIRED" => Self::CodeLengthRequired,
            "PAYLOAD_INVALID" => Self::PayloadInvalid,
            "PHONE_NUMBER_INVALID" => Self::PhoneNumberInvalid,
            "PHONE_NUMBER_NOT_FOUND" => Self::PhoneNumberNotFound,
            "REQUEST_ID_INVALID" => Self::RequestIdInvalid,
            "REQUEST_ID_REQUIRED" => Self::RequestIdRequired,
            "SENDER_NOT_OWNED" => Self::SenderNotOwned,
            "SENDER_NOT_VERIFIED" => Self::SenderNotVerified,
            "SENDER_USERNAME_INVALID" => Self::SenderUsernameInvalid,
            "TTL_INVALID" => Self::TtlInvalid,
            "UNKNOWN_METHOD" => Self::UnknownMethod,
            other => Self::Other(other.to_string()),
        }
    }

    /// The code as it appears on the wire
    pub fn as_code(&self) -> Cow<'_, str> {
        let code = match self {
            Self::AccessTokenInvalid => "ACCESS_TOKEN_INVALID",
            Self::AccessTokenRequired => "ACCESS_TOKEN_REQUIRED",
            Self::BalanceNotEnough => "BALANCE_NOT_ENOUGH",
            Self::CallbackUrlInvalid => "CALLBACK_URL_INVALID",
            Self::CodeInvalid => "CODE_INVALID",
            Self::CodeLengthInvalid => "CODE_LENGTH_INVALID",
            Self::CodeLengthRequired => "CODE_LENGTH_REQUIRED",
            Self::PayloadInvalid => "PAYLOAD_INVALID",
            Self::PhoneNumberInvalid => "PHONE_NUMBER_INVALID",
            Self::PhoneNumberNotFound => "PHONE_NUMBER_NOT_FOUND",
            Self::RequestIdInvalid => "REQUEST_ID_INVALID",
            Self::RequestIdRequired => "REQUEST_ID_REQUIRED",
            Self::SenderNotOwned => "SENDER_NOT_OWNED",
            Self::SenderNotVerified => "SENDER_NOT_VERIFIED",
            Self::SenderUsernameInvalid => "SENDER_USERNAME_INVALID",
            Self::TtlInvalid => "TTL_INVALID",
            Self::UnknownMethod => "UNKNOWN_METHOD",
            Self::FloodWait { seconds } => {
                return Cow::Owned(format!("{}{}", FLOOD_WAIT_PREFIX, seconds));
            }
            Self::Other(code) => code.as_str(),
        };
        Cow::Borrowed(code)
    }
}

impl fmt::Display for ApiErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_code())
    }
}

/// An error reported by the gateway for a specific API method.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Gateway error at {endpoint}: {code}")]
pub struct GatewayApiError {
    /// Classified error code
    pub code: ApiErrorCode,
    /// API method that failed, e.g. `sendVerificationMessage`
    pub endpoint: String,
}

impl GatewayApiError {
    /// Classify `code` returned by `endpoint`
    pub fn new(code: &str, endpoint: impl Into<String>) -> Self {
        Self {
            code: ApiErrorCode::parse(code),
            endpoint: endpoint.into(),
        }
    }

    /// Extract the error from a decoded response envelope.
    ///
    /// Returns `None` when the envelope reports success or carries no
    /// error string.
    pub fn from_response(endpoint: impl Into<String>, response: &Value) -> Option<Self> {
        if response.get("ok").and_then(Value::as_bool) == Some(true) {
            return None;
        }

        let code = response.get("error")?.as_str()?;
        Some(Self::new(code, endpoint))
    }

    /// How long the gateway asked us to wait, for flood-wait errors
    pub fn retry_after(&self) -> Option<Duration> {
        match self.code {
            ApiErrorCode::FloodWait { seconds } => Some(Duration::from_secs(seconds)),
            _ => None,
        }
    }

    /// Check if the same call may succeed later unchanged.
    pub fn is_retryable(&self) -> bool {
        self.retry_after().is_some()
    }
}

//! Delivery Report Receiving for Telegram Gateway
//!
//! When a verification message is sent with a `callback_url`, the gateway
//! POSTs a status report to that URL. Every report carries two headers:
//!
//! - `X-Request-Timestamp`: when the report was created (Unix seconds)
//! - `X-Request-Signature`: HMAC-SHA256 of `"{timestamp}\n{body}"`, keyed by
//!   `SHA-256(access_token)`, in lowercase hex
//!
//! [`ReportReceiver`] checks both against the raw body before anything is
//! parsed and maps every rejection onto the status code the sender should see.
//!
//! | Rejection                 | Status |
//! |---------------------------|--------|
//! | missing/invalid timestamp | 400    |
//! | timestamp out of range    | 400    |
//! | invalid signature         | 403    |
//! | body too large            | 413    |
//! | unparseable body          | 400    |
//!
//! # Example
//!
//! ```rust,no_run
//! use http::Request;
//! use serde::Deserialize;
//! use tgateway_webhooks::ReportReceiver;
//!
//! #[derive(Deserialize)]
//! struct DeliveryReport {
//!     request_id: String,
//! }
//!
//! let receiver = ReportReceiver::new("<access-token>");
//!
//! let request = Request::post("/webhook")
//!     .header("X-Request-Timestamp", "1700000000")
//!     .header("X-Request-Signature", "1a08778f...")
//!     .body(br#"{"request_id":"abc123"}"#.to_vec())
//!     .unwrap();
//!
//! let response = receiver.handle(&request, |report: DeliveryReport| {
//!     println!("report for {}", report.request_id);
//! });
//! println!("{}", response.status());
//! ```

mod config;
mod error;
mod receiver;

pub use config::{ReceiverConfig, ReceiverConfigBuilder};
pub use error::{ReportRejection, accepted_response};
pub use receiver::{ReportHeaders, ReportReceiver};

/// Header names used by the gateway
pub mod headers {
    pub use tgateway_core::{
        DEFAULT_SIGNATURE_HEADER as SIGNATURE, DEFAULT_TIMESTAMP_HEADER as TIMESTAMP,
    };
}

/// Result type for report receiving
pub type Result<T> = std::result::Result<T, ReportRejection>;

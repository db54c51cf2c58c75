//! Report Integrity Verification for Telegram Gateway
//!
//! The gateway delivers status reports to a callback URL and signs every
//! report with the account's access token. This crate decides whether such
//! a report is authentic and fresh, without any network round trip.
//!
//! # Scheme
//!
//! - The HMAC key is `SHA-256(access_token)`, never the raw token
//! - The signed message is `"{timestamp}\n{body}"`
//! - The signature is `HMAC-SHA256(key, message)` rendered as lowercase hex
//! - Reports older or newer than 300 seconds are rejected
//!
//! # Example
//!
//! ```rust
//! use tgateway_integrity::{FixedClock, IntegrityError, ReportIntegrityVerifier, ReportSignature};
//!
//! let verifier = ReportIntegrityVerifier::with_clock(FixedClock::new(1_700_000_000));
//!
//! let body = br#"{"request_id":"abc123"}"#;
//! let signature = ReportSignature::new("access-token")
//!     .sign(1_700_000_000, std::str::from_utf8(body).unwrap());
//!
//! assert!(verifier.verify("access-token", 1_700_000_000, &signature, body).is_ok());
//! assert_eq!(
//!     verifier.verify("access-token", 1_700_000_000, "deadbeef", body),
//!     Err(IntegrityError::SignatureInvalid)
//! );
//! ```

mod clock;
mod error;
mod signature;
mod verifier;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::IntegrityError;
pub use signature::{ReportSignature, canonical_string};
pub use verifier::{DEFAULT_TOLERANCE_SECS, ReportIntegrityVerifier, validate_report_integrity};

/// Result type for integrity checks
pub type Result<T> = std::result::Result<T, IntegrityError>;

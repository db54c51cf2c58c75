//! Error types for report integrity checks

use thiserror::Error;

/// Reasons a report is rejected.
///
/// Both kinds are expected outcomes of checking untrusted input. Malformed
/// input (a body that is not UTF-8, a signature that is not lowercase hex of
/// the right length) is reported as [`IntegrityError::SignatureInvalid`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegrityError {
    /// The report timestamp is outside the freshness window
    #[error("Report timestamp {timestamp} is {skew} seconds away from now (tolerance: {tolerance} seconds)")]
    TimestampOutOfRange {
        /// Timestamp claimed by the sender
        timestamp: i64,
        /// Absolute distance from the current time, in seconds
        skew: u64,
        /// Window that was enforced, in seconds
        tolerance: u64,
    },

    /// The signature does not match the report
    #[error("Report signature is invalid")]
    SignatureInvalid,
}

impl IntegrityError {
    /// Check if this is a freshness failure.
    pub fn is_timestamp_out_of_range(&self) -> bool {
        matches!(self, Self::TimestampOutOfRange { .. })
    }

    /// Check if this is a signature failure.
    pub fn is_signature_invalid(&self) -> bool {
        matches!(self, Self::SignatureInvalid)
    }
}

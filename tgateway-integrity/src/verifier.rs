//! Freshness and signature checks for incoming reports

use crate::{Clock, IntegrityError, ReportSignature, Result, SystemClock};

/// Default freshness window, in seconds, in either direction.
pub const DEFAULT_TOLERANCE_SECS: u64 = 300;

/// Decides whether a gateway report is authentic and fresh.
///
/// The verifier holds no secret and no mutable state. The access token is
/// borrowed for each call, so one verifier can serve any number of threads.
#[derive(Debug, Clone)]
pub struct ReportIntegrityVerifier<C = SystemClock> {
    clock: C,
    tolerance: u64,
}

impl ReportIntegrityVerifier<SystemClock> {
    /// Create a verifier reading the system clock
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for ReportIntegrityVerifier<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> ReportIntegrityVerifier<C> {
    /// Create a verifier reading time from `clock`
    pub fn with_clock(clock: C) -> Self {
        Self {
            clock,
            tolerance: DEFAULT_TOLERANCE_SECS,
        }
    }

    /// Set the freshness window in seconds
    pub fn with_tolerance(mut self, seconds: u64) -> Self {
        self.tolerance = seconds;
        self
    }

    /// The freshness window in seconds
    pub fn tolerance(&self) -> u64 {
        self.tolerance
    }

    /// The clock used for freshness checks
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Verify a report.
    ///
    /// `body` must be the raw request body exactly as received. The
    /// timestamp window is checked first so stale reports never reach the
    /// HMAC computation.
    pub fn verify(
        &self,
        access_token: &str,
        timestamp: i64,
        signature: &str,
        body: &[u8],
    ) -> Result<()> {
        self.check_timestamp(timestamp)?;

        if ReportSignature::new(access_token).verify(timestamp, signature, body) {
            Ok(())
        } else {
            Err(IntegrityError::SignatureInvalid)
        }
    }

    /// Check only the freshness window
    pub fn check_timestamp(&self, timestamp: i64) -> Result<()> {
        let skew = self.clock.now_secs().abs_diff(timestamp);

        if skew > self.tolerance {
            return Err(IntegrityError::TimestampOutOfRange {
                timestamp,
                skew,
                tolerance: self.tolerance,
            });
        }

        Ok(())
    }
}

/// Verify a report against the system clock and the default window.
pub fn validate_report_integrity(
    access_token: &str,
    timestamp: i64,
    signature: &str,
    body: &[u8],
) -> Result<()> {
    ReportIntegrityVerifier::new().verify(access_token, timestamp, signature, body)
}

//! Receiver for incoming delivery reports

use crate::{ReceiverConfig, ReportRejection, Result, accepted_response};
use bytes::Bytes;
use http::{HeaderMap, Request, Response};
use serde::de::DeserializeOwned;
use tgateway_core::GatewayConfig;
use tgateway_integrity::{Clock, IntegrityError, ReportIntegrityVerifier, SystemClock};
use tracing::{debug, info, warn};

/// Timestamp and signature taken from a report's headers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportHeaders {
    /// Sender's claimed creation time, seconds since the Unix epoch
    pub timestamp: i64,
    /// Claimed signature, expected as lowercase hex
    pub signature: String,
}

/// Receiver for incoming gateway reports.
///
/// Pulls the timestamp and signature out of the request headers, checks
/// them against the raw body, and only then parses the body.
#[derive(Clone)]
pub struct ReportReceiver<C = SystemClock> {
    access_token: String,
    config: ReceiverConfig,
    verifier: ReportIntegrityVerifier<C>,
}

impl ReportReceiver<SystemClock> {
    /// Create a new receiver for the given access token
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            config: ReceiverConfig::default(),
            verifier: ReportIntegrityVerifier::new(),
        }
    }

    /// Create a receiver from a gateway configuration
    pub fn from_config(config: &GatewayConfig) -> Self {
        Self::new(config.access_token()).with_config(ReceiverConfig::from(&config.webhook))
    }
}

impl<C: Clock> ReportReceiver<C> {
    /// Replace the receiver configuration
    pub fn with_config(mut self, config: ReceiverConfig) -> Self {
        self.verifier = self.verifier.with_tolerance(config.timestamp_tolerance);
        self.config = config;
        self
    }

    /// Read time from `clock` instead
    pub fn with_clock<D: Clock>(self, clock: D) -> ReportReceiver<D> {
        ReportReceiver {
            access_token: self.access_token,
            verifier: ReportIntegrityVerifier::with_clock(clock)
                .with_tolerance(self.config.timestamp_tolerance),
            config: self.config,
        }
    }

    /// The receiver configuration
    pub fn config(&self) -> &ReceiverConfig {
        &self.config
    }

    /// Read the timestamp and signature headers.
    ///
    /// The timestamp header is parsed as a decimal integer, so surrounding
    /// whitespace, a leading `+` or leading zeros are accepted. The signed
    /// string is built from the parsed value, not the raw header text:
    /// `+01700000000` is checked as `1700000000`.
    ///
    /// A missing or unreadable signature header is reported as an invalid
    /// signature.
    pub fn extract(&self, headers: &HeaderMap) -> Result<ReportHeaders> {
        let timestamp_header = self.config.timestamp_header.as_str();
        let timestamp = headers
            .get(timestamp_header)
            .ok_or_else(|| ReportRejection::MissingHeader(timestamp_header.to_string()))?
            .to_str()
            .ok()
            .and_then(|value| value.trim().parse::<i64>().ok())
            .ok_or_else(|| ReportRejection::InvalidHeader(timestamp_header.to_string()))?;

        let signature = headers
            .get(self.config.signature_header.as_str())
            .and_then(|value| value.to_str().ok())
            .ok_or(IntegrityError::SignatureInvalid)?
            .to_string();

        Ok(ReportHeaders {
            timestamp,
            signature,
        })
    }

    /// Verify an incoming report without parsing it
    pub fn verify(&self, headers: &HeaderMap, body: &[u8]) -> Result<ReportHeaders> {
        let result = self.check(headers, body);
        if let Err(ref rejection) = result {
            warn!(
                event = "rejected_incoming_request",
                status = rejection.status_code().as_u16(),
                reason = %rejection,
                "Report rejected"
            );
        }
        result
    }

    fn check(&self, headers: &HeaderMap, body: &[u8]) -> Result<ReportHeaders> {
        if body.len() > self.config.max_body_size {
            return Err(ReportRejection::PayloadTooLarge {
                size: body.len(),
                limit: self.config.max_body_size,
            });
        }

        let report = self.extract(headers)?;
        debug!(
            event = "new_incoming_request",
            timestamp = report.timestamp,
            signature = %report.signature,
            body_len = body.len(),
            "Report received"
        );

        self.verifier
            .verify(&self.access_token, report.timestamp, &report.signature, body)?;
        Ok(report)
    }

    /// Verify and parse an incoming report
    pub fn receive<T: DeserializeOwned>(&self, headers: &HeaderMap, body: &[u8]) -> Result<T> {
        let report = self.verify(headers, body)?;

        let parsed = serde_json::from_slice(body).map_err(|e| {
            let rejection = ReportRejection::MalformedPayload(e.to_string());
            warn!(
                event = "malformed_incoming_request",
                timestamp = report.timestamp,
                reason = %rejection,
                "Authentic report has an unexpected body"
            );
            rejection
        })?;

        info!(
            event = "valid_incoming_request",
            timestamp = report.timestamp,
            body_len = body.len(),
            "Report accepted"
        );
        Ok(parsed)
    }

    /// Verify and parse a whole HTTP request
    pub fn receive_request<T, B>(&self, request: &Request<B>) -> Result<T>
    where
        T: DeserializeOwned,
        B: AsRef<[u8]>,
    {
        self.receive(request.headers(), request.body().as_ref())
    }

    /// Run `callback` on an accepted report and build the response.
    ///
    /// Rejections are answered with their status code and a JSON detail;
    /// accepted reports with `200 {"ok": true}`.
    pub fn handle<T, B, F>(&self, request: &Request<B>, callback: F) -> Response<Bytes>
    where
        T: DeserializeOwned,
        B: AsRef<[u8]>,
        F: FnOnce(T),
    {
        match self.receive_request(request) {
            Ok(report) => {
                callback(report);
                accepted_response()
            }
            Err(rejection) => rejection.into_response(),
        }
    }
}

impl<C> std::fmt::Debug for ReportReceiver<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReportReceiver")
            .field("access_token", &"<redacted>")
            .field("config", &self.config)
            .finish()
    }
}

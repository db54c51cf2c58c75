//! Integration tests for common tgateway workflows.
//!
//! These tests verify that the most common use cases work correctly.

use tgateway::prelude::*;

// =============================================================================
// Report Integrity Tests
// =============================================================================

#[test]
fn test_validate_report_integrity_end_to_end() {
    let now = SystemClock.now_secs();
    let signature = ReportSignature::new("mytoken").sign(now, "{}");

    // Exact signature is accepted
    assert!(validate_report_integrity("mytoken", now, &signature, b"{}").is_ok());

    // Last hex digit flipped
    let last = signature.chars().last().unwrap();
    let flipped = format!(
        "{}{}",
        &signature[..signature.len() - 1],
        if last == '0' { '1' } else { '0' }
    );
    assert_eq!(
        validate_report_integrity("mytoken", now, &flipped, b"{}"),
        Err(IntegrityError::SignatureInvalid)
    );

    // Correctly signed for a timestamp 1000 seconds ago
    let stale = now - 1000;
    let stale_signature = ReportSignature::new("mytoken").sign(stale, "{}");
    let err = validate_report_integrity("mytoken", stale, &stale_signature, b"{}").unwrap_err();
    assert!(err.is_timestamp_out_of_range());
}

#[test]
fn test_verifier_boundaries_with_injected_clock() {
    let now = 1_700_000_000;
    let verifier = ReportIntegrityVerifier::with_clock(FixedClock::new(now));
    let signer = ReportSignature::new("mytoken");

    for (offset, accepted) in [(-301, false), (-300, true), (0, true), (300, true), (301, false)] {
        let timestamp = now + offset;
        let signature = signer.sign(timestamp, "{}");
        let result = verifier.verify("mytoken", timestamp, &signature, b"{}");
        assert_eq!(result.is_ok(), accepted, "offset {}", offset);
    }
}

// =============================================================================
// Configuration Tests
// =============================================================================

#[test]
fn test_config_drives_verification_window() {
    let config = GatewayConfig::from_toml_str(
        r#"
        access_token = "mytoken"

        [webhook]
        timestamp_tolerance = 60
        "#,
    )
    .unwrap();

    let verifier = ReportIntegrityVerifier::with_clock(FixedClock::new(1_700_000_000))
        .with_tolerance(config.webhook.timestamp_tolerance);
    let timestamp = 1_700_000_000 - 61;
    let signature = ReportSignature::new(config.access_token()).sign(timestamp, "{}");

    assert!(
        verifier
            .verify(config.access_token(), timestamp, &signature, b"{}")
            .unwrap_err()
            .is_timestamp_out_of_range()
    );
}

// =============================================================================
// API Error Tests
// =============================================================================

#[test]
fn test_flood_wait_classification() {
    let response = serde_json::json!({"ok": false, "error": "FLOOD_WAIT_120"});
    let err = GatewayApiError::from_response("sendVerificationMessage", &response).unwrap();

    assert_eq!(err.code, ApiErrorCode::FloodWait { seconds: 120 });
    assert_eq!(err.retry_after(), Some(std::time::Duration::from_secs(120)));
    assert_eq!(
        err.to_string(),
        "Gateway error at sendVerificationMessage: FLOOD_WAIT_120"
    );
}

// =============================================================================
// Webhook Receiving Tests
// =============================================================================

#[cfg(feature = "webhooks")]
#[test]
fn test_webhook_receiver_workflow() {
    use http::{Request, StatusCode};
    use serde::Deserialize;
    use tgateway::webhooks::headers;

    #[derive(Deserialize)]
    struct RequestStatus {
        request_id: String,
    }

    let now = 1_700_000_000;
    let config = GatewayConfig::new("mytoken");
    let receiver = ReportReceiver::from_config(&config).with_clock(FixedClock::new(now));

    let body = r#"{"request_id":"req-42"}"#;
    let signature = ReportSignature::new("mytoken").sign(now, body);
    let request = Request::post("/webhook")
        .header(headers::TIMESTAMP, now.to_string())
        .header(headers::SIGNATURE, signature.clone())
        .body(body.as_bytes().to_vec())
        .unwrap();

    let mut received = None;
    let response = receiver.handle(&request, |status: RequestStatus| {
        received = Some(status.request_id);
    });
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(received.as_deref(), Some("req-42"));

    // Same headers, tampered body
    let tampered = Request::post("/webhook")
        .header(headers::TIMESTAMP, now.to_string())
        .header(headers::SIGNATURE, signature)
        .body(br#"{"request_id":"req-43"}"#.to_vec())
        .unwrap();
    let err = receiver
        .receive_request::<serde_json::Value, _>(&tampered)
        .unwrap_err();
    assert_eq!(err.status_code(), StatusCode::FORBIDDEN);
}

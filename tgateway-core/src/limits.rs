//! Bounds the gateway enforces on request parameters

use crate::ValidationError;
use std::time::Duration;

/// The minimum length of a verification code.
pub const CODE_LENGTH_MIN: u32 = 4;
/// The maximum length of a verification code.
pub const CODE_LENGTH_MAX: u32 = 8;

/// The maximum length of a tracking payload, in bytes.
pub const PAYLOAD_LENGTH_MAX: usize = 128;

/// The minimum message time-to-live, in seconds.
pub const TTL_MIN: u64 = 60;
/// The maximum message time-to-live, in seconds (one day).
pub const TTL_MAX: u64 = 86_400;

/// Check a caller-supplied verification code.
pub fn validate_code(code: &str) -> Result<(), ValidationError> {
    let len = code.chars().count();
    if !(CODE_LENGTH_MIN as usize..=CODE_LENGTH_MAX as usize).contains(&len) {
        return Err(ValidationError::CodeLength {
            min: CODE_LENGTH_MIN,
            max: CODE_LENGTH_MAX,
            actual: len,
        });
    }

    if !code.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::CodeNotNumeric);
    }

    Ok(())
}

/// Check the length requested for a gateway-generated code.
pub fn validate_code_length(code_length: u32) -> Result<(), ValidationError> {
    if !(CODE_LENGTH_MIN..=CODE_LENGTH_MAX).contains(&code_length) {
        return Err(ValidationError::CodeLengthParam {
            min: CODE_LENGTH_MIN,
            max: CODE_LENGTH_MAX,
            actual: code_length,
        });
    }
    Ok(())
}

/// Check a tracking payload attached to a request.
pub fn validate_payload(payload: &str) -> Result<(), ValidationError> {
    if payload.len() > PAYLOAD_LENGTH_MAX {
        return Err(ValidationError::PayloadTooLong {
            max: PAYLOAD_LENGTH_MAX,
            actual: payload.len(),
        });
    }
    Ok(())
}

/// Check a message time-to-live. Sub-second precision is ignored.
pub fn validate_ttl(ttl: Duration) -> Result<(), ValidationError> {
    let secs = ttl.as_secs();
    if !(TTL_MIN..=TTL_MAX).contains(&secs) {
        return Err(ValidationError::Ttl {
            min: TTL_MIN,
            max: TTL_MAX,
            actual: secs,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_code() {
        assert!(validate_code("1234").is_ok());
        assert!(validate_code("12345678").is_ok());

        assert_eq!(
            validate_code("123"),
            Err(ValidationError::CodeLength {
                min: 4,
                max: 8,
                actual: 3
            })
        );
        assert!(matches!(
            validate_code("123456789"),
            Err(ValidationError::CodeLength { actual: 9, .. })
        ));
        assert_eq!(validate_code("12a4"), Err(ValidationError::CodeNotNumeric));
    }

    #[test]
    fn test_validate_code_length() {
        assert!(validate_code_length(4).is_ok());
        assert!(validate_code_length(8).is_ok());
        assert!(validate_code_length(3).is_err());
        assert!(validate_code_length(9).is_err());
    }

    #[test]
    fn test_validate_payload() {
        assert!(validate_payload("").is_ok());
        assert!(validate_payload(&"x".repeat(128)).is_ok());
        assert_eq!(
            validate_payload(&"x".repeat(129)),
            Err(ValidationError::PayloadTooLong {
                max: 128,
                actual: 129
            })
        );
        // 43 three-byte characters is 129 bytes
        assert!(validate_payload(&"€".repeat(43)).is_err());
    }

    #[test]
    fn test_validate_ttl() {
        assert!(validate_ttl(Duration::from_secs(60)).is_ok());
        assert!(validate_ttl(Duration::from_secs(86_400)).is_ok());
        assert!(validate_ttl(Duration::from_secs(59)).is_err());
        assert!(validate_ttl(Duration::from_secs(86_401)).is_err());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            validate_code("12").unwrap_err().to_string(),
            "code length must be between 4 and 8 characters, got 2"
        );
        assert_eq!(
            validate_code_length(2).unwrap_err().to_string(),
            "code_length must be between 4 and 8 characters, got 2"
        );
    }
}

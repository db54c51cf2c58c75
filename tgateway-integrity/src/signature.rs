//! Report signature generation and comparison

use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

type HmacSha256 = Hmac<Sha256>;

/// Build the string a report signature is computed over.
///
/// The timestamp is rendered in plain base 10, followed by a single newline
/// and the body text verbatim.
pub fn canonical_string(timestamp: i64, body: &str) -> String {
    format!("{}\n{}", timestamp, body)
}

/// Keyed signer for gateway reports.
///
/// The HMAC key is the SHA-256 digest of the access token. The token itself
/// is dropped as soon as the key is derived.
#[derive(Clone)]
pub struct ReportSignature {
    key: [u8; 32],
}

impl ReportSignature {
    /// Derive the signing key from an access token
    pub fn new(access_token: &str) -> Self {
        Self {
            key: Sha256::digest(access_token.as_bytes()).into(),
        }
    }

    /// Compute the lowercase hex signature for a report
    pub fn sign(&self, timestamp: i64, body: &str) -> String {
        hex::encode(self.compute_hmac_sha256(canonical_string(timestamp, body).as_bytes()))
    }

    /// Check a claimed signature against the raw report body.
    ///
    /// Returns `false` for a body that is not UTF-8 and for any signature
    /// that is not the exact lowercase hex rendering of the expected MAC.
    pub fn verify(&self, timestamp: i64, signature: &str, body: &[u8]) -> bool {
        let Ok(text) = std::str::from_utf8(body) else {
            return false;
        };

        let expected = self.sign(timestamp, text);
        constant_time_compare(signature, &expected)
    }

    /// Compute HMAC-SHA256 over `data`
    fn compute_hmac_sha256(&self, data: &[u8]) -> [u8; 32] {
        let mut mac = HmacSha256::new_from_slice(&self.key).expect("HMAC can take any size key");
        mac.update(data);
        mac.finalize().into_bytes().into()
    }
}

impl std::fmt::Debug for ReportSignature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReportSignature")
            .field("key", &"<redacted>")
            .finish()
    }
}

/// Constant-time string comparison.
///
/// Strings of different length are unequal without inspecting content.
fn constant_time_compare(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }

    a.as_bytes().ct_eq(b.as_bytes()).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    // Reference vector: key = sha256("mytoken"), msg = "1700000000\n{}"
    const MYTOKEN_EMPTY_OBJECT: &str =
        "1a08778fc43670d7c9a38df687780514ba99ac93c3780f52cff60e26f64eec52";

    #[test]
    fn test_canonical_string() {
        assert_eq!(canonical_string(1_700_000_000, "{}"), "1700000000\n{}");
        assert_eq!(canonical_string(0, ""), "0\n");
        assert_eq!(canonical_string(-5, "x"), "-5\nx");
        assert_eq!(canonical_string(7, " padded \n"), "7\n padded \n");
    }

    #[test]
    fn test_sign_matches_reference_vector() {
        let signer = ReportSignature::new("mytoken");
        assert_eq!(signer.sign(1_700_000_000, "{}"), MYTOKEN_EMPTY_OBJECT);
    }

    #[test]
    fn test_sign_is_deterministic() {
        let signer = ReportSignature::new("mytoken");
        let sig1 = signer.sign(1_700_000_000, "payload");
        let sig2 = ReportSignature::new("mytoken").sign(1_700_000_000, "payload");

        assert_eq!(sig1, sig2);
        assert_eq!(sig1.len(), 64);
        assert!(sig1.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }

    #[test]
    fn test_key_is_digest_not_raw_token() {
        let digest_keyed = ReportSignature::new("mytoken");
        let raw_keyed = ReportSignature {
            key: {
                let mut key = [0u8; 32];
                key[..7].copy_from_slice(b"mytoken");
                key
            },
        };

        assert_ne!(
            digest_keyed.sign(1_700_000_000, "{}"),
            raw_keyed.sign(1_700_000_000, "{}")
        );
    }

    #[test]
    fn test_verify() {
        let signer = ReportSignature::new("mytoken");
        assert!(signer.verify(1_700_000_000, MYTOKEN_EMPTY_OBJECT, b"{}"));
        assert!(!signer.verify(1_700_000_001, MYTOKEN_EMPTY_OBJECT, b"{}"));
        assert!(!signer.verify(1_700_000_000, MYTOKEN_EMPTY_OBJECT, b"{ }"));
    }

    #[test]
    fn test_verify_rejects_uppercase_hex() {
        let signer = ReportSignature::new("mytoken");
        let upper = MYTOKEN_EMPTY_OBJECT.to_uppercase();
        assert!(!signer.verify(1_700_000_000, &upper, b"{}"));
    }

    #[test]
    fn test_verify_rejects_non_utf8_body() {
        let signer = ReportSignature::new("mytoken");
        let body = [0xff, 0xfe, 0xfd];
        let signature = hex::encode(signer.compute_hmac_sha256(b"1700000000\n\xff\xfe\xfd"));

        assert!(!signer.verify(1_700_000_000, &signature, &body));
    }

    #[test]
    fn test_debug_redacts_key() {
        let signer = ReportSignature::new("mytoken");
        let debug = format!("{:?}", signer);
        assert!(debug.contains("<redacted>"));
        assert!(!debug.contains("mytoken"));
    }

    #[test]
    fn test_constant_time_compare() {
        assert!(constant_time_compare("abc", "abc"));
        assert!(!constant_time_compare("abc", "abd"));
        assert!(!constant_time_compare("abc", "ab"));
        assert!(!constant_time_compare("", "a"));
        assert!(constant_time_compare("", ""));
    }
}

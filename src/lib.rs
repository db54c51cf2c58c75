// tgateway - Telegram Gateway SDK for Rust
//
// Verifies the integrity of delivery reports pushed by the gateway, receives
// them over HTTP, and carries the configuration and error taxonomy shared by
// every gateway integration.

// Re-export core functionality
pub use tgateway_core::*;

// Report integrity is always available
pub use tgateway_integrity as integrity;
pub use tgateway_integrity::{
    IntegrityError, ReportIntegrityVerifier, ReportSignature, validate_report_integrity,
};

// Re-export optional crates
#[cfg(feature = "webhooks")]
pub use tgateway_webhooks as webhooks;

// Prelude for common imports
pub mod prelude {
    pub use crate::{
        ApiErrorCode, ConfigError, GatewayApiError, GatewayConfig, IntegrityError,
        ReportIntegrityVerifier, ReportSignature, validate_report_integrity,
    };

    pub use tgateway_integrity::{Clock, FixedClock, SystemClock};

    #[cfg(feature = "webhooks")]
    pub use tgateway_webhooks::{ReceiverConfig, ReportRejection, ReportReceiver};
}

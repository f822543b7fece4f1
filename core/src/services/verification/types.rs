//! Types for verification service results

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Result of issuing a verification code
///
/// Carries the telemetry identifier of the pending record, never the code
/// itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedCode {
    /// Identifier of the pending verification record
    pub code_id: Uuid,
    /// When the issued code stops being accepted
    pub expires_at: DateTime<Utc>,
}

//! Pending verification entity for e-mail based account verification.

use chrono::{DateTime, Duration, Utc};
use constant_time_eq::constant_time_eq;
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Maximum number of failed verification attempts before lockout
pub const MAX_ATTEMPTS: i32 = 5;

/// Length of the verification code
pub const CODE_LENGTH: usize = 6;

/// Default expiration time for verification codes (10 minutes)
pub const DEFAULT_EXPIRATION_MINUTES: i64 = 10;

/// Ephemeral record linking an e-mail address to its currently valid code
///
/// At most one live record exists per e-mail address; issuing a new code
/// replaces any prior record and invalidates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingVerification {
    /// Unique identifier of this issuance (telemetry key, never the code)
    pub id: Uuid,

    /// Normalized e-mail address this code was issued for
    pub email: String,

    /// The 6-digit verification code, zero-padded
    pub code: String,

    /// Number of failed verification attempts since issuance
    pub attempts: i32,

    /// Timestamp when the code was issued
    pub issued_at: DateTime<Utc>,

    /// Timestamp after which the code is no longer accepted
    pub expires_at: DateTime<Utc>,
}

impl PendingVerification {
    /// Creates a new pending verification with a fresh random 6-digit code
    /// and the default validity window
    pub fn new(email: String) -> Self {
        Self::new_with_expiration(email, DEFAULT_EXPIRATION_MINUTES)
    }

    /// Creates a new pending verification with a custom validity window
    pub fn new_with_expiration(email: String, expiration_minutes: i64) -> Self {
        let now = Utc::now();

        Self {
            id: Uuid::new_v4(),
            email,
            code: Self::generate_code(),
            attempts: 0,
            issued_at: now,
            expires_at: now + Duration::minutes(expiration_minutes),
        }
    }

    /// Generates a uniformly random 6-digit code in [000000, 999999]
    ///
    /// Leading zeros are preserved: a drawn value of 42 renders as "000042".
    fn generate_code() -> String {
        let mut rng = rand::thread_rng();
        let code: u32 = rng.gen_range(0..1_000_000);
        format!("{:06}", code)
    }

    /// Checks whether the validity window has passed
    ///
    /// A code presented at exactly `expires_at` is still accepted.
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }

    /// Compares a submitted code against the stored one
    ///
    /// Uses a constant-time comparison; equality is exact string equality.
    pub fn matches(&self, submitted: &str) -> bool {
        self.code.len() == submitted.len()
            && constant_time_eq(self.code.as_bytes(), submitted.as_bytes())
    }

    /// Whether the failed-attempt budget has been used up
    pub fn attempts_exhausted(&self) -> bool {
        self.attempts >= MAX_ATTEMPTS
    }

    /// Number of failed attempts still allowed (0 if exhausted)
    pub fn remaining_attempts(&self) -> i32 {
        (MAX_ATTEMPTS - self.attempts).max(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Duration as StdDuration;

    #[test]
    fn test_new_pending_verification() {
        let pending = PendingVerification::new("ayse@example.com".to_string());

        assert_eq!(pending.email, "ayse@example.com");
        assert_eq!(pending.code.len(), CODE_LENGTH);
        assert_eq!(pending.attempts, 0);
        assert!(!pending.is_expired());
        assert_eq!(
            pending.expires_at,
            pending.issued_at + Duration::minutes(DEFAULT_EXPIRATION_MINUTES)
        );
    }

    #[test]
    fn test_generate_code_format() {
        for _ in 0..100 {
            let code = PendingVerification::generate_code();
            assert_eq!(code.len(), CODE_LENGTH);
            assert!(code.chars().all(|c| c.is_ascii_digit()));

            // Render → parse round trip stays in range
            let num: u32 = code.parse().expect("generated code should be numeric");
            assert!(num < 1_000_000);
            assert_eq!(format!("{:06}", num), code);
        }
    }

    #[test]
    fn test_code_uniqueness() {
        let codes: Vec<String> = (0..100)
            .map(|_| PendingVerification::generate_code())
            .collect();

        let unique_count = codes.iter().collect::<std::collections::HashSet<_>>().len();
        assert!(unique_count > 1);
    }

    #[test]
    fn test_matches_exact_equality() {
        let pending = PendingVerification::new("ayse@example.com".to_string());
        let code = pending.code.clone();

        assert!(pending.matches(&code));
        assert!(!pending.matches("abcdef"));
        // A truncated prefix is not a match
        assert!(!pending.matches(&code[..5]));
    }

    #[test]
    fn test_custom_expiration() {
        let pending =
            PendingVerification::new_with_expiration("ayse@example.com".to_string(), 3);

        assert_eq!(pending.expires_at, pending.issued_at + Duration::minutes(3));
    }

    #[test]
    fn test_is_expired() {
        let pending =
            PendingVerification::new_with_expiration("ayse@example.com".to_string(), 0);

        thread::sleep(StdDuration::from_millis(10));
        assert!(pending.is_expired());
    }

    #[test]
    fn test_attempt_accounting() {
        let mut pending = PendingVerification::new("ayse@example.com".to_string());
        assert_eq!(pending.remaining_attempts(), MAX_ATTEMPTS);
        assert!(!pending.attempts_exhausted());

        pending.attempts = MAX_ATTEMPTS - 1;
        assert_eq!(pending.remaining_attempts(), 1);
        assert!(!pending.attempts_exhausted());

        pending.attempts = MAX_ATTEMPTS;
        assert_eq!(pending.remaining_attempts(), 0);
        assert!(pending.attempts_exhausted());
    }

    #[test]
    fn test_serialization() {
        let pending = PendingVerification::new("ayse@example.com".to_string());

        let json = serde_json::to_string(&pending).unwrap();
        let deserialized: PendingVerification = serde_json::from_str(&json).unwrap();

        assert_eq!(pending, deserialized);
    }
}

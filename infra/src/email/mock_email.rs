//! Mock E-mail Service Implementation
//!
//! A mock implementation of the e-mail service for development and testing.
//! This implementation logs messages to the console instead of sending them,
//! so the verification flow stays usable without a delivery provider.

use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use yv_core::services::registration::mask_email;
use yv_core::services::verification::EmailServiceTrait;

/// Mock e-mail service for development and testing
///
/// This implementation:
/// - Prints verification codes to the console
/// - Generates mock message IDs
/// - Tracks message count for testing
#[derive(Clone)]
pub struct MockEmailService {
    /// Counter for tracking number of messages sent
    message_count: Arc<AtomicU64>,
    /// Whether to simulate failures (for testing)
    simulate_failure: bool,
    /// Whether to print messages to console
    console_output: bool,
}

impl MockEmailService {
    /// Create a new mock e-mail service
    pub fn new() -> Self {
        Self {
            message_count: Arc::new(AtomicU64::new(0)),
            simulate_failure: false,
            console_output: true,
        }
    }

    /// Create a mock service with configurable options
    pub fn with_options(console_output: bool, simulate_failure: bool) -> Self {
        Self {
            message_count: Arc::new(AtomicU64::new(0)),
            simulate_failure,
            console_output,
        }
    }

    /// Get the total number of messages sent
    pub fn get_message_count(&self) -> u64 {
        self.message_count.load(Ordering::SeqCst)
    }

    /// Reset the message counter
    pub fn reset_counter(&self) {
        self.message_count.store(0, Ordering::SeqCst);
    }
}

impl Default for MockEmailService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EmailServiceTrait for MockEmailService {
    async fn send_verification_code(
        &self,
        email: &str,
        recipient_name: &str,
        code: &str,
    ) -> Result<String, String> {
        if self.simulate_failure {
            return Err("Simulated e-mail delivery failure".to_string());
        }

        let message_id = format!("mock_{}", Uuid::new_v4());
        let count = self.message_count.fetch_add(1, Ordering::SeqCst) + 1;
        let masked = mask_email(email);

        if self.console_output {
            // Console output for development - show the code in full
            println!("\n{}", "=".repeat(60));
            println!("MOCK EMAIL SERVICE - MESSAGE #{}", count);
            println!("{}", "=".repeat(60));
            println!("To: {} ({})", email, recipient_name);
            println!("Message ID: {}", message_id);
            println!("Verification code: {}", code);
            println!("{}\n", "=".repeat(60));
        }

        // Structured logging for production
        info!(
            target: "email_service",
            provider = "mock",
            email = %masked,
            message_id = %message_id,
            "Verification e-mail sent (mock)"
        );

        Ok(message_id)
    }
}

//! Business services containing domain logic and use cases.

pub mod registration;
pub mod verification;

// Re-export commonly used types
pub use registration::{
    mask_email, validate_email, validate_registration, RegistrationInput, RegistrationService,
};
pub use verification::{
    EmailServiceTrait, IssuedCode, VerificationService, VerificationServiceConfig,
};

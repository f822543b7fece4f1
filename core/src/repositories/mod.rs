pub mod account;
pub mod verification;

pub use account::{AccountRepository, MockAccountRepository};
pub use verification::{MockVerificationCodeRepository, VerificationCodeRepository};

pub mod auth;

pub use auth::{
    AccountDto, RegisterData, RegisterRequest, ResendCodeData, ResendCodeRequest,
    VerifyEmailData, VerifyEmailRequest,
};

//! Domain error to HTTP response mapping
//!
//! Every domain error carries a stable kind identifier and a bilingual
//! message; this module picks the status code and the message side for the
//! caller's language. Store and internal details are logged, never returned.

use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse};

use yv_core::errors::{
    extract_english_message, extract_turkish_message, DomainError, VerificationError,
};
use yv_shared::types::response::ErrorResponse;

/// Response language, negotiated from the Accept-Language header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    English,
    Turkish,
}

impl Language {
    /// Detect the preferred language from request headers
    ///
    /// The first tag of Accept-Language wins; anything that is not Turkish
    /// falls back to English.
    pub fn from_request(req: &HttpRequest) -> Self {
        let preferred = req
            .headers()
            .get("Accept-Language")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(',').next())
            .map(|tag| tag.trim().split(['-', ';']).next().unwrap_or("").to_ascii_lowercase());

        match preferred.as_deref() {
            Some("tr") => Language::Turkish,
            _ => Language::English,
        }
    }
}

/// Map a domain error to its HTTP status code
fn status_for(error: &DomainError) -> StatusCode {
    match error {
        DomainError::Validation(_) => StatusCode::BAD_REQUEST,
        DomainError::Verification(verification) => match verification {
            VerificationError::EmailAlreadyRegistered => StatusCode::CONFLICT,
            VerificationError::AccountNotFound => StatusCode::NOT_FOUND,
            VerificationError::TooManyAttempts => StatusCode::TOO_MANY_REQUESTS,
            VerificationError::NoPendingVerification
            | VerificationError::CodeExpired
            | VerificationError::CodeMismatch { .. } => StatusCode::BAD_REQUEST,
        },
        DomainError::Store { .. } | DomainError::Internal { .. } => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

/// Convert a domain error into the caller-facing HTTP response
pub fn handle_domain_error(error: DomainError, lang: Language) -> HttpResponse {
    let status = status_for(&error);

    let message = match &error {
        DomainError::Store { message } | DomainError::Internal { message } => {
            // Never leak store or internal identifiers to the caller
            log::error!("Server-side failure: {}", message);
            match lang {
                Language::English => "Server error".to_string(),
                Language::Turkish => "Sunucu hatası".to_string(),
            }
        }
        other => {
            let bilingual = other.to_string();
            match lang {
                Language::English => extract_english_message(&bilingual).to_string(),
                Language::Turkish => extract_turkish_message(&bilingual).to_string(),
            }
        }
    };

    HttpResponse::build(status).json(ErrorResponse::new(error.kind(), message))
}

/// Build the response for a request that failed DTO validation
pub fn validation_failure(lang: Language, errors: validator::ValidationErrors) -> HttpResponse {
    let message = match lang {
        Language::English => "Invalid request data",
        Language::Turkish => "Geçersiz istek verisi",
    };

    let mut details = std::collections::HashMap::new();
    details.insert(
        "validation_errors".to_string(),
        serde_json::json!(errors),
    );

    HttpResponse::BadRequest()
        .json(ErrorResponse::new("VALIDATION_ERROR", message).with_details(details))
}

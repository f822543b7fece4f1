use actix_web::{web, HttpRequest, HttpResponse};
use validator::Validate;

use crate::dto::auth::{VerifyEmailData, VerifyEmailRequest};
use crate::handlers::error::{handle_domain_error, validation_failure, Language};

use yv_core::repositories::{AccountRepository, VerificationCodeRepository};
use yv_core::services::registration::mask_email;
use yv_core::services::verification::EmailServiceTrait;
use yv_shared::types::response::ApiResponse;

use super::AppState;

/// Handler for POST /api/v1/auth/verify-email
///
/// Checks a submitted code against the pending verification for the e-mail
/// address and performs the unverified → verified transition on success.
///
/// # Request Body
///
/// ```json
/// {
///     "email": "ayse@example.com",
///     "code": "042137"
/// }
/// ```
///
/// # Responses
/// - 200 OK: e-mail verified
/// - 400 Bad Request: malformed code, no pending verification, expired or
///   mismatched code
/// - 429 Too Many Requests: attempt budget exhausted, a resend is required
/// - 500 Internal Server Error: store failure
pub async fn verify_email<A, V, E>(
    req: HttpRequest,
    state: web::Data<AppState<A, V, E>>,
    request: web::Json<VerifyEmailRequest>,
) -> HttpResponse
where
    A: AccountRepository + 'static,
    V: VerificationCodeRepository + 'static,
    E: EmailServiceTrait + 'static,
{
    let lang = Language::from_request(&req);

    if let Err(errors) = request.validate() {
        return validation_failure(lang, errors);
    }

    match state
        .registration_service
        .verify_email(&request.email, &request.code)
        .await
    {
        Ok(outcome) => {
            log::info!("Verified e-mail address {}", mask_email(&request.email));

            let message = match lang {
                Language::English => "E-mail address verified successfully.",
                Language::Turkish => "E-posta başarıyla doğrulandı.",
            };

            HttpResponse::Ok().json(ApiResponse::success(VerifyEmailData {
                message: message.to_string(),
                verified: outcome.verified,
            }))
        }
        Err(error) => {
            log::warn!(
                "Verification failed for email {}: {}",
                mask_email(&request.email),
                error.kind()
            );
            handle_domain_error(error, lang)
        }
    }
}

use actix_web::{web, HttpRequest, HttpResponse};
use validator::Validate;

use crate::dto::auth::{ResendCodeData, ResendCodeRequest};
use crate::handlers::error::{handle_domain_error, validation_failure, Language};

use yv_core::repositories::{AccountRepository, VerificationCodeRepository};
use yv_core::services::registration::mask_email;
use yv_core::services::verification::EmailServiceTrait;
use yv_shared::types::response::ApiResponse;

use super::AppState;

/// Handler for POST /api/v1/auth/resend-verification
///
/// Issues a fresh verification code for an existing account, superseding any
/// prior pending code for the address.
///
/// # Request Body
///
/// ```json
/// {
///     "email": "ayse@example.com"
/// }
/// ```
///
/// # Responses
/// - 200 OK: new code issued
/// - 400 Bad Request: missing or malformed e-mail address
/// - 404 Not Found: no account registered with the e-mail address
/// - 500 Internal Server Error: store failure
pub async fn resend_verification<A, V, E>(
    req: HttpRequest,
    state: web::Data<AppState<A, V, E>>,
    request: web::Json<ResendCodeRequest>,
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

    log::info!(
        "Processing resend request for email: {}",
        mask_email(&request.email)
    );

    match state.registration_service.resend_code(&request.email).await {
        Ok(issued) => {
            log::info!(
                "Issued replacement code {} for email {}",
                issued.code_id,
                mask_email(&request.email)
            );

            let message = match lang {
                Language::English => "A new verification code has been sent to your e-mail address.",
                Language::Turkish => "Yeni doğrulama kodu e-posta adresinize gönderildi.",
            };

            HttpResponse::Ok().json(ApiResponse::success(ResendCodeData {
                message: message.to_string(),
                issued: true,
            }))
        }
        Err(error) => handle_domain_error(error, lang),
    }
}

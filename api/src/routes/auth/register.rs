use actix_web::{web, HttpRequest, HttpResponse};
use std::sync::Arc;
use validator::Validate;

use crate::dto::auth::{AccountDto, RegisterData, RegisterRequest};
use crate::handlers::error::{handle_domain_error, validation_failure, Language};

use yv_core::repositories::{AccountRepository, VerificationCodeRepository};
use yv_core::services::registration::{mask_email, RegistrationInput, RegistrationService};
use yv_core::services::verification::EmailServiceTrait;
use yv_shared::types::response::ApiResponse;

/// Application state that holds shared services
pub struct AppState<A, V, E>
where
    A: AccountRepository,
    V: VerificationCodeRepository,
    E: EmailServiceTrait,
{
    pub registration_service: Arc<RegistrationService<A, V, E>>,
}

/// Handler for POST /api/v1/auth/register
///
/// Creates a new unverified account and sends a 6-digit verification code to
/// the given e-mail address.
///
/// # Request Body
///
/// ```json
/// {
///     "first_name": "Ayşe",
///     "last_name": "Yıldız",
///     "email": "ayse@example.com",
///     "phone": "5551234567",
///     "password": "password1",
///     "account_type": "buyer"
/// }
/// ```
///
/// # Responses
/// - 200 OK: account created, verification code issued
/// - 400 Bad Request: missing field, invalid e-mail, weak password,
///   unknown account type
/// - 409 Conflict: e-mail already registered
/// - 500 Internal Server Error: store failure
pub async fn register<A, V, E>(
    req: HttpRequest,
    state: web::Data<AppState<A, V, E>>,
    request: web::Json<RegisterRequest>,
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
        "Processing registration for email: {}",
        mask_email(&request.email)
    );

    let input = RegistrationInput {
        first_name: request.first_name.clone(),
        last_name: request.last_name.clone(),
        email: request.email.clone(),
        phone: request.phone.clone(),
        password: request.password.clone(),
        account_type: request.account_type.clone(),
    };

    match state.registration_service.register(input).await {
        Ok(outcome) => {
            log::info!(
                "Registered account {} with pending code {}",
                outcome.account.id,
                outcome.code.code_id
            );

            let message = match lang {
                Language::English => {
                    "Registration successful. Enter the verification code sent to your e-mail address."
                }
                Language::Turkish => {
                    "Kayıt başarılı. E-posta adresinize gönderilen doğrulama kodunu girin."
                }
            };

            HttpResponse::Ok().json(ApiResponse::success(RegisterData {
                message: message.to_string(),
                account: AccountDto::from(outcome.account),
            }))
        }
        Err(error) => {
            log::warn!(
                "Registration failed for email {}: {}",
                mask_email(&request.email),
                error.kind()
            );
            handle_domain_error(error, lang)
        }
    }
}

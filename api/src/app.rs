//! Application factory
//!
//! This module provides the factory for creating the Actix-web application
//! with all routes and middleware wired up.

use actix_web::{middleware::Logger, web, App, HttpResponse};

use crate::middleware::cors::create_cors;
use crate::routes::auth::{
    register::register, resend_verification::resend_verification, verify_email::verify_email,
    AppState,
};

use yv_core::repositories::{AccountRepository, VerificationCodeRepository};
use yv_core::services::verification::EmailServiceTrait;
use yv_shared::types::response::ErrorResponse;

/// Create and configure the application with all dependencies
pub fn create_app<A, V, E>(
    app_state: web::Data<AppState<A, V, E>>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    A: AccountRepository + 'static,
    V: VerificationCodeRepository + 'static,
    E: EmailServiceTrait + 'static,
{
    let cors = create_cors();

    App::new()
        // Add application state
        .app_data(app_state)
        // Add middleware
        .wrap(Logger::default())
        .wrap(cors)
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        // API v1 routes
        .service(
            web::scope("/api/v1").service(
                web::scope("/auth")
                    .route("/register", web::post().to(register::<A, V, E>))
                    .route(
                        "/resend-verification",
                        web::post().to(resend_verification::<A, V, E>),
                    )
                    .route("/verify-email", web::post().to(verify_email::<A, V, E>)),
            ),
        )
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "yuva-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        "NOT_FOUND",
        "The requested resource was not found",
    ))
}

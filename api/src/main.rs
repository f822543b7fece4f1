use actix_web::{web, HttpServer};
use dotenv::dotenv;
use log::info;
use std::sync::Arc;

use yv_api::app::create_app;
use yv_api::routes::auth::AppState;

use yv_core::repositories::{AccountRepository, VerificationCodeRepository};
use yv_core::services::registration::RegistrationService;
use yv_core::services::verification::{
    EmailServiceTrait, VerificationService, VerificationServiceConfig,
};
use yv_infra::email::{MockEmailService, ResendConfig, ResendEmailService};
use yv_infra::store::{connect, MemoryStore, MySqlAccountRepository, MySqlVerificationCodeRepository};
use yv_infra::InfrastructureError;
use yv_shared::config::{MailConfig, ServerConfig, StoreConfig};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting Yuva API server");

    let server_config = ServerConfig::from_env();
    let store_config = StoreConfig::from_env();
    let mail_config = MailConfig::from_env();

    info!("Server will bind to: {}", server_config.bind_address());
    info!(
        "Store driver: {}, mail provider: {}",
        store_config.driver, mail_config.provider
    );

    match store_config.driver.as_str() {
        "mysql" => {
            let database_url = store_config.database_url.clone().ok_or_else(|| {
                config_error("DATABASE_URL must be set when STORE_DRIVER=mysql")
            })?;
            let pool = connect(&database_url, store_config.max_connections)
                .await
                .map_err(infra_error)?;

            let accounts = Arc::new(MySqlAccountRepository::new(pool.clone()));
            let codes = Arc::new(MySqlVerificationCodeRepository::new(pool));
            run_with_mailer(accounts, codes, &mail_config, server_config).await
        }
        _ => {
            // The in-memory store backs both repository interfaces
            let store = Arc::new(MemoryStore::new());
            run_with_mailer(store.clone(), store, &mail_config, server_config).await
        }
    }
}

/// Pick the delivery provider and start serving
async fn run_with_mailer<A, V>(
    accounts: Arc<A>,
    codes: Arc<V>,
    mail_config: &MailConfig,
    server_config: ServerConfig,
) -> std::io::Result<()>
where
    A: AccountRepository + 'static,
    V: VerificationCodeRepository + 'static,
{
    match mail_config.provider.as_str() {
        "resend" => {
            let config = ResendConfig::from_mail_config(mail_config).map_err(infra_error)?;
            let mailer = Arc::new(ResendEmailService::new(config).map_err(infra_error)?);
            serve(accounts, codes, mailer, server_config).await
        }
        _ => {
            let mailer = Arc::new(MockEmailService::new());
            serve(accounts, codes, mailer, server_config).await
        }
    }
}

/// Wire the services together and run the HTTP server
async fn serve<A, V, E>(
    accounts: Arc<A>,
    codes: Arc<V>,
    mailer: Arc<E>,
    server_config: ServerConfig,
) -> std::io::Result<()>
where
    A: AccountRepository + 'static,
    V: VerificationCodeRepository + 'static,
    E: EmailServiceTrait + 'static,
{
    let verification_service = Arc::new(VerificationService::new(
        codes,
        mailer,
        VerificationServiceConfig::default(),
    ));
    let registration_service = Arc::new(RegistrationService::new(accounts, verification_service));
    let app_state = web::Data::new(AppState {
        registration_service,
    });

    let bind_address = server_config.bind_address();
    let mut server = HttpServer::new(move || create_app(app_state.clone()));
    if server_config.workers > 0 {
        server = server.workers(server_config.workers);
    }

    server.bind(&bind_address)?.run().await
}

fn config_error(message: &str) -> std::io::Error {
    std::io::Error::new(std::io::ErrorKind::InvalidInput, message)
}

fn infra_error(error: InfrastructureError) -> std::io::Error {
    std::io::Error::new(std::io::ErrorKind::Other, error.to_string())
}

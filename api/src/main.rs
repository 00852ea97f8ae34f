use std::sync::Arc;

use actix_web::{web, HttpServer};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use gate_api::app::create_app;
use gate_api::routes::auth::AppState;
use gate_core::services::auth::AuthService;
use gate_core::services::lockout::SuspiciousActivityDetector;
use gate_core::services::password::BcryptPasswordHasher;
use gate_core::services::provisioning::ProvisioningService;
use gate_core::services::token::{TokenService, TokenServiceConfig};
use gate_infra::database::connection::DatabasePool;
use gate_infra::database::mysql::{MySqlAccountRepository, MySqlAuthEventRepository};
use gate_shared::AppConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Starting Gatehouse API server");

    let config = AppConfig::from_env();

    // A weak signing secret must never make it past startup.
    if let Err(e) = config.auth.validate() {
        error!(error = %e, "JWT configuration rejected");
        std::process::exit(1);
    }
    if config.auth.is_using_default_secret() {
        warn!("AUTH_JWT_SECRET is not set; using the development default secret");
    }

    let pool = match DatabasePool::new(config.database.clone()).await {
        Ok(pool) => pool,
        Err(e) => {
            error!(error = %e, "Failed to connect to the database");
            std::process::exit(1);
        }
    };

    let accounts = Arc::new(MySqlAccountRepository::new(pool.get_pool().clone()));
    let events = Arc::new(MySqlAuthEventRepository::new(pool.get_pool().clone()));
    let hasher = Arc::new(BcryptPasswordHasher::new());

    let detector = SuspiciousActivityDetector::with_defaults(Arc::clone(&events));
    let auth_service = Arc::new(AuthService::new(
        Arc::clone(&accounts),
        Arc::clone(&events),
        detector,
        Arc::clone(&hasher),
    ));
    let provisioning_service = Arc::new(ProvisioningService::new(
        Arc::clone(&accounts),
        Arc::clone(&events),
        Arc::clone(&hasher),
    ));
    let token_service = Arc::new(TokenService::new(TokenServiceConfig::from(&config.auth)));

    let state = web::Data::new(AppState {
        auth_service,
        provisioning_service,
        token_service,
        jwt: config.auth.clone(),
    });

    let bind_address = config.server.bind_address();
    info!(address = %bind_address, "Server binding");

    HttpServer::new(move || create_app(state.clone()))
        .bind(&bind_address)?
        .run()
        .await
}

use std::sync::Arc;

use color_eyre::eyre::Result;
use dotenv::dotenv;
use medconsult_api::{config::ApiConfig, middleware::auth::JwtIdentityProvider, ApiState};
use medconsult_core::BookingService;
use medconsult_db::{create_pool, schema::initialize_database, PgStore};
use mockable::DefaultClock;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    // Load configuration
    let config = ApiConfig::from_env()?;

    // Create database connection pool
    let db_pool = create_pool(&config.database_url, config.database_max_connections).await?;

    // Initialize database schema
    initialize_database(&db_pool).await?;

    // Wire the booking service to PostgreSQL and the system clock
    let store = Arc::new(PgStore::new(db_pool));
    let state = ApiState {
        booking: BookingService::new(store.clone(), store, Arc::new(DefaultClock)),
        identity: Arc::new(JwtIdentityProvider::new(&config.jwt_secret)),
    };

    // Start API server
    medconsult_api::start_server(config, state).await?;

    Ok(())
}

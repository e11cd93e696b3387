//! Creates the `doctors` and `consultations` tables, indexes and the slot
//! uniqueness constraint. Safe to run repeatedly.

use color_eyre::eyre::{Result, WrapErr};
use dotenv::dotenv;
use medconsult_db::{create_pool, schema::initialize_database};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let database_url =
        std::env::var("DATABASE_URL").wrap_err("DATABASE_URL environment variable must be set")?;

    // Schema setup runs sequential statements, one connection is enough
    let db_pool = create_pool(&database_url, 1)
        .await
        .wrap_err("Failed to connect to the consultation database")?;

    initialize_database(&db_pool).await?;

    let consultations =
        medconsult_db::repositories::consultation::count_consultations(&db_pool).await?;
    info!(consultations, "Consultation schema ready");

    Ok(())
}


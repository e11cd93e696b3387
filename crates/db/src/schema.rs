use eyre::Result;
use sqlx::{Pool, Postgres};
use tracing::info;

pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    // Doctors are managed elsewhere; the table exists so bookings can reference it
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS doctors (
            id BIGSERIAL PRIMARY KEY,
            name VARCHAR(255) NOT NULL,
            crm VARCHAR(32) NOT NULL UNIQUE,
            specialty VARCHAR(255) NOT NULL,
            email VARCHAR(255) NULL,
            phone VARCHAR(32) NULL
        );
        "#,
    )
    .execute(pool)
    .await?;

    // One booking per (day, time) across all doctors
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS consultations (
            id BIGSERIAL PRIMARY KEY,
            day DATE NOT NULL,
            "time" TIME NOT NULL,
            doctor_id BIGINT NOT NULL REFERENCES doctors(id),
            user_id BIGINT NOT NULL,
            scheduling_date TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT consultations_day_time_key UNIQUE (day, "time")
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create indexes
    for statement in [
        "CREATE INDEX IF NOT EXISTS idx_consultations_user_id ON consultations(user_id)",
        "CREATE INDEX IF NOT EXISTS idx_consultations_doctor_id ON consultations(doctor_id)",
    ] {
        sqlx::query(statement).execute(pool).await?;
    }

    info!("Database schema initialized successfully.");
    Ok(())
}

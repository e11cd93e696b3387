use crate::models::DbDoctor;
use eyre::Result;
use sqlx::{Pool, Postgres};

pub async fn get_doctor_by_id(pool: &Pool<Postgres>, id: i64) -> Result<Option<DbDoctor>> {
    tracing::debug!("Getting doctor by id: {}", id);

    let doctor = sqlx::query_as::<_, DbDoctor>(
        r#"
        SELECT id, name, crm, specialty, email, phone
        FROM doctors
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(doctor)
}

use crate::models::DbConsultation;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use eyre::Result;
use sqlx::{Pool, Postgres};

pub async fn create_consultation(
    pool: &Pool<Postgres>,
    day: NaiveDate,
    time: NaiveTime,
    doctor_id: i64,
    user_id: i64,
    scheduling_date: DateTime<Utc>,
) -> Result<DbConsultation> {
    tracing::debug!(
        "Creating consultation: day={}, time={}, doctor_id={}, user_id={}",
        day, time, doctor_id, user_id
    );

    let consultation = sqlx::query_as::<_, DbConsultation>(
        r#"
        INSERT INTO consultations (day, "time", doctor_id, user_id, scheduling_date)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, day, "time", doctor_id, user_id, scheduling_date
        "#,
    )
    .bind(day)
    .bind(time)
    .bind(doctor_id)
    .bind(user_id)
    .bind(scheduling_date)
    .fetch_one(pool)
    .await?;

    tracing::debug!("Consultation created successfully: id={}", consultation.id);
    Ok(consultation)
}

pub async fn consultation_exists_at(
    pool: &Pool<Postgres>,
    day: NaiveDate,
    time: NaiveTime,
) -> Result<bool> {
    let exists = sqlx::query_scalar::<_, bool>(
        r#"
        SELECT EXISTS (
            SELECT 1
            FROM consultations
            WHERE day = $1 AND "time" = $2
        )
        "#,
    )
    .bind(day)
    .bind(time)
    .fetch_one(pool)
    .await?;

    Ok(exists)
}

pub async fn get_consultation_by_id(
    pool: &Pool<Postgres>,
    id: i64,
) -> Result<Option<DbConsultation>> {
    tracing::debug!("Getting consultation by id: {}", id);

    let consultation = sqlx::query_as::<_, DbConsultation>(
        r#"
        SELECT id, day, "time", doctor_id, user_id, scheduling_date
        FROM consultations
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(consultation)
}

pub async fn get_consultations_by_user_id(
    pool: &Pool<Postgres>,
    user_id: i64,
) -> Result<Vec<DbConsultation>> {
    let consultations = sqlx::query_as::<_, DbConsultation>(
        r#"
        SELECT id, day, "time", doctor_id, user_id, scheduling_date
        FROM consultations
        WHERE user_id = $1
        ORDER BY day ASC, "time" ASC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(consultations)
}

pub async fn delete_consultation(pool: &Pool<Postgres>, id: i64) -> Result<bool> {
    let result = sqlx::query(
        r#"
        DELETE FROM consultations
        WHERE id = $1
        "#,
    )
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

pub async fn ping(pool: &Pool<Postgres>) -> Result<()> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

pub async fn count_consultations(pool: &Pool<Postgres>) -> Result<i64> {
    let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM consultations")
        .fetch_one(pool)
        .await?;

    Ok(count)
}

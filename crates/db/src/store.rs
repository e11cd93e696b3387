//! PostgreSQL implementation of the booking ports.

use async_trait::async_trait;
use medconsult_core::models::consultation::{
    Consultation, ConsultationId, NewConsultation, UserId,
};
use medconsult_core::models::doctor::{Doctor, DoctorId};
use medconsult_core::repository::{
    ConsultationRepository, DoctorDirectory, RepositoryError, RepositoryResult,
};
use medconsult_core::slot::Slot;

use crate::repositories::{consultation, doctor};
use crate::DbPool;

#[derive(Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

/// Separates a `(day, time)` uniqueness violation from every other failure.
fn map_insert_error(report: eyre::Report) -> RepositoryError {
    if let Some(sqlx::Error::Database(db_err)) = report.downcast_ref::<sqlx::Error>() {
        if db_err.is_unique_violation() {
            return RepositoryError::DuplicateSlot;
        }
    }
    RepositoryError::Backend(report)
}

#[async_trait]
impl DoctorDirectory for PgStore {
    async fn find_doctor(&self, id: DoctorId) -> RepositoryResult<Option<Doctor>> {
        let doctor = doctor::get_doctor_by_id(&self.pool, id).await?;
        Ok(doctor.map(Doctor::from))
    }
}

#[async_trait]
impl ConsultationRepository for PgStore {
    async fn slot_taken(&self, slot: Slot) -> RepositoryResult<bool> {
        Ok(consultation::consultation_exists_at(&self.pool, slot.day, slot.time).await?)
    }

    async fn insert(&self, new: NewConsultation) -> RepositoryResult<Consultation> {
        let row = consultation::create_consultation(
            &self.pool,
            new.slot.day,
            new.slot.time,
            new.doctor_id,
            new.user_id,
            new.scheduling_date,
        )
        .await
        .map_err(map_insert_error)?;

        Ok(row.into())
    }

    async fn list_for_user(&self, user_id: UserId) -> RepositoryResult<Vec<Consultation>> {
        let rows = consultation::get_consultations_by_user_id(&self.pool, user_id).await?;
        Ok(rows.into_iter().map(Consultation::from).collect())
    }

    async fn find(&self, id: ConsultationId) -> RepositoryResult<Option<Consultation>> {
        let row = consultation::get_consultation_by_id(&self.pool, id).await?;
        Ok(row.map(Consultation::from))
    }

    async fn delete(&self, id: ConsultationId) -> RepositoryResult<bool> {
        Ok(consultation::delete_consultation(&self.pool, id).await?)
    }

    async fn ping(&self) -> RepositoryResult<()> {
        Ok(consultation::ping(&self.pool).await?)
    }
}

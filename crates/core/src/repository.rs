//! Ports to the Persistence Store.
//!
//! The booking rules only see these traits. The PostgreSQL adapter and the
//! in-memory store live in `medconsult-db`.

use async_trait::async_trait;
use mockall::automock;
use thiserror::Error;

use crate::errors::ConsultError;
use crate::models::consultation::{Consultation, ConsultationId, NewConsultation, UserId};
use crate::models::doctor::{Doctor, DoctorId};
use crate::slot::Slot;

#[derive(Error, Debug)]
pub enum RepositoryError {
    /// The store's `(day, time)` uniqueness constraint rejected a write.
    #[error("a consultation already occupies that slot")]
    DuplicateSlot,

    #[error("persistence store failure: {0}")]
    Backend(#[from] eyre::Report),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

impl From<RepositoryError> for ConsultError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::DuplicateSlot => ConsultError::DuplicateBooking,
            RepositoryError::Backend(report) => ConsultError::Unexpected(report),
        }
    }
}

/// Read access to doctors, which are owned by another domain.
#[automock]
#[async_trait]
pub trait DoctorDirectory: Send + Sync {
    async fn find_doctor(&self, id: DoctorId) -> RepositoryResult<Option<Doctor>>;
}

#[automock]
#[async_trait]
pub trait ConsultationRepository: Send + Sync {
    /// Whether any consultation, for any doctor, already occupies `slot`.
    async fn slot_taken(&self, slot: Slot) -> RepositoryResult<bool>;

    /// Persists a booking. Must fail with [`RepositoryError::DuplicateSlot`]
    /// when the slot is taken, even if [`Self::slot_taken`] said otherwise.
    async fn insert(&self, consultation: NewConsultation) -> RepositoryResult<Consultation>;

    /// Bookings owned by `user_id`, ordered by slot.
    async fn list_for_user(&self, user_id: UserId) -> RepositoryResult<Vec<Consultation>>;

    async fn find(&self, id: ConsultationId) -> RepositoryResult<Option<Consultation>>;

    /// Returns `false` when there was nothing to delete.
    async fn delete(&self, id: ConsultationId) -> RepositoryResult<bool>;

    /// Round-trips to the store without touching any booking.
    async fn ping(&self) -> RepositoryResult<()>;
}

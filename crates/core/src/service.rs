//! # Booking Service
//!
//! Create, list and delete consultations on behalf of an authenticated user.
//!
//! Create runs its checks in this order:
//!
//! 1. `day` and `time` parse as `YYYY-MM-DD` and `HH:MM`
//! 2. the slot is not in the past (judged against the injected clock's local time)
//! 3. the doctor exists
//! 4. no consultation occupies the slot yet
//!
//! Step 4 is read-then-write. Concurrent creators can both pass it; the store's
//! uniqueness constraint decides, and its rejection surfaces as
//! [`ConsultError::DuplicateBooking`].

use std::sync::Arc;

use mockable::Clock;
use tracing::{info, warn};

use crate::errors::{ConsultError, ConsultResult};
use crate::models::consultation::{
    ConsultationId, ConsultationSummary, CreateConsultationRequest, CreateConsultationResponse,
    ListConsultationsResponse, NewConsultation, UserId,
};
use crate::repository::{ConsultationRepository, DoctorDirectory};
use crate::slot::Slot;

#[derive(Clone)]
pub struct BookingService {
    consultations: Arc<dyn ConsultationRepository>,
    doctors: Arc<dyn DoctorDirectory>,
    clock: Arc<dyn Clock>,
}

impl BookingService {
    pub fn new(
        consultations: Arc<dyn ConsultationRepository>,
        doctors: Arc<dyn DoctorDirectory>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            consultations,
            doctors,
            clock,
        }
    }

    pub async fn create(
        &self,
        user_id: UserId,
        request: &CreateConsultationRequest,
    ) -> ConsultResult<CreateConsultationResponse> {
        let slot = Slot::parse(&request.day, &request.time)?;

        let now = self.clock.local().naive_local();
        if !slot.is_bookable_at(now) {
            warn!(user_id, day = %slot.day, time = %slot.time, "Rejected booking in the past");
            return Err(ConsultError::PastDate);
        }

        let doctor = self
            .doctors
            .find_doctor(request.doctor)
            .await?
            .ok_or_else(ConsultError::doctor_not_found)?;

        if self.consultations.slot_taken(slot).await? {
            warn!(user_id, day = %slot.day, time = %slot.time, "Rejected booking for a taken slot");
            return Err(ConsultError::SlotConflict);
        }

        let consultation = self
            .consultations
            .insert(NewConsultation {
                slot,
                doctor_id: doctor.id,
                user_id,
                scheduling_date: self.clock.utc(),
            })
            .await?;

        info!(
            id = consultation.id,
            user_id,
            doctor_id = doctor.id,
            "Consultation booked"
        );

        Ok(CreateConsultationResponse {
            id: consultation.id,
            day: consultation.day,
            time: consultation.time,
            scheduling_date: consultation.scheduling_date,
            doctor,
        })
    }

    pub async fn list(&self, user_id: UserId) -> ConsultResult<ListConsultationsResponse> {
        let summaries = self
            .consultations
            .list_for_user(user_id)
            .await?
            .into_iter()
            .filter(|consultation| consultation.user_id == user_id)
            .map(ConsultationSummary::from)
            .collect();

        Ok(ListConsultationsResponse::from_summaries(summaries))
    }

    /// Deletes a consultation owned by `user_id`.
    pub async fn delete(&self, user_id: UserId, id: ConsultationId) -> ConsultResult<()> {
        let consultation = self
            .consultations
            .find(id)
            .await?
            .ok_or_else(ConsultError::consultation_not_found)?;

        if consultation.user_id != user_id {
            warn!(id, user_id, owner = consultation.user_id, "Rejected delete by non-owner");
            return Err(ConsultError::Forbidden);
        }

        // Someone else may have removed it between the lookup and here.
        if !self.consultations.delete(id).await? {
            return Err(ConsultError::consultation_not_found());
        }

        info!(id, user_id, "Consultation deleted");
        Ok(())
    }

    /// Whether the Persistence Store answers at all.
    pub async fn store_available(&self) -> bool {
        match self.consultations.ping().await {
            Ok(()) => true,
            Err(err) => {
                warn!("Persistence store unreachable: {}", err);
                false
            }
        }
    }
}

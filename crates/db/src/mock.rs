//! In-memory Persistence Store.
//!
//! Mirrors the PostgreSQL adapter closely enough for handler tests and local
//! runs: ids are assigned sequentially and a second booking of the same
//! `(day, time)` is rejected with [`RepositoryError::DuplicateSlot`].

use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use medconsult_core::models::consultation::{
    Consultation, ConsultationId, NewConsultation, UserId,
};
use medconsult_core::models::doctor::{Doctor, DoctorId};
use medconsult_core::repository::{
    ConsultationRepository, DoctorDirectory, RepositoryError, RepositoryResult,
};
use medconsult_core::slot::Slot;
use tokio::sync::Mutex;

#[derive(Default)]
struct State {
    last_id: ConsultationId,
    consultations: BTreeMap<ConsultationId, Consultation>,
    doctors: HashMap<DoctorId, Doctor>,
}

#[derive(Default)]
pub struct InMemoryStore {
    state: Mutex<State>,
}

impl InMemoryStore {
    pub fn with_doctors(doctors: impl IntoIterator<Item = Doctor>) -> Self {
        let state = State {
            doctors: doctors.into_iter().map(|d| (d.id, d)).collect(),
            ..State::default()
        };
        Self {
            state: Mutex::new(state),
        }
    }

    pub async fn add_doctor(&self, doctor: Doctor) {
        self.state.lock().await.doctors.insert(doctor.id, doctor);
    }

    /// Every stored consultation, regardless of owner.
    pub async fn consultations(&self) -> Vec<Consultation> {
        self.state.lock().await.consultations.values().cloned().collect()
    }
}

#[async_trait]
impl DoctorDirectory for InMemoryStore {
    async fn find_doctor(&self, id: DoctorId) -> RepositoryResult<Option<Doctor>> {
        Ok(self.state.lock().await.doctors.get(&id).cloned())
    }
}

#[async_trait]
impl ConsultationRepository for InMemoryStore {
    async fn slot_taken(&self, slot: Slot) -> RepositoryResult<bool> {
        let state = self.state.lock().await;
        Ok(state.consultations.values().any(|c| c.slot() == slot))
    }

    async fn insert(&self, new: NewConsultation) -> RepositoryResult<Consultation> {
        let mut state = self.state.lock().await;
        if state.consultations.values().any(|c| c.slot() == new.slot) {
            return Err(RepositoryError::DuplicateSlot);
        }

        state.last_id += 1;
        let consultation = Consultation {
            id: state.last_id,
            day: new.slot.day,
            time: new.slot.time,
            doctor_id: new.doctor_id,
            user_id: new.user_id,
            scheduling_date: new.scheduling_date,
        };
        state
            .consultations
            .insert(consultation.id, consultation.clone());

        Ok(consultation)
    }

    async fn list_for_user(&self, user_id: UserId) -> RepositoryResult<Vec<Consultation>> {
        let state = self.state.lock().await;
        let mut owned: Vec<Consultation> = state
            .consultations
            .values()
            .filter(|c| c.user_id == user_id)
            .cloned()
            .collect();
        owned.sort_by_key(Consultation::slot);
        Ok(owned)
    }

    async fn find(&self, id: ConsultationId) -> RepositoryResult<Option<Consultation>> {
        Ok(self.state.lock().await.consultations.get(&id).cloned())
    }

    async fn delete(&self, id: ConsultationId) -> RepositoryResult<bool> {
        Ok(self.state.lock().await.consultations.remove(&id).is_some())
    }

    async fn ping(&self) -> RepositoryResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime, Utc};
    use pretty_assertions::assert_eq;

    fn new_consultation(hour: u32, user_id: UserId) -> NewConsultation {
        NewConsultation {
            slot: Slot::new(
                NaiveDate::from_ymd_opt(2099, 1, 1).unwrap(),
                NaiveTime::from_hms_opt(hour, 0, 0).unwrap(),
            ),
            doctor_id: 1,
            user_id,
            scheduling_date: Utc::now(),
        }
    }

    #[tokio::test]
    async fn insert_enforces_slot_uniqueness() {
        let store = InMemoryStore::default();

        let first = store.insert(new_consultation(10, 1)).await.unwrap();
        assert_eq!(first.id, 1);
        assert!(store.slot_taken(first.slot()).await.unwrap());

        let err = store.insert(new_consultation(10, 2)).await.unwrap_err();
        assert!(matches!(err, RepositoryError::DuplicateSlot));
        assert_eq!(store.consultations().await.len(), 1);
    }

    #[tokio::test]
    async fn list_for_user_is_scoped_and_ordered() {
        let store = InMemoryStore::default();
        store.insert(new_consultation(15, 1)).await.unwrap();
        store.insert(new_consultation(9, 2)).await.unwrap();
        store.insert(new_consultation(8, 1)).await.unwrap();

        let hours: Vec<_> = store
            .list_for_user(1)
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.time)
            .collect();

        assert_eq!(
            hours,
            vec![
                NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
                NaiveTime::from_hms_opt(15, 0, 0).unwrap(),
            ]
        );
    }

    #[tokio::test]
    async fn delete_reports_whether_anything_was_removed() {
        let store = InMemoryStore::default();
        let stored = store.insert(new_consultation(10, 1)).await.unwrap();

        assert!(store.delete(stored.id).await.unwrap());
        assert!(!store.delete(stored.id).await.unwrap());
        assert!(store.find(stored.id).await.unwrap().is_none());
    }
}

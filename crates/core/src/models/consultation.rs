use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::doctor::{Doctor, DoctorId};
use crate::slot::{hhmm, Slot};

pub type ConsultationId = i64;
pub type UserId = i64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Consultation {
    pub id: ConsultationId,
    pub day: NaiveDate,
    #[serde(with = "hhmm")]
    pub time: NaiveTime,
    pub doctor_id: DoctorId,
    pub user_id: UserId,
    /// When the booking itself was made, not when the appointment happens.
    pub scheduling_date: DateTime<Utc>,
}

impl Consultation {
    pub fn slot(&self) -> Slot {
        Slot::new(self.day, self.time)
    }
}

/// A validated booking waiting to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewConsultation {
    pub slot: Slot,
    pub doctor_id: DoctorId,
    pub user_id: UserId,
    pub scheduling_date: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateConsultationRequest {
    pub doctor: DoctorId,
    pub day: String,
    pub time: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateConsultationResponse {
    pub id: ConsultationId,
    #[serde(rename = "dia")]
    pub day: NaiveDate,
    #[serde(rename = "horario", with = "hhmm")]
    pub time: NaiveTime,
    #[serde(rename = "data_agendamento")]
    pub scheduling_date: DateTime<Utc>,
    pub doctor: Doctor,
}

/// Listing projection: the doctor is referenced by id only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsultationSummary {
    pub id: ConsultationId,
    pub day: NaiveDate,
    #[serde(with = "hhmm")]
    pub time: NaiveTime,
    pub scheduling_date: DateTime<Utc>,
    pub doctor: DoctorId,
}

impl From<Consultation> for ConsultationSummary {
    fn from(consultation: Consultation) -> Self {
        Self {
            id: consultation.id,
            day: consultation.day,
            time: consultation.time,
            scheduling_date: consultation.scheduling_date,
            doctor: consultation.doctor_id,
        }
    }
}

pub const NO_CONSULTATIONS_MESSAGE: &str = "no consultations scheduled";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ListConsultationsResponse {
    Consultations(Vec<ConsultationSummary>),
    Message { message: String },
}

impl ListConsultationsResponse {
    /// Wraps the caller's bookings, falling back to the informational message
    /// only when there are none.
    pub fn from_summaries(summaries: Vec<ConsultationSummary>) -> Self {
        if summaries.is_empty() {
            Self::Message {
                message: NO_CONSULTATIONS_MESSAGE.to_string(),
            }
        } else {
            Self::Consultations(summaries)
        }
    }
}

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use medconsult_core::models::{consultation::Consultation, doctor::Doctor};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbDoctor {
    pub id: i64,
    pub name: String,
    pub crm: String,
    pub specialty: String,
    pub email: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbConsultation {
    pub id: i64,
    pub day: NaiveDate,
    pub time: NaiveTime,
    pub doctor_id: i64,
    pub user_id: i64,
    pub scheduling_date: DateTime<Utc>,
}

impl From<DbDoctor> for Doctor {
    fn from(row: DbDoctor) -> Self {
        Self {
            id: row.id,
            name: row.name,
            crm: row.crm,
            specialty: row.specialty,
            email: row.email,
            phone: row.phone,
        }
    }
}

impl From<DbConsultation> for Consultation {
    fn from(row: DbConsultation) -> Self {
        Self {
            id: row.id,
            day: row.day,
            time: row.time,
            doctor_id: row.doctor_id,
            user_id: row.user_id,
            scheduling_date: row.scheduling_date,
        }
    }
}

use serde::{Deserialize, Serialize};

pub type DoctorId = i64;

/// Doctor record as exposed by the doctor directory. Bookings only read it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Doctor {
    pub id: DoctorId,
    pub name: String,
    /// Regional medical council registration number.
    pub crm: String,
    pub specialty: String,
    pub email: Option<String>,
    pub phone: Option<String>,
}

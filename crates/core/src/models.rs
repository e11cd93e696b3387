pub mod consultation;
pub mod doctor;

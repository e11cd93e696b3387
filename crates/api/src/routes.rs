pub mod consultation;
pub mod health;

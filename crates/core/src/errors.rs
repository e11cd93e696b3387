use thiserror::Error;

/// Message shown when a booking targets a slot that is already in the past.
pub const PAST_DATE_MESSAGE: &str = "you cannot create a consultation with that date";
/// Message shown when the pre-write check finds the slot taken.
pub const SLOT_CONFLICT_MESSAGE: &str = "a consultation already exists at that time and date";
/// Message shown when the storage uniqueness constraint rejects the insert.
pub const DUPLICATE_BOOKING_MESSAGE: &str =
    "you have already created a consultation with that date and time";
pub const FORBIDDEN_MESSAGE: &str = "you do not have permission to do this";
pub const UNEXPECTED_MESSAGE: &str = "unexpected error";

#[derive(Error, Debug)]
pub enum ConsultError {
    #[error("{0}")]
    Parse(String),

    #[error("{}", PAST_DATE_MESSAGE)]
    PastDate,

    #[error("{}", SLOT_CONFLICT_MESSAGE)]
    SlotConflict,

    #[error("{}", DUPLICATE_BOOKING_MESSAGE)]
    DuplicateBooking,

    #[error("{0}")]
    NotFound(String),

    #[error("{}", FORBIDDEN_MESSAGE)]
    Forbidden,

    #[error("Authentication error: {0}")]
    Unauthenticated(String),

    /// Anything the caller cannot act on. The report is kept for logging only.
    #[error("{}", UNEXPECTED_MESSAGE)]
    Unexpected(#[from] eyre::Report),
}

impl ConsultError {
    pub fn consultation_not_found() -> Self {
        ConsultError::NotFound("no consultation with that id".to_string())
    }

    pub fn doctor_not_found() -> Self {
        ConsultError::NotFound("no doctor with that id".to_string())
    }
}

pub type ConsultResult<T> = Result<T, ConsultError>;

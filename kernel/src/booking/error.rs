use shared::error::AppError;
use thiserror::Error;

/// One variant per reservation rule. Validation is fail-fast: the first
/// violated rule is the only one reported, and its message is the whole
/// client-facing error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RuleViolation {
    #[error("Missing required attributes")]
    MissingAttributes,
    #[error("Initial date must be a Date after today")]
    InitialDateInPast,
    #[error("Final date must be a Date after today")]
    FinalDateInPast,
    #[error("Meters must be a number")]
    MetersNotNumeric,
    #[error("Type must be one of the following: HOUR, DAY, MONTH")]
    UnknownRentalType,
    #[error("Cannot rent a space for 0 months")]
    ZeroMonthSpan,
    #[error("Space cannot be rented by the hour")]
    HourlyRentalUnsupported,
    #[error("Space cannot be rented by the day")]
    DailyRentalUnsupported,
    #[error("Space cannot be rented by the month")]
    MonthlyRentalUnsupported,
    #[error("Final date must be after initial date")]
    FinalBeforeInitial,
    #[error("Initial date must be within the space availability dates")]
    InitialDateOutOfWindow,
    #[error("Final date must be within the space availability dates")]
    FinalDateOutOfWindow,
    #[error("Initial date must be after 24 hours from now")]
    InitialDateTooSoon,
    #[error("Space not available or space capacity exceeded")]
    CapacityExceeded,
    #[error("Meters must be less than or equal to space meters")]
    MetersExceedArea,
    #[error("Meters must be equal to space meters")]
    MetersNotExactArea,
    #[error("Initial hour must be between space hours")]
    InitialHourOutOfWindow,
    #[error("Final hour must be between space hours")]
    FinalHourOutOfWindow,
    #[error("Cannot rent a space for 0 hours at the same day")]
    ZeroHourSpan,
    #[error("User already has an active rental for this space")]
    DuplicateActiveRental,
}

impl From<RuleViolation> for AppError {
    fn from(value: RuleViolation) -> Self {
        AppError::UnprocessableEntity(value.to_string())
    }
}

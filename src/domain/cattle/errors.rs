//! Breeding-specific error types.

use crate::domain::foundation::{CowId, DomainError, ErrorCode, InseminationId};

/// Errors raised by the breeding handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BreedingError {
    /// Cow was not found.
    CowNotFound(CowId),
    /// Insemination record was not found.
    InseminationNotFound(InseminationId),
    /// A mandatory linked record is missing (e.g. a cow with no animal).
    MissingLinkedRecord(String),
    /// Operation applies to cattle only.
    NotCattle(String),
    /// Validation failed.
    ValidationFailed { field: String, message: String },
    /// Infrastructure error.
    Infrastructure(String),
}

impl BreedingError {
    pub fn cow_not_found(id: CowId) -> Self {
        BreedingError::CowNotFound(id)
    }

    pub fn insemination_not_found(id: InseminationId) -> Self {
        BreedingError::InseminationNotFound(id)
    }

    pub fn missing_linked_record(message: impl Into<String>) -> Self {
        BreedingError::MissingLinkedRecord(message.into())
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        BreedingError::Infrastructure(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            BreedingError::CowNotFound(_) => ErrorCode::CowNotFound,
            BreedingError::InseminationNotFound(_) => ErrorCode::InseminationNotFound,
            BreedingError::MissingLinkedRecord(_) => ErrorCode::MissingLinkedRecord,
            BreedingError::NotCattle(_) => ErrorCode::NotCattle,
            BreedingError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            BreedingError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }

    pub fn message(&self) -> String {
        match self {
            BreedingError::CowNotFound(id) => format!("Cow not found: {}", id),
            BreedingError::InseminationNotFound(id) => {
                format!("Insemination record not found: {}", id)
            }
            BreedingError::MissingLinkedRecord(msg) => msg.clone(),
            BreedingError::NotCattle(msg) => msg.clone(),
            BreedingError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            BreedingError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for BreedingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for BreedingError {}

impl From<DomainError> for BreedingError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::MissingLinkedRecord => BreedingError::MissingLinkedRecord(err.message),
            ErrorCode::NotCattle => BreedingError::NotCattle(err.message),
            ErrorCode::ValidationFailed | ErrorCode::EmptyField | ErrorCode::OutOfRange
            | ErrorCode::InvalidFormat => BreedingError::ValidationFailed {
                field: err
                    .details
                    .get("field")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string()),
                message: err.message,
            },
            _ => BreedingError::Infrastructure(err.message),
        }
    }
}

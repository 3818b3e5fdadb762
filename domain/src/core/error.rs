//! Domain error types

use crate::catalog::value_objects::ResourceKind;
use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Resource name must not be empty")]
    EmptyName,

    #[error("Material supplier must not be empty")]
    EmptySupplier,

    #[error("Cost must not be negative (got {0})")]
    NegativeCost(f64),

    #[error("Amount to add must be a positive integer (got {0})")]
    InvalidAmount(i64),

    #[error("Adding {additional} to {current} overflows the stock counter")]
    AmountOverflow { current: u32, additional: u32 },

    #[error("Tool cannot be used. Condition is too low ({0}).")]
    ConditionTooLow(u8),

    #[error("Invalid item type: {0}")]
    UnknownKind(String),

    #[error("Field '{field}' does not apply to a {kind}")]
    InvalidField {
        field: &'static str,
        kind: ResourceKind,
    },
}

impl DomainError {
    /// Check if this error rejects the caller's input rather than reporting
    /// a state-dependent outcome.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            DomainError::EmptyName
                | DomainError::EmptySupplier
                | DomainError::NegativeCost(_)
                | DomainError::InvalidAmount(_)
                | DomainError::AmountOverflow { .. }
                | DomainError::UnknownKind(_)
                | DomainError::InvalidField { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_condition_too_low_display() {
        let error = DomainError::ConditionTooLow(12);
        assert_eq!(
            error.to_string(),
            "Tool cannot be used. Condition is too low (12)."
        );
    }

    #[test]
    fn test_invalid_argument_check() {
        assert!(DomainError::InvalidAmount(-3).is_invalid_argument());
        assert!(DomainError::EmptyName.is_invalid_argument());
        assert!(!DomainError::ConditionTooLow(10).is_invalid_argument());
    }
}

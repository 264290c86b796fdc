//! # Error Types
//!
//! Domain-specific error types for dunn-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  dunn-core errors (this file)                                          │
//! │  ├── CoreError        - Lookup failures and rejected ratings           │
//! │  └── ValidationError  - Malformed input or broken catalog tables       │
//! │                                                                         │
//! │  dunn-cli errors (app)                                                 │
//! │  ├── ConfigError      - Bad environment / flag values                  │
//! │  └── anyhow::Error    - Top-level session failures                     │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → console re-prompt or abort        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! None of these are retried by the engine. The console decides whether to
//! re-prompt or give up.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// Item is not in the price table.
    ///
    /// ## When This Occurs
    /// - Typo at the item prompt ("Lattee")
    /// - Item removed from the catalog but still referenced by an order
    #[error("Unknown item: {0}")]
    UnknownItem(String),

    /// Location is not in the location table.
    #[error("Unknown delivery location: {0}")]
    UnknownLocation(String),

    /// Menu category does not exist.
    #[error("Unknown menu category: {0}")]
    UnknownCategory(String),

    /// Rating is not an integer between 1 and 5.
    ///
    /// ## User Workflow
    /// ```text
    /// Rate your delivery (1-5): 7
    ///      │
    ///      ▼
    /// InvalidRating("7")
    ///      │
    ///      ▼
    /// Console re-prompts
    /// ```
    #[error("Invalid rating '{0}': must be a whole number from 1 to 5")]
    InvalidRating(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g., non-numeric hour).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// A menu item has no entry in the price table.
    #[error("menu item '{item}' in category '{category}' has no price")]
    MissingPrice { category: String, item: String },

    /// Duplicate value (e.g., the same item priced twice).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::UnknownItem("Lattee".to_string());
        assert_eq!(err.to_string(), "Unknown item: Lattee");

        let err = CoreError::UnknownLocation("Gym".to_string());
        assert_eq!(err.to_string(), "Unknown delivery location: Gym");

        let err = CoreError::InvalidRating("abc".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid rating 'abc': must be a whole number from 1 to 5"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::OutOfRange {
            field: "hour".to_string(),
            min: 0,
            max: 23,
        };
        assert_eq!(err.to_string(), "hour must be between 0 and 23");

        let err = ValidationError::MissingPrice {
            category: "Lunch".to_string(),
            item: "Soup".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "menu item 'Soup' in category 'Lunch' has no price"
        );
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "location".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}

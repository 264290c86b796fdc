//! # Validation Module
//!
//! Validation for values the console reads from the user.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Console (apps/cli)                                           │
//! │  ├── Reads a line, trims it                                            │
//! │  └── Calls a predicate; re-prompts on failure                          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Parses text into typed values (Rating, hour, yes/no)              │
//! │  └── Returns ValidationError with the field name                       │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Engine (table lookups)                                       │
//! │  └── UnknownItem / UnknownLocation                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use dunn_core::validation::{is_valid_rating, validate_hour};
//!
//! assert!(is_valid_rating("5"));
//! assert!(!is_valid_rating("6"));
//! assert_eq!(validate_hour(13).unwrap(), 13);
//! ```

use crate::error::ValidationError;
use crate::types::Rating;
use crate::{MAX_RATING, MIN_RATING};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Last valid hour of the day.
const MAX_HOUR: u8 = 23;

// =============================================================================
// Rating
// =============================================================================

/// Parses and validates a delivery rating.
///
/// ## Rules
/// - Must be a whole number (no decimals, no words)
/// - Must be between 1 and 5 inclusive
///
/// ## User Workflow
/// ```text
/// Rate your delivery (1-5): 4.5
///      │
///      ▼
/// validate_rating("4.5") ← THIS FUNCTION
///      │
///      ├── not an integer?  → InvalidFormat
///      ├── outside 1..=5?   → OutOfRange
///      └── OK → Rating(4)
/// ```
pub fn validate_rating(input: &str) -> ValidationResult<Rating> {
    let input = input.trim();

    if input.is_empty() {
        return Err(ValidationError::Required {
            field: "rating".to_string(),
        });
    }

    let value: i64 = input.parse().map_err(|_| ValidationError::InvalidFormat {
        field: "rating".to_string(),
        reason: "must be a whole number".to_string(),
    })?;

    if value < MIN_RATING as i64 || value > MAX_RATING as i64 {
        return Err(ValidationError::OutOfRange {
            field: "rating".to_string(),
            min: MIN_RATING as i64,
            max: MAX_RATING as i64,
        });
    }

    Ok(Rating::new_unchecked(value as u8))
}

/// Predicate form of [`validate_rating`] for re-prompt loops.
///
/// ## Example
/// ```rust
/// use dunn_core::validation::is_valid_rating;
///
/// assert!(is_valid_rating("1"));
/// assert!(!is_valid_rating("0"));
/// assert!(!is_valid_rating("great"));
/// ```
pub fn is_valid_rating(input: &str) -> bool {
    validate_rating(input).is_ok()
}

// =============================================================================
// Hour
// =============================================================================

/// Validates an hour of day (0-23).
pub fn validate_hour(hour: u8) -> ValidationResult<u8> {
    if hour > MAX_HOUR {
        return Err(ValidationError::OutOfRange {
            field: "hour".to_string(),
            min: 0,
            max: MAX_HOUR as i64,
        });
    }

    Ok(hour)
}

/// Parses an hour typed at a prompt.
pub fn parse_hour(input: &str) -> ValidationResult<u8> {
    let input = input.trim();

    if input.is_empty() {
        return Err(ValidationError::Required {
            field: "hour".to_string(),
        });
    }

    let hour: u8 = input.parse().map_err(|_| ValidationError::InvalidFormat {
        field: "hour".to_string(),
        reason: "must be a whole number from 0 to 23".to_string(),
    })?;

    validate_hour(hour)
}

// =============================================================================
// Yes / No
// =============================================================================

/// Parses a yes/no answer (`y`, `yes`, `n`, `no`, any case).
pub fn parse_yes_no(field: &str, input: &str) -> ValidationResult<bool> {
    match input.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => Ok(true),
        "n" | "no" => Ok(false),
        "" => Err(ValidationError::Required {
            field: field.to_string(),
        }),
        _ => Err(ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: "answer y or n".to_string(),
        }),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

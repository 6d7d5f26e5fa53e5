//! # Validation Module
//!
//! Input validation utilities for Paradise Nursery.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Terminal input                                               │
//! │  ├── Raw text: "qty 3 5", "add 2"                                      │
//! │  └── Split into words, no interpretation                               │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── parse_plant_id / parse_quantity turn text into typed values       │
//! │  └── Rejects "abc", "0", "-3", "1000" before the cart is touched       │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Cart                                                         │
//! │  └── Accepts only PlantId and Quantity, so it cannot hold bad state    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use paradise_core::validation::{parse_quantity, validate_quantity};
//!
//! assert!(validate_quantity(5).is_ok());
//! assert!(parse_quantity("abc").is_err());
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::{PlantId, Quantity};
use crate::MAX_ITEM_QUANTITY;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest plant name the catalog accepts.
const MAX_PLANT_NAME_LEN: usize = 100;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a plant's display name.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 100 characters
pub fn validate_plant_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_PLANT_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_PLANT_NAME_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a quantity value.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed MAX_ITEM_QUANTITY (999)
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Cart view: change quantity                                             │
/// │                                                                         │
/// │  User types: qty 3 5                                                   │
/// │       │                                                                 │
/// │       ▼                                                                 │
/// │  validate_quantity(5) ← THIS FUNCTION                                  │
/// │       │                                                                 │
/// │       ├── qty <= 0? → Error: "quantity must be positive"               │
/// │       │                                                                 │
/// │       ├── qty > 999? → Error: "quantity must be between 1 and 999"     │
/// │       │                                                                 │
/// │       └── OK → Cart::set_quantity                                      │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > MAX_ITEM_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_ITEM_QUANTITY,
        });
    }

    Ok(())
}

/// Parses a quantity typed by the user.
///
/// Non-numeric text is rejected with `InvalidFormat` instead of turning into
/// a not-a-number quantity.
///
/// ## Example
/// ```rust
/// use paradise_core::validation::parse_quantity;
///
/// assert_eq!(parse_quantity(" 5 ").unwrap().get(), 5);
/// assert!(parse_quantity("").is_err());
/// assert!(parse_quantity("2.5").is_err());
/// assert!(parse_quantity("0").is_err());
/// ```
pub fn parse_quantity(input: &str) -> ValidationResult<Quantity> {
    let input = input.trim();

    if input.is_empty() {
        return Err(ValidationError::Required {
            field: "quantity".to_string(),
        });
    }

    let qty = input
        .parse::<i64>()
        .map_err(|_| ValidationError::InvalidFormat {
            field: "quantity".to_string(),
            reason: "must be a whole number".to_string(),
        })?;

    Quantity::new(qty)
}

/// Parses a plant id typed by the user.
pub fn parse_plant_id(input: &str) -> ValidationResult<PlantId> {
    let input = input.trim();

    if input.is_empty() {
        return Err(ValidationError::Required {
            field: "plant id".to_string(),
        });
    }

    input
        .parse::<u32>()
        .map(PlantId::new)
        .map_err(|_| ValidationError::InvalidFormat {
            field: "plant id".to_string(),
            reason: "must be a non-negative whole number".to_string(),
        })
}

/// Validates a unit price.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free cuttings)
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_plant_name() {
        assert!(validate_plant_name("Snake Plant").is_ok());
        assert!(validate_plant_name("").is_err());
        assert!(validate_plant_name("   ").is_err());
        assert!(validate_plant_name(&"A".repeat(101)).is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(100).is_ok());
        assert!(validate_quantity(999).is_ok());

        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-1).is_err());
        assert!(validate_quantity(1000).is_err());
    }

    #[test]
    fn test_parse_quantity_errors_are_specific() {
        assert!(matches!(
            parse_quantity(""),
            Err(ValidationError::Required { .. })
        ));
        assert!(matches!(
            parse_quantity("abc"),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(matches!(
            parse_quantity("NaN"),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(matches!(
            parse_quantity("-3"),
            Err(ValidationError::MustBePositive { .. })
        ));
        assert!(matches!(
            parse_quantity("1000"),
            Err(ValidationError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_parse_plant_id() {
        assert_eq!(parse_plant_id("4"), Ok(PlantId::new(4)));
        assert_eq!(parse_plant_id(" 2 "), Ok(PlantId::new(2)));
        assert!(parse_plant_id("-1").is_err());
        assert!(parse_plant_id("").is_err());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(Money::zero()).is_ok());
        assert!(validate_price(Money::from_cents(2999)).is_ok());
        assert!(validate_price(Money::from_cents(-100)).is_err());
    }
}

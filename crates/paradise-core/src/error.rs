//! # Errors
//!
//! What can go wrong inside the storefront core.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  "qty 3 abc" ──► parse_quantity ──► ValidationError::InvalidFormat     │
//! │  "add 9"     ──► Cart::add_item ──► CoreError::PlantNotFound           │
//! │                                                                         │
//! │  Both reach the terminal app as ApiError, which the shell prints        │
//! │  before reading the next line. The cart is untouched on every path.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Messages are written for the shopper: they name the field or the plant
//! id and are shown as-is.

use thiserror::Error;

use crate::types::PlantId;

// =============================================================================
// Core Error
// =============================================================================

/// A cart or catalog rule was broken.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Plant id does not exist in the catalog the cart was built over.
    #[error("Plant not found: {0}")]
    PlantNotFound(PlantId),

    /// `add 1` on a Snake Plant entry already at 999.
    #[error("Quantity {requested} exceeds maximum allowed ({max})")]
    QuantityTooLarge { requested: i64, max: i64 },

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Typed input or catalog data that was rejected before reaching the cart.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Blank input.
    #[error("{field} is required")]
    Required { field: String },

    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Above the upper bound (or, for prices, below zero).
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Zero or negative quantity.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Not a number at all, e.g. `abc` or `2.5` for a quantity.
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Two catalog entries with one id.
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

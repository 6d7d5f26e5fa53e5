//! # Domain Types
//!
//! Small value types shared by the catalog, the cart and the terminal app.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    PlantId      │   │    Category     │   │    Quantity     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  u32            │   │  AirPurifying   │   │  u32, 1..=999   │       │
//! │  │  stable, unique │   │  Aromatic       │   │  never 0        │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::validation::{self, ValidationResult};
use crate::MAX_ITEM_QUANTITY;

// =============================================================================
// Plant Id
// =============================================================================

/// Stable identifier of a plant in the catalog.
///
/// Cart entries hold this id instead of a copy of the plant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PlantId(u32);

impl PlantId {
    #[inline]
    pub const fn new(id: u32) -> Self {
        PlantId(id)
    }

    #[inline]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for PlantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PlantId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validation::parse_plant_id(s)
    }
}

// =============================================================================
// Category
// =============================================================================

/// Category label a plant is filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Plants sold for cleaning indoor air.
    AirPurifying,
    /// Plants sold for their scent.
    Aromatic,
}

impl Category {
    /// Every category, in display order.
    pub const ALL: [Category; 2] = [Category::AirPurifying, Category::Aromatic];

    /// Human-readable label shown next to a plant.
    pub const fn label(&self) -> &'static str {
        match self {
            Category::AirPurifying => "air purifying",
            Category::Aromatic => "aromatic",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Accepts `air purifying`, `air-purifying`, `air_purifying` (any case).
impl FromStr for Category {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['-', '_'], " ");

        Category::ALL
            .into_iter()
            .find(|c| c.label() == normalized)
            .ok_or_else(|| ValidationError::InvalidFormat {
                field: "category".to_string(),
                reason: format!(
                    "must be one of: {}",
                    Category::ALL.map(|c| c.label()).join(", ")
                ),
            })
    }
}

// =============================================================================
// Quantity
// =============================================================================

/// A validated cart quantity.
///
/// ## Invariant
/// Always within `1..=MAX_ITEM_QUANTITY`. The only ways in are
/// [`Quantity::new`], [`Quantity::ONE`], [`Quantity::increment`] and
/// text parsing, all of which check the range, so a cart can never hold a
/// zero, negative or non-numeric quantity.
///
/// ## Example
/// ```rust
/// use paradise_core::Quantity;
///
/// let five: Quantity = "5".parse().unwrap();
/// assert_eq!(five.get(), 5);
///
/// assert!(Quantity::new(0).is_err());
/// assert!("abc".parse::<Quantity>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(try_from = "i64", into = "i64")]
pub struct Quantity(u32);

impl Quantity {
    /// Quantity of a freshly added cart entry.
    pub const ONE: Quantity = Quantity(1);

    /// Validates a raw quantity.
    pub fn new(qty: i64) -> ValidationResult<Self> {
        validation::validate_quantity(qty)?;
        // validate_quantity bounds qty to 1..=999, which always fits in u32
        Ok(Quantity(qty as u32))
    }

    #[inline]
    pub const fn get(&self) -> i64 {
        self.0 as i64
    }

    /// Returns the quantity one higher, or `QuantityTooLarge` at the limit.
    pub fn increment(self) -> CoreResult<Self> {
        let requested = self.get() + 1;
        if requested > MAX_ITEM_QUANTITY {
            return Err(CoreError::QuantityTooLarge {
                requested,
                max: MAX_ITEM_QUANTITY,
            });
        }
        Ok(Quantity(requested as u32))
    }
}

impl TryFrom<i64> for Quantity {
    type Error = ValidationError;

    fn try_from(qty: i64) -> Result<Self, Self::Error> {
        Quantity::new(qty)
    }
}

impl From<Quantity> for i64 {
    fn from(qty: Quantity) -> Self {
        qty.get()
    }
}

impl FromStr for Quantity {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validation::parse_quantity(s)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_labels() {
        assert_eq!(Category::AirPurifying.to_string(), "air purifying");
        assert_eq!(Category::Aromatic.to_string(), "aromatic");
    }

    #[test]
    fn test_category_parse_is_forgiving() {
        assert_eq!("air purifying".parse(), Ok(Category::AirPurifying));
        assert_eq!("Air-Purifying".parse(), Ok(Category::AirPurifying));
        assert_eq!("air_purifying".parse(), Ok(Category::AirPurifying));
        assert_eq!(" AROMATIC ".parse(), Ok(Category::Aromatic));
        assert!("succulent".parse::<Category>().is_err());
    }

    #[test]
    fn test_quantity_bounds() {
        assert_eq!(Quantity::new(1).map(|q| q.get()), Ok(1));
        assert_eq!(Quantity::new(999).map(|q| q.get()), Ok(999));
        assert!(Quantity::new(0).is_err());
        assert!(Quantity::new(-4).is_err());
        assert!(Quantity::new(1000).is_err());
    }

    #[test]
    fn test_quantity_increment_stops_at_limit() {
        let two = Quantity::ONE.increment().unwrap();
        assert_eq!(two.get(), 2);

        let max = Quantity::new(MAX_ITEM_QUANTITY).unwrap();
        assert_eq!(
            max.increment(),
            Err(CoreError::QuantityTooLarge {
                requested: 1000,
                max: 999
            })
        );
    }

    #[test]
    fn test_quantity_serde_validates() {
        let qty: Quantity = serde_json::from_str("3").unwrap();
        assert_eq!(qty.get(), 3);
        assert_eq!(serde_json::to_string(&qty).unwrap(), "3");

        assert!(serde_json::from_str::<Quantity>("0").is_err());
        assert!(serde_json::from_str::<Quantity>("-1").is_err());
    }

    #[test]
    fn test_plant_id_parse() {
        assert_eq!("3".parse(), Ok(PlantId::new(3)));
        assert!("three".parse::<PlantId>().is_err());
    }
}

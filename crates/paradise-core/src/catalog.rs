//! # Catalog
//!
//! The immutable list of plants on sale.
//!
//! The catalog is built once and never mutated. Carts borrow it to resolve
//! plant ids into names and prices, which is why entries never copy plant
//! data.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::LazyLock;
use ts_rs::TS;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::types::{Category, PlantId};
use crate::validation::{validate_plant_name, validate_price};
use crate::PLACEHOLDER_THUMBNAIL;

// =============================================================================
// Plant
// =============================================================================

/// A plant available for sale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Plant {
    /// Stable identifier, unique within a catalog.
    pub id: PlantId,

    /// Display name shown on catalog and cart cards.
    pub name: String,

    /// Unit price.
    pub price: Money,

    /// One-line description shown under the name.
    pub description: String,

    /// Image reference. Opaque: never fetched or validated.
    pub thumbnail: String,

    pub category: Category,
}

impl Plant {
    fn builtin(id: u32, name: &str, price: Money, description: &str, category: Category) -> Self {
        Plant {
            id: PlantId::new(id),
            name: name.to_string(),
            price,
            description: description.to_string(),
            thumbnail: PLACEHOLDER_THUMBNAIL.to_string(),
            category,
        }
    }
}

// =============================================================================
// Catalog
// =============================================================================

static BUILTIN: LazyLock<Catalog> = LazyLock::new(|| Catalog {
    plants: vec![
        Plant::builtin(
            1,
            "Snake Plant",
            Money::from_major_minor(29, 99),
            "Air purifying plant",
            Category::AirPurifying,
        ),
        Plant::builtin(
            2,
            "Aloe Vera",
            Money::from_major_minor(19, 99),
            "Aromatic plant",
            Category::Aromatic,
        ),
        Plant::builtin(
            3,
            "Spider Plant",
            Money::from_major_minor(14, 99),
            "Air purifying plant",
            Category::AirPurifying,
        ),
        Plant::builtin(
            4,
            "Lavender",
            Money::from_major_minor(24, 99),
            "Aromatic plant",
            Category::Aromatic,
        ),
    ],
});

/// An ordered, immutable sequence of plants with unique ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Catalog {
    plants: Vec<Plant>,
}

impl Catalog {
    /// Builds a catalog, checking ids are unique, names are present and
    /// prices are non-negative.
    pub fn new(plants: Vec<Plant>) -> CoreResult<Self> {
        let mut seen = HashSet::with_capacity(plants.len());

        for plant in &plants {
            validate_plant_name(&plant.name)?;
            validate_price(plant.price)?;

            if !seen.insert(plant.id) {
                return Err(CoreError::Validation(ValidationError::Duplicate {
                    field: "plant id".to_string(),
                    value: plant.id.to_string(),
                }));
            }
        }

        Ok(Catalog { plants })
    }

    /// The storefront's fixed catalog, created on first use.
    ///
    /// ## Example
    /// ```rust
    /// use paradise_core::{Catalog, PlantId};
    ///
    /// let catalog = Catalog::builtin();
    /// assert_eq!(catalog.len(), 4);
    /// assert_eq!(catalog.get(PlantId::new(4)).unwrap().name, "Lavender");
    /// ```
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    /// Looks a plant up by id.
    pub fn get(&self, id: PlantId) -> Option<&Plant> {
        self.plants.iter().find(|p| p.id == id)
    }

    /// Looks a plant up by id, failing with `PlantNotFound`.
    pub fn require(&self, id: PlantId) -> CoreResult<&Plant> {
        self.get(id).ok_or(CoreError::PlantNotFound(id))
    }

    /// All plants in catalog order.
    pub fn plants(&self) -> &[Plant] {
        &self.plants
    }

    /// Plants filed under `category`, in catalog order.
    pub fn by_category(&self, category: Category) -> impl Iterator<Item = &Plant> + '_ {
        self.plants.iter().filter(move |p| p.category == category)
    }

    pub fn len(&self) -> usize {
        self.plants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plants.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_contents() {
        let catalog = Catalog::builtin();
        let names: Vec<&str> = catalog.plants().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Snake Plant", "Aloe Vera", "Spider Plant", "Lavender"]
        );

        let prices: Vec<i64> = catalog.plants().iter().map(|p| p.price.cents()).collect();
        assert_eq!(prices, vec![2999, 1999, 1499, 2499]);

        assert!(catalog
            .plants()
            .iter()
            .all(|p| p.thumbnail == PLACEHOLDER_THUMBNAIL));
    }

    #[test]
    fn test_builtin_catalog_passes_validation() {
        let rebuilt = Catalog::new(Catalog::builtin().plants().to_vec()).unwrap();
        assert_eq!(&rebuilt, Catalog::builtin());
    }

    #[test]
    fn test_by_category() {
        let catalog = Catalog::builtin();

        let aromatic: Vec<u32> = catalog
            .by_category(Category::Aromatic)
            .map(|p| p.id.get())
            .collect();
        assert_eq!(aromatic, vec![2, 4]);

        let air: Vec<u32> = catalog
            .by_category(Category::AirPurifying)
            .map(|p| p.id.get())
            .collect();
        assert_eq!(air, vec![1, 3]);
    }

    #[test]
    fn test_require_unknown_plant() {
        let err = Catalog::builtin().require(PlantId::new(99)).unwrap_err();
        assert_eq!(err, CoreError::PlantNotFound(PlantId::new(99)));
    }

    #[test]
    fn test_new_rejects_duplicate_ids() {
        let mut plants = Catalog::builtin().plants().to_vec();
        plants.push(plants[0].clone());

        let err = Catalog::new(plants).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::Duplicate { .. })
        ));
    }

    #[test]
    fn test_new_rejects_negative_price_and_blank_name() {
        let mut plant = Catalog::builtin().plants()[0].clone();
        plant.price = Money::from_cents(-1);
        assert!(Catalog::new(vec![plant.clone()]).is_err());

        plant.price = Money::zero();
        plant.name = "  ".to_string();
        assert!(Catalog::new(vec![plant]).is_err());
    }

    #[test]
    fn test_empty_catalog_is_valid() {
        let catalog = Catalog::new(Vec::new()).unwrap();
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
    }
}

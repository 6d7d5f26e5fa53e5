//! # Cart
//!
//! The cart store: the only part of the storefront with real logic.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  User Action              Cart Method              State Change         │
//! │  ───────────              ───────────              ────────────         │
//! │                                                                         │
//! │  Add to Cart ────────────► add_item() ───────────► push or qty += 1    │
//! │                                                                         │
//! │  Change Quantity ────────► set_quantity() ───────► entries[i].qty = n  │
//! │                                                                         │
//! │  Click Remove ───────────► remove_item() ────────► entries.remove(i)   │
//! │                                                                         │
//! │  Header badge / summary ─► total_item_count() ───► (read only)         │
//! │                            total_price()                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - At most one entry per plant id (only `add_item` creates entries, and it
//!   reuses an existing one)
//! - Entries keep first-add order
//! - Every entry's plant exists in the borrowed catalog
//! - Every quantity is a valid [`Quantity`]
//!
//! Totals are recomputed from the entries on every read. With a catalog
//! this size nothing is cached.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::catalog::{Catalog, Plant};
use crate::error::CoreResult;
use crate::money::Money;
use crate::types::{Category, PlantId, Quantity};

// =============================================================================
// Cart Entry
// =============================================================================

/// One line of the cart: which plant and how many.
///
/// The plant is held by id. Name and price are read from the catalog when
/// the cart is rendered or totalled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartEntry {
    pub plant_id: PlantId,

    pub quantity: Quantity,

    /// When this plant was first added.
    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

impl CartEntry {
    fn new(plant_id: PlantId) -> Self {
        CartEntry {
            plant_id,
            quantity: Quantity::ONE,
            added_at: Utc::now(),
        }
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart for one session.
///
/// Borrows the catalog it resolves plant ids against.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart<'c> {
    #[serde(skip)]
    catalog: &'c Catalog,

    entries: Vec<CartEntry>,

    /// When the cart was created/last cleared
    created_at: DateTime<Utc>,
}

impl<'c> Cart<'c> {
    /// Creates a new empty cart over `catalog`.
    pub fn new(catalog: &'c Catalog) -> Self {
        Cart {
            catalog,
            entries: Vec::new(),
            created_at: Utc::now(),
        }
    }

    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    /// Adds one of a plant to the cart.
    ///
    /// ## Behavior
    /// - If the plant is already in the cart: quantity increases by 1
    /// - If not: a new entry with quantity 1 is appended
    ///
    /// ## Errors
    /// - `PlantNotFound` if the id is not in the catalog
    /// - `QuantityTooLarge` if the entry is already at the limit; the entry
    ///   is left unchanged
    ///
    /// ## Example
    /// ```rust
    /// use paradise_core::{Cart, Catalog, PlantId};
    ///
    /// let mut cart = Cart::new(Catalog::builtin());
    /// cart.add_item(PlantId::new(1)).unwrap();
    /// let entry = cart.add_item(PlantId::new(1)).unwrap();
    ///
    /// assert_eq!(entry.quantity.get(), 2);
    /// assert_eq!(cart.len(), 1);
    /// ```
    pub fn add_item(&mut self, plant_id: PlantId) -> CoreResult<&CartEntry> {
        self.catalog.require(plant_id)?;

        match self.position(plant_id) {
            Some(index) => {
                let entry = &mut self.entries[index];
                entry.quantity = entry.quantity.increment()?;
                Ok(entry)
            }
            None => {
                let index = self.entries.len();
                self.entries.push(CartEntry::new(plant_id));
                Ok(&self.entries[index])
            }
        }
    }

    /// Removes a plant's entry from the cart.
    ///
    /// Returns the removed entry, or `None` (and changes nothing) if the
    /// plant was not in the cart.
    pub fn remove_item(&mut self, plant_id: PlantId) -> Option<CartEntry> {
        let index = self.position(plant_id)?;
        Some(self.entries.remove(index))
    }

    /// Overwrites the quantity of a plant's entry.
    ///
    /// Returns `false` (and changes nothing) if the plant was not in the
    /// cart. The quantity is already validated by its type.
    pub fn set_quantity(&mut self, plant_id: PlantId, quantity: Quantity) -> bool {
        match self.entries.iter_mut().find(|e| e.plant_id == plant_id) {
            Some(entry) => {
                entry.quantity = quantity;
                true
            }
            None => false,
        }
    }

    /// Clears all entries from the cart.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.created_at = Utc::now();
    }

    /// Entries in first-add order.
    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    pub fn entry(&self, plant_id: PlantId) -> Option<&CartEntry> {
        self.entries.iter().find(|e| e.plant_id == plant_id)
    }

    pub fn contains(&self, plant_id: PlantId) -> bool {
        self.entry(plant_id).is_some()
    }

    /// Returns the number of distinct plants in the cart.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the total quantity of all entries.
    pub fn total_item_count(&self) -> i64 {
        self.entries.iter().map(|e| e.quantity.get()).sum()
    }

    /// Sum of unit price × quantity over all entries.
    ///
    /// ## Example
    /// ```rust
    /// use paradise_core::{Cart, Catalog, PlantId, Quantity};
    ///
    /// let spider_plant = PlantId::new(3);
    /// let mut cart = Cart::new(Catalog::builtin());
    /// cart.add_item(spider_plant).unwrap();
    /// cart.set_quantity(spider_plant, Quantity::new(5).unwrap());
    ///
    /// assert_eq!(cart.total_price().cents(), 7495); // $74.95
    /// ```
    pub fn total_price(&self) -> Money {
        self.entries
            .iter()
            .filter_map(|e| self.plant(e).map(|p| p.price.multiply_quantity(e.quantity.get())))
            .sum()
    }

    /// Resolves every entry against the catalog for display.
    pub fn lines(&self) -> Vec<CartLine> {
        self.entries
            .iter()
            .filter_map(|e| self.plant(e).map(|p| CartLine::new(p, e.quantity)))
            .collect()
    }

    pub fn totals(&self) -> CartTotals {
        CartTotals::from(self)
    }

    fn position(&self, plant_id: PlantId) -> Option<usize> {
        self.entries.iter().position(|e| e.plant_id == plant_id)
    }

    fn plant(&self, entry: &CartEntry) -> Option<&'c Plant> {
        self.catalog.get(entry.plant_id)
    }
}

// =============================================================================
// Cart Line
// =============================================================================

/// A cart entry resolved against the catalog, ready to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub plant_id: PlantId,
    pub name: String,
    pub description: String,
    pub thumbnail: String,
    pub category: Category,
    pub unit_price: Money,
    pub quantity: Quantity,
    /// unit_price × quantity
    pub line_total: Money,
}

impl CartLine {
    fn new(plant: &Plant, quantity: Quantity) -> Self {
        CartLine {
            plant_id: plant.id,
            name: plant.name.clone(),
            description: plant.description.clone(),
            thumbnail: plant.thumbnail.clone(),
            category: plant.category,
            unit_price: plant.price,
            quantity,
            line_total: plant.price.multiply_quantity(quantity.get()),
        }
    }
}

// =============================================================================
// Cart Totals
// =============================================================================

/// Cart totals summary for the header badge and the cart summary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    /// Number of distinct plants.
    pub distinct_items: usize,
    /// Sum of quantities.
    pub total_items: i64,
    pub total_price: Money,
}

impl From<&Cart<'_>> for CartTotals {
    fn from(cart: &Cart<'_>) -> Self {
        CartTotals {
            distinct_items: cart.len(),
            total_items: cart.total_item_count(),
            total_price: cart.total_price(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

//! # Catalog Commands
//!
//! Read-only access to the plants on sale.

use tracing::debug;

use crate::error::ApiError;
use paradise_core::{Catalog, Category, Plant, PlantId};

/// Lists plants in catalog order, optionally only one category.
pub fn list_plants(catalog: &Catalog, category: Option<Category>) -> Vec<Plant> {
    debug!(category = ?category, "list_plants command");

    match category {
        Some(category) => catalog.by_category(category).cloned().collect(),
        None => catalog.plants().to_vec(),
    }
}

/// Gets one plant by id.
pub fn get_plant(catalog: &Catalog, plant_id: PlantId) -> Result<Plant, ApiError> {
    debug!(plant_id = %plant_id, "get_plant command");

    Ok(catalog.require(plant_id)?.clone())
}

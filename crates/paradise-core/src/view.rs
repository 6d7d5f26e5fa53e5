//! # Page Selector
//!
//! Which of the three screens is showing. Any screen can switch to any
//! other; there are no guards and no history.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::ValidationError;

/// The currently displayed screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ViewState {
    /// Welcome screen with the "Get Started" button.
    #[default]
    Landing,
    /// Grid of plants with "Add to Cart" buttons.
    Catalog,
    /// Cart entries, quantity inputs and the summary.
    Cart,
}

impl ViewState {
    pub const ALL: [ViewState; 3] = [ViewState::Landing, ViewState::Catalog, ViewState::Cart];

    pub const fn name(&self) -> &'static str {
        match self {
            ViewState::Landing => "landing",
            ViewState::Catalog => "catalog",
            ViewState::Cart => "cart",
        }
    }
}

impl fmt::Display for ViewState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Accepts the view names plus the words a shopper is likely to type.
impl FromStr for ViewState {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "landing" | "home" => Ok(ViewState::Landing),
            "catalog" | "products" | "shop" => Ok(ViewState::Catalog),
            "cart" => Ok(ViewState::Cart),
            _ => Err(ValidationError::InvalidFormat {
                field: "view".to_string(),
                reason: "must be one of: landing, catalog, cart".to_string(),
            }),
        }
    }
}

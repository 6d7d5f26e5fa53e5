//! # Cart Commands
//!
//! Commands for cart manipulation.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐  add_to_cart   ┌──────────┐                               │
//! │  │  Empty   │───────────────►│ In Cart  │◄──┐ add_to_cart               │
//! │  │  Cart    │                │          │───┘ update_cart_item          │
//! │  └──────────┘                └──────────┘     remove_from_cart          │
//! │       ▲                           │                                     │
//! │       └───────── clear_cart ──────┘                                     │
//! │                  (or last remove)                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every command returns the whole cart so the caller can re-render from it.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ApiError;
use crate::state::SessionState;
use paradise_core::validation::parse_quantity;
use paradise_core::{Cart, CartLine, CartTotals, PlantId};

/// Cart response including lines and totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub items: Vec<CartLine>,
    pub totals: CartTotals,
}

impl From<&Cart<'_>> for CartResponse {
    fn from(cart: &Cart<'_>) -> Self {
        CartResponse {
            items: cart.lines(),
            totals: cart.totals(),
        }
    }
}

/// Gets the current cart contents.
///
/// ## Returns
/// Current cart with lines and calculated totals
pub fn get_cart(session: &SessionState) -> CartResponse {
    debug!("get_cart command");
    session.with_session(|s| CartResponse::from(s.cart()))
}

/// Adds one of a plant to the cart.
///
/// ## Behavior
/// - If plant already in cart: quantity increases by 1
/// - If plant not in cart: added as new line with quantity 1
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  User types "add 1" on the catalog page                                │
/// │                    │                                                    │
/// │                    ▼                                                    │
/// │  add_to_cart(session, PlantId(1))                                       │
/// │                    │                                                    │
/// │                    ▼                                                    │
/// │  ┌────────────────────────────────────────────────────────────────┐    │
/// │  │  1. Check the plant exists in the catalog                     │    │
/// │  │  2. Check if already in cart                                   │    │
/// │  │     - Yes: increase quantity                                   │    │
/// │  │     - No: append new entry                                     │    │
/// │  │  3. Return updated cart                                        │    │
/// │  └────────────────────────────────────────────────────────────────┘    │
/// │                    │                                                    │
/// │                    ▼                                                    │
/// │  Header badge updates: Cart (1)                                        │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn add_to_cart(session: &SessionState, plant_id: PlantId) -> Result<CartResponse, ApiError> {
    debug!(plant_id = %plant_id, "add_to_cart command");

    session.with_session_mut(|s| -> Result<CartResponse, ApiError> {
        let quantity = s.cart_mut().add_item(plant_id)?.quantity;
        debug!(plant_id = %plant_id, quantity = %quantity, "plant added");
        Ok(CartResponse::from(s.cart()))
    })
}

/// Updates the quantity of a cart line from the text the user typed.
///
/// ## Behavior
/// - Text that isn't a whole number in 1..=999: validation error, cart
///   unchanged
/// - Plant not in cart: nothing changes, current cart returned
///
/// ## Arguments
/// * `plant_id` - Plant in cart
/// * `quantity` - Raw quantity input
pub fn update_cart_item(
    session: &SessionState,
    plant_id: PlantId,
    quantity: &str,
) -> Result<CartResponse, ApiError> {
    debug!(plant_id = %plant_id, quantity = %quantity, "update_cart_item command");

    let quantity = parse_quantity(quantity)?;

    Ok(session.with_session_mut(|s| {
        if !s.cart_mut().set_quantity(plant_id, quantity) {
            debug!(plant_id = %plant_id, "plant not in cart, nothing to update");
        }
        CartResponse::from(s.cart())
    }))
}

/// Removes a plant from the cart.
///
/// Removing a plant that isn't in the cart is not an error.
pub fn remove_from_cart(session: &SessionState, plant_id: PlantId) -> CartResponse {
    debug!(plant_id = %plant_id, "remove_from_cart command");

    session.with_session_mut(|s| {
        if s.cart_mut().remove_item(plant_id).is_none() {
            debug!(plant_id = %plant_id, "plant not in cart, nothing to remove");
        }
        CartResponse::from(s.cart())
    })
}

/// Clears all items from the cart.
///
/// ## Returns
/// Empty cart
pub fn clear_cart(session: &SessionState) -> CartResponse {
    debug!("clear_cart command");

    session.with_session_mut(|s| {
        s.cart_mut().clear();
        CartResponse::from(s.cart())
    })
}

//! # paradise-core: Pure Storefront Logic for Paradise Nursery
//!
//! This crate holds everything the storefront knows about plants, carts and
//! which page is showing. It has zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Paradise Nursery Architecture                       │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Presentation (apps/terminal)                    │   │
//! │  │      Landing view ──► Catalog view ──► Cart view                │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ user actions                           │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                        Commands                                 │   │
//! │  │      add_to_cart, update_cart_item, remove_from_cart, navigate  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ paradise-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  catalog  │  │   money   │  │   cart    │  │  session  │  │   │
//! │  │   │  Plant    │  │   Money   │  │   Cart    │  │  Session  │  │   │
//! │  │   │  Catalog  │  │           │  │ CartEntry │  │ ViewState │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO GLOBAL MUTABLE STATE • PURE FUNCTIONS             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Identifiers and value types (PlantId, Category, Quantity)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`catalog`] - Plant records and the built-in catalog
//! - [`cart`] - The cart store and its derived totals
//! - [`view`] - Page selector
//! - [`session`] - Session-scoped owner of cart and view
//! - [`validation`] - Boundary validation for user input
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use paradise_core::{Catalog, PlantId, Session, ViewState};
//!
//! let mut session = Session::new(Catalog::builtin());
//! session.navigate(ViewState::Catalog);
//!
//! let snake_plant = PlantId::new(1);
//! session.cart_mut().add_item(snake_plant).unwrap();
//! session.cart_mut().add_item(snake_plant).unwrap();
//!
//! assert_eq!(session.cart().total_item_count(), 2);
//! assert_eq!(session.cart().total_price().to_string(), "$59.98");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod error;
pub mod money;
pub mod session;
pub mod types;
pub mod validation;
pub mod view;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartEntry, CartLine, CartTotals};
pub use catalog::{Catalog, Plant};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use session::Session;
pub use types::*;
pub use view::ViewState;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum quantity of a single plant in the cart.
///
/// ## Business Reason
/// Prevents accidental over-ordering (e.g., typing 1000 instead of 10).
pub const MAX_ITEM_QUANTITY: i64 = 999;

/// Placeholder image used by every plant in the built-in catalog.
pub const PLACEHOLDER_THUMBNAIL: &str = "https://via.placeholder.com/150";

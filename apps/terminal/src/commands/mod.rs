//! # Commands Module
//!
//! Every operation the presentation layer can trigger.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs         ◄─── You are here (exports)
//! ├── cart.rs        ◄─── Cart manipulation
//! ├── catalog.rs     ◄─── Plant listing and lookup
//! ├── config.rs      ◄─── Configuration
//! └── navigation.rs  ◄─── Page selection
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  Shell                                                                  │
//! │  ─────                                                                  │
//! │  > qty 3 5                                                              │
//! │         │                                                               │
//! │         │ (Action::SetQuantity)                                         │
//! │         ▼                                                               │
//! │  fn update_cart_item(                                                   │
//! │      session: &SessionState,  ◄── State handle                         │
//! │      plant_id: PlantId,       ◄── Parsed from input                    │
//! │      quantity: &str,          ◄── Raw input, validated here            │
//! │  ) -> Result<CartResponse, ApiError>                                    │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Shell re-renders the current view                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each command declares only the state it needs: catalog commands take
//! the catalog, the config command takes the configuration, cart and
//! navigation commands take the session.

pub mod cart;
pub mod catalog;
pub mod config;
pub mod navigation;

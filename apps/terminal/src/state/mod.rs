//! # State Module
//!
//! Manages application state for the terminal storefront.
//!
//! ## Why Two State Types?
//! The session changes with every action; configuration never changes after
//! startup. Keeping them apart lets each command ask for exactly what it
//! needs.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │          ┌──────────────────────┐      ┌──────────────────────┐        │
//! │          │    SessionState      │      │     ConfigState      │        │
//! │          │                      │      │                      │        │
//! │          │  Arc<Mutex<          │      │  store_name          │        │
//! │          │    Session           │      │  tagline             │        │
//! │          │  >>                  │      │  currency_symbol     │        │
//! │          └──────────────────────┘      └──────────────────────┘        │
//! │                                                                         │
//! │  • SessionState: cart + current view, exclusive access per action      │
//! │  • ConfigState: Read-only after initialization                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod session;

pub use config::ConfigState;
pub use session::SessionState;

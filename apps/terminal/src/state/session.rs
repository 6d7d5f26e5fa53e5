//! # Session State
//!
//! The one owned handle to the shopper's session.
//!
//! ## Access Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Session State Operations                             │
//! │                                                                         │
//! │  Shell Action             Command                  Session Change       │
//! │  ────────────             ───────                  ──────────────       │
//! │                                                                         │
//! │  add 1 ──────────────────► add_to_cart() ────────► cart.add_item       │
//! │                                                                         │
//! │  qty 1 5 ────────────────► update_cart_item() ───► cart.set_quantity   │
//! │                                                                         │
//! │  remove 1 ───────────────► remove_from_cart() ───► cart.remove_item    │
//! │                                                                         │
//! │  shop / cart / home ─────► navigate() ───────────► view = ...          │
//! │                                                                         │
//! │  (after every action) ───► render ───────────────► (read only)         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The session is created once in `run_shop` and dropped when the shell exits.

use std::sync::{Arc, Mutex, PoisonError};

use paradise_core::{Catalog, Session};

/// Shareable handle to the session.
///
/// ## Thread Safety
/// Uses `Arc<Mutex<Session>>` so the handle can be cloned into anything
/// that needs it. A poisoned lock is recovered rather than propagated:
/// every cart mutation is a single assignment, so the session is never
/// left half-updated.
#[derive(Debug, Clone)]
pub struct SessionState {
    session: Arc<Mutex<Session<'static>>>,
}

impl SessionState {
    /// Starts a new session over `catalog`.
    pub fn new(catalog: &'static Catalog) -> Self {
        SessionState {
            session: Arc::new(Mutex::new(Session::new(catalog))),
        }
    }

    /// Executes a function with read access to the session.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let totals = session_state.with_session(|s| s.cart().totals());
    /// ```
    pub fn with_session<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Session<'static>) -> R,
    {
        let session = self.session.lock().unwrap_or_else(PoisonError::into_inner);
        f(&session)
    }

    /// Executes a function with write access to the session.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// session_state.with_session_mut(|s| s.cart_mut().add_item(plant_id))?;
    /// ```
    pub fn with_session_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Session<'static>) -> R,
    {
        let mut session = self.session.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut session)
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(Catalog::builtin())
    }
}

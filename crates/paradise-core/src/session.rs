//! # Session
//!
//! One shopper's visit: the cart plus the page being shown.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  Session::new(catalog)                                                  │
//! │      │   empty cart, view = Landing, fresh session id                   │
//! │      ▼                                                                  │
//! │  user actions ──► cart_mut().add_item / set_quantity / remove_item      │
//! │               ──► navigate(view)                                        │
//! │      │                                                                  │
//! │      ▼                                                                  │
//! │  drop(session)   nothing persists                                       │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! There is no global state: whoever creates the session owns it and hands
//! it (or a handle to it) to whatever needs it.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::cart::Cart;
use crate::catalog::Catalog;
use crate::view::ViewState;

/// Session-scoped owner of the cart and the current view.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Session<'c> {
    id: Uuid,
    started_at: DateTime<Utc>,
    view: ViewState,
    cart: Cart<'c>,
}

impl<'c> Session<'c> {
    /// Starts a session on the landing page with an empty cart.
    pub fn new(catalog: &'c Catalog) -> Self {
        Session {
            id: Uuid::new_v4(),
            started_at: Utc::now(),
            view: ViewState::default(),
            cart: Cart::new(catalog),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn catalog(&self) -> &'c Catalog {
        self.cart.catalog()
    }

    pub fn view(&self) -> ViewState {
        self.view
    }

    /// Switches to `view` and returns the view that was showing.
    ///
    /// Never touches the cart.
    pub fn navigate(&mut self, view: ViewState) -> ViewState {
        std::mem::replace(&mut self.view, view)
    }

    pub fn cart(&self) -> &Cart<'c> {
        &self.cart
    }

    pub fn cart_mut(&mut self) -> &mut Cart<'c> {
        &mut self.cart
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PlantId;

    #[test]
    fn test_new_session_starts_on_landing_with_empty_cart() {
        let session = Session::new(Catalog::builtin());
        assert_eq!(session.view(), ViewState::Landing);
        assert!(session.cart().is_empty());
    }

    #[test]
    fn test_sessions_get_distinct_ids() {
        let a = Session::new(Catalog::builtin());
        let b = Session::new(Catalog::builtin());
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_navigate_returns_previous_view() {
        let mut session = Session::new(Catalog::builtin());
        assert_eq!(session.navigate(ViewState::Catalog), ViewState::Landing);
        assert_eq!(session.navigate(ViewState::Cart), ViewState::Catalog);
        assert_eq!(session.view(), ViewState::Cart);
    }

    #[test]
    fn test_navigation_preserves_cart() {
        let mut session = Session::new(Catalog::builtin());
        session.navigate(ViewState::Catalog);
        session.cart_mut().add_item(PlantId::new(1)).unwrap();
        session.cart_mut().add_item(PlantId::new(4)).unwrap();
        let before = session.cart().entries().to_vec();

        session.navigate(ViewState::Cart);
        session.navigate(ViewState::Catalog);
        session.navigate(ViewState::Landing);
        session.navigate(ViewState::Cart);

        assert_eq!(session.cart().entries(), before.as_slice());
        assert_eq!(session.cart().total_item_count(), 2);
    }
}

//! # Navigation Commands
//!
//! Page selection. Any page can be reached from any other.

use tracing::debug;

use crate::state::SessionState;
use paradise_core::ViewState;

/// Switches the session to `view` and returns it.
pub fn navigate(session: &SessionState, view: ViewState) -> ViewState {
    let previous = session.with_session_mut(|s| s.navigate(view));
    debug!(from = %previous, to = %view, "navigate command");
    view
}

pub fn current_view(session: &SessionState) -> ViewState {
    session.with_session(|s| s.view())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::cart::{add_to_cart, get_cart};
    use paradise_core::PlantId;

    #[test]
    fn test_landing_catalog_cart_catalog_keeps_cart() {
        let session = SessionState::default();
        assert_eq!(current_view(&session), ViewState::Landing);

        navigate(&session, ViewState::Catalog);
        add_to_cart(&session, PlantId::new(1)).unwrap();
        add_to_cart(&session, PlantId::new(3)).unwrap();
        let before = get_cart(&session);

        navigate(&session, ViewState::Cart);
        assert_eq!(get_cart(&session), before);

        navigate(&session, ViewState::Catalog);
        assert_eq!(get_cart(&session), before);
        assert_eq!(current_view(&session), ViewState::Catalog);
    }
}

//! # Rendering
//!
//! Turns state into text. Nothing here mutates anything.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │ Paradise Nursery                                  Cart (3)   │
//! │ Bringing the beauty of nature to your home.                  │
//! ├──────────────────────────────────────────────────────────────┤
//! │ [1] Snake Plant          $29.99   air purifying              │
//! │     Air purifying plant                                      │
//! │ ...                                                          │
//! └──────────────────────────────────────────────────────────────┘
//! ```

use paradise_core::{CartTotals, Plant, ViewState};

use crate::commands::cart::CartResponse;
use crate::state::ConfigState;

const RULE: &str = "------------------------------------------------------------";

/// Renders whichever view is current.
pub fn render_view(
    view: ViewState,
    config: &ConfigState,
    plants: &[Plant],
    cart: &CartResponse,
) -> String {
    match view {
        ViewState::Landing => render_landing(config),
        ViewState::Catalog => render_catalog(config, plants, &cart.totals),
        ViewState::Cart => render_cart(config, cart),
    }
}

pub fn render_landing(config: &ConfigState) -> String {
    [
        String::new(),
        config.store_name.clone(),
        config.tagline.clone(),
        String::new(),
        "Type 'shop' to get started.".to_string(),
    ]
    .join("\n")
}

pub fn render_catalog(config: &ConfigState, plants: &[Plant], totals: &CartTotals) -> String {
    let mut lines = header(config, &format!("Cart ({})", totals.total_items));

    for plant in plants {
        lines.push(format!(
            "[{}] {:<20} {:>10}   {}",
            plant.id,
            plant.name,
            config.format_money(plant.price),
            plant.category
        ));
        lines.push(format!("    {}", plant.description));
    }

    lines.push(RULE.to_string());
    lines.push("Type 'add <id>' to add a plant, 'cart' to view your cart.".to_string());
    lines.join("\n")
}

pub fn render_cart(config: &ConfigState, cart: &CartResponse) -> String {
    let mut lines = header(config, "Continue shopping: 'shop'");

    if cart.items.is_empty() {
        lines.push("Your cart is empty.".to_string());
    }

    for line in &cart.items {
        lines.push(format!(
            "[{}] {:<20} Quantity: {:<4} {:>10}",
            line.plant_id,
            line.name,
            line.quantity.get(),
            config.format_money(line.line_total)
        ));
        lines.push(format!("    {}", line.description));
    }

    lines.push(RULE.to_string());
    lines.push("Cart Summary".to_string());
    lines.push(format!("Total Items: {}", cart.totals.total_items));
    lines.push(format!(
        "Total Price: {}",
        config.format_money(cart.totals.total_price)
    ));
    lines.push(String::new());
    lines.push("Type 'qty <id> <n>' to change a quantity, 'remove <id>' to remove a plant.".to_string());
    lines.join("\n")
}

pub fn render_help() -> String {
    [
        "Commands:",
        "  home              go to the landing page",
        "  shop              browse plants",
        "  cart              view your cart",
        "  add <id>          add one of a plant to the cart",
        "  remove <id>       remove a plant from the cart",
        "  qty <id> <n>      set how many of a plant are in the cart",
        "  clear             empty the cart",
        "  help              show this list",
        "  quit              leave the store",
    ]
    .join("\n")
}

fn header(config: &ConfigState, right: &str) -> Vec<String> {
    vec![
        String::new(),
        format!("{:<44}{:>16}", config.store_name, right),
        config.tagline.clone(),
        RULE.to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::cart::{add_to_cart, get_cart, update_cart_item};
    use crate::state::SessionState;
    use paradise_core::{Catalog, PlantId};

    #[test]
    fn test_landing_shows_store_name_and_tagline() {
        let out = render_landing(&ConfigState::default());
        assert!(out.contains("Paradise Nursery"));
        assert!(out.contains("Bringing the beauty of nature to your home."));
    }

    #[test]
    fn test_catalog_lists_plants_and_badge() {
        let session = SessionState::default();
        add_to_cart(&session, PlantId::new(1)).unwrap();
        add_to_cart(&session, PlantId::new(1)).unwrap();

        let out = render_catalog(
            &ConfigState::default(),
            Catalog::builtin().plants(),
            &get_cart(&session).totals,
        );

        assert!(out.contains("Cart (2)"));
        assert!(out.contains("Snake Plant"));
        assert!(out.contains("$29.99"));
        assert!(out.contains("Lavender"));
        assert!(out.contains("aromatic"));
    }

    #[test]
    fn test_cart_shows_lines_and_summary() {
        let session = SessionState::default();
        add_to_cart(&session, PlantId::new(3)).unwrap();
        update_cart_item(&session, PlantId::new(3), "5").unwrap();

        let out = render_cart(&ConfigState::default(), &get_cart(&session));

        assert!(out.contains("Spider Plant"));
        assert!(out.contains("Total Items: 5"));
        assert!(out.contains("Total Price: $74.95"));
    }

    #[test]
    fn test_empty_cart() {
        let out = render_cart(&ConfigState::default(), &get_cart(&SessionState::default()));
        assert!(out.contains("Your cart is empty."));
        assert!(out.contains("Total Price: $0.00"));
    }

    #[test]
    fn test_render_view_dispatches() {
        let config = ConfigState::default();
        let cart = get_cart(&SessionState::default());
        let plants = Catalog::builtin().plants();

        assert!(render_view(ViewState::Landing, &config, plants, &cart).contains("get started"));
        assert!(render_view(ViewState::Catalog, &config, plants, &cart).contains("Cart (0)"));
        assert!(render_view(ViewState::Cart, &config, plants, &cart).contains("Cart Summary"));
    }
}

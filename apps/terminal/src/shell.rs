//! # Shell
//!
//! The interactive loop: one action per line, then a re-render.
//!
//! ## Loop
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  render current view                                                    │
//! │      │                                                                  │
//! │      ▼                                                                  │
//! │  read line ──► Action::from_str ──► apply ──► render current view ──┐   │
//! │      ▲              │ error              │ error                    │   │
//! │      │              ▼                    ▼                          │   │
//! │      │         print "error: ..."   print "error: ..."              │   │
//! │      └──────────────────────────────────────────────────────────────┘   │
//! │                                                                         │
//! │  "quit" or end of input ends the loop                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::{BufRead, Write};
use std::str::FromStr;

use tracing::{debug, info};

use crate::commands::{cart, catalog, navigation};
use crate::error::{ApiError, RunError};
use crate::render;
use crate::state::{ConfigState, SessionState};
use paradise_core::{PlantId, ViewState};

const PROMPT: &str = "> ";

/// Something the shopper asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Navigate(ViewState),
    Add(PlantId),
    Remove(PlantId),
    /// Quantity stays raw text; the cart command validates it.
    SetQuantity(PlantId, String),
    Clear,
    Help,
    Quit,
}

impl FromStr for Action {
    type Err = ApiError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let words: Vec<&str> = line.split_whitespace().collect();

        let action = match words.as_slice() {
            ["add", id] => Action::Add(id.parse()?),
            ["remove" | "rm", id] => Action::Remove(id.parse()?),
            ["qty" | "quantity", id, qty] => Action::SetQuantity(id.parse()?, qty.to_string()),
            ["clear"] => Action::Clear,
            ["help" | "?"] => Action::Help,
            ["quit" | "exit" | "q"] => Action::Quit,
            [view] => Action::Navigate(
                view.parse()
                    .map_err(|_| ApiError::unknown_command(line.trim()))?,
            ),
            _ => return Err(ApiError::unknown_command(line.trim())),
        };

        Ok(action)
    }
}

/// Applies an action to the session. `Help` and `Quit` are handled by the
/// loop and do nothing here.
pub fn apply(session: &SessionState, action: Action) -> Result<(), ApiError> {
    match action {
        Action::Navigate(view) => {
            navigation::navigate(session, view);
        }
        Action::Add(plant_id) => {
            cart::add_to_cart(session, plant_id)?;
        }
        Action::Remove(plant_id) => {
            cart::remove_from_cart(session, plant_id);
        }
        Action::SetQuantity(plant_id, quantity) => {
            cart::update_cart_item(session, plant_id, &quantity)?;
        }
        Action::Clear => {
            cart::clear_cart(session);
        }
        Action::Help | Action::Quit => {}
    }
    Ok(())
}

/// Renders the session's current view.
pub fn render_current(session: &SessionState, config: &ConfigState) -> String {
    let view = navigation::current_view(session);
    let plants = session.with_session(|s| catalog::list_plants(s.catalog(), None));
    let cart = cart::get_cart(session);
    render::render_view(view, config, &plants, &cart)
}

/// Runs the interactive loop until `quit` or end of input.
pub fn run_shell<R, W>(
    session: &SessionState,
    config: &ConfigState,
    input: R,
    mut output: W,
) -> Result<(), RunError>
where
    R: BufRead,
    W: Write,
{
    let (session_id, started_at) = session.with_session(|s| (s.id(), s.started_at()));
    info!(session_id = %session_id, started_at = %started_at, "session started");

    writeln!(output, "{}", render_current(session, config))?;
    write!(output, "{}", PROMPT)?;
    output.flush()?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            write!(output, "{}", PROMPT)?;
            output.flush()?;
            continue;
        }

        match line.parse::<Action>() {
            Ok(Action::Quit) => break,
            Ok(Action::Help) => writeln!(output, "{}", render::render_help())?,
            Ok(action) => {
                debug!(action = ?action, "applying action");
                match apply(session, action) {
                    Ok(()) => writeln!(output, "{}", render_current(session, config))?,
                    Err(e) => writeln!(output, "error: {}", e.message)?,
                }
            }
            Err(e) => writeln!(output, "error: {}", e.message)?,
        }

        write!(output, "{}", PROMPT)?;
        output.flush()?;
    }

    let totals = cart::get_cart(session).totals;
    info!(
        session_id = %session_id,
        total_items = totals.total_items,
        total_price = %totals.total_price,
        "session ended"
    );
    writeln!(output)?;
    writeln!(output, "Thanks for visiting {}!", config.store_name)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    fn run(input: &str) -> (SessionState, String) {
        let session = SessionState::default();
        let mut out = Vec::new();
        run_shell(&session, &ConfigState::default(), input.as_bytes(), &mut out).unwrap();
        (session, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_parse_actions() {
        assert_eq!("add 1".parse(), Ok(Action::Add(PlantId::new(1))));
        assert_eq!("  remove   4 ".parse(), Ok(Action::Remove(PlantId::new(4))));
        assert_eq!(
            "qty 3 5".parse(),
            Ok(Action::SetQuantity(PlantId::new(3), "5".to_string()))
        );
        assert_eq!("shop".parse(), Ok(Action::Navigate(ViewState::Catalog)));
        assert_eq!("home".parse(), Ok(Action::Navigate(ViewState::Landing)));
        assert_eq!("cart".parse(), Ok(Action::Navigate(ViewState::Cart)));
        assert_eq!("quit".parse(), Ok(Action::Quit));
    }

    #[test]
    fn test_parse_errors() {
        let err = "dance".parse::<Action>().unwrap_err();
        assert_eq!(err.code, ErrorCode::UnknownCommand);

        let err = "add snake".parse::<Action>().unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        let err = "add".parse::<Action>().unwrap_err();
        assert_eq!(err.code, ErrorCode::UnknownCommand);
    }

    #[test]
    fn test_session_flow() {
        let (session, out) = run("shop\nadd 1\nadd 1\ncart\nquit\n");

        assert!(out.contains("Cart (2)"));
        assert!(out.contains("Total Items: 2"));
        assert!(out.contains("Total Price: $59.98"));
        assert!(out.contains("Thanks for visiting Paradise Nursery!"));
        assert_eq!(navigation::current_view(&session), ViewState::Cart);
    }

    #[test]
    fn test_invalid_quantity_reports_and_continues() {
        let (session, out) = run("add 3\nqty 3 abc\nqty 3 -1\nqty 3 5\n");

        assert!(out.contains("error: quantity has invalid format: must be a whole number"));
        assert!(out.contains("error: quantity must be positive"));
        assert_eq!(cart::get_cart(&session).totals.total_items, 5);
    }

    #[test]
    fn test_unknown_plant_and_command() {
        let (session, out) = run("add 9\nwater plants\n");

        assert!(out.contains("error: Plant not found: 9"));
        assert!(out.contains("error: Unknown command 'water plants'"));
        assert!(cart::get_cart(&session).items.is_empty());
    }

    #[test]
    fn test_remove_and_clear() {
        let (session, _) = run("add 2\nadd 4\nremove 2\n");
        let cart = cart::get_cart(&session);
        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.totals.total_price.cents(), 2499);

        let (session, out) = run("add 2\nadd 4\nclear\ncart\n");
        assert!(out.contains("Your cart is empty."));
        assert!(cart::get_cart(&session).items.is_empty());
    }

    #[test]
    fn test_help_and_blank_lines() {
        let (_, out) = run("\n   \nhelp\n");
        assert!(out.contains("qty <id> <n>"));
    }
}

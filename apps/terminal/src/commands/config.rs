//! # Config Commands
//!
//! Read-only access to the resolved storefront configuration.

use tracing::debug;

use crate::state::ConfigState;

/// Gets the current configuration.
pub fn get_config(config: &ConfigState) -> ConfigState {
    debug!("get_config command");
    config.clone()
}

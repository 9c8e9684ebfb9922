//! Console configuration embedded at build time.

use teshdesk_core::ConsoleConfig;
use tracing::{info, warn};

const EMBEDDED_CONFIG: &str = include_str!("../console.toml");

/// Parse the embedded `console.toml`, falling back to defaults on error.
pub fn load() -> ConsoleConfig {
    match ConsoleConfig::from_toml_str(EMBEDDED_CONFIG) {
        Ok(config) => {
            info!(mode = ?config.api.mode, page_size = config.ui.page_size.get(), "Loaded console config");
            config
        }
        Err(e) => {
            warn!(error = %e, "Invalid console.toml, using defaults");
            ConsoleConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_is_valid() {
        let config = ConsoleConfig::from_toml_str(EMBEDDED_CONFIG).unwrap();
        assert_eq!(config, ConsoleConfig::default());
    }
}

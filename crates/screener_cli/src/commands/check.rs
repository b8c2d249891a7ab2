//! Check command implementation
//!
//! Prints the effective configuration after overrides and validation.

use screener_core::OptionChainCache;
use tracing::info;

use super::print_text;
use crate::config::ScreenerConfig;
use crate::{CliError, Result};

/// Run the check command
pub fn run(config: &ScreenerConfig) -> Result<()> {
    info!("Checking configuration...");

    let cache = OptionChainCache::new(config.cache_capacity)?;
    info!("  Option chain cache capacity: {}", cache.capacity());

    let options = config.heatmap_options()?;
    info!("  Heatmap scale floor: {:.1}%", options.scale_floor);

    let rendered = toml::to_string_pretty(config)
        .map_err(|e| CliError::InvalidArgument(format!("Cannot render configuration: {}", e)))?;
    print_text(&rendered)?;

    info!("Configuration OK");
    Ok(())
}

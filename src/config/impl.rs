use std::sync::{Arc, OnceLock};

use super::StaticConfig;
use crate::errors::Result;

static CONFIG: OnceLock<Arc<StaticConfig>> = OnceLock::new();

/// Initialize the global configuration
///
/// Loads configuration from the given TOML file (or "config.toml" in the
/// current directory) plus `GAMEHUB__*` environment variables.
/// Subsequent calls return the already-initialized instance.
pub fn init_config(path: Option<&str>) -> Result<Arc<StaticConfig>> {
    if let Some(config) = CONFIG.get() {
        return Ok(config.clone());
    }
    let loaded = Arc::new(StaticConfig::load(path)?);
    Ok(CONFIG.get_or_init(|| loaded).clone())
}


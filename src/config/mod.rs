mod types;

pub use types::*;

use crate::{Error, Result};
use std::env;
use std::io::ErrorKind;
use tracing::debug;

/// Loads node configuration from `CONFIG_PATH` (default `config.yaml`).
///
/// Every field has a workable default, so a missing default file yields
/// `Config::default()`; an explicitly configured path must exist.
pub async fn load() -> Result<Config> {
    let explicit_path = env::var("CONFIG_PATH").ok();
    let config_path = explicit_path
        .clone()
        .unwrap_or_else(|| "config.yaml".to_string());

    debug!("Loading node configuration from: {}", config_path);

    let config_str = match tokio::fs::read_to_string(&config_path).await {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound && explicit_path.is_none() => {
            debug!("No {} found, using built-in defaults", config_path);
            return Ok(Config::default());
        }
        Err(e) => {
            return Err(Error::config(format!(
                "Failed to read {}: {}",
                config_path, e
            )));
        }
    };

    let config: Config = serde_yaml::from_str(&config_str)
        .map_err(|e| Error::config(format!("Failed to parse {}: {}", config_path, e)))?;

    Ok(config)
}

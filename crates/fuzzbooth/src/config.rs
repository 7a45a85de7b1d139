//! JSON configuration loading

use std::fs;
use std::path::Path;

use fuzzbooth_core::MatchConfig;

use crate::error::{Error, Result};

/// Parse and validate a JSON config. Missing fields take their defaults.
pub fn from_json_str(json: &str) -> Result<MatchConfig> {
    let config: MatchConfig = serde_json::from_str(json)?;
    config.validate()?;
    Ok(config)
}

/// Read a JSON config file
pub fn load_config(path: impl AsRef<Path>) -> Result<MatchConfig> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    if contents.trim().is_empty() {
        return Err(Error::Config(format!("{} is empty", path.display())));
    }
    from_json_str(&contents)
}

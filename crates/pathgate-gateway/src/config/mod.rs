//! Gateway config loader (strict parsing).

pub mod schema;

use std::fs;

use pathgate_core::error::{PathGateError, Result};

pub use schema::{GatewayConfig, GatewaySection, GrantSourceConfig, IdentitySection};

/// Environment variable naming the config file.
pub const CONFIG_ENV: &str = "PATHGATE_CONFIG";
const DEFAULT_CONFIG_PATH: &str = "pathgate.yaml";

/// Config path from `PATHGATE_CONFIG`, falling back to `pathgate.yaml`.
pub fn config_path() -> String {
    std::env::var(CONFIG_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string())
}

pub fn load_from_file(path: &str) -> Result<GatewayConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| PathGateError::Internal(format!("read config failed ({path}): {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<GatewayConfig> {
    let cfg: GatewayConfig = serde_yaml::from_str(s)
        .map_err(|e| PathGateError::BadRequest(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}

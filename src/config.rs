//! Server configuration for the payroll coverage API.
//!
//! Configuration is read from a YAML file and may be overridden from the
//! command line.
//!
//! # Example
//!
//! ```no_run
//! use payroll_coverage::config::ServerConfig;
//!
//! let config = ServerConfig::load("./config.yaml").unwrap();
//! println!("Serving on {}", config.bind_address);
//! ```

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{PayrollError, PayrollResult};

/// Default address the API listens on.
pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:8080";

/// Settings for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerConfig {
    /// Socket address to listen on, e.g. `0.0.0.0:8080`.
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
    /// Directory holding `employees.yaml` and `paystubs.yaml`.
    pub data_dir: PathBuf,
}

fn default_bind_address() -> String {
    DEFAULT_BIND_ADDRESS.to_string()
}

impl ServerConfig {
    /// Loads and validates configuration from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> PayrollResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| PayrollError::ConfigError {
            message: format!("cannot read {}: {}", path.display(), e),
        })?;
        Self::from_yaml(&content)
    }

    /// Parses and validates configuration from YAML text.
    pub fn from_yaml(content: &str) -> PayrollResult<Self> {
        let config: Self =
            serde_yaml::from_str(content).map_err(|e| PayrollError::ConfigError {
                message: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that every setting is usable.
    pub fn validate(&self) -> PayrollResult<()> {
        if self.bind_address.trim().is_empty() {
            return Err(PayrollError::ConfigError {
                message: "bind_address is empty".to_string(),
            });
        }
        if self.data_dir.as_os_str().is_empty() {
            return Err(PayrollError::ConfigError {
                message: "data_dir is empty".to_string(),
            });
        }
        Ok(())
    }
}

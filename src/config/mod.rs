// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the npk-bridge project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! Application configuration
//!
//! Configuration is read from a YAML file and can be overridden from the
//! command line. Every value has a default matching the reference field
//! deployment (sensor on `/dev/ttyS0` at 115200 baud, HTTP server on
//! `0.0.0.0:8000`), so the bridge also runs with no configuration file
//! at all.

mod serial;
mod server;
pub mod utils;

pub use serial::SerialConfig;
pub use server::ServerConfig;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Top-level configuration for the NPK bridge.
///
/// # Example
///
/// ```yaml
/// serial:
///   port: /dev/ttyS0
///   baud_rate: 115200
///   timeout_ms: 1000
///   frame_length: 12
/// server:
///   address: 0.0.0.0
///   port: 8000
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Serial sensor settings.
    #[serde(default)]
    pub serial: SerialConfig,

    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
}

impl Config {
    /// Load and validate a configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read, is not valid YAML for this
    /// schema, or violates one of the validation rules in
    /// [`utils::validate_specific_rules`].
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;

        let config: Config = serde_yml::from_str(&contents)
            .with_context(|| format!("Failed to parse configuration file: {}", path.display()))?;

        utils::validate_specific_rules(&config)?;

        Ok(config)
    }

    /// Apply command line overrides on top of the loaded configuration.
    ///
    /// Only values the user actually passed are applied; `None` leaves
    /// the configured value in place.
    pub fn apply_args(
        &mut self,
        web_port: Option<u16>,
        web_address: Option<String>,
        serial_port: Option<String>,
        baud_rate: Option<u32>,
        mock: bool,
    ) {
        if let Some(port) = web_port {
            self.server.port = port;
        }
        if let Some(address) = web_address {
            self.server.address = address;
        }
        if let Some(port) = serial_port {
            self.serial.port = port;
        }
        if let Some(baud) = baud_rate {
            self.serial.baud_rate = baud;
        }
        if mock {
            self.serial.mock = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_match_reference_deployment() {
        let config = Config::default();
        assert_eq!(config.serial.port, "/dev/ttyS0");
        assert_eq!(config.serial.baud_rate, 115200);
        assert_eq!(config.serial.timeout_ms, 1000);
        assert_eq!(config.serial.frame_length, 12);
        assert!(!config.serial.mock);
        assert!(config.server.enabled);
        assert_eq!(config.server.address, "0.0.0.0");
        assert_eq!(config.server.port, 8000);
    }

    #[test]
    fn test_from_file_partial_yaml_fills_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "serial:\n  port: /dev/ttyUSB0\nserver:\n  port: 9000").unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.serial.port, "/dev/ttyUSB0");
        assert_eq!(config.serial.baud_rate, 115200);
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.address, "0.0.0.0");
    }

    #[test]
    fn test_from_file_rejects_invalid_values() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "serial:\n  frame_length: 0").unwrap();

        assert!(Config::from_file(file.path()).is_err());
    }

    #[test]
    fn test_from_file_missing_file_is_an_error() {
        assert!(Config::from_file("/nonexistent/config.yaml").is_err());
    }

    #[test]
    fn test_apply_args_overrides_only_given_values() {
        let mut config = Config::default();
        config.apply_args(Some(9000), None, Some("/dev/ttyUSB1".to_string()), None, true);

        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.address, "0.0.0.0");
        assert_eq!(config.serial.port, "/dev/ttyUSB1");
        assert_eq!(config.serial.baud_rate, 115200);
        assert!(config.serial.mock);
    }
}

// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the npk-bridge project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! Configuration utilities
//!
//! This module provides validation helpers for configuration settings
//! that cannot be expressed through the type system alone.

use anyhow::Result;
use log::debug;

use super::Config;

/// Check if a string is a valid IP address
///
/// Validates that a string represents a valid IPv4 or IPv6 address,
/// or is one of the special values like "localhost" or "0.0.0.0".
///
/// ### Arguments
///
/// * `addr` - The address string to validate
///
/// ### Returns
///
/// `true` if the address is valid, `false` otherwise
pub fn is_valid_ip_address(addr: &str) -> bool {
    if addr.parse::<std::net::IpAddr>().is_ok() {
        return true;
    }

    // Special cases
    matches!(addr, "localhost" | "::" | "::0" | "0.0.0.0")
}

/// Validates the configuration against rules that aren't covered by deserialization.
///
/// ### Arguments
///
/// * `config` - The configuration object to validate
///
/// ### Returns
///
/// * `Ok(())` if all validations pass
/// * `Err(anyhow::Error)` with descriptive message if any validation fails
///
/// ### Validation Rules
///
/// - **Port Range**: the HTTP port must be within 1-65534
/// - **IP Address Format**: the bind address must be a valid IP address or special value
/// - **Serial Line**: device path non-empty, baud rate and timeout greater than zero
/// - **Frame Length**: must be greater than zero
pub fn validate_specific_rules(config: &Config) -> Result<()> {
    debug!("Performing additional validation checks");

    if config.server.port == 0 || config.server.port == 65535 {
        anyhow::bail!("HTTP port must be between 1 and 65534");
    }

    if !is_valid_ip_address(&config.server.address) {
        anyhow::bail!("Invalid HTTP bind address: {}", config.server.address);
    }

    if config.serial.port.is_empty() {
        anyhow::bail!("Serial device path must not be empty");
    }

    if config.serial.baud_rate == 0 {
        anyhow::bail!("Serial baud rate must be greater than zero");
    }

    if config.serial.timeout_ms == 0 {
        anyhow::bail!("Serial read timeout must be greater than zero");
    }

    if config.serial.frame_length == 0 {
        anyhow::bail!("Sensor frame length must be greater than zero");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_ip_address() {
        assert!(is_valid_ip_address("127.0.0.1"));
        assert!(is_valid_ip_address("0.0.0.0"));
        assert!(is_valid_ip_address("::1"));
        assert!(is_valid_ip_address("localhost"));
        assert!(!is_valid_ip_address("not-an-address"));
        assert!(!is_valid_ip_address(""));
    }

    #[test]
    fn test_validate_rejects_bad_port() {
        let mut config = Config::default();
        config.server.port = 0;
        assert!(validate_specific_rules(&config).is_err());
    }

    #[test]
    fn test_validate_rejects_empty_serial_path() {
        let mut config = Config::default();
        config.serial.port = String::new();
        assert!(validate_specific_rules(&config).is_err());
    }

    #[test]
    fn test_validate_accepts_defaults() {
        assert!(validate_specific_rules(&Config::default()).is_ok());
    }
}

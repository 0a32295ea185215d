// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the npk-bridge project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! HTTP server configuration
//!
//! This module defines the structure for configuring the HTTP server
//! component of the bridge.

use serde::{Deserialize, Serialize};

/// Configuration for the HTTP server component.
///
/// # Example
///
/// ```
/// use npk_bridge::config::ServerConfig;
///
/// let server_config = ServerConfig {
///     enabled: true,
///     port: 9000,
///     address: "127.0.0.1".to_string(),
///     name: "npk-bridge".to_string(),
/// };
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Flag to enable or disable the HTTP server.
    ///
    /// When disabled, the bridge starts but serves no requests; useful
    /// for validating sensor wiring from the logs alone.
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// The TCP port the server will listen on.
    ///
    /// Valid range is 1-65534. Default is 8000.
    #[serde(default = "default_http_port")]
    pub port: u16,

    /// The network address the server will bind to.
    ///
    /// Can be an IPv4/IPv6 address or a hostname. Default is "0.0.0.0",
    /// binding all interfaces so the bridge is reachable from the local
    /// network.
    #[serde(default = "default_address")]
    pub address: String,

    /// Server identity reported in the `Server` response header.
    #[serde(default = "default_name")]
    pub name: String,
}

fn default_enabled() -> bool {
    true
}

fn default_http_port() -> u16 {
    8000
}

fn default_address() -> String {
    "0.0.0.0".to_string()
}

fn default_name() -> String {
    "npk-bridge".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            port: default_http_port(),
            address: default_address(),
            name: default_name(),
        }
    }
}

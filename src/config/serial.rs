// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the npk-bridge project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! Serial sensor configuration
//!
//! This module defines the structure for configuring the serial
//! connection to the NPK sensor.

use serde::{Deserialize, Serialize};

/// Configuration for the serial-attached NPK sensor.
///
/// These settings describe the device path and line parameters of the
/// sensor, plus the shape of the frames it emits. The defaults match
/// the reference wiring of the sensor board.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SerialConfig {
    /// Device path of the serial port the sensor is attached to.
    ///
    /// Default is "/dev/ttyS0", the first hardware UART on most
    /// single-board computers.
    #[serde(default = "default_port")]
    pub port: String,

    /// Baud rate of the serial line.
    ///
    /// Must match the rate the sensor firmware is flashed for.
    /// Default is 115200.
    #[serde(default = "default_baud_rate")]
    pub baud_rate: u32,

    /// Read timeout in milliseconds for one frame.
    ///
    /// A request that receives no (or not enough) bytes within this
    /// window is answered from whatever arrived. Default is 1000 ms.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Number of bytes in one sensor frame.
    ///
    /// The sensor emits fixed-size ASCII frames; 12 bytes covers one
    /// `"<N>,<P>,<K>."` payload with padding. Must be greater than zero.
    #[serde(default = "default_frame_length")]
    pub frame_length: usize,

    /// Substitute a synthetic sensor source for the real hardware.
    ///
    /// When enabled, no serial port is opened and frames are generated
    /// in-process. Intended for development and testing.
    #[serde(default)]
    pub mock: bool,
}

fn default_port() -> String {
    "/dev/ttyS0".to_string()
}

fn default_baud_rate() -> u32 {
    115200
}

fn default_timeout_ms() -> u64 {
    1000
}

fn default_frame_length() -> usize {
    12
}

impl Default for SerialConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            baud_rate: default_baud_rate(),
            timeout_ms: default_timeout_ms(),
            frame_length: default_frame_length(),
            mock: false,
        }
    }
}

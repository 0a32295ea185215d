// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the npk-bridge project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! Serial sensor source
//!
//! Reads fixed-size frames from the NPK sensor over a serial port.

use std::io::Read;
use std::time::{Duration, Instant};

use log::{debug, info};
use serialport::SerialPort;

use super::{SensorError, SensorSource};
use crate::config::SerialConfig;

/// Sensor source backed by a real serial device.
///
/// The port is opened once and held for the lifetime of the source;
/// there is no reconnect logic. If the device disappears, reads fail
/// and the error propagates to the caller.
pub struct SerialSensor {
    port: Box<dyn SerialPort>,
    path: String,
    frame_length: usize,
    timeout: Duration,
}

impl SerialSensor {
    /// Open the serial device described by the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SensorError::Open`] if the device cannot be opened,
    /// for example because the path does not exist or the process lacks
    /// permission on it.
    pub fn open(config: &SerialConfig) -> Result<Self, SensorError> {
        let timeout = Duration::from_millis(config.timeout_ms);
        let port = serialport::new(&config.port, config.baud_rate)
            .timeout(timeout)
            .open()
            .map_err(|source| SensorError::Open {
                path: config.port.clone(),
                source,
            })?;

        info!(
            "Opened NPK sensor on {} at {} baud",
            config.port, config.baud_rate
        );

        Ok(Self {
            port,
            path: config.port.clone(),
            frame_length: config.frame_length,
            timeout,
        })
    }
}

impl SensorSource for SerialSensor {
    fn read_frame(&mut self) -> Result<Vec<u8>, SensorError> {
        let mut frame = vec![0u8; self.frame_length];
        let mut filled = 0usize;
        let start = Instant::now();

        // Accumulate until the frame is full or the read window closes.
        while filled < frame.len() && start.elapsed() < self.timeout {
            match self.port.read(&mut frame[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == std::io::ErrorKind::TimedOut => break,
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(SensorError::Io(e)),
            }
        }

        if filled < frame.len() {
            debug!(
                "Short frame from {}: {} of {} bytes",
                self.path,
                filled,
                frame.len()
            );
        }

        frame.truncate(filled);
        Ok(frame)
    }
}

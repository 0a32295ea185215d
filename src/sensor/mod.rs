// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the npk-bridge project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! Sensor acquisition module
//!
//! This module handles the acquisition of raw frames from the NPK
//! sensor, either from a real serial port or from a synthetic source
//! for development and testing.

use std::sync::Arc;

use tokio::sync::Mutex;

mod mock;
mod serial;

pub use mock::MockSensor;
pub use serial::SerialSensor;

use crate::config::SerialConfig;

/// Error types for sensor sources
#[derive(thiserror::Error, Debug)]
pub enum SensorError {
    #[error("Failed to open serial device '{path}': {source}")]
    Open {
        path: String,
        source: serialport::Error,
    },
    #[error("Sensor I/O failure: {0}")]
    Io(#[from] std::io::Error),
}

/// Represents a source of raw NPK sensor frames.
///
/// A frame is a byte sequence of at most the configured frame length;
/// short frames are possible when the device stops sending before the
/// read window closes.
pub trait SensorSource: Send {
    /// Read the next frame from the sensor.
    ///
    /// Blocks up to the source's read timeout. Returns the bytes that
    /// arrived within the window, which may be fewer than one full
    /// frame, or empty if the sensor sent nothing at all.
    fn read_frame(&mut self) -> Result<Vec<u8>, SensorError>;
}

/// A sensor source shared between request handlers.
///
/// The mutex serializes access so that two overlapping requests can
/// never interleave their reads on the same underlying byte stream.
pub type SharedSensor = Arc<Mutex<Box<dyn SensorSource>>>;

/// Open the configured serial device as a sensor source.
pub fn get_serial_sensor_source(config: &SerialConfig) -> Result<Box<dyn SensorSource>, SensorError> {
    Ok(Box::new(SerialSensor::open(config)?))
}

/// Get a synthetic sensor source that fabricates plausible NPK frames.
pub fn get_mock_sensor_source(config: &SerialConfig) -> Box<dyn SensorSource> {
    Box::new(MockSensor::new(config.frame_length))
}

/// Wrap a sensor source for sharing with request handlers.
pub fn into_shared(source: Box<dyn SensorSource>) -> SharedSensor {
    Arc::new(Mutex::new(source))
}

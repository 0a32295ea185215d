// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the npk-bridge project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! # Daemon Management Module
//!
//! This module provides functionality for running and managing the
//! background tasks of the bridge:
//!
//! - HTTP server exposing the NPK data endpoint
//! - System health monitoring (heartbeat)
//!
//! Each service runs as an independent Tokio task; the `Daemon`
//! structure tracks and coordinates these tasks and allows for graceful
//! startup and shutdown.
//!
//! ## Usage
//!
//! ```no_run
//! use npk_bridge::{config::Config, daemon::launch_daemon::Daemon};
//!
//! async fn example() -> anyhow::Result<()> {
//!     let config = Config::from_file("config.yaml")?;
//!
//!     let mut daemon = Daemon::new();
//!     daemon.launch(&config).await?;
//!
//!     // Later, trigger a graceful shutdown
//!     daemon.shutdown();
//!     daemon.join().await?;
//!
//!     Ok(())
//! }
//! ```

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};
use std::time::Duration;

use anyhow::Result;
use log::{debug, info, warn};
use rocket::config::LogLevel;
use tokio::task::JoinHandle;
use tokio::time;

use crate::config::Config;
use crate::sensor::{self, SharedSensor};
use crate::server::build_rocket;

/// Represents a daemon task manager that coordinates the background services
///
/// This structure maintains a collection of asynchronous tasks and
/// provides methods to start, stop, and wait for them. The `running`
/// flag is shared with each task so they can terminate gracefully when
/// shutdown is requested.
pub struct Daemon {
    tasks: Vec<JoinHandle<Result<()>>>,
    running: Arc<AtomicBool>,
    sensor: Option<SharedSensor>,
}

impl Default for Daemon {
    fn default() -> Self {
        Self::new()
    }
}

impl Daemon {
    /// Create a new daemon instance with an empty task list.
    pub fn new() -> Self {
        Daemon {
            tasks: Vec::new(),
            running: Arc::new(AtomicBool::new(true)),
            sensor: None,
        }
    }

    /// Launch all configured tasks based on configuration
    ///
    /// Opens the sensor source, then starts the HTTP server (if enabled)
    /// and the heartbeat monitor. Each service runs as a separate
    /// asynchronous task.
    ///
    /// # Errors
    ///
    /// This function can fail if:
    /// * The serial device cannot be opened
    /// * The web server fails to bind to the configured address/port
    pub async fn launch(&mut self, config: &Config) -> Result<()> {
        self.init_sensor(config)?;

        if config.server.enabled {
            self.start_web_server(config).await?;
        } else {
            info!("HTTP server is disabled in configuration");
        }

        self.start_heartbeat()?;

        Ok(())
    }

    /// Get the shared sensor source, if the daemon has been launched.
    pub fn get_sensor(&self) -> Option<SharedSensor> {
        self.sensor.clone()
    }

    /// Open the sensor source selected by the configuration.
    ///
    /// The mock source takes priority so a bridge can always be brought
    /// up on a machine without the sensor attached.
    fn init_sensor(&mut self, config: &Config) -> Result<()> {
        let source = if config.serial.mock {
            warn!("Using synthetic sensor source, no serial device will be opened");
            sensor::get_mock_sensor_source(&config.serial)
        } else {
            sensor::get_serial_sensor_source(&config.serial)?
        };

        self.sensor = Some(sensor::into_shared(source));
        Ok(())
    }

    /// Start the Rocket web server
    ///
    /// Configures a Rocket instance from the server section of the
    /// configuration and spawns it as a background task. The server
    /// keeps running until the process shuts down.
    async fn start_web_server(&mut self, config: &Config) -> Result<()> {
        info!(
            "Starting web server on {}:{}",
            config.server.address, config.server.port
        );

        let figment = rocket::Config::figment()
            .merge(("ident", config.server.name.clone()))
            .merge(("address", config.server.address.clone()))
            .merge(("port", config.server.port))
            .merge(("log_level", LogLevel::Normal));

        let sensor = self
            .sensor
            .clone()
            .ok_or_else(|| anyhow::anyhow!("Sensor source not initialized"))?;

        let rocket = build_rocket(figment, Arc::new(config.clone()), sensor);

        let task = tokio::spawn(async move {
            let ignited = rocket.ignite().await?;
            ignited.launch().await?;
            Ok(())
        });

        self.tasks.push(task);
        Ok(())
    }

    /// Start a heartbeat task that logs system status periodically
    ///
    /// The heartbeat runs every 60 seconds and continues until the
    /// daemon's `running` flag is set to `false`. In a production
    /// environment these messages can be monitored by an external
    /// system to detect a stalled bridge.
    fn start_heartbeat(&mut self) -> Result<()> {
        info!("Starting heartbeat monitor");

        let running = self.running.clone();
        let task = tokio::spawn(async move {
            while running.load(Ordering::SeqCst) {
                debug!("Daemon heartbeat: running");
                time::sleep(Duration::from_secs(60)).await;
            }
            Ok(())
        });

        self.tasks.push(task);
        Ok(())
    }

    /// Stop all running tasks gracefully
    ///
    /// Signals all spawned tasks to terminate by setting the shared
    /// `running` flag to `false`. This method only signals; call
    /// [`Daemon::join`] afterwards to wait for completion.
    pub fn shutdown(&self) {
        info!("Shutting down daemon tasks");
        self.running.store(false, Ordering::SeqCst);
    }

    /// Wait for all tasks to complete
    ///
    /// Consumes the daemon and waits for the spawned tasks to finish.
    /// Tasks that do not complete within a grace period (the web server
    /// blocks in its accept loop and never observes the running flag)
    /// are logged and abandoned rather than blocking process exit.
    pub async fn join(self) -> Result<()> {
        for task in self.tasks {
            match tokio::time::timeout(Duration::from_secs(5), task).await {
                Ok(result) => {
                    if let Err(e) = result {
                        log::error!("Task panicked: {}", e);
                    }
                }
                Err(_) => {
                    warn!("Task did not complete within timeout period, may be hung");
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_launch_with_mock_sensor_and_no_server() {
        let mut config = Config::default();
        config.serial.mock = true;
        config.server.enabled = false;

        let mut daemon = Daemon::new();
        daemon.launch(&config).await.unwrap();
        assert!(daemon.get_sensor().is_some());

        daemon.shutdown();
        daemon.join().await.unwrap();
    }

    #[tokio::test]
    async fn test_join_without_launch_is_a_noop() {
        let daemon = Daemon::new();
        daemon.shutdown();
        daemon.join().await.unwrap();
    }
}

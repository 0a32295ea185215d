// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the npk-bridge project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! Rocket server builder and configuration
//!
//! This module provides the function to build and configure the Rocket
//! server instance with its routes and state management.

use std::sync::Arc;

use rocket::figment::Figment;
use rocket::routes;
use rocket::{Build, Rocket};

use super::handlers::get_npk_data;
use crate::config::Config;
use crate::sensor::SharedSensor;

/// Build a configured Rocket server instance
///
/// ### Parameters
///
/// * `figment` - The Rocket configuration figment containing server settings
/// * `config` - The application configuration, exposed as managed state
/// * `sensor` - The shared sensor source serving `/npk-data`
///
/// ### Returns
///
/// A configured Rocket instance ready to be launched
///
/// ### Example
///
/// ```no_run
/// use rocket::figment::Figment;
/// use std::sync::Arc;
/// use npk_bridge::{config::Config, sensor, server};
///
/// async fn example() {
///     let config = Config::default();
///     let shared = sensor::into_shared(sensor::get_mock_sensor_source(&config.serial));
///     let figment = Figment::from(rocket::Config::default());
///     let rocket = server::build_rocket(figment, Arc::new(config), shared);
///     // rocket.launch().await.expect("Failed to launch");
/// }
/// ```
pub fn build_rocket(figment: Figment, config: Arc<Config>, sensor: SharedSensor) -> Rocket<Build> {
    rocket::custom(figment)
        .mount("/", routes![get_npk_data])
        .manage(sensor)
        .manage(config)
}

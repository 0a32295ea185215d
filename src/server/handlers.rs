// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the npk-bridge project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! Request handlers for the NPK data endpoint.

use log::{debug, error, warn};
use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::{get, State};
use serde::Serialize;

use crate::parsing::{parse_frame, NpkReading};
use crate::sensor::SharedSensor;

/// The two response body shapes served on `/npk-data`.
///
/// Serialized untagged: a successful parse produces the three-key
/// reading object, a parse fault produces `{"error": <message>}`. Both
/// are served with HTTP 200; only a device-level I/O failure changes
/// the status code.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum NpkResponse {
    Reading(NpkReading),
    Fault { error: String },
}

/// Serve one NPK reading.
///
/// Locks the shared sensor, reads one frame (bounded by the configured
/// serial timeout) and parses it. The read runs on a blocking task so
/// the worker thread is not tied up while the sensor is silent.
#[get("/npk-data")]
pub async fn get_npk_data(sensor: &State<SharedSensor>) -> Result<Json<NpkResponse>, Status> {
    let sensor = sensor.inner().clone();

    let frame = tokio::task::spawn_blocking(move || {
        let mut source = sensor.blocking_lock();
        source.read_frame()
    })
    .await
    .map_err(|e| {
        error!("Sensor read task panicked: {}", e);
        Status::InternalServerError
    })?
    .map_err(|e| {
        error!("Sensor read failed: {}", e);
        Status::InternalServerError
    })?;

    debug!("Read {} byte frame from sensor", frame.len());

    let response = match parse_frame(&frame) {
        Ok(reading) => NpkResponse::Reading(reading),
        Err(e) => {
            warn!("Unparsable sensor frame: {}", e);
            NpkResponse::Fault {
                error: e.to_string(),
            }
        }
    };

    Ok(Json(response))
}

// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the npk-bridge project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! # npk-bridge
//!
//! HTTP bridge for serial-attached NPK (Nitrogen-Phosphorus-Potassium)
//! soil sensors. The bridge reads fixed-size ASCII frames from a serial
//! port, parses them into a three-field nutrient reading, and serves the
//! result as JSON on a single route (`GET /npk-data`).

pub mod config;
pub mod daemon;
pub mod parsing;
pub mod sensor;
pub mod server;

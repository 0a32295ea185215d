// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the npk-bridge project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! HTTP server module
//!
//! This module builds the Rocket server exposing the NPK data endpoint.

mod builder;
mod handlers;

pub use builder::build_rocket;
pub use handlers::NpkResponse;

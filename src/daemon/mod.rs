// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the npk-bridge project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! Daemon module
//!
//! Lifecycle management for the bridge's background services: the HTTP
//! server and the heartbeat monitor.

pub mod launch_daemon;

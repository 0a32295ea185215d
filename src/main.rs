// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the npk-bridge project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

// Main entry point for the NPK soil sensor HTTP bridge

use anyhow::Result;
use clap::Parser;
use log::info;
use npk_bridge::config::Config;
use npk_bridge::daemon::launch_daemon::Daemon;

use std::path::PathBuf;
use tokio::signal;

/// HTTP bridge for a serial-attached NPK soil sensor
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to configuration file (YAML format)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Path to a configuration to validate and exit
    #[arg(long)]
    validate_config: Option<PathBuf>,

    /// Serial device the sensor is attached to
    #[arg(long)]
    serial_port: Option<String>,

    /// Baud rate of the serial line
    #[arg(long)]
    baud_rate: Option<u32>,

    /// Web server port (default: 8000)
    #[arg(short = 'p', long = "web-port")]
    web_port: Option<u16>,

    /// Web server address (default: 0.0.0.0)
    #[arg(short = 'a', long = "web-address")]
    web_address: Option<String>,

    /// Use a synthetic sensor source instead of real hardware
    #[arg(long, default_value_t = false)]
    mock: bool,

    /// Enable verbose logging (debug level)
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,

    /// Disable all logging output
    #[arg(short = 'q', long = "quiet")]
    quiet: bool,
}

#[rocket::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.quiet {
        log::LevelFilter::Off
    } else if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .init();

    // Validate configuration file if --validate-config is set
    if let Some(validate_path) = args.validate_config {
        if !validate_path.exists() {
            return Err(anyhow::anyhow!(
                "Configuration file does not exist: {}",
                validate_path.display()
            ));
        }

        Config::from_file(&validate_path)
            .map_err(|err| anyhow::anyhow!("Configuration validation failed: {}", err))?;
        println!("Configuration file is valid: {}", validate_path.display());
        return Ok(());
    }

    // Load configuration; an explicitly given path must exist, the
    // default path is optional so the bridge runs config-less with the
    // reference settings.
    let mut config = match args.config {
        Some(path) => Config::from_file(&path)?,
        None => {
            let default_path = PathBuf::from("config.yaml");
            if default_path.exists() {
                Config::from_file(&default_path)?
            } else {
                info!("No configuration file found, using defaults");
                Config::default()
            }
        }
    };

    // Apply command line overrides
    config.apply_args(
        args.web_port,
        args.web_address.clone(),
        args.serial_port.clone(),
        args.baud_rate,
        args.mock,
    );

    info!("Starting in daemon mode");
    let mut daemon = Daemon::new();

    // Launch all configured tasks
    daemon.launch(&config).await?;

    // Wait for termination signal
    match signal::ctrl_c().await {
        Ok(()) => {
            info!("Received shutdown signal, terminating daemon");
            daemon.shutdown();
            daemon.join().await?;
        }
        Err(err) => {
            eprintln!("Error waiting for shutdown signal: {}", err);
        }
    }

    Ok(())
}

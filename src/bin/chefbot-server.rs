// ABOUTME: Recipe API server binary
// ABOUTME: Loads configuration, initializes logging, and serves the HTTP API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Chefbot Contributors

//! # Chefbot Recipe API Server Binary

use anyhow::Result;
use chefbot_server::{config::ServerConfig, logging, server};
use clap::Parser;
use tracing::{debug, error, info};

#[derive(Parser)]
#[command(name = "chefbot-server")]
#[command(about = "Chefbot Recipe API - recipe suggestions from the ingredients you have")]
pub struct Args {
    /// Override bind address
    #[arg(long)]
    host: Option<String>,

    /// Override HTTP port
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // .env may carry RUST_LOG and LOG_FORMAT, so load it before logging starts
    let dotenv = dotenvy::dotenv();
    logging::init_from_env()?;
    match dotenv {
        Ok(path) => info!("Loaded environment from {}", path.display()),
        Err(e) => debug!("No .env file loaded: {}", e),
    }

    let mut config = ServerConfig::from_env()?;
    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(port) = args.port {
        config.http_port = port;
    }

    info!("{}", config.summary());

    if let Err(e) = server::run(config).await {
        error!("Server error: {:#}", e);
        return Err(e);
    }

    Ok(())
}

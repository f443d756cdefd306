/*
 * SPDX-FileCopyrightText: 2025 Showcase Platform Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod consts;
pub mod database;
pub mod input;
pub mod types;

use anyhow::{Context, Result};
use clap::Parser;
use database::connect_db;
use input::load_secret;
use std::sync::Arc;
use types::*;

pub async fn init_state() -> Result<Arc<ServerState>> {
    let cli = Cli::parse();

    println!("Starting Showcase Server on {}:{}", cli.ip, cli.port);

    let jwt_secret = load_secret(&cli.jwt_secret_file).context("Failed to load JWT secret")?;
    let db = connect_db(&cli).await?;

    Ok(Arc::new(ServerState {
        db,
        cli,
        jwt_secret,
    }))
}

/*
 * SPDX-FileCopyrightText: 2025 Showcase Platform Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use anyhow::{Context, Result};
use migration::Migrator;
use sea_orm::{
    ColumnTrait, ConnectOptions, Database, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
};
use sea_orm_migration::prelude::*;
use std::time::Duration;
use tracing::log::LevelFilter;
use uuid::Uuid;

use super::types::*;

pub async fn connect_db(cli: &Cli) -> Result<DatabaseConnection> {
    let db_url = if let Some(file) = &cli.database_url_file {
        std::fs::read_to_string(file)
            .context("Failed to read database url from file")?
            .trim()
            .to_string()
    } else if let Some(url) = &cli.database_url {
        url.clone()
    } else {
        anyhow::bail!("No database url provided")
    };

    let mut opt = ConnectOptions::new(db_url);

    // Only enable SQL logging at debug level
    if cli.log_level == "debug" {
        opt.sqlx_logging(true)
            .sqlx_logging_level(LevelFilter::Debug);
    } else {
        opt.sqlx_logging(false);
    }

    // Bounded timeouts so a stalled store round-trip surfaces as an error
    // instead of hanging the request.
    opt.max_connections(100)
        .min_connections(5)
        .connect_timeout(Duration::from_secs(8))
        .acquire_timeout(Duration::from_secs(8))
        .idle_timeout(Duration::from_secs(8))
        .max_lifetime(Duration::from_secs(8));

    let db = Database::connect(opt)
        .await
        .context("Failed to connect to database")?;
    Migrator::up(&db, None)
        .await
        .context("Failed to run database migrations")?;

    Ok(db)
}

pub async fn get_project_by_name(
    db: &DatabaseConnection,
    name: &str,
) -> Result<Option<MProject>, DbErr> {
    EProject::find()
        .filter(CProject::Name.eq(name))
        .one(db)
        .await
}

/// Resolves a user profile together with the picture record sharing the
/// user's email key.
pub async fn get_user_with_picture(
    db: &DatabaseConnection,
    user_id: Uuid,
) -> Result<Option<(MUser, Option<MUserPicture>)>, DbErr> {
    EUser::find_by_id(user_id)
        .find_also_related(EUserPicture::default())
        .one(db)
        .await
}

pub async fn get_recruits_by_project(
    db: &DatabaseConnection,
    project_id: Uuid,
) -> Result<Option<MRecruit>, DbErr> {
    ERecruit::find()
        .filter(CRecruit::Project.eq(project_id))
        .one(db)
        .await
}

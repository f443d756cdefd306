/*
 * SPDX-FileCopyrightText: 2025 Showcase Platform Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::input::{greater_than_zero, port_in_range};
use clap::Parser;
use entity::*;
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};

#[derive(Parser, Debug)]
#[command(name = "Showcase", display_name = "Showcase", bin_name = "showcase-server", version, about, long_about = None)]
pub struct Cli {
    #[arg(long, env = "SHOWCASE_DEBUG", default_value = "false")]
    pub debug: bool,
    #[arg(long, env = "SHOWCASE_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
    #[arg(long, env = "SHOWCASE_IP", default_value = "127.0.0.1")]
    pub ip: String,
    #[arg(long, env = "SHOWCASE_PORT", value_parser = port_in_range, default_value_t = 3000)]
    pub port: u16,
    #[arg(
        long,
        env = "SHOWCASE_SERVE_URL",
        default_value = "http://127.0.0.1:8000"
    )]
    pub serve_url: String,
    #[arg(long, env = "SHOWCASE_DATABASE_URL")]
    pub database_url: Option<String>,
    #[arg(long, env = "SHOWCASE_DATABASE_URL_FILE")]
    pub database_url_file: Option<String>,
    #[arg(long, env = "SHOWCASE_JWT_SECRET_FILE")]
    pub jwt_secret_file: String,
    #[arg(long, env = "SHOWCASE_DISABLE_REGISTRATION", default_value = "false")]
    pub disable_registration: bool,
    #[arg(long, env = "SHOWCASE_MAX_UPLOAD_BYTES", value_parser = greater_than_zero::<usize>, default_value = "8388608")]
    pub max_upload_bytes: usize,
}

#[derive(Debug)]
pub struct ServerState {
    pub db: DatabaseConnection,
    pub cli: Cli,
    pub jwt_secret: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct BaseResponse<T> {
    pub error: bool,
    pub message: T,
}

pub type EApi = api::Entity;
pub type EContribution = contribution::Entity;
pub type EProject = project::Entity;
pub type ERecruit = recruit::Entity;
pub type EUser = user::Entity;
pub type EUserPicture = user_picture::Entity;

pub type MApi = api::Model;
pub type MContribution = contribution::Model;
pub type MProject = project::Model;
pub type MRecruit = recruit::Model;
pub type MUser = user::Model;
pub type MUserPicture = user_picture::Model;

pub type AApi = api::ActiveModel;
pub type AContribution = contribution::ActiveModel;
pub type AProject = project::ActiveModel;
pub type ARecruit = recruit::ActiveModel;
pub type AUser = user::ActiveModel;
pub type AUserPicture = user_picture::ActiveModel;

pub type CApi = api::Column;
pub type CContribution = contribution::Column;
pub type CProject = project::Column;
pub type CRecruit = recruit::Column;
pub type CUser = user::Column;
pub type CUserPicture = user_picture::Column;

pub type RApi = api::Relation;
pub type RContribution = contribution::Relation;
pub type RProject = project::Relation;
pub type RRecruit = recruit::Relation;
pub type RUser = user::Relation;
pub type RUserPicture = user_picture::Relation;

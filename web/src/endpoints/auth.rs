/*
 * SPDX-FileCopyrightText: 2025 Showcase Platform Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use axum::Extension;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, State};
use chrono::Utc;
use showcase_core::consts::{API_KEY_PREFIX, NULL_TIME};
use showcase_core::types::*;
use email_address::EmailAddress;
use password_auth::{generate_hash, verify_password};
use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, SqlErr};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::{encode_jwt, generate_api_key, update_last_login};
use crate::error::{WebError, WebResult};

#[derive(Serialize, Deserialize, Debug)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct MakeApiKeyRequest {
    pub name: String,
}

pub async fn post_register(
    state: State<Arc<ServerState>>,
    json: Result<Json<RegisterRequest>, JsonRejection>,
) -> WebResult<Json<BaseResponse<String>>> {
    let Json(req) = json?;

    if state.cli.disable_registration {
        return Err(WebError::registration_disabled());
    }

    if !EmailAddress::is_valid(&req.email) {
        return Err(WebError::invalid_email());
    }

    let mut missing = Vec::new();

    if req.password.trim().is_empty() {
        missing.push("password");
    }
    if req.first_name.trim().is_empty() {
        missing.push("first_name");
    }
    if req.last_name.trim().is_empty() {
        missing.push("last_name");
    }

    if !missing.is_empty() {
        return Err(WebError::missing_fields(&missing));
    }

    let email = req.email.to_lowercase();

    if EUser::find()
        .filter(CUser::Email.eq(&email))
        .one(&state.db)
        .await?
        .is_some()
    {
        return Err(WebError::already_exists("Email"));
    }

    let user = AUser {
        id: Set(Uuid::new_v4()),
        email: Set(email),
        first_name: Set(req.first_name),
        last_name: Set(req.last_name),
        password: Set(Some(generate_hash(&req.password))),
        last_login_at: Set(*NULL_TIME),
        created_at: Set(Utc::now().naive_utc()),
    };

    let user = match user.insert(&state.db).await {
        Ok(user) => user,
        Err(err) => match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => {
                return Err(WebError::already_exists("Email"));
            }
            _ => return Err(WebError::Database(err)),
        },
    };

    tracing::info!("registered user {}", user.id);

    let res = BaseResponse {
        error: false,
        message: user.id.to_string(),
    };

    Ok(Json(res))
}

pub async fn post_login(
    state: State<Arc<ServerState>>,
    json: Result<Json<LoginRequest>, JsonRejection>,
) -> WebResult<Json<BaseResponse<String>>> {
    let Json(req) = json?;

    let user = EUser::find()
        .filter(CUser::Email.eq(req.email.to_lowercase()))
        .one(&state.db)
        .await?
        .ok_or_else(WebError::invalid_credentials)?;

    let hash = user
        .password
        .as_deref()
        .ok_or_else(WebError::invalid_credentials)?;

    verify_password(req.password, hash).map_err(|_| WebError::invalid_credentials())?;

    let token = encode_jwt(&state, user.id)?;
    update_last_login(&state, user).await?;

    let res = BaseResponse {
        error: false,
        message: token,
    };

    Ok(Json(res))
}

// Tokens are not tracked server-side; the client drops its copy.
pub async fn post_logout() -> WebResult<Json<BaseResponse<String>>> {
    let res = BaseResponse {
        error: false,
        message: "Logged out".to_string(),
    };

    Ok(Json(res))
}

pub async fn post_api_key(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    json: Result<Json<MakeApiKeyRequest>, JsonRejection>,
) -> WebResult<Json<BaseResponse<String>>> {
    let Json(req) = json?;

    if req.name.trim().is_empty() {
        return Err(WebError::missing_fields(&["name"]));
    }

    let key = generate_api_key();

    let api_key = AApi {
        id: Set(Uuid::new_v4()),
        owned_by: Set(user.id),
        name: Set(req.name),
        key: Set(key.clone()),
        last_used_at: Set(*NULL_TIME),
        created_at: Set(Utc::now().naive_utc()),
    };

    api_key.insert(&state.db).await?;

    // The prefix is only part of the presented token, not the stored key.
    let res = BaseResponse {
        error: false,
        message: format!("{}{}", API_KEY_PREFIX, key),
    };

    Ok(Json(res))
}

/*
 * SPDX-FileCopyrightText: 2025 Showcase Platform Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use chrono::{Duration, Utc};
use showcase_core::consts::API_KEY_PREFIX;
use showcase_core::types::*;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use rand::distr::{Alphanumeric, SampleString};
use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, QueryFilter};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::error::WebError;

#[derive(Serialize, Deserialize)]
pub struct Claims {
    pub exp: usize,
    pub iat: usize,
    pub id: Uuid,
}

/// Token middleware for the write routes: resolves the authenticated user
/// from a `Bearer` JWT or an API key and stores it as a request extension.
pub async fn authorize(
    state: State<Arc<ServerState>>,
    mut req: Request,
    next: Next,
) -> Result<Response, WebError> {
    let auth_header = req
        .headers()
        .get(axum::http::header::AUTHORIZATION)
        .ok_or_else(|| WebError::Forbidden("Authorization header not found".to_string()))?;

    let auth_header = auth_header
        .to_str()
        .map_err(|_| WebError::Forbidden("Authorization header empty".to_string()))?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| WebError::Forbidden("Invalid Authorization header".to_string()))?;

    let user_id = decode_token(&state, token).await?;

    let current_user = EUser::find_by_id(user_id)
        .one(&state.db)
        .await?
        .ok_or_else(WebError::invalid_credentials)?;

    req.extensions_mut().insert(current_user);
    Ok(next.run(req).await)
}

pub fn encode_jwt(state: &ServerState, id: Uuid) -> Result<String, WebError> {
    let now = Utc::now();
    let expire = Duration::hours(24);
    let exp = (now + expire).timestamp() as usize;
    let iat = now.timestamp() as usize;

    let claims = Claims { iat, exp, id };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(state.jwt_secret.as_bytes()),
    )
    .map_err(|_| WebError::failed_to_generate_token())
}

async fn decode_token(state: &ServerState, token: &str) -> Result<Uuid, WebError> {
    if let Some(key) = token.strip_prefix(API_KEY_PREFIX) {
        let api_key = EApi::find()
            .filter(CApi::Key.eq(key))
            .one(&state.db)
            .await?
            .ok_or_else(WebError::invalid_credentials)?;

        let owned_by = api_key.owned_by;

        let mut aapi_key: AApi = api_key.into();
        aapi_key.last_used_at = Set(Utc::now().naive_utc());
        aapi_key.update(&state.db).await?;

        Ok(owned_by)
    } else {
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(state.jwt_secret.as_bytes()),
            &Validation::default(),
        )
        .map_err(|_| WebError::Unauthorized("Unable to decode token".to_string()))?;

        Ok(token_data.claims.id)
    }
}

pub async fn update_last_login(state: &ServerState, user: MUser) -> Result<(), DbErr> {
    let mut auser: AUser = user.into();
    auser.last_login_at = Set(Utc::now().naive_utc());
    auser.update(&state.db).await?;

    Ok(())
}

pub fn generate_api_key() -> String {
    Alphanumeric.sample_string(&mut rand::rng(), 64)
}

/*
 * SPDX-FileCopyrightText: 2025 Showcase Platform Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod auth;
pub mod endpoints;
pub mod error;

#[cfg(test)]
mod tests;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::{Router, middleware};
use showcase_core::types::ServerState;
use http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

pub async fn serve_web(state: Arc<ServerState>) -> std::io::Result<()> {
    let server_url = format!("{}:{}", state.cli.ip, state.cli.port);

    let cors_allow_origin = if state.cli.debug {
        AllowOrigin::any()
    } else {
        let origin = state
            .cli
            .serve_url
            .parse()
            .map_err(std::io::Error::other)?;
        AllowOrigin::exact(origin)
    };

    let cors = CorsLayer::new()
        .allow_origin(cors_allow_origin)
        .allow_headers(vec![AUTHORIZATION, ACCEPT, CONTENT_TYPE]);

    let app = Router::new()
        .route("/projects/new", post(endpoints::projects::post_new_project))
        .route(
            "/projects/update",
            post(endpoints::projects::post_update_project),
        )
        .route("/user/api-key", post(endpoints::auth::post_api_key))
        .route_layer(middleware::from_fn_with_state(
            Arc::clone(&state),
            auth::authorize,
        ))
        .route("/projects", get(endpoints::projects::get_projects))
        .route("/projects/{id}", get(endpoints::projects::get_project))
        .route(
            "/projects/project-leader/{id}",
            get(endpoints::projects::get_project_leader),
        )
        .route(
            "/projects/{id}/contributors",
            get(endpoints::projects::get_contributors),
        )
        .route(
            "/projects/{id}/recruits",
            get(endpoints::projects::get_recruits),
        )
        .route("/user/register", post(endpoints::auth::post_register))
        .route("/user/login", post(endpoints::auth::post_login))
        .route("/user/logout", post(endpoints::auth::post_logout))
        .route("/health", get(endpoints::get_health))
        .fallback(endpoints::handle_404)
        .layer(DefaultBodyLimit::max(state.cli.max_upload_bytes))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&server_url).await?;
    axum::serve(listener, app).await
}

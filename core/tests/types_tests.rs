/*
 * SPDX-FileCopyrightText: 2025 Showcase Platform Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Tests for types and data structures

extern crate core as showcase_core;
use sea_orm::{DatabaseBackend, MockDatabase};
use showcase_core::types::*;

fn create_mock_cli() -> Cli {
    Cli {
        debug: false,
        log_level: "info".to_string(),
        ip: "127.0.0.1".to_string(),
        port: 3000,
        serve_url: "http://127.0.0.1:8000".to_string(),
        database_url: Some("mock://test".to_string()),
        database_url_file: None,
        jwt_secret_file: "test_jwt".to_string(),
        disable_registration: false,
        max_upload_bytes: 8388608,
    }
}

fn create_mock_db() -> sea_orm::DatabaseConnection {
    MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<entity::project::Model>::new()])
        .into_connection()
}

#[test]
fn test_server_state_creation() {
    let rt = tokio::runtime::Runtime::new().unwrap();
    rt.block_on(async {
        let cli = create_mock_cli();
        let db = create_mock_db();

        let state = ServerState {
            db,
            cli,
            jwt_secret: "test-secret".to_string(),
        };

        assert_eq!(state.cli.port, 3000);
        assert_eq!(state.cli.ip, "127.0.0.1");
        assert!(!state.cli.debug);
    });
}

#[test]
fn test_base_response_serialization() {
    let res = BaseResponse {
        error: false,
        message: "200 ALIVE".to_string(),
    };

    let json = serde_json::to_string(&res).unwrap();
    assert_eq!(json, r#"{"error":false,"message":"200 ALIVE"}"#);
}

#[test]
fn test_base_response_with_list_payload() {
    let res = BaseResponse {
        error: false,
        message: vec![1, 2, 3],
    };

    let json = serde_json::to_string(&res).unwrap();
    assert_eq!(json, r#"{"error":false,"message":[1,2,3]}"#);
}

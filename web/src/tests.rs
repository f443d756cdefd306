/*
 * SPDX-FileCopyrightText: 2025 Showcase Platform Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

#[cfg(test)]
mod tests {
    use crate::endpoints::projects::{
        NewProject, ProjectForm, collect_contributors, create_project, update_project_image,
        validate_create,
    };
    use crate::error::WebError;
    use showcase_core::consts::NULL_TIME;
    use showcase_core::types::*;
    use entity::project::ProjectStatus;
    use sea_orm::{DatabaseBackend, DatabaseConnection, MockDatabase};
    use std::sync::Arc;
    use uuid::Uuid;

    fn create_mock_cli() -> Cli {
        Cli {
            debug: true,
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

    fn create_mock_state(db: DatabaseConnection) -> Arc<ServerState> {
        Arc::new(ServerState {
            db,
            cli: create_mock_cli(),
            jwt_secret: "test-secret".to_string(),
        })
    }

    fn sample_project(name: &str) -> MProject {
        MProject {
            id: Uuid::new_v4(),
            name: name.to_string(),
            description: Some("Mapping platform".to_string()),
            project_leader: Uuid::new_v4(),
            tech_stack: "Rust, Postgres".to_string(),
            contributors_num: 3,
            github: Some("https://github.com/example/atlas".to_string()),
            thumbnail: None,
            status: ProjectStatus::Active,
            created_at: *NULL_TIME,
        }
    }

    fn filled_form() -> ProjectForm {
        ProjectForm {
            title: Some("Atlas".to_string()),
            leader: Some("8f2e7a90-1234-4cde-9f01-567890abcdef".to_string()),
            tech: Some("Rust, Postgres".to_string()),
            contributors: Some("3".to_string()),
            description: Some("Mapping platform".to_string()),
            github: Some("https://github.com/example/atlas".to_string()),
            image: Some(vec![1, 2, 3]),
        }
    }

    #[test]
    fn test_server_state_configuration() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let state = create_mock_state(db);

        assert!(state.cli.debug);
        assert!(!state.cli.disable_registration);
        assert_eq!(state.cli.port, 3000);
        assert_eq!(state.cli.serve_url, "http://127.0.0.1:8000");
    }

    mod validation_tests {
        use super::*;

        #[test]
        fn test_validate_create_accepts_complete_form() {
            let new = validate_create(filled_form()).unwrap();

            assert_eq!(new.title, "Atlas");
            assert_eq!(new.contributors_num, 3);
            assert_eq!(
                new.github,
                Some("https://github.com/example/atlas".to_string())
            );
            assert_eq!(new.thumbnail, Some(vec![1, 2, 3]));
        }

        #[test]
        fn test_validate_create_collects_all_missing_fields() {
            let form = ProjectForm {
                description: Some("only optional fields".to_string()),
                ..Default::default()
            };

            let err = validate_create(form).unwrap_err();

            match err {
                WebError::BadRequest(msg) => {
                    assert!(msg.contains("title"));
                    assert!(msg.contains("leader"));
                    assert!(msg.contains("tech"));
                    assert!(msg.contains("contributors"));
                }
                other => panic!("expected BadRequest, got {:?}", other),
            }
        }

        #[test]
        fn test_validate_create_treats_blank_fields_as_missing() {
            let mut form = filled_form();
            form.title = Some("   ".to_string());

            let err = validate_create(form).unwrap_err();

            match err {
                WebError::BadRequest(msg) => assert!(msg.contains("title")),
                other => panic!("expected BadRequest, got {:?}", other),
            }
        }

        #[test]
        fn test_validate_create_rejects_invalid_leader_id() {
            let mut form = filled_form();
            form.leader = Some("not-a-uuid".to_string());

            assert!(matches!(
                validate_create(form),
                Err(WebError::BadRequest(_))
            ));
        }

        #[test]
        fn test_validate_create_rejects_negative_contributor_count() {
            let mut form = filled_form();
            form.contributors = Some("-1".to_string());

            assert!(matches!(
                validate_create(form),
                Err(WebError::BadRequest(_))
            ));
        }

        #[test]
        fn test_validate_create_rejects_invalid_github_url() {
            let mut form = filled_form();
            form.github = Some("not a url".to_string());

            assert!(matches!(
                validate_create(form),
                Err(WebError::InputValidation(_))
            ));
        }

        #[test]
        fn test_validate_create_drops_empty_optional_fields() {
            let mut form = filled_form();
            form.description = Some("  ".to_string());
            form.github = None;
            form.image = None;

            let new = validate_create(form).unwrap();

            assert_eq!(new.description, None);
            assert_eq!(new.github, None);
            assert_eq!(new.thumbnail, None);
        }
    }

    mod project_tests {
        use super::*;

        fn sample_new_project(title: &str) -> NewProject {
            NewProject {
                title: title.to_string(),
                leader: Uuid::new_v4(),
                tech_stack: "Rust, Postgres".to_string(),
                contributors_num: 3,
                description: None,
                github: None,
                thumbnail: None,
            }
        }

        #[tokio::test]
        async fn test_create_project_inserts_when_name_is_free() {
            let db = MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([Vec::<MProject>::new()])
                .append_query_results([vec![sample_project("Atlas")]])
                .into_connection();

            let project = create_project(&db, sample_new_project("Atlas"))
                .await
                .unwrap();

            assert_eq!(project.name, "Atlas");
        }

        #[tokio::test]
        async fn test_create_project_rejects_duplicate_name() {
            let db = MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([vec![sample_project("Atlas")]])
                .into_connection();

            let err = create_project(&db, sample_new_project("Atlas"))
                .await
                .unwrap_err();

            assert!(matches!(err, WebError::Conflict(_)));
        }

        #[tokio::test]
        async fn test_update_project_image_replaces_thumbnail() {
            let mut updated = sample_project("Atlas");
            updated.thumbnail = Some(vec![9, 9, 9]);

            let db = MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([vec![sample_project("Atlas")]])
                .append_query_results([vec![updated]])
                .into_connection();

            let project = update_project_image(&db, "Atlas", vec![9, 9, 9])
                .await
                .unwrap();

            assert_eq!(project.thumbnail, Some(vec![9, 9, 9]));
        }

        #[tokio::test]
        async fn test_update_project_image_unknown_project_is_not_found() {
            let db = MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([Vec::<MProject>::new()])
                .into_connection();

            let err = update_project_image(&db, "Nope", vec![1])
                .await
                .unwrap_err();

            assert!(matches!(err, WebError::NotFound(_)));
        }
    }

    mod contributor_tests {
        use super::*;

        fn sample_user(email: &str) -> MUser {
            MUser {
                id: Uuid::new_v4(),
                email: email.to_string(),
                first_name: "Ada".to_string(),
                last_name: "Lovelace".to_string(),
                password: None,
                last_login_at: *NULL_TIME,
                created_at: *NULL_TIME,
            }
        }

        #[tokio::test]
        async fn test_collect_contributors_keeps_roster_slots() {
            let project_id = Uuid::new_v4();
            let resolved = sample_user("ada@example.com");
            let missing_user = Uuid::new_v4();

            let contributions = vec![
                MContribution {
                    id: Uuid::new_v4(),
                    project: project_id,
                    user: resolved.id,
                    created_at: *NULL_TIME,
                },
                MContribution {
                    id: Uuid::new_v4(),
                    project: project_id,
                    user: missing_user,
                    created_at: *NULL_TIME,
                },
            ];

            let picture = MUserPicture {
                id: Uuid::new_v4(),
                email: "ada@example.com".to_string(),
                image: vec![1, 2, 3],
            };

            let db = MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([contributions])
                .append_query_results([vec![(resolved.clone(), picture)]])
                .append_query_results([Vec::<(MUser, MUserPicture)>::new()])
                .into_connection();

            let entries = collect_contributors(&db, project_id).await.unwrap();

            assert_eq!(entries.len(), 2);

            let profile = entries[0].profile.as_ref().unwrap();
            assert_eq!(entries[0].user_id, resolved.id);
            assert_eq!(profile.email, "ada@example.com");
            assert_eq!(profile.image, Some("AQID".to_string()));
            assert!(entries[0].error.is_none());

            assert_eq!(entries[1].user_id, missing_user);
            assert!(entries[1].profile.is_none());
            assert_eq!(entries[1].error, Some("User profile not found".to_string()));
        }

        #[tokio::test]
        async fn test_collect_contributors_empty_roster() {
            let db = MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([Vec::<MContribution>::new()])
                .into_connection();

            let entries = collect_contributors(&db, Uuid::new_v4()).await.unwrap();

            assert!(entries.is_empty());
        }
    }

    mod auth_tests {
        use crate::endpoints::auth::*;

        #[test]
        fn test_register_request_serialization() {
            let request = RegisterRequest {
                email: "test@example.com".to_string(),
                password: "password123".to_string(),
                first_name: "Test".to_string(),
                last_name: "User".to_string(),
            };

            let json = serde_json::to_string(&request).unwrap();
            assert!(json.contains("test@example.com"));
            assert!(json.contains("Test"));
        }

        #[test]
        fn test_login_request_serialization() {
            let request = LoginRequest {
                email: "test@example.com".to_string(),
                password: "password123".to_string(),
            };

            let json = serde_json::to_string(&request).unwrap();
            assert!(json.contains("test@example.com"));
            assert!(json.contains("password123"));
        }

        #[test]
        fn test_make_api_key_request_serialization() {
            let request = MakeApiKeyRequest {
                name: "ci-deploy".to_string(),
            };

            let json = serde_json::to_string(&request).unwrap();
            assert!(json.contains("ci-deploy"));
        }

        #[test]
        fn test_generate_api_key_is_alphanumeric() {
            let key = crate::auth::generate_api_key();

            assert_eq!(key.len(), 64);
            assert!(key.chars().all(|c| c.is_ascii_alphanumeric()));
        }
    }
}

/*
 * SPDX-FileCopyrightText: 2025 Showcase Platform Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Tests for entity enums

use entity::*;
use sea_orm::ActiveEnum;

#[test]
fn test_project_status_values() {
    assert_eq!(project::ProjectStatus::Active.to_value(), 0);
    assert_eq!(project::ProjectStatus::Paused.to_value(), 1);
    assert_eq!(project::ProjectStatus::Completed.to_value(), 2);
    assert_eq!(project::ProjectStatus::Archived.to_value(), 3);
}

#[test]
fn test_project_status_from_value() {
    assert_eq!(
        project::ProjectStatus::try_from_value(&0).unwrap(),
        project::ProjectStatus::Active
    );
    assert_eq!(
        project::ProjectStatus::try_from_value(&3).unwrap(),
        project::ProjectStatus::Archived
    );

    assert!(project::ProjectStatus::try_from_value(&42).is_err());
}

#[test]
fn test_project_status_serialization() {
    let json = serde_json::to_string(&project::ProjectStatus::Active).unwrap();
    assert_eq!(json, r#""Active""#);

    let status: project::ProjectStatus = serde_json::from_str(r#""Completed""#).unwrap();
    assert_eq!(status, project::ProjectStatus::Completed);
}

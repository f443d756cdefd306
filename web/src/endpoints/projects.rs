/*
 * SPDX-FileCopyrightText: 2025 Showcase Platform Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::error::{WebError, WebResult};
use axum::extract::{Multipart, Path, State};
use axum::{Extension, Json};
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use chrono::Utc;
use showcase_core::database::{get_project_by_name, get_recruits_by_project, get_user_with_picture};
use showcase_core::input::{check_github_url, check_project_name};
use showcase_core::types::*;
use entity::project::ProjectStatus;
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    SqlErr,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

/// Raw multipart fields of the two project write routes. All fields are
/// optional here; validation decides what is actually required.
#[derive(Debug, Default)]
pub struct ProjectForm {
    pub title: Option<String>,
    pub leader: Option<String>,
    pub tech: Option<String>,
    pub contributors: Option<String>,
    pub description: Option<String>,
    pub github: Option<String>,
    pub image: Option<Vec<u8>>,
}

/// A create request that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProject {
    pub title: String,
    pub leader: Uuid,
    pub tech_stack: String,
    pub contributors_num: i32,
    pub description: Option<String>,
    pub github: Option<String>,
    pub thumbnail: Option<Vec<u8>>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ProjectResponse {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub project_leader: Uuid,
    pub tech_stack: String,
    pub contributors_num: i32,
    pub github: Option<String>,
    pub thumbnail: Option<String>,
    pub status: ProjectStatus,
    pub created_at: chrono::NaiveDateTime,
}

impl From<MProject> for ProjectResponse {
    fn from(project: MProject) -> Self {
        ProjectResponse {
            id: project.id,
            name: project.name,
            description: project.description,
            project_leader: project.project_leader,
            tech_stack: project.tech_stack,
            contributors_num: project.contributors_num,
            github: project.github,
            thumbnail: project.thumbnail.map(|t| BASE64.encode(t)),
            status: project.status,
            created_at: project.created_at,
        }
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct LeaderResponse {
    pub first_name: String,
    pub last_name: String,
    pub image: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ContributorProfile {
    pub user_id: Uuid,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub image: Option<String>,
}

/// One roster slot per contribution row. A failed profile lookup keeps its
/// slot and reports the failure instead of being dropped from the roster.
#[derive(Serialize, Deserialize, Debug)]
pub struct ContributorEntry {
    pub user_id: Uuid,
    pub profile: Option<ContributorProfile>,
    pub error: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct RecruitResponse {
    pub developer: i32,
    pub designer: i32,
    pub operator: i32,
}

async fn read_project_form(mut multipart: Multipart) -> Result<ProjectForm, WebError> {
    let mut form = ProjectForm::default();

    while let Some(field) = multipart.next_field().await? {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };

        match name.as_str() {
            "title" => form.title = Some(field.text().await?),
            "leader" => form.leader = Some(field.text().await?),
            "tech" => form.tech = Some(field.text().await?),
            "contributors" => form.contributors = Some(field.text().await?),
            "description" => form.description = Some(field.text().await?),
            "github" => form.github = Some(field.text().await?),
            "image" => form.image = Some(field.bytes().await?.to_vec()),
            _ => {}
        }
    }

    Ok(form)
}

fn is_blank(field: &Option<String>) -> bool {
    field.as_deref().is_none_or(|s| s.trim().is_empty())
}

/// Checks the create request: title, leader, tech and contributors are
/// required; description and github may be absent or empty.
pub(crate) fn validate_create(form: ProjectForm) -> Result<NewProject, WebError> {
    let mut missing = Vec::new();

    if is_blank(&form.title) {
        missing.push("title");
    }
    if is_blank(&form.leader) {
        missing.push("leader");
    }
    if is_blank(&form.tech) {
        missing.push("tech");
    }
    if is_blank(&form.contributors) {
        missing.push("contributors");
    }

    if !missing.is_empty() {
        return Err(WebError::missing_fields(&missing));
    }

    let title = form.title.unwrap_or_default();
    check_project_name(&title)?;

    let leader = Uuid::parse_str(form.leader.unwrap_or_default().trim())
        .map_err(|_| WebError::BadRequest("Invalid project leader id".to_string()))?;

    let contributors_num = form
        .contributors
        .unwrap_or_default()
        .trim()
        .parse::<i32>()
        .ok()
        .filter(|n| *n >= 0)
        .ok_or_else(|| WebError::BadRequest("Invalid contributor count".to_string()))?;

    let github = match form.github {
        Some(url) if !url.trim().is_empty() => Some(check_github_url(url.trim())?),
        _ => None,
    };

    Ok(NewProject {
        title,
        leader,
        tech_stack: form.tech.unwrap_or_default(),
        contributors_num,
        description: form.description.filter(|d| !d.trim().is_empty()),
        github,
        thumbnail: form.image,
    })
}

pub(crate) async fn create_project(
    db: &DatabaseConnection,
    new: NewProject,
) -> Result<MProject, WebError> {
    // Fast path only; two concurrent creates can both pass this check.
    if get_project_by_name(db, &new.title).await?.is_some() {
        return Err(WebError::already_exists("Project name"));
    }

    let project = AProject {
        id: Set(Uuid::new_v4()),
        name: Set(new.title),
        description: Set(new.description),
        project_leader: Set(new.leader),
        tech_stack: Set(new.tech_stack),
        contributors_num: Set(new.contributors_num),
        github: Set(new.github),
        thumbnail: Set(new.thumbnail),
        status: Set(ProjectStatus::Active),
        created_at: Set(Utc::now().naive_utc()),
    };

    // The unique key on project.name is the authoritative conflict signal.
    match project.insert(db).await {
        Ok(project) => Ok(project),
        Err(err) => match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => {
                Err(WebError::already_exists("Project name"))
            }
            _ => Err(WebError::Database(err)),
        },
    }
}

pub(crate) async fn update_project_image(
    db: &DatabaseConnection,
    title: &str,
    image: Vec<u8>,
) -> Result<MProject, WebError> {
    let project = get_project_by_name(db, title)
        .await?
        .ok_or_else(|| WebError::not_found("Project"))?;

    let mut aproject: AProject = project.into();
    aproject.thumbnail = Set(Some(image));

    Ok(aproject.update(db).await?)
}

pub async fn post_new_project(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    multipart: Multipart,
) -> WebResult<Json<BaseResponse<String>>> {
    let form = read_project_form(multipart).await?;
    let new = validate_create(form)?;

    let project = create_project(&state.db, new).await?;

    tracing::info!("user {} created project '{}'", user.id, project.name);

    let res = BaseResponse {
        error: false,
        message: "New Project created".to_string(),
    };

    Ok(Json(res))
}

pub async fn post_update_project(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    multipart: Multipart,
) -> WebResult<Json<BaseResponse<String>>> {
    let form = read_project_form(multipart).await?;

    let Some(image) = form.image else {
        return Err(WebError::missing_image());
    };

    let title = form
        .title
        .filter(|t| !t.trim().is_empty())
        .ok_or_else(|| WebError::missing_fields(&["title"]))?;

    let project = update_project_image(&state.db, &title, image).await?;

    tracing::info!("user {} updated thumbnail of '{}'", user.id, project.name);

    let res = BaseResponse {
        error: false,
        message: "Project successfully updated".to_string(),
    };

    Ok(Json(res))
}

pub async fn get_projects(
    state: State<Arc<ServerState>>,
) -> WebResult<Json<BaseResponse<Vec<ProjectResponse>>>> {
    // TODO: Implement pagination
    let projects = EProject::find()
        .order_by_asc(CProject::CreatedAt)
        .all(&state.db)
        .await?;

    let projects = projects.into_iter().map(ProjectResponse::from).collect();

    let res = BaseResponse {
        error: false,
        message: projects,
    };

    Ok(Json(res))
}

pub async fn get_project(
    state: State<Arc<ServerState>>,
    Path(id): Path<Uuid>,
) -> WebResult<Json<BaseResponse<ProjectResponse>>> {
    let project = EProject::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| WebError::not_found("Project"))?;

    let res = BaseResponse {
        error: false,
        message: ProjectResponse::from(project),
    };

    Ok(Json(res))
}

pub async fn get_project_leader(
    state: State<Arc<ServerState>>,
    Path(id): Path<Uuid>,
) -> WebResult<Json<BaseResponse<LeaderResponse>>> {
    let (user, picture) = get_user_with_picture(&state.db, id)
        .await?
        .ok_or_else(|| WebError::not_found("Project leader"))?;

    let res = BaseResponse {
        error: false,
        message: LeaderResponse {
            first_name: user.first_name,
            last_name: user.last_name,
            image: picture.map(|p| BASE64.encode(p.image)),
        },
    };

    Ok(Json(res))
}

/// Two-phase roster resolution: contribution rows first, then one profile
/// lookup per contributor. The result keeps the contribution-row order.
pub(crate) async fn collect_contributors(
    db: &DatabaseConnection,
    project_id: Uuid,
) -> Result<Vec<ContributorEntry>, WebError> {
    let contributions = EContribution::find()
        .filter(CContribution::Project.eq(project_id))
        .order_by_asc(CContribution::CreatedAt)
        .all(db)
        .await?;

    let mut entries = Vec::with_capacity(contributions.len());

    for contribution in contributions {
        let entry = match get_user_with_picture(db, contribution.user).await {
            Ok(Some((user, picture))) => ContributorEntry {
                user_id: contribution.user,
                profile: Some(ContributorProfile {
                    user_id: user.id,
                    email: user.email,
                    first_name: user.first_name,
                    last_name: user.last_name,
                    image: picture.map(|p| BASE64.encode(p.image)),
                }),
                error: None,
            },
            Ok(None) => ContributorEntry {
                user_id: contribution.user,
                profile: None,
                error: Some("User profile not found".to_string()),
            },
            Err(err) => {
                tracing::warn!(
                    "failed to load contributor {} of project {}: {}",
                    contribution.user,
                    project_id,
                    err
                );

                ContributorEntry {
                    user_id: contribution.user,
                    profile: None,
                    error: Some("Failed to load user profile".to_string()),
                }
            }
        };

        entries.push(entry);
    }

    Ok(entries)
}

pub async fn get_contributors(
    state: State<Arc<ServerState>>,
    Path(id): Path<Uuid>,
) -> WebResult<Json<BaseResponse<Vec<ContributorEntry>>>> {
    let contributors = collect_contributors(&state.db, id).await?;

    let res = BaseResponse {
        error: false,
        message: contributors,
    };

    Ok(Json(res))
}

pub async fn get_recruits(
    state: State<Arc<ServerState>>,
    Path(id): Path<Uuid>,
) -> WebResult<Json<BaseResponse<RecruitResponse>>> {
    let recruits = get_recruits_by_project(&state.db, id)
        .await?
        .ok_or_else(|| WebError::not_found("Recruits"))?;

    let res = BaseResponse {
        error: false,
        message: RecruitResponse {
            developer: recruits.developer,
            designer: recruits.designer,
            operator: recruits.operator,
        },
    };

    Ok(Json(res))
}

/*
 * SPDX-FileCopyrightText: 2025 Showcase Platform Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Project::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Project::Id).uuid().not_null().primary_key())
                    // The unique key is the authoritative name-conflict signal
                    // for concurrent project creation.
                    .col(
                        ColumnDef::new(Project::Name)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Project::Description).text())
                    .col(ColumnDef::new(Project::ProjectLeader).uuid().not_null())
                    .col(ColumnDef::new(Project::TechStack).string().not_null())
                    .col(
                        ColumnDef::new(Project::ContributorsNum)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Project::Github).string())
                    .col(ColumnDef::new(Project::Thumbnail).binary())
                    .col(ColumnDef::new(Project::Status).integer().not_null())
                    .col(ColumnDef::new(Project::CreatedAt).date_time().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-project-project_leader")
                            .from(Project::Table, Project::ProjectLeader)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Project::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Project {
    Table,
    Id,
    Name,
    Description,
    ProjectLeader,
    TechStack,
    ContributorsNum,
    Github,
    Thumbnail,
    Status,
    CreatedAt,
}

#[derive(DeriveIden)]
enum User {
    Table,
    Id,
}

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
                    .table(Recruit::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Recruit::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Recruit::Project).uuid().not_null())
                    .col(ColumnDef::new(Recruit::Developer).integer().not_null())
                    .col(ColumnDef::new(Recruit::Designer).integer().not_null())
                    .col(ColumnDef::new(Recruit::Operator).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-recruit-project")
                            .from(Recruit::Table, Recruit::Project)
                            .to(Project::Table, Project::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Recruit::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Recruit {
    Table,
    Id,
    Project,
    Developer,
    Designer,
    Operator,
}

#[derive(DeriveIden)]
enum Project {
    Table,
    Id,
}

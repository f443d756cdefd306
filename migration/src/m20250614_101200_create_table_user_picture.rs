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
                    .table(UserPicture::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(UserPicture::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(UserPicture::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(UserPicture::Image).binary().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-user_picture-email")
                            .from(UserPicture::Table, UserPicture::Email)
                            .to(User::Table, User::Email)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserPicture::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum UserPicture {
    Table,
    Id,
    Email,
    Image,
}

#[derive(DeriveIden)]
enum User {
    Table,
    Email,
}

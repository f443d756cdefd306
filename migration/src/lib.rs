/*
 * SPDX-FileCopyrightText: 2025 Showcase Platform Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub use sea_orm_migration::prelude::*;

mod m20250614_101000_create_table_user;
mod m20250614_101200_create_table_user_picture;
mod m20250614_101400_create_table_project;
mod m20250614_101600_create_table_contribution;
mod m20250614_101800_create_table_recruit;
mod m20250614_102000_create_table_api;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250614_101000_create_table_user::Migration),
            Box::new(m20250614_101200_create_table_user_picture::Migration),
            Box::new(m20250614_101400_create_table_project::Migration),
            Box::new(m20250614_101600_create_table_contribution::Migration),
            Box::new(m20250614_101800_create_table_recruit::Migration),
            Box::new(m20250614_102000_create_table_api::Migration),
        ]
    }
}

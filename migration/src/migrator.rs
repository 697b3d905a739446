use sea_orm_migration::prelude::*;

use crate::migrations;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(migrations::m202610010001_create_users::Migration),
            Box::new(migrations::m202610010002_create_refresh_tokens::Migration),
            Box::new(migrations::m202610010003_create_password_reset_tokens::Migration),
            Box::new(migrations::m202610010004_create_exercises::Migration),
            Box::new(migrations::m202610010005_create_workouts::Migration),
            Box::new(migrations::m202610010006_create_schedulings::Migration),
            Box::new(migrations::m202610010007_create_plans::Migration),
        ]
    }
}

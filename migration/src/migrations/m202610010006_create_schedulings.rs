use sea_orm_migration::prelude::*;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m202610010006_create_schedulings"
    }
}

fn status_variants() -> Vec<Alias> {
    [
        "PENDING_CONFIRMATION",
        "SCHEDULED",
        "RESCHEDULED",
        "IN_PROGRESS",
        "COMPLETED",
        "CANCELED",
        "MISSED",
    ]
    .into_iter()
    .map(Alias::new)
    .collect()
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Alias::new("schedulings"))
                    .if_not_exists()
                    .col(ColumnDef::new(Alias::new("id")).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Alias::new("personal_id")).uuid().not_null())
                    .col(ColumnDef::new(Alias::new("student_id")).uuid().not_null())
                    .col(ColumnDef::new(Alias::new("workout_id")).uuid())
                    .col(ColumnDef::new(Alias::new("date")).timestamp().not_null())
                    .col(
                        ColumnDef::new(Alias::new("type"))
                            .enumeration(
                                Alias::new("scheduling_type"),
                                vec![Alias::new("ONLINE"), Alias::new("IN_PERSON")],
                            )
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Alias::new("status"))
                            .enumeration(Alias::new("scheduling_status"), status_variants())
                            .not_null()
                            .default("PENDING_CONFIRMATION"),
                    )
                    .col(ColumnDef::new(Alias::new("started_at")).timestamp())
                    .col(ColumnDef::new(Alias::new("completed_at")).timestamp())
                    .col(ColumnDef::new(Alias::new("created_at")).timestamp().not_null().default(Expr::cust("CURRENT_TIMESTAMP")))
                    .col(ColumnDef::new(Alias::new("updated_at")).timestamp().not_null().default(Expr::cust("CURRENT_TIMESTAMP")))
                    .foreign_key(
                        ForeignKey::create()
                            .from(Alias::new("schedulings"), Alias::new("personal_id"))
                            .to(Alias::new("users"), Alias::new("id"))
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Alias::new("schedulings"), Alias::new("student_id"))
                            .to(Alias::new("users"), Alias::new("id"))
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Alias::new("schedulings"), Alias::new("workout_id"))
                            .to(Alias::new("workouts"), Alias::new("id"))
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_schedulings_personal_date")
                    .table(Alias::new("schedulings"))
                    .col(Alias::new("personal_id"))
                    .col(Alias::new("date"))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_schedulings_student_date")
                    .table(Alias::new("schedulings"))
                    .col(Alias::new("student_id"))
                    .col(Alias::new("date"))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Alias::new("scheduling_history"))
                    .if_not_exists()
                    .col(ColumnDef::new(Alias::new("id")).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Alias::new("scheduling_id")).uuid().not_null())
                    .col(ColumnDef::new(Alias::new("user_id")).uuid().not_null())
                    .col(
                        ColumnDef::new(Alias::new("status"))
                            .enumeration(Alias::new("scheduling_status"), status_variants())
                            .not_null(),
                    )
                    .col(ColumnDef::new(Alias::new("changed_at")).timestamp().not_null())
                    .col(
                        ColumnDef::new(Alias::new("changed_by"))
                            .enumeration(
                                Alias::new("user_role"),
                                vec![Alias::new("STUDENT"), Alias::new("PERSONAL"), Alias::new("ADMIN")],
                            )
                            .not_null(),
                    )
                    .col(ColumnDef::new(Alias::new("reason")).text())
                    .col(ColumnDef::new(Alias::new("notes")).text())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Alias::new("scheduling_history"), Alias::new("scheduling_id"))
                            .to(Alias::new("schedulings"), Alias::new("id"))
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Alias::new("scheduling_history"), Alias::new("user_id"))
                            .to(Alias::new("users"), Alias::new("id"))
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Alias::new("scheduling_history")).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Alias::new("schedulings")).to_owned())
            .await
    }
}

use sea_orm_migration::{prelude::*, schema::*};

use crate::iden::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create Activity Table
        let table = Table::create()
            .table(Activity::Table)
            .if_not_exists()
            .col(pk_auto(Activity::Id))
            .col(string_uniq(Activity::Name))
            .col(text_null(Activity::Description))
            .col(string_null(Activity::Schedule))
            .col(integer(Activity::MaxParticipants).default(0))
            .to_owned();
        manager.create_table(table).await?;

        // Create Participant Table
        //
        // Email is deliberately not unique per activity at the schema level;
        // duplicate signups are rejected by the service before insert.
        let table = Table::create()
            .table(Participant::Table)
            .if_not_exists()
            .col(pk_auto(Participant::Id))
            .col(string(Participant::Email))
            .col(integer(Participant::ActivityId))
            .foreign_key(
                ForeignKey::create()
                    .name("fk_participant_activity")
                    .from(Participant::Table, Participant::ActivityId)
                    .to(Activity::Table, Activity::Id)
                    .on_delete(ForeignKeyAction::Cascade),
            )
            .to_owned();
        manager.create_table(table).await?;

        // Create indices for common lookups
        manager
            .create_index(
                Index::create()
                    .name("idx_participant_activity")
                    .table(Participant::Table)
                    .col(Participant::ActivityId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_participant_email")
                    .table(Participant::Table)
                    .col(Participant::Email)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Participant::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Activity::Table).to_owned())
            .await?;

        Ok(())
    }
}

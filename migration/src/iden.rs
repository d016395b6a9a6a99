use sea_orm_migration::prelude::*;

// Define table names
#[derive(DeriveIden)]
pub enum Activity {
    Table,
    Id,
    Name,
    Description,
    Schedule,
    MaxParticipants,
}

#[derive(DeriveIden)]
pub enum Participant {
    Table,
    Id,
    Email,
    ActivityId,
}

use std::collections::BTreeMap;

use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    ModelTrait, QueryFilter, QueryOrder, TransactionTrait,
};
use serde::Serialize;

use crate::entities::{activity, participant};

#[derive(Debug, thiserror::Error)]
pub enum ActivityError {
    #[error("Activity not found")]
    NotFound,

    #[error("Student is already signed up")]
    AlreadyRegistered,

    #[error("Activity is full")]
    CapacityExceeded,

    #[error("Student is not signed up for this activity")]
    NotRegistered,

    #[error(transparent)]
    Db(#[from] DbErr),
}

#[derive(Debug, Serialize)]
pub struct ActivityView {
    pub description: Option<String>,
    pub schedule: Option<String>,
    pub max_participants: i32,
    pub participants: Vec<String>,
}

/// All activities keyed by name, each with its roster in signup order.
pub async fn list_activities(
    db: &DatabaseConnection,
) -> Result<BTreeMap<String, ActivityView>, ActivityError> {
    let rows = activity::Entity::find()
        .find_with_related(participant::Entity)
        .order_by_asc(activity::Column::Name)
        .order_by_asc(participant::Column::Id)
        .all(db)
        .await?;

    Ok(rows
        .into_iter()
        .map(|(act, roster)| {
            (
                act.name,
                ActivityView {
                    description: act.description,
                    schedule: act.schedule,
                    max_participants: act.max_participants,
                    participants: roster.into_iter().map(|p| p.email).collect(),
                },
            )
        })
        .collect())
}

/// Enrolls a student in an activity. Checks run in a fixed order inside one
/// transaction: the activity must exist, the email must not already be on
/// the roster, and the roster must be below the cap. Dropping the
/// transaction on any early return rolls it back.
pub async fn signup(
    db: &DatabaseConnection,
    activity_name: &str,
    email: &str,
) -> Result<String, ActivityError> {
    let txn = db.begin().await?;

    let act = activity::Entity::find()
        .filter(activity::Column::Name.eq(activity_name))
        .one(&txn)
        .await?
        .ok_or(ActivityError::NotFound)?;

    let roster = act.find_related(participant::Entity).all(&txn).await?;

    if roster.iter().any(|p| p.email == email) {
        return Err(ActivityError::AlreadyRegistered);
    }

    // A cap of zero (the fixture default) means uncapped.
    if act.max_participants > 0 && roster.len() as i32 >= act.max_participants {
        return Err(ActivityError::CapacityExceeded);
    }

    participant::ActiveModel {
        email: Set(email.to_owned()),
        activity_id: Set(act.id),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    txn.commit().await?;

    Ok(format!("Signed up {email} for {activity_name}"))
}

/// Removes a student from an activity's roster.
pub async fn unregister(
    db: &DatabaseConnection,
    activity_name: &str,
    email: &str,
) -> Result<String, ActivityError> {
    let txn = db.begin().await?;

    let act = activity::Entity::find()
        .filter(activity::Column::Name.eq(activity_name))
        .one(&txn)
        .await?
        .ok_or(ActivityError::NotFound)?;

    let registration = participant::Entity::find()
        .filter(participant::Column::ActivityId.eq(act.id))
        .filter(participant::Column::Email.eq(email))
        .one(&txn)
        .await?
        .ok_or(ActivityError::NotRegistered)?;

    registration.delete(&txn).await?;

    txn.commit().await?;

    Ok(format!("Unregistered {email} from {activity_name}"))
}

use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    TransactionTrait,
};
use tracing::info;

use crate::entities::prelude::Activity;
use crate::entities::{activity, participant};

struct Fixture {
    name: &'static str,
    description: &'static str,
    schedule: &'static str,
    max_participants: i32,
    participants: &'static [&'static str],
}

/// Initial roster data, inserted once into an empty store.
const INITIAL_ACTIVITIES: &[Fixture] = &[
    Fixture {
        name: "Chess Club",
        description: "Learn strategies and compete in chess tournaments",
        schedule: "Fridays, 3:30 PM - 5:00 PM",
        max_participants: 12,
        participants: &["michael@mergington.edu", "daniel@mergington.edu"],
    },
    Fixture {
        name: "Programming Class",
        description: "Learn programming fundamentals and build software projects",
        schedule: "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
        max_participants: 20,
        participants: &["emma@mergington.edu", "sophia@mergington.edu"],
    },
    Fixture {
        name: "Gym Class",
        description: "Physical education and sports activities",
        schedule: "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
        max_participants: 30,
        participants: &["john@mergington.edu", "olivia@mergington.edu"],
    },
    Fixture {
        name: "Soccer Team",
        description: "Join the school soccer team and compete in matches",
        schedule: "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
        max_participants: 22,
        participants: &["liam@mergington.edu", "noah@mergington.edu"],
    },
    Fixture {
        name: "Basketball Team",
        description: "Practice and play basketball with the school team",
        schedule: "Wednesdays and Fridays, 3:30 PM - 5:00 PM",
        max_participants: 15,
        participants: &["ava@mergington.edu", "mia@mergington.edu"],
    },
    Fixture {
        name: "Art Club",
        description: "Explore your creativity through painting and drawing",
        schedule: "Thursdays, 3:30 PM - 5:00 PM",
        max_participants: 15,
        participants: &["amelia@mergington.edu", "harper@mergington.edu"],
    },
    Fixture {
        name: "Drama Club",
        description: "Act, direct, and produce plays and performances",
        schedule: "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
        max_participants: 20,
        participants: &["ella@mergington.edu", "scarlett@mergington.edu"],
    },
    Fixture {
        name: "Math Club",
        description: "Solve challenging problems and participate in math competitions",
        schedule: "Tuesdays, 3:30 PM - 4:30 PM",
        max_participants: 10,
        participants: &["james@mergington.edu", "benjamin@mergington.edu"],
    },
    Fixture {
        name: "Debate Team",
        description: "Develop public speaking and argumentation skills",
        schedule: "Fridays, 4:00 PM - 5:30 PM",
        max_participants: 12,
        participants: &["charlotte@mergington.edu", "henry@mergington.edu"],
    },
];

/// Populates an empty store from the fixture table in a single transaction.
/// A non-empty store makes this a no-op, so it is safe on every startup.
pub async fn seed_if_empty(db: &DatabaseConnection) -> Result<(), DbErr> {
    let count = Activity::find().count(db).await?;
    if count > 0 {
        return Ok(());
    }

    let txn = db.begin().await?;

    for fixture in INITIAL_ACTIVITIES {
        let act = activity::ActiveModel {
            name: Set(fixture.name.to_owned()),
            description: Set(Some(fixture.description.to_owned())),
            schedule: Set(Some(fixture.schedule.to_owned())),
            max_participants: Set(fixture.max_participants),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        for email in fixture.participants {
            participant::ActiveModel {
                email: Set((*email).to_owned()),
                activity_id: Set(act.id),
                ..Default::default()
            }
            .insert(&txn)
            .await?;
        }
    }

    txn.commit().await?;
    info!(
        activities = INITIAL_ACTIVITIES.len(),
        "seeded empty activity store"
    );

    Ok(())
}

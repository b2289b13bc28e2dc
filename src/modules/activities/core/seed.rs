use crate::modules::activities::core::activity::{Activity, ActivityCatalog};

const SEED: &[(&str, &str, &str, u32, &[&str])] = &[
    (
        "Basketball",
        "Competitive basketball team and practice sessions",
        "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
        15,
        &["alex@mergington.edu"],
    ),
    (
        "Tennis Club",
        "Learn tennis skills and play friendly matches",
        "Saturdays, 9:00 AM - 11:00 AM",
        10,
        &["lucas@mergington.edu"],
    ),
    (
        "Debate Team",
        "Develop argumentation and public speaking skills",
        "Wednesdays, 3:30 PM - 5:00 PM",
        16,
        &["sarah@mergington.edu", "james@mergington.edu"],
    ),
    (
        "Robotics Club",
        "Design and build robots for competitions",
        "Thursdays, 4:00 PM - 6:00 PM",
        18,
        &["ryan@mergington.edu"],
    ),
    (
        "Drama Club",
        "Stage performances and theatrical productions",
        "Tuesdays and Thursdays, 4:45 PM - 6:00 PM",
        25,
        &["maya@mergington.edu", "tyler@mergington.edu"],
    ),
    (
        "Visual Arts",
        "Painting, drawing, and sculpture classes",
        "Mondays and Fridays, 3:30 PM - 5:00 PM",
        20,
        &["grace@mergington.edu"],
    ),
    (
        "Chess Club",
        "Learn strategies and compete in chess tournaments",
        "Fridays, 3:30 PM - 5:00 PM",
        12,
        &["michael@mergington.edu", "daniel@mergington.edu"],
    ),
    (
        "Programming Class",
        "Learn programming fundamentals and build software projects",
        "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
        20,
        &["emma@mergington.edu", "sophia@mergington.edu"],
    ),
    (
        "Gym Class",
        "Physical education and sports activities",
        "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
        30,
        &["john@mergington.edu", "olivia@mergington.edu"],
    ),
];

/// The activities every registry starts with after a (re)start.
pub fn seed_activities() -> ActivityCatalog {
    SEED.iter()
        .map(|(name, description, schedule, max_participants, participants)| {
            (
                (*name).to_string(),
                Activity {
                    description: (*description).to_string(),
                    schedule: (*schedule).to_string(),
                    max_participants: *max_participants,
                    participants: participants.iter().map(|p| (*p).into()).collect(),
                },
            )
        })
        .collect()
}

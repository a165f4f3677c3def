//! The school's standard activity catalogue, loaded once at startup.

use std::collections::BTreeMap;

use crate::models::Activity;

fn activity(
    description: &str,
    schedule: &str,
    max_participants: u32,
    participants: &[&str],
) -> Activity {
    Activity {
        description: description.to_string(),
        schedule: schedule.to_string(),
        max_participants,
        participants: participants.iter().map(|p| p.to_string()).collect(),
    }
}

/// Full seed catalogue. Names double as registry keys and URL path segments.
pub fn catalog() -> BTreeMap<String, Activity> {
    BTreeMap::from([
        (
            "Chess Club".to_string(),
            activity(
                "Learn strategies and compete in chess tournaments",
                "Fridays, 3:30 PM - 5:00 PM",
                12,
                &["michael@mergington.edu", "daniel@mergington.edu"],
            ),
        ),
        (
            "Programming Class".to_string(),
            activity(
                "Learn programming fundamentals and build software projects",
                "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
                20,
                &["emma@mergington.edu", "sophia@mergington.edu"],
            ),
        ),
        (
            "Gym Class".to_string(),
            activity(
                "Physical education and sports activities",
                "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
                30,
                &["john@mergington.edu", "olivia@mergington.edu"],
            ),
        ),
        (
            "Math Olympiad".to_string(),
            activity(
                "Solve challenging problems and prepare for math competitions",
                "Wednesdays, 3:30 PM - 5:00 PM",
                10,
                &["lucas@mergington.edu"],
            ),
        ),
        (
            "Science Club".to_string(),
            activity(
                "Hands-on experiments and science fair projects",
                "Thursdays, 3:30 PM - 5:00 PM",
                15,
                &["mia@mergington.edu", "noah@mergington.edu"],
            ),
        ),
        (
            "Art Club".to_string(),
            activity(
                "Explore drawing, painting, and other visual arts",
                "Mondays, 3:30 PM - 5:00 PM",
                15,
                &["amelia@mergington.edu"],
            ),
        ),
        (
            "Drama Club".to_string(),
            activity(
                "Act, direct, and produce the school's theater performances",
                "Tuesdays, 4:00 PM - 5:30 PM",
                18,
                &["ella@mergington.edu", "liam@mergington.edu"],
            ),
        ),
    ])
}

use crate::models::Activity;

// (name, description, schedule, max_participants, participants)
const SEED_ACTIVITIES: &[(&str, &str, &str, u32, [&str; 2])] = &[
    (
        "Chess Club",
        "Learn strategies and compete in chess tournaments",
        "Fridays, 3:30 PM - 5:00 PM",
        12,
        ["michael@mergington.edu", "daniel@mergington.edu"],
    ),
    (
        "Programming Class",
        "Learn programming fundamentals and build software projects",
        "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
        20,
        ["emma@mergington.edu", "sophia@mergington.edu"],
    ),
    (
        "Gym Class",
        "Physical education and sports activities",
        "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
        30,
        ["john@mergington.edu", "olivia@mergington.edu"],
    ),
    (
        "Soccer Team",
        "Join the school soccer team and compete in local leagues",
        "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
        18,
        ["lucas@mergington.edu", "mia@mergington.edu"],
    ),
    (
        "Basketball Club",
        "Practice basketball skills and play friendly matches",
        "Wednesdays, 3:30 PM - 5:00 PM",
        15,
        ["liam@mergington.edu", "ava@mergington.edu"],
    ),
    (
        "Art Club",
        "Explore painting, drawing, and other visual arts",
        "Mondays, 3:30 PM - 5:00 PM",
        16,
        ["isabella@mergington.edu", "noah@mergington.edu"],
    ),
    (
        "Drama Society",
        "Participate in theater productions and acting workshops",
        "Thursdays, 4:00 PM - 5:30 PM",
        20,
        ["charlotte@mergington.edu", "jackson@mergington.edu"],
    ),
    (
        "Mathletes",
        "Compete in math competitions and solve challenging problems",
        "Fridays, 2:30 PM - 3:30 PM",
        10,
        ["amelia@mergington.edu", "benjamin@mergington.edu"],
    ),
    (
        "Science Club",
        "Conduct experiments and explore scientific concepts",
        "Wednesdays, 4:00 PM - 5:00 PM",
        14,
        ["elijah@mergington.edu", "harper@mergington.edu"],
    ),
];

/// The catalog every fresh registry starts from, in display order.
pub fn seed_activities() -> Vec<(String, Activity)> {
    SEED_ACTIVITIES
        .iter()
        .map(|(name, description, schedule, max, participants)| {
            (
                name.to_string(),
                Activity::new(
                    *description,
                    *schedule,
                    *max,
                    participants.iter().map(|p| p.to_string()).collect(),
                ),
            )
        })
        .collect()
}

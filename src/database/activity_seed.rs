use crate::models::NewActivity;

/// Activities available when the process starts, in display order.
pub const SEED_ACTIVITIES: &[NewActivity<'static>] = &[
    NewActivity {
        name: "Chess Club",
        description: "Learn strategies and compete in chess tournaments",
        schedule: "Fridays, 3:30 PM - 5:00 PM",
        max_participants: 12,
        participants: &["michael@mergington.edu", "daniel@mergington.edu"],
    },
    NewActivity {
        name: "Programming Class",
        description: "Learn programming fundamentals and build software projects",
        schedule: "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
        max_participants: 20,
        participants: &["emma@mergington.edu", "sophia@mergington.edu"],
    },
    NewActivity {
        name: "Gym Class",
        description: "Physical education and sports activities",
        schedule: "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
        max_participants: 30,
        participants: &["john@mergington.edu", "olivia@mergington.edu"],
    },
    NewActivity {
        name: "Soccer Team",
        description: "Join the school soccer team and compete in local matches",
        schedule: "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
        max_participants: 22,
        participants: &["liam@mergington.edu", "noah@mergington.edu"],
    },
    NewActivity {
        name: "Basketball Team",
        description: "Practice drills and play games with the school basketball team",
        schedule: "Wednesdays and Fridays, 3:30 PM - 5:00 PM",
        max_participants: 15,
        participants: &["ava@mergington.edu", "mia@mergington.edu"],
    },
    NewActivity {
        name: "Tennis Club",
        description: "Improve your serve and play friendly singles and doubles matches",
        schedule: "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
        max_participants: 10,
        participants: &["alex@mergington.edu", "jordan@mergington.edu"],
    },
    NewActivity {
        name: "Drama Club",
        description: "Act, direct and build sets for the school plays",
        schedule: "Thursdays, 3:30 PM - 5:30 PM",
        max_participants: 25,
        participants: &["isabella@mergington.edu", "lucas@mergington.edu"],
    },
    NewActivity {
        name: "Art Studio",
        description: "Explore painting, drawing and sculpture in an open studio",
        schedule: "Tuesdays, 3:30 PM - 5:00 PM",
        max_participants: 18,
        participants: &["amelia@mergington.edu", "harper@mergington.edu"],
    },
    NewActivity {
        name: "Math Olympiad",
        description: "Train for math competitions with challenging problem sets",
        schedule: "Mondays, 3:30 PM - 4:30 PM",
        max_participants: 16,
        participants: &["ethan@mergington.edu", "charlotte@mergington.edu"],
    },
];

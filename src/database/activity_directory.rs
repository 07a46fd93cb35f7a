use parking_lot::Mutex;
use tracing::warn;

use crate::database::activity_seed::SEED_ACTIVITIES;
use crate::error::DirectoryError;
use crate::models::{Activity, ActivityListing, NewActivity};

// Roster of a single activity. The lock guards the check-then-mutate step of
// signup/unregister for this activity only.
#[derive(Debug)]
struct ActivityEntry {
    name: String,
    description: String,
    schedule: String,
    max_participants: u32,
    participants: Mutex<Vec<String>>,
}

impl ActivityEntry {
    fn snapshot(&self) -> Activity {
        Activity {
            name: self.name.clone(),
            description: self.description.clone(),
            schedule: self.schedule.clone(),
            max_participants: self.max_participants,
            participants: self.participants.lock().clone(),
        }
    }
}

/// In-memory registry of all activities.
///
/// The set of activities is fixed at construction; only rosters change. Share
/// it behind an `Arc`.
#[derive(Debug)]
pub struct ActivityDirectory {
    entries: Vec<ActivityEntry>,
    enforce_capacity: bool,
}

impl ActivityDirectory {
    /// Builds a directory from seed records, keeping their order.
    ///
    /// A repeated activity name keeps the first record. A repeated email
    /// within one roster is stored once.
    pub fn new<'a>(seed: impl IntoIterator<Item = NewActivity<'a>>) -> Self {
        let mut entries: Vec<ActivityEntry> = Vec::new();
        for new in seed {
            if entries.iter().any(|e| e.name == new.name) {
                warn!(activity = %new.name, "duplicate activity in seed, ignored");
                continue;
            }
            let mut participants: Vec<String> = Vec::with_capacity(new.participants.len());
            for email in new.participants {
                if !participants.iter().any(|p| p == email) {
                    participants.push((*email).to_string());
                }
            }
            entries.push(ActivityEntry {
                name: new.name.to_string(),
                description: new.description.to_string(),
                schedule: new.schedule.to_string(),
                max_participants: new.max_participants,
                participants: Mutex::new(participants),
            });
        }
        Self {
            entries,
            enforce_capacity: false,
        }
    }

    /// Directory holding the school's standard activities.
    pub fn seeded() -> Self {
        Self::new(SEED_ACTIVITIES.iter().copied())
    }

    /// Reject signups once a roster reaches `max_participants`.
    pub fn with_capacity_enforcement(mut self, enforce: bool) -> Self {
        self.enforce_capacity = enforce;
        self
    }

    pub fn enforces_capacity(&self) -> bool {
        self.enforce_capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn list_activities(&self) -> ActivityListing {
        ActivityListing(self.entries.iter().map(ActivityEntry::snapshot).collect())
    }

    pub fn get(&self, activity_name: &str) -> Option<Activity> {
        self.entry(activity_name).map(ActivityEntry::snapshot)
    }

    /// Adds `email` to the roster and returns the new roster size.
    pub fn signup(&self, activity_name: &str, email: &str) -> Result<usize, DirectoryError> {
        let entry = self.require(activity_name)?;
        let mut participants = entry.participants.lock();

        if participants.iter().any(|p| p == email) {
            return Err(DirectoryError::AlreadyEnrolled {
                activity: entry.name.clone(),
                email: email.to_string(),
            });
        }
        if self.enforce_capacity && participants.len() >= entry.max_participants as usize {
            return Err(DirectoryError::ActivityFull {
                activity: entry.name.clone(),
                max_participants: entry.max_participants,
            });
        }

        participants.push(email.to_string());
        Ok(participants.len())
    }

    /// Removes `email` from the roster and returns the new roster size.
    pub fn unregister(&self, activity_name: &str, email: &str) -> Result<usize, DirectoryError> {
        let entry = self.require(activity_name)?;
        let mut participants = entry.participants.lock();

        let Some(pos) = participants.iter().position(|p| p == email) else {
            return Err(DirectoryError::NotEnrolled {
                activity: entry.name.clone(),
                email: email.to_string(),
            });
        };

        participants.remove(pos);
        Ok(participants.len())
    }

    fn entry(&self, activity_name: &str) -> Option<&ActivityEntry> {
        self.entries.iter().find(|e| e.name == activity_name)
    }

    fn require(&self, activity_name: &str) -> Result<&ActivityEntry, DirectoryError> {
        self.entry(activity_name)
            .ok_or_else(|| DirectoryError::NotFound(activity_name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use super::*;

    const TENNIS: &str = "Tennis Club";

    fn small(max_participants: u32, participants: &'static [&'static str]) -> ActivityDirectory {
        ActivityDirectory::new([NewActivity {
            name: "Robotics",
            description: "Build robots",
            schedule: "Saturdays",
            max_participants,
            participants,
        }])
    }

    #[test]
    fn seeded_directory_has_tennis_with_alex() {
        let dir = ActivityDirectory::seeded();
        assert!(!dir.is_empty());

        let listing = dir.list_activities();
        assert!(!listing.is_empty());
        assert_eq!(listing.len(), SEED_ACTIVITIES.len());
        let tennis = listing.get(TENNIS).expect("tennis seeded");
        assert!(tennis.is_enrolled("alex@mergington.edu"));
        assert!(listing.get("tennis club").is_none());
    }

    #[test]
    fn seeded_rosters_are_within_capacity() {
        let listing = ActivityDirectory::seeded().list_activities();
        for activity in &listing.0 {
            assert!(activity.max_participants > 0, "{}", activity.name);
            assert!(
                activity.participants.len() <= activity.max_participants as usize,
                "{} is over capacity",
                activity.name
            );
        }
    }

    #[test]
    fn list_keeps_seed_order() {
        let names: Vec<String> = ActivityDirectory::seeded()
            .list_activities()
            .0
            .into_iter()
            .map(|a| a.name)
            .collect();
        let expected: Vec<&str> = SEED_ACTIVITIES.iter().map(|a| a.name).collect();
        assert_eq!(names, expected);
    }

    #[test]
    fn signup_appends_to_roster() {
        let dir = ActivityDirectory::seeded();
        let size = dir.signup(TENNIS, "test.user@mergington.edu").unwrap();

        let tennis = dir.get(TENNIS).unwrap();
        assert_eq!(size, tennis.participants.len());
        assert_eq!(
            tennis.participants.last().map(String::as_str),
            Some("test.user@mergington.edu")
        );
    }

    #[test]
    fn duplicate_signup_is_rejected_without_duplicating() {
        let dir = ActivityDirectory::seeded();
        let before = dir.get(TENNIS).unwrap().participants;

        let err = dir.signup(TENNIS, "alex@mergington.edu").unwrap_err();
        assert!(matches!(err, DirectoryError::AlreadyEnrolled { .. }));
        assert_eq!(dir.get(TENNIS).unwrap().participants, before);
    }

    #[test]
    fn activity_names_are_case_sensitive() {
        let dir = ActivityDirectory::seeded();
        let err = dir.signup("tennis club", "a@b.com").unwrap_err();
        assert_eq!(err, DirectoryError::NotFound("tennis club".to_string()));
    }

    #[test]
    fn unknown_activity_is_not_found_for_every_operation() {
        let dir = ActivityDirectory::seeded();
        assert!(dir.get("NoSuchActivity").is_none());
        assert!(matches!(
            dir.signup("NoSuchActivity", "a@b.com"),
            Err(DirectoryError::NotFound(_))
        ));
        assert!(matches!(
            dir.unregister("NoSuchActivity", "a@b.com"),
            Err(DirectoryError::NotFound(_))
        ));
    }

    #[test]
    fn unregister_removes_and_keeps_order_of_the_rest() {
        let dir = small(5, &["a@x", "b@x", "c@x"]);
        assert_eq!(dir.unregister("Robotics", "b@x").unwrap(), 2);
        assert_eq!(dir.get("Robotics").unwrap().participants, vec!["a@x", "c@x"]);
    }

    #[test]
    fn unregister_of_absent_email_leaves_roster_unchanged() {
        let dir = ActivityDirectory::seeded();
        let before = dir.get(TENNIS).unwrap().participants;

        let err = dir.unregister(TENNIS, "nobody@mergington.edu").unwrap_err();
        assert!(matches!(err, DirectoryError::NotEnrolled { .. }));
        assert_eq!(dir.get(TENNIS).unwrap().participants, before);
    }

    #[test]
    fn capacity_is_not_enforced_by_default() {
        let dir = small(1, &["a@x"]);
        assert_eq!(dir.signup("Robotics", "b@x").unwrap(), 2);
    }

    #[test]
    fn capacity_enforcement_rejects_full_activity() {
        let dir = small(1, &["a@x"]).with_capacity_enforcement(true);
        let err = dir.signup("Robotics", "b@x").unwrap_err();
        assert_eq!(
            err,
            DirectoryError::ActivityFull {
                activity: "Robotics".to_string(),
                max_participants: 1,
            }
        );
        assert_eq!(dir.get("Robotics").unwrap().participants, vec!["a@x"]);
    }

    #[test]
    fn seed_duplicates_are_collapsed() {
        let robotics = NewActivity {
            name: "Robotics",
            description: "Build robots",
            schedule: "Saturdays",
            max_participants: 4,
            participants: &["a@x", "a@x"],
        };
        let dir = ActivityDirectory::new([robotics, robotics]);
        assert_eq!(dir.len(), 1);
        assert_eq!(dir.get("Robotics").unwrap().participants, vec!["a@x"]);
    }

    #[test]
    fn concurrent_duplicate_signups_admit_exactly_one() {
        let dir = Arc::new(ActivityDirectory::seeded());
        let handles: Vec<_> = (0..16)
            .map(|_| {
                let dir = Arc::clone(&dir);
                thread::spawn(move || dir.signup(TENNIS, "race@mergington.edu").is_ok())
            })
            .collect();

        let admitted = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|ok| *ok)
            .count();
        assert_eq!(admitted, 1);

        let tennis = dir.get(TENNIS).unwrap();
        let copies = tennis
            .participants
            .iter()
            .filter(|p| *p == "race@mergington.edu")
            .count();
        assert_eq!(copies, 1);
    }

    #[test]
    fn concurrent_signups_cannot_overfill_enforced_activity() {
        let dir = Arc::new(small(3, &["a@x", "b@x"]).with_capacity_enforcement(true));
        let handles: Vec<_> = (0..16)
            .map(|i| {
                let dir = Arc::clone(&dir);
                thread::spawn(move || dir.signup("Robotics", &format!("s{i}@x")).is_ok())
            })
            .collect();

        let admitted = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|ok| *ok)
            .count();
        assert_eq!(admitted, 1);
        assert_eq!(dir.get("Robotics").unwrap().participants.len(), 3);
    }
}

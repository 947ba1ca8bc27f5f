use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::models::{ActivityCatalog, ActivityRecord};

struct SeedActivity {
    name: &'static str,
    description: &'static str,
    schedule: &'static str,
    max_participants: u32,
    participants: &'static [&'static str],
}

const SEED_ACTIVITIES: &[SeedActivity] = &[
    SeedActivity {
        name: "Chess Club",
        description: "Learn strategies and compete in chess tournaments",
        schedule: "Fridays, 3:30 PM - 5:00 PM",
        max_participants: 12,
        participants: &["michael@mergington.edu", "daniel@mergington.edu"],
    },
    SeedActivity {
        name: "Programming Class",
        description: "Learn programming fundamentals and build software projects",
        schedule: "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
        max_participants: 20,
        participants: &["emma@mergington.edu", "sophia@mergington.edu"],
    },
    SeedActivity {
        name: "Gym Class",
        description: "Physical education and sports activities",
        schedule: "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
        max_participants: 30,
        participants: &["john@mergington.edu", "olivia@mergington.edu"],
    },
    SeedActivity {
        name: "Basketball Team",
        description: "Competitive basketball team for interscholastic games",
        schedule: "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
        max_participants: 15,
        participants: &["alex@mergington.edu"],
    },
    SeedActivity {
        name: "Tennis Club",
        description: "Learn tennis skills and participate in friendly matches",
        schedule: "Tuesdays and Thursdays, 4:00 PM - 5:00 PM",
        max_participants: 10,
        participants: &["sarah@mergington.edu", "james@mergington.edu"],
    },
    SeedActivity {
        name: "Drama Club",
        description: "Perform in school plays and theatrical productions",
        schedule: "Wednesdays, 3:30 PM - 5:00 PM",
        max_participants: 25,
        participants: &["lucas@mergington.edu", "ava@mergington.edu"],
    },
    SeedActivity {
        name: "Visual Arts",
        description: "Painting, drawing, and sculpture classes",
        schedule: "Mondays and Fridays, 3:30 PM - 4:30 PM",
        max_participants: 18,
        participants: &["mia@mergington.edu"],
    },
    SeedActivity {
        name: "Science Club",
        description: "Explore science experiments and participate in science fairs",
        schedule: "Thursdays, 3:30 PM - 5:00 PM",
        max_participants: 20,
        participants: &["ethan@mergington.edu", "noah@mergington.edu"],
    },
    SeedActivity {
        name: "Math Olympiad",
        description: "Advanced mathematics problem-solving and competitions",
        schedule: "Tuesdays, 4:00 PM - 5:30 PM",
        max_participants: 15,
        participants: &["grace@mergington.edu"],
    },
];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("Activity not found")]
    NotFound,
    #[error("Student is already signed up for this activity")]
    AlreadyRegistered,
    #[error("Student is not signed up for this activity")]
    NotRegistered,
}

pub type StoreResult<T> = Result<T, StoreError>;

/// In-memory activity store shared by all request handlers.
///
/// Cloning is cheap and every clone sees the same data. Each operation holds
/// the lock for its whole read-modify-write, so concurrent signups and
/// removals never interleave within one activity.
#[derive(Clone)]
pub struct ActivityStore {
    inner: Arc<RwLock<ActivityCatalog>>,
}

impl ActivityStore {
    pub fn new(catalog: ActivityCatalog) -> Self {
        Self {
            inner: Arc::new(RwLock::new(catalog)),
        }
    }

    /// Store holding the fixed set of school activities.
    pub fn seeded() -> Self {
        Self::new(seed_catalog())
    }

    /// Snapshot of every activity, in seed order.
    pub fn list(&self) -> ActivityCatalog {
        self.read().clone()
    }

    pub fn get(&self, name: &str) -> StoreResult<ActivityRecord> {
        self.read().get(name).cloned().ok_or(StoreError::NotFound)
    }

    pub fn add_participant(&self, name: &str, email: &str) -> StoreResult<()> {
        let mut catalog = self.write();
        let record = catalog.get_mut(name).ok_or(StoreError::NotFound)?;
        if record.is_registered(email) {
            return Err(StoreError::AlreadyRegistered);
        }
        record.participants.push(email.to_string());
        Ok(())
    }

    pub fn remove_participant(&self, name: &str, email: &str) -> StoreResult<()> {
        let mut catalog = self.write();
        let record = catalog.get_mut(name).ok_or(StoreError::NotFound)?;
        let idx = record
            .participants
            .iter()
            .position(|p| p == email)
            .ok_or(StoreError::NotRegistered)?;
        record.participants.remove(idx);
        Ok(())
    }

    // A panic under the lock cannot leave a record half-written (every
    // mutation is a single push/remove), so poisoning is ignored.
    fn read(&self) -> RwLockReadGuard<'_, ActivityCatalog> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, ActivityCatalog> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

pub fn seed_catalog() -> ActivityCatalog {
    SEED_ACTIVITIES
        .iter()
        .map(|seed| {
            (
                seed.name,
                ActivityRecord::new(
                    seed.description,
                    seed.schedule,
                    seed.max_participants,
                    seed.participants,
                ),
            )
        })
        .collect()
}

use serde::{Deserialize, Serialize, Serializer};

// One extracurricular offering. The name is the store key and is not repeated here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityRecord {
    pub description: String,
    pub schedule: String,
    /// Advisory only; signups are not checked against it.
    pub max_participants: u32,
    pub participants: Vec<String>,
}

impl ActivityRecord {
    pub fn new(
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: u32,
        participants: &[&str],
    ) -> Self {
        Self {
            description: description.into(),
            schedule: schedule.into(),
            max_participants,
            participants: participants.iter().map(|p| p.to_string()).collect(),
        }
    }

    pub fn is_registered(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }
}

/// Activities keyed by name, kept in insertion order.
///
/// Serializes as a JSON object whose keys follow that order, so the landing
/// page lists activities the same way every time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityCatalog {
    entries: Vec<(String, ActivityRecord)>,
}

impl ActivityCatalog {
    pub fn get(&self, name: &str) -> Option<&ActivityRecord> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, record)| record)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut ActivityRecord> {
        self.entries
            .iter_mut()
            .find(|(key, _)| key == name)
            .map(|(_, record)| record)
    }

    /// Inserts or replaces `name`. A replaced entry keeps its position.
    pub fn insert(&mut self, name: impl Into<String>, record: ActivityRecord) {
        let name = name.into();
        match self.entries.iter().position(|(key, _)| *key == name) {
            Some(idx) => self.entries[idx].1 = record,
            None => self.entries.push((name, record)),
        }
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<N: Into<String>> FromIterator<(N, ActivityRecord)> for ActivityCatalog {
    fn from_iter<I: IntoIterator<Item = (N, ActivityRecord)>>(iter: I) -> Self {
        let mut catalog = Self::default();
        for (name, record) in iter {
            catalog.insert(name, record);
        }
        catalog
    }
}

impl Serialize for ActivityCatalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.entries.iter().map(|(name, record)| (name, record)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(participants: &[&str]) -> ActivityRecord {
        ActivityRecord::new("desc", "Mondays", 5, participants)
    }

    #[test]
    fn serializes_as_object_in_insertion_order() {
        let catalog: ActivityCatalog = [("Zither", record(&[])), ("Archery", record(&["a@x"]))]
            .into_iter()
            .collect();

        let json = serde_json::to_string(&catalog).expect("serialize");
        let zither = json.find("\"Zither\"").expect("zither key");
        let archery = json.find("\"Archery\"").expect("archery key");
        assert!(zither < archery);

        let value: serde_json::Value = serde_json::from_str(&json).expect("parse");
        assert_eq!(value["Archery"]["participants"][0], "a@x");
        assert_eq!(value["Archery"]["max_participants"], 5);
    }

    #[test]
    fn insert_replaces_without_moving() {
        let mut catalog: ActivityCatalog = [("One", record(&[])), ("Two", record(&[]))]
            .into_iter()
            .collect();
        catalog.insert("One", record(&["x@y"]));

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.names().collect::<Vec<_>>(), vec!["One", "Two"]);
        assert!(catalog.get("One").is_some_and(|r| r.is_registered("x@y")));
    }
}

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Details of a single activity as reported by `GET /activities`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ActivityDetails {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    #[serde(default)]
    pub participants: Vec<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Activity {
    pub name: String,
    pub details: ActivityDetails,
}

impl Activity {
    pub fn new(name: &str, details: ActivityDetails) -> Self {
        Self {
            name: name.to_string(),
            details,
        }
    }

    /// Remaining capacity. Signed so an over-subscribed activity shows
    /// a negative count rather than wrapping.
    pub fn spots_left(&self) -> i64 {
        i64::from(self.details.max_participants) - self.details.participants.len() as i64
    }

    pub fn is_full(&self) -> bool {
        self.spots_left() <= 0
    }

    pub fn has_participant(&self, email: &str) -> bool {
        self.details.participants.iter().any(|p| p == email)
    }
}

/// The activity collection keyed by name. The wire format is a JSON
/// object; entries keep the order they appear in the document.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Activities(Vec<Activity>);

impl Activities {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Activity> {
        self.0.iter()
    }

    pub fn names(&self) -> Vec<String> {
        self.0.iter().map(|a| a.name.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.0.iter().find(|a| a.name == name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Activity> {
        self.0.iter_mut().find(|a| a.name == name)
    }

    /// Insert or replace the activity with the same name, keeping the
    /// original position on replace.
    pub fn insert(&mut self, activity: Activity) {
        match self.get_mut(&activity.name) {
            Some(existing) => existing.details = activity.details,
            None => self.0.push(activity),
        }
    }
}

impl FromIterator<Activity> for Activities {
    fn from_iter<I: IntoIterator<Item = Activity>>(iter: I) -> Self {
        let mut activities = Activities::new();
        for activity in iter {
            activities.insert(activity);
        }
        activities
    }
}

impl Serialize for Activities {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for activity in &self.0 {
            map.serialize_entry(&activity.name, &activity.details)?;
        }
        map.end()
    }
}

struct ActivitiesVisitor;

impl<'de> Visitor<'de> for ActivitiesVisitor {
    type Value = Activities;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of activity name to activity details")
    }

    fn visit_map<M: MapAccess<'de>>(self, mut access: M) -> Result<Self::Value, M::Error> {
        let mut activities = Activities::new();
        while let Some((name, details)) = access.next_entry::<String, ActivityDetails>()? {
            activities.insert(Activity { name, details });
        }
        Ok(activities)
    }
}

impl<'de> Deserialize<'de> for Activities {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(ActivitiesVisitor)
    }
}

/// Body of a successful signup or unregister.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Body of a rejected request.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}

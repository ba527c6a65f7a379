use crate::model::functions::initials;
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// The body of one entry in the `GET /activities` map, everything but the name.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ActivityDetails {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    /// emails, in the order the server lists them
    #[serde(default)]
    pub participants: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    pub name: String,
    #[serde(flatten)]
    pub details: ActivityDetails,
}

impl Activity {
    pub fn participant_count(&self) -> usize {
        self.details.participants.len()
    }

    /// Capacity minus registered participants. Not clamped, an over-full activity goes negative.
    pub fn spots_left(&self) -> i64 {
        i64::from(self.details.max_participants) - self.participant_count() as i64
    }

    pub fn participant_entries(&self) -> Vec<ParticipantEntry> {
        if self.details.participants.is_empty() {
            return vec![ParticipantEntry::Placeholder];
        }
        self.details
            .participants
            .iter()
            .map(|email| ParticipantEntry::Member {
                initials: initials(email),
                email: email.clone(),
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParticipantEntry {
    Member { email: String, initials: String },
    /// rendered when nobody signed up yet, has no removal control
    Placeholder,
}

impl ParticipantEntry {
    pub const PLACEHOLDER_TEXT: &'static str = "No participants yet";
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub const PLACEHOLDER_LABEL: &'static str = "-- Select an activity --";

    fn placeholder() -> Self {
        Self {
            value: String::new(),
            label: Self::PLACEHOLDER_LABEL.to_string(),
        }
    }
}

/// The whole activity set as the server sent it. Keeps the key order of the JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Activities(Vec<Activity>);

impl Activities {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Activity> {
        self.0.iter()
    }

    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.0.iter().find(|activity| activity.name == name)
    }

    /// Dropdown contents: the empty placeholder first, then one option per activity.
    pub fn select_options(&self) -> Vec<SelectOption> {
        std::iter::once(SelectOption::placeholder())
            .chain(self.0.iter().map(|activity| SelectOption {
                value: activity.name.clone(),
                label: activity.name.clone(),
            }))
            .collect()
    }
}

impl FromIterator<Activity> for Activities {
    fn from_iter<T: IntoIterator<Item = Activity>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Activities {
    type Item = Activity;
    type IntoIter = std::vec::IntoIter<Activity>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'de> Deserialize<'de> for Activities {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ActivitiesVisitor;

        impl<'de> Visitor<'de> for ActivitiesVisitor {
            type Value = Activities;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of activity name to activity details")
            }

            fn visit_map<M>(self, mut map: M) -> Result<Self::Value, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut activities = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((name, details)) = map.next_entry::<String, ActivityDetails>()? {
                    activities.push(Activity { name, details });
                }
                Ok(Activities(activities))
            }
        }

        deserializer.deserialize_map(ActivitiesVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: &str = r#"{
        "Chess Club": {
            "description": "Learn strategies and compete in chess tournaments",
            "schedule": "Fridays, 3:30 PM - 5:00 PM",
            "max_participants": 12,
            "participants": ["michael@mergington.edu", "daniel@mergington.edu"]
        },
        "Art Studio": {
            "description": "Painting and drawing",
            "schedule": "Mondays, 4:00 PM - 5:30 PM",
            "max_participants": 1,
            "participants": ["ann.lee@mergington.edu", "bo@mergington.edu"]
        },
        "Debate Team": {
            "description": "Argue both sides",
            "schedule": "Thursdays, 4:00 PM - 5:30 PM",
            "max_participants": 16
        }
    }"#;

    fn activities() -> Activities {
        serde_json::from_str(BODY).unwrap()
    }

    #[test]
    fn keeps_server_order() {
        let names: Vec<_> = activities().iter().map(|a| a.name.clone()).collect();
        assert_eq!(names, ["Chess Club", "Art Studio", "Debate Team"]);
    }

    #[test]
    fn missing_participants_is_empty() {
        let activities = activities();
        let debate = activities.get("Debate Team").unwrap();
        assert!(debate.details.participants.is_empty());
        assert_eq!(debate.participant_entries(), vec![ParticipantEntry::Placeholder]);
    }

    #[test]
    fn spots_left_is_capacity_minus_participants() {
        let activities = activities();
        assert_eq!(activities.get("Chess Club").unwrap().spots_left(), 10);
        assert_eq!(activities.get("Debate Team").unwrap().spots_left(), 16);
        // over capacity is shown as is
        assert_eq!(activities.get("Art Studio").unwrap().spots_left(), -1);
    }

    #[test]
    fn one_option_per_activity_plus_placeholder() {
        let activities = activities();
        let options = activities.select_options();
        assert_eq!(options.len(), activities.len() + 1);
        assert_eq!(options[0].value, "");
        assert_eq!(options[0].label, SelectOption::PLACEHOLDER_LABEL);
        assert_eq!(options[2].value, "Art Studio");
    }

    #[test]
    fn members_carry_initials() {
        let activities = activities();
        let entries = activities.get("Art Studio").unwrap().participant_entries();
        assert_eq!(
            entries,
            vec![
                ParticipantEntry::Member {
                    email: "ann.lee@mergington.edu".to_string(),
                    initials: "AL".to_string(),
                },
                ParticipantEntry::Member {
                    email: "bo@mergington.edu".to_string(),
                    initials: "B".to_string(),
                },
            ]
        );
    }

    #[test]
    fn rejects_non_map_body() {
        assert!(serde_json::from_str::<Activities>("[]").is_err());
    }
}

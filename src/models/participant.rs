use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::schema::{nullable_defaulted, required, DefaultValue, FieldType, Record, Schema};

pub static PARTICIPANT_SCHEMA: Schema = Schema {
    name: "Participant",
    extends: None,
    fields: &[
        required("id", FieldType::Str),
        required("name", FieldType::Str),
        required("user_email", FieldType::Str),
    ],
};

/// A meeting attendee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    pub id: String,
    pub name: String,
    #[serde(rename = "user_email")]
    pub email: String,
}

impl Record for Participant {
    fn schema() -> &'static Schema {
        &PARTICIPANT_SCHEMA
    }
}

pub static PARTICIPANT_PAGE_SCHEMA: Schema = Schema {
    name: "ParticipantPage",
    extends: None,
    fields: &[
        required("page_count", FieldType::Count),
        required("page_size", FieldType::Count),
        required("total_records", FieldType::Count),
        nullable_defaulted(
            "participants",
            FieldType::RecordList(&PARTICIPANT_SCHEMA),
            DefaultValue::EmptyList,
        ),
    ],
};

/// Participants of a meeting, with pagination metadata.
///
/// Reads like a slice of [`Participant`]: `len`, `iter`, `get`, indexing and
/// `for p in &page` all go to the underlying list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticipantPage {
    pub page_count: u64,
    pub page_size: u64,
    pub total_records: u64,
    #[serde(default)]
    participants: Vec<Participant>,
}

impl Record for ParticipantPage {
    fn schema() -> &'static Schema {
        &PARTICIPANT_PAGE_SCHEMA
    }
}

impl ParticipantPage {
    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    pub fn len(&self) -> usize {
        self.participants.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Participant> {
        self.participants.iter()
    }

    #[allow(dead_code)]
    pub fn get(&self, index: usize) -> Option<&Participant> {
        self.participants.get(index)
    }

    pub fn find_by_id(&self, id: &str) -> Vec<&Participant> {
        self.iter().filter(|p| p.id == id).collect()
    }

    pub fn find_by_email(&self, email: &str) -> Vec<&Participant> {
        self.iter().filter(|p| p.email == email).collect()
    }

    pub fn find_by_name(&self, name: &str) -> Vec<&Participant> {
        self.iter().filter(|p| p.name == name).collect()
    }
}

impl Index<usize> for ParticipantPage {
    type Output = Participant;

    fn index(&self, index: usize) -> &Participant {
        &self.participants[index]
    }
}

impl<'a> IntoIterator for &'a ParticipantPage {
    type Item = &'a Participant;
    type IntoIter = std::slice::Iter<'a, Participant>;

    fn into_iter(self) -> Self::IntoIter {
        self.participants.iter()
    }
}

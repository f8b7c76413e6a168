use crate::models::{MeetingSummary, MeetingSummaryPage, Participant, ParticipantPage};

/// Which meetings to keep from a listing page.
#[derive(Debug, Clone, PartialEq)]
pub enum MeetingFilter {
    /// Case-insensitive substring of the topic.
    Topic(String),
    /// Exact meeting id.
    Id(i64),
}

impl MeetingFilter {
    /// Build from CLI flags. `--id` wins when both are given.
    pub fn from_flags(topic: Option<&str>, id: Option<i64>) -> Option<Self> {
        match (topic, id) {
            (_, Some(id)) => Some(MeetingFilter::Id(id)),
            (Some(text), None) => Some(MeetingFilter::Topic(text.to_string())),
            (None, None) => None,
        }
    }

    pub fn apply<'a>(&self, page: &'a MeetingSummaryPage) -> Vec<&'a MeetingSummary> {
        match self {
            MeetingFilter::Topic(text) => page.filter_by_topic(text),
            MeetingFilter::Id(id) => page.filter_by_id(*id),
        }
    }

    pub fn describe(&self) -> String {
        match self {
            MeetingFilter::Topic(text) => format!("topic containing \"{}\"", text),
            MeetingFilter::Id(id) => format!("id {}", id),
        }
    }
}

/// Exact-match participant lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum ParticipantLookup {
    Id(String),
    Email(String),
    Name(String),
}

impl ParticipantLookup {
    /// Build from CLI flags; the first flag set in `id`, `email`, `name` order is used.
    pub fn from_flags(id: Option<&str>, email: Option<&str>, name: Option<&str>) -> Option<Self> {
        if let Some(id) = id {
            return Some(ParticipantLookup::Id(id.to_string()));
        }
        if let Some(email) = email {
            return Some(ParticipantLookup::Email(email.to_string()));
        }
        name.map(|n| ParticipantLookup::Name(n.to_string()))
    }

    pub fn apply<'a>(&self, page: &'a ParticipantPage) -> Vec<&'a Participant> {
        match self {
            ParticipantLookup::Id(id) => page.find_by_id(id),
            ParticipantLookup::Email(email) => page.find_by_email(email),
            ParticipantLookup::Name(name) => page.find_by_name(name),
        }
    }

    pub fn describe(&self) -> String {
        match self {
            ParticipantLookup::Id(id) => format!("id \"{}\"", id),
            ParticipantLookup::Email(email) => format!("email \"{}\"", email),
            ParticipantLookup::Name(name) => format!("name \"{}\"", name),
        }
    }
}

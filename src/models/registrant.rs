use serde::{Deserialize, Serialize};

use crate::schema::{optional, required, FieldType, Record, Schema};

pub static REGISTRANT_SUMMARY_SCHEMA: Schema = Schema {
    name: "RegistrantSummary",
    extends: None,
    fields: &[
        optional("id", FieldType::Str),
        optional("email", FieldType::Str),
    ],
};

/// Minimal registrant reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistrantSummary {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl Record for RegistrantSummary {
    fn schema() -> &'static Schema {
        &REGISTRANT_SUMMARY_SCHEMA
    }
}

pub static REGISTRANT_SCHEMA: Schema = Schema {
    name: "Registrant",
    extends: Some(&REGISTRANT_SUMMARY_SCHEMA),
    fields: &[
        required("email", FieldType::Str),
        required("first_name", FieldType::Str),
        required("last_name", FieldType::Str),
        optional("address", FieldType::Str),
        optional("city", FieldType::Str),
        optional("country", FieldType::Str),
        optional("zip", FieldType::Str),
        optional("state", FieldType::Str),
        optional("phone", FieldType::Str),
        optional("industry", FieldType::Str),
        optional("org", FieldType::Str),
        optional("job_title", FieldType::Str),
        optional("comment", FieldType::Str),
    ],
};

/// Full registrant detail.
///
/// `email` is required here and lives on the full record, so the flattened
/// summary only ever carries the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Registrant {
    #[serde(flatten)]
    pub summary: RegistrantSummary,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub org: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl Record for Registrant {
    fn schema() -> &'static Schema {
        &REGISTRANT_SCHEMA
    }
}

impl Registrant {
    pub fn id(&self) -> Option<&str> {
        self.summary.id.as_deref()
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

pub static REGISTRANT_PAGE_SCHEMA: Schema = Schema {
    name: "RegistrantPage",
    extends: None,
    fields: &[
        required("page_count", FieldType::Count),
        required("page_number", FieldType::Count),
        required("page_size", FieldType::Count),
        required("total_records", FieldType::Count),
        required("registrants", FieldType::RecordList(&REGISTRANT_SCHEMA)),
    ],
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistrantPage {
    pub page_count: u64,
    pub page_number: u64,
    pub page_size: u64,
    pub total_records: u64,
    pub registrants: Vec<Registrant>,
}

impl Record for RegistrantPage {
    fn schema() -> &'static Schema {
        &REGISTRANT_PAGE_SCHEMA
    }
}

pub static REGISTRANT_CONFIRMATION_SCHEMA: Schema = Schema {
    name: "RegistrantConfirmation",
    extends: None,
    fields: &[
        required("registrant_id", FieldType::Str),
        required("id", FieldType::Int),
        required("topic", FieldType::Str),
        required("start_time", FieldType::Str),
        required("join_url", FieldType::Str),
    ],
};

/// Acknowledgment returned after adding a registrant. `id` is the meeting id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistrantConfirmation {
    pub registrant_id: String,
    pub id: i64,
    pub topic: String,
    pub start_time: String,
    pub join_url: String,
}

impl Record for RegistrantConfirmation {
    fn schema() -> &'static Schema {
        &REGISTRANT_CONFIRMATION_SCHEMA
    }
}

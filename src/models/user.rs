use serde::{Deserialize, Serialize};

use crate::schema::{optional, required, FieldType, Record, Schema};

pub static USER_SCHEMA: Schema = Schema {
    name: "User",
    extends: None,
    fields: &[
        required("id", FieldType::Str),
        required("first_name", FieldType::Str),
        required("last_name", FieldType::Str),
        required("email", FieldType::Str),
        required("type", FieldType::Int),
        required("pmi", FieldType::Int),
        optional("timezone", FieldType::Str),
        required("verified", FieldType::Int),
        optional("dept", FieldType::Str),
        required("created_at", FieldType::Str),
        optional("pic_url", FieldType::Str),
        optional("group_ids", FieldType::StrList),
        optional("language", FieldType::Str),
        optional("phone_number", FieldType::Str),
        required("status", FieldType::Str),
        required("role_id", FieldType::Str),
    ],
};

/// An account on the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(rename = "type")]
    pub kind: i64,
    /// Personal meeting id.
    pub pmi: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    /// 1 when the email address has been verified.
    pub verified: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dept: Option<String>,
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pic_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_ids: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    pub status: String,
    pub role_id: String,
}

impl Record for User {
    fn schema() -> &'static Schema {
        &USER_SCHEMA
    }
}

impl User {
    pub fn is_verified(&self) -> bool {
        self.verified != 0
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

pub static USER_PAGE_SCHEMA: Schema = Schema {
    name: "UserPage",
    extends: None,
    fields: &[
        required("page_count", FieldType::Count),
        required("page_number", FieldType::Count),
        required("page_size", FieldType::Count),
        required("total_records", FieldType::Count),
        required("users", FieldType::RecordList(&USER_SCHEMA)),
    ],
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserPage {
    pub page_count: u64,
    pub page_number: u64,
    pub page_size: u64,
    pub total_records: u64,
    pub users: Vec<User>,
}

impl Record for UserPage {
    fn schema() -> &'static Schema {
        &USER_PAGE_SCHEMA
    }
}

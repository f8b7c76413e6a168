use serde::Serialize;

use crate::models::{MeetingSummary, Participant};
use crate::schema::{FieldIssue, ValidationError};

/// Serialize any serializable value to pretty JSON string.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
}

pub fn format_meetings(meetings: &[&MeetingSummary]) -> String {
    to_json(meetings)
}

pub fn format_participants(participants: &[&Participant]) -> String {
    to_json(participants)
}

/// JSON report for a record that failed validation.
#[derive(Debug, Serialize)]
pub struct ValidationReportJson<'a> {
    pub valid: bool,
    pub record: &'a str,
    pub message: String,
    pub issues: &'a [FieldIssue],
}

pub fn format_validation_error(record: &str, err: &ValidationError) -> String {
    to_json(&ValidationReportJson {
        valid: false,
        record,
        message: err.to_string(),
        issues: err.issues(),
    })
}

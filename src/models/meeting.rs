use serde::{Deserialize, Serialize};

use super::settings::{MEETING_SETTINGS_SCHEMA, MeetingSettings};
use crate::schema::{optional, required, FieldType, Record, Schema};

// ============================================================================
// Meeting (short form)
// ============================================================================

pub static MEETING_SUMMARY_SCHEMA: Schema = Schema {
    name: "MeetingSummary",
    extends: None,
    fields: &[
        required("uuid", FieldType::Str),
        required("id", FieldType::Int),
        required("host_id", FieldType::Str),
        required("topic", FieldType::Str),
        required("type", FieldType::Int),
        optional("start_time", FieldType::Str),
        required("duration", FieldType::Int),
        required("timezone", FieldType::Str),
        required("created_at", FieldType::Str),
        required("join_url", FieldType::Str),
    ],
};

/// A meeting as it appears in list results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeetingSummary {
    pub uuid: String,
    pub id: i64,
    pub host_id: String,
    pub topic: String,
    #[serde(rename = "type")]
    pub kind: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    /// Scheduled length in minutes.
    pub duration: i64,
    pub timezone: String,
    pub created_at: String,
    pub join_url: String,
}

impl Record for MeetingSummary {
    fn schema() -> &'static Schema {
        &MEETING_SUMMARY_SCHEMA
    }
}

// ============================================================================
// Meeting (full form)
// ============================================================================

pub static MEETING_SCHEMA: Schema = Schema {
    name: "Meeting",
    extends: Some(&MEETING_SUMMARY_SCHEMA),
    fields: &[
        required("status", FieldType::Str),
        optional("agenda", FieldType::Str),
        required("start_url", FieldType::Str),
        optional("registration_url", FieldType::Str),
        required("password", FieldType::Str),
        required("h323_password", FieldType::Str),
        required("pstn_password", FieldType::Str),
        required("encrypted_password", FieldType::Str),
        required("settings", FieldType::Record(&MEETING_SETTINGS_SCHEMA)),
    ],
};

/// Full meeting detail: the summary fields plus hosting details and settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meeting {
    #[serde(flatten)]
    pub summary: MeetingSummary,
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agenda: Option<String>,
    pub start_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registration_url: Option<String>,
    pub password: String,
    pub h323_password: String,
    pub pstn_password: String,
    pub encrypted_password: String,
    pub settings: MeetingSettings,
}

impl Record for Meeting {
    fn schema() -> &'static Schema {
        &MEETING_SCHEMA
    }
}

impl AsRef<MeetingSummary> for Meeting {
    fn as_ref(&self) -> &MeetingSummary {
        &self.summary
    }
}

// ============================================================================
// Meeting list page
// ============================================================================

pub static MEETING_SUMMARY_PAGE_SCHEMA: Schema = Schema {
    name: "MeetingSummaryPage",
    extends: None,
    fields: &[
        optional("page_count", FieldType::Count),
        optional("page_number", FieldType::Count),
        required("page_size", FieldType::Count),
        required("total_records", FieldType::Count),
        required("meetings", FieldType::RecordList(&MEETING_SUMMARY_SCHEMA)),
        optional("next_page_token", FieldType::Str),
    ],
};

/// One page of meeting list results, in server order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeetingSummaryPage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_number: Option<u64>,
    pub page_size: u64,
    pub total_records: u64,
    pub meetings: Vec<MeetingSummary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,
}

impl Record for MeetingSummaryPage {
    fn schema() -> &'static Schema {
        &MEETING_SUMMARY_PAGE_SCHEMA
    }
}

impl MeetingSummaryPage {
    /// Meetings whose topic contains `text`, ignoring case.
    pub fn filter_by_topic(&self, text: &str) -> Vec<&MeetingSummary> {
        let needle = text.to_lowercase();
        self.meetings
            .iter()
            .filter(|m| m.topic.to_lowercase().contains(&needle))
            .collect()
    }

    pub fn filter_by_id(&self, id: i64) -> Vec<&MeetingSummary> {
        self.meetings.iter().filter(|m| m.id == id).collect()
    }

    pub fn has_next_page(&self) -> bool {
        self.next_page_token.as_deref().is_some_and(|t| !t.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::settings::Audio;
    use crate::schema::FieldIssue;
    use serde_json::{json, Value};

    fn raw_summary(id: i64, topic: &str) -> Value {
        json!({
            "uuid": format!("uuid-{}", id),
            "id": id,
            "host_id": "host-1",
            "topic": topic,
            "type": 2,
            "start_time": "2026-01-20T10:00:00Z",
            "duration": 30,
            "timezone": "America/New_York",
            "created_at": "2026-01-10T09:00:00Z",
            "join_url": format!("https://zoom.us/j/{}", id)
        })
    }

    fn raw_meeting() -> Value {
        let mut raw = raw_summary(85746065432, "Weekly Sync");
        let obj = raw.as_object_mut().unwrap();
        obj.insert("status".into(), json!("waiting"));
        obj.insert("agenda".into(), json!("Roadmap"));
        obj.insert("start_url".into(), json!("https://zoom.us/s/85746065432"));
        obj.insert("password".into(), json!("abc123"));
        obj.insert("h323_password".into(), json!("123456"));
        obj.insert("pstn_password".into(), json!("123456"));
        obj.insert("encrypted_password".into(), json!("enc"));
        obj.insert(
            "settings".into(),
            serde_json::to_value(MeetingSettings::conservative()).unwrap(),
        );
        raw
    }

    fn page(meetings: Vec<Value>) -> MeetingSummaryPage {
        let raw = json!({
            "page_size": 30,
            "total_records": meetings.len(),
            "meetings": meetings,
        });
        MeetingSummaryPage::from_value(&raw).unwrap()
    }

    #[test]
    fn test_parse_summary_round_trip() {
        let raw = raw_summary(100, "Daily Standup");
        let m = MeetingSummary::from_value(&raw).unwrap();
        assert_eq!(m.id, 100);
        assert_eq!(m.topic, "Daily Standup");
        assert_eq!(m.kind, 2);
        assert_eq!(m.start_time.as_deref(), Some("2026-01-20T10:00:00Z"));
        assert_eq!(serde_json::to_value(&m).unwrap(), raw);
    }

    #[test]
    fn test_summary_without_start_time() {
        let mut raw = raw_summary(1, "Instant");
        raw.as_object_mut().unwrap().remove("start_time");
        let m = MeetingSummary::from_value(&raw).unwrap();
        assert_eq!(m.start_time, None);
    }

    #[test]
    fn test_summary_id_must_be_integer() {
        let mut raw = raw_summary(1, "x");
        raw["id"] = json!("1");
        let err = MeetingSummary::from_value(&raw).unwrap_err();
        assert_eq!(err.paths(), vec!["id"]);
    }

    #[test]
    fn test_parse_full_meeting() {
        let m = Meeting::from_value(&raw_meeting()).unwrap();
        assert_eq!(m.summary.topic, "Weekly Sync");
        assert_eq!(m.status, "waiting");
        assert_eq!(m.agenda.as_deref(), Some("Roadmap"));
        assert_eq!(m.registration_url, None);
        assert_eq!(m.settings, MeetingSettings::conservative());
        assert_eq!(m.as_ref().id, 85746065432);
    }

    #[test]
    fn test_meeting_enforces_summary_rules_first() {
        let mut raw = raw_meeting();
        let obj = raw.as_object_mut().unwrap();
        obj.remove("topic");
        obj.remove("start_url");
        let err = Meeting::from_value(&raw).unwrap_err();
        assert_eq!(err.paths(), vec!["topic", "start_url"]);
    }

    #[test]
    fn test_nested_settings_error_path() {
        let mut raw = raw_meeting();
        raw["settings"]["audio"] = json!("smoke-signal");
        let err = Meeting::from_value(&raw).unwrap_err();
        assert_eq!(err.paths(), vec!["settings.audio"]);
        assert!(err.to_string().contains("settings.audio"));
    }

    #[test]
    fn test_nested_settings_defaults_applied() {
        let mut raw = raw_meeting();
        raw["settings"].as_object_mut().unwrap().remove("approval_type");
        let m = Meeting::from_value(&raw).unwrap();
        assert_eq!(m.settings.approval_type as i64, 2);
        assert_eq!(m.settings.audio, Audio::Telephony);
    }

    #[test]
    fn test_settings_must_be_object() {
        let mut raw = raw_meeting();
        raw["settings"] = json!("default");
        let err = Meeting::from_value(&raw).unwrap_err();
        assert_eq!(
            err.issues(),
            &[FieldIssue::type_mismatch("settings", "object", &json!("default"))]
        );
    }

    #[test]
    fn test_page_parse_keeps_order_and_token() {
        let raw = json!({
            "page_count": 2,
            "page_number": 1,
            "page_size": 2,
            "total_records": 3,
            "next_page_token": "tok-2",
            "meetings": [raw_summary(3, "c"), raw_summary(1, "a")]
        });
        let p = MeetingSummaryPage::from_value(&raw).unwrap();
        let ids: Vec<i64> = p.meetings.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![3, 1]);
        assert!(p.has_next_page());
        assert_eq!(p.page_count, Some(2));
    }

    #[test]
    fn test_page_negative_total_rejected() {
        let raw = json!({"page_size": 30, "total_records": -1, "meetings": []});
        let err = MeetingSummaryPage::from_value(&raw).unwrap_err();
        assert_eq!(err.paths(), vec!["total_records"]);
    }

    #[test]
    fn test_page_reports_bad_item_by_index() {
        let mut bad = raw_summary(2, "b");
        bad.as_object_mut().unwrap().remove("join_url");
        let raw = json!({
            "page_size": 30,
            "total_records": 2,
            "meetings": [raw_summary(1, "a"), bad]
        });
        let err = MeetingSummaryPage::from_value(&raw).unwrap_err();
        assert_eq!(err.paths(), vec!["meetings[1].join_url"]);
    }

    #[test]
    fn test_filter_by_topic_case_insensitive() {
        let p = page(vec![raw_summary(1, "Daily Standup"), raw_summary(2, "Retro")]);
        let hits = p.filter_by_topic("standup");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].topic, "Daily Standup");
        assert!(p.filter_by_topic("xyz").is_empty());
    }

    #[test]
    fn test_filter_by_topic_keeps_order() {
        let p = page(vec![
            raw_summary(1, "Sprint Review"),
            raw_summary(2, "Retro"),
            raw_summary(3, "sprint planning"),
        ]);
        let ids: Vec<i64> = p.filter_by_topic("SPRINT").iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_filter_by_id_exact() {
        let p = page(vec![raw_summary(100, "a"), raw_summary(200, "b")]);
        let hits = p.filter_by_id(200);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].topic, "b");
        assert!(p.filter_by_id(999).is_empty());
    }

    #[test]
    fn test_empty_topic_matches_every_meeting() {
        let p = page(vec![
            raw_summary(1, "Daily Standup"),
            raw_summary(2, "Retro"),
            raw_summary(3, ""),
        ]);
        let ids: Vec<i64> = p.filter_by_topic("").iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_filters_on_empty_page() {
        let p = page(vec![]);
        assert!(p.filter_by_topic("").is_empty());
        assert!(p.filter_by_id(1).is_empty());
        assert!(!p.has_next_page());
    }
}

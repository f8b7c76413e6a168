use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::schema::{
    defaulted, nullable_defaulted, optional, required, DefaultValue, FieldType, Record, Schema,
};

// ============================================================================
// Enumerated setting values
// ============================================================================

/// Who approves registrations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum ApprovalType {
    Automatic = 0,
    Manual = 1,
    NoRegistration = 2,
}

impl ApprovalType {
    pub const ALLOWED: &'static [i64] = &[0, 1, 2];
}

impl TryFrom<i64> for ApprovalType {
    type Error = String;

    fn try_from(n: i64) -> Result<Self, Self::Error> {
        match n {
            0 => Ok(ApprovalType::Automatic),
            1 => Ok(ApprovalType::Manual),
            2 => Ok(ApprovalType::NoRegistration),
            other => Err(format!("invalid approval_type {}", other)),
        }
    }
}

impl From<ApprovalType> for i64 {
    fn from(value: ApprovalType) -> Self {
        value as i64
    }
}

/// How registration applies to recurring meetings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum RegistrationType {
    /// Register once, attend any occurrence.
    OnceAttendAll = 1,
    /// Register for each occurrence.
    EachOccurrence = 2,
    /// Register once, pick occurrences.
    OnceChooseOccurrences = 3,
}

impl RegistrationType {
    pub const ALLOWED: &'static [i64] = &[1, 2, 3];
}

impl TryFrom<i64> for RegistrationType {
    type Error = String;

    fn try_from(n: i64) -> Result<Self, Self::Error> {
        match n {
            1 => Ok(RegistrationType::OnceAttendAll),
            2 => Ok(RegistrationType::EachOccurrence),
            3 => Ok(RegistrationType::OnceChooseOccurrences),
            other => Err(format!("invalid registration_type {}", other)),
        }
    }
}

impl From<RegistrationType> for i64 {
    fn from(value: RegistrationType) -> Self {
        value as i64
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Audio {
    Voip,
    Telephony,
    Both,
}

impl Audio {
    pub const ALLOWED: &'static [&'static str] = &["voip", "telephony", "both"];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AutoRecording {
    Local,
    Cloud,
    #[serde(rename = "none")]
    Disabled,
}

impl AutoRecording {
    pub const ALLOWED: &'static [&'static str] = &["local", "cloud", "none"];
}

// ============================================================================
// Meeting settings
// ============================================================================

pub static MEETING_SETTINGS_SCHEMA: Schema = Schema {
    name: "MeetingSettings",
    extends: None,
    fields: &[
        required("host_video", FieldType::Bool),
        required("participant_video", FieldType::Bool),
        required("cn_meeting", FieldType::Bool),
        required("in_meeting", FieldType::Bool),
        required("join_before_host", FieldType::Bool),
        required("mute_upon_entry", FieldType::Bool),
        required("watermark", FieldType::Bool),
        required("use_pmi", FieldType::Bool),
        defaulted(
            "approval_type",
            FieldType::IntChoice(ApprovalType::ALLOWED),
            DefaultValue::Int(2),
        ),
        nullable_defaulted(
            "registration_type",
            FieldType::IntChoice(RegistrationType::ALLOWED),
            DefaultValue::Int(2),
        ),
        required("audio", FieldType::StrChoice(Audio::ALLOWED)),
        required("auto_recording", FieldType::StrChoice(AutoRecording::ALLOWED)),
        required("enforce_login", FieldType::Bool),
        optional("enforce_login_domains", FieldType::Str),
        optional("alternative_hosts", FieldType::Str),
        optional("close_registration", FieldType::Bool),
        required("waiting_room", FieldType::Bool),
        optional("global_dial_in_countries", FieldType::StrList),
        optional("contact_name", FieldType::Str),
        optional("contact_email", FieldType::Str),
        required("registrants_email_notification", FieldType::Bool),
        required("meeting_authentication", FieldType::Bool),
        optional("authentication_option", FieldType::Str),
        optional("authentication_domains", FieldType::Str),
        optional("meeting_invitees", FieldType::ObjectList),
    ],
};

/// Configuration flags for a scheduled meeting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeetingSettings {
    pub host_video: bool,
    pub participant_video: bool,
    pub cn_meeting: bool,
    pub in_meeting: bool,
    pub join_before_host: bool,
    pub mute_upon_entry: bool,
    pub watermark: bool,
    pub use_pmi: bool,
    pub approval_type: ApprovalType,
    /// `None` only when the record carried an explicit `null`.
    #[serde(default)]
    pub registration_type: Option<RegistrationType>,
    pub audio: Audio,
    pub auto_recording: AutoRecording,
    pub enforce_login: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enforce_login_domains: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternative_hosts: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub close_registration: Option<bool>,
    /// Lobby holds attendees until the host admits them.
    pub waiting_room: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub global_dial_in_countries: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    pub registrants_email_notification: bool,
    pub meeting_authentication: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authentication_option: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authentication_domains: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meeting_invitees: Option<Vec<Map<String, Value>>>,
}

impl Record for MeetingSettings {
    fn schema() -> &'static Schema {
        &MEETING_SETTINGS_SCHEMA
    }
}

const PRESET_CONTACT_NAME: &str = "UFY";
const PRESET_CONTACT_EMAIL: &str = "ufyit@support.com";

impl MeetingSettings {
    /// Video on, lobby on, no sign-in required, telephony audio.
    pub fn conservative() -> Self {
        MeetingSettings {
            host_video: true,
            participant_video: true,
            cn_meeting: false,
            in_meeting: false,
            join_before_host: true,
            mute_upon_entry: true,
            watermark: false,
            use_pmi: false,
            approval_type: ApprovalType::Automatic,
            registration_type: Some(RegistrationType::EachOccurrence),
            audio: Audio::Telephony,
            auto_recording: AutoRecording::Disabled,
            enforce_login: false,
            enforce_login_domains: None,
            alternative_hosts: None,
            close_registration: None,
            waiting_room: true,
            global_dial_in_countries: None,
            contact_name: Some(PRESET_CONTACT_NAME.to_string()),
            contact_email: Some(PRESET_CONTACT_EMAIL.to_string()),
            registrants_email_notification: true,
            meeting_authentication: false,
            authentication_option: None,
            authentication_domains: None,
            meeting_invitees: None,
        }
    }

    /// No lobby, sign-in required, VoIP audio.
    pub fn permissive() -> Self {
        MeetingSettings {
            approval_type: ApprovalType::NoRegistration,
            registration_type: Some(RegistrationType::OnceAttendAll),
            audio: Audio::Voip,
            waiting_room: false,
            meeting_authentication: true,
            ..Self::conservative()
        }
    }

    pub fn preset(preset: Preset) -> Self {
        match preset {
            Preset::Conservative => Self::conservative(),
            Preset::Permissive => Self::permissive(),
        }
    }
}

/// Named bundle of default settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    #[default]
    Conservative,
    Permissive,
}

impl Preset {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "conservative" => Some(Preset::Conservative),
            "permissive" => Some(Preset::Permissive),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Preset::Conservative => "conservative",
            Preset::Permissive => "permissive",
        }
    }
}

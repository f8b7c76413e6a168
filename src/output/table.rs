use chrono::FixedOffset;
use colored::Colorize;
use serde_json::Value;

use crate::models::{MeetingSummary, Participant, Registrant, User};
use crate::schema::ValidationError;

/// Format a meeting list entry for TTY display.
pub fn format_meeting_row(meeting: &MeetingSummary, tz: &FixedOffset) -> String {
    let start = meeting
        .start_time
        .as_deref()
        .map(|s| format_date_short(s, tz))
        .unwrap_or_else(|| "(unscheduled)".to_string());

    format!(
        "{} {} {} {}",
        meeting.id.to_string().dimmed(),
        start.dimmed(),
        format!("{}m", meeting.duration).dimmed(),
        meeting.topic.bold()
    )
}

/// Format a participant as `name <email> id`.
pub fn format_participant_row(participant: &Participant) -> String {
    format!(
        "{} {} {}",
        participant.name.bold(),
        format!("<{}>", participant.email).dimmed(),
        participant.id.dimmed()
    )
}

/// Format a registrant as `full name <email> id`.
pub fn format_registrant_row(registrant: &Registrant) -> String {
    format!(
        "{} {} {}",
        registrant.full_name().bold(),
        format!("<{}>", registrant.email).dimmed(),
        registrant.id().unwrap_or("(no id)").dimmed()
    )
}

/// Format an account as `full name <email> id`, flagging unverified emails.
pub fn format_user_row(user: &User) -> String {
    let row = format!(
        "{} {} {}",
        user.full_name().bold(),
        format!("<{}>", user.email).dimmed(),
        user.id.dimmed()
    );
    if user.is_verified() {
        row
    } else {
        format!("{} {}", row, "(unverified)".yellow())
    }
}

/// Render a serialized record as indented `field: value` lines.
pub fn format_record_fields(value: &Value) -> String {
    let mut lines = Vec::new();
    push_fields(value, 0, &mut lines);
    lines.join("\n")
}

fn push_fields(value: &Value, depth: usize, lines: &mut Vec<String>) {
    let indent = "  ".repeat(depth);

    let Value::Object(map) = value else {
        lines.push(format!("{}{}", indent, scalar(value)));
        return;
    };

    for (key, v) in map {
        let label = format!("{}:", key).dimmed();
        match v {
            Value::Object(_) => {
                lines.push(format!("{}{}", indent, label));
                push_fields(v, depth + 1, lines);
            }
            Value::Array(items) if items.iter().any(Value::is_object) => {
                lines.push(format!("{}{}", indent, label));
                for (i, item) in items.iter().enumerate() {
                    lines.push(format!("{}  {}", indent, format!("[{}]", i).dimmed()));
                    push_fields(item, depth + 2, lines);
                }
            }
            _ => lines.push(format!("{}{} {}", indent, label, scalar(v))),
        }
    }
}

fn scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(items) if items.is_empty() => "(none)".to_string(),
        Value::Array(items) => items.iter().map(scalar).collect::<Vec<_>>().join(", "),
        other => other.to_string(),
    }
}

/// Format a validation failure, one line per failed field.
pub fn format_validation_error(record: &str, err: &ValidationError) -> String {
    let issues = err.issues();
    if issues.is_empty() {
        return format!("{} {}", "✗".red(), err);
    }

    let mut lines = vec![format!(
        "{} {} ({} issue{})",
        "✗".red(),
        format!("invalid {}", record).bold(),
        issues.len(),
        if issues.len() == 1 { "" } else { "s" }
    )];
    for issue in issues {
        lines.push(format!("  {} {}", "•".red(), issue));
    }
    lines.join("\n")
}

/// Header printed above a successfully validated record.
pub fn format_valid_header(record: &str) -> String {
    format!("{} {}", "✓".green(), format!("valid {}", record).bold())
}

fn format_date_short(s: &str, tz: &FixedOffset) -> String {
    // Try to parse and format nicely, fallback to raw string
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(s) {
        dt.with_timezone(tz).format("%Y-%m-%d %H:%M").to_string()
    } else {
        s.to_string()
    }
}

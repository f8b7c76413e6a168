#![allow(dead_code)]

use std::path::PathBuf;

use assert_cmd::Command;
use serde_json::{json, Value};
use tempfile::TempDir;

/// A self-contained test environment with fixture files and an isolated config.
pub struct TestEnv {
    pub dir: TempDir,
    pub config_path: PathBuf,
}

impl TestEnv {
    /// Create an environment with no config file (defaults apply).
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.toml");
        TestEnv { dir, config_path }
    }

    /// Create an environment whose config file holds `toml`.
    pub fn with_config(toml: &str) -> Self {
        let env = Self::new();
        std::fs::write(&env.config_path, toml).unwrap();
        env
    }

    /// Write `value` as JSON into the environment and return its path.
    pub fn write_json(&self, name: &str, value: &Value) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, serde_json::to_string_pretty(value).unwrap()).unwrap();
        path
    }

    pub fn write_text(&self, name: &str, text: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, text).unwrap();
        path
    }

    /// Get a Command configured to run zoomschema with this environment.
    pub fn cmd(&self) -> Command {
        let mut cmd = assert_cmd::cargo_bin_cmd!("zoomschema");
        cmd.env("ZOOMSCHEMA_CONFIG", &self.config_path);
        cmd.env_remove("ZOOMSCHEMA_LOG");
        // Ensure no color codes pollute test output
        cmd.env("NO_COLOR", "1");
        cmd
    }

    /// Get a Command with --json flag.
    pub fn cmd_json(&self) -> Command {
        let mut cmd = self.cmd();
        cmd.arg("--json");
        cmd
    }
}

pub fn meeting_summary(id: i64, topic: &str) -> Value {
    json!({
        "uuid": format!("uuid-{}", id),
        "id": id,
        "host_id": "KDcuGIm1QgePTO8WbOqwIQ",
        "topic": topic,
        "type": 2,
        "start_time": "2026-03-02T15:00:00Z",
        "duration": 30,
        "timezone": "Europe/Berlin",
        "created_at": "2026-02-20T10:00:00Z",
        "join_url": format!("https://zoom.us/j/{}", id)
    })
}

pub fn settings() -> Value {
    json!({
        "host_video": true,
        "participant_video": true,
        "cn_meeting": false,
        "in_meeting": false,
        "join_before_host": false,
        "mute_upon_entry": true,
        "watermark": false,
        "use_pmi": false,
        "approval_type": 2,
        "audio": "voip",
        "auto_recording": "cloud",
        "enforce_login": false,
        "waiting_room": true,
        "registrants_email_notification": true,
        "meeting_authentication": false
    })
}

pub fn meeting() -> Value {
    let mut raw = meeting_summary(85746065432, "Quarterly Planning");
    let obj = raw.as_object_mut().unwrap();
    obj.insert("status".into(), json!("waiting"));
    obj.insert("start_url".into(), json!("https://zoom.us/s/85746065432"));
    obj.insert("password".into(), json!("pw"));
    obj.insert("h323_password".into(), json!("111"));
    obj.insert("pstn_password".into(), json!("111"));
    obj.insert("encrypted_password".into(), json!("enc"));
    obj.insert("settings".into(), settings());
    raw
}

pub fn meeting_page() -> Value {
    json!({
        "page_count": 1,
        "page_number": 1,
        "page_size": 30,
        "total_records": 3,
        "meetings": [
            meeting_summary(100, "Daily Standup"),
            meeting_summary(200, "Retro"),
            meeting_summary(300, "Standup Follow-up")
        ]
    })
}

pub fn participant_page() -> Value {
    json!({
        "page_count": 1,
        "page_size": 30,
        "total_records": 3,
        "participants": [
            {"id": "p1", "name": "Alice Moreau", "user_email": "alice@example.com"},
            {"id": "p2", "name": "Bram Visser", "user_email": "bram@example.com"},
            {"id": "p3", "name": "Alice Moreau", "user_email": "alice.m@example.org"}
        ]
    })
}

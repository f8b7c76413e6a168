use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// What went wrong with a single field.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IssueKind {
    Missing,
    TypeMismatch { expected: &'static str, actual: Value },
    NotAllowed { value: Value, allowed: Vec<Value> },
}

/// One failed field, addressed by its dotted path (`settings.audio`,
/// `meetings[2].topic`). The record itself is `$`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldIssue {
    pub path: String,
    #[serde(flatten)]
    pub kind: IssueKind,
}

impl FieldIssue {
    pub fn missing(path: impl Into<String>) -> Self {
        FieldIssue {
            path: path.into(),
            kind: IssueKind::Missing,
        }
    }

    pub fn type_mismatch(path: impl Into<String>, expected: &'static str, actual: &Value) -> Self {
        FieldIssue {
            path: path.into(),
            kind: IssueKind::TypeMismatch {
                expected,
                actual: actual.clone(),
            },
        }
    }

    pub fn not_allowed(path: impl Into<String>, value: &Value, allowed: Vec<Value>) -> Self {
        FieldIssue {
            path: path.into(),
            kind: IssueKind::NotAllowed {
                value: value.clone(),
                allowed,
            },
        }
    }
}

impl std::fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            IssueKind::Missing => write!(f, "{}: required field missing", self.path),
            IssueKind::TypeMismatch { expected, actual } => {
                write!(f, "{}: expected {}, got {}", self.path, expected, describe(actual))
            }
            IssueKind::NotAllowed { value, allowed } => {
                let allowed: Vec<String> = allowed.iter().map(|v| v.to_string()).collect();
                write!(
                    f,
                    "{}: {} is not one of [{}]",
                    self.path,
                    value,
                    allowed.join(", ")
                )
            }
        }
    }
}

/// Short rendering of an offending value: scalars verbatim, containers by kind.
fn describe(value: &Value) -> String {
    match value {
        Value::Array(_) => "array".to_string(),
        Value::Object(_) => "object".to_string(),
        other => other.to_string(),
    }
}

#[derive(Debug, Error)]
pub enum ValidationError {
    /// One or more fields failed their declared rules.
    #[error("invalid {record}: {}", join_issues(.issues))]
    Invalid {
        record: &'static str,
        issues: Vec<FieldIssue>,
    },

    /// Input text was not JSON at all.
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The table accepted the record but the typed struct did not. This means
    /// the table and the struct disagree.
    #[error("{record} passed field checks but could not be mapped: {source}")]
    Mapping {
        record: &'static str,
        source: serde_json::Error,
    },
}

impl ValidationError {
    /// Field issues, empty for errors that are not about a specific field.
    pub fn issues(&self) -> &[FieldIssue] {
        match self {
            ValidationError::Invalid { issues, .. } => issues,
            _ => &[],
        }
    }

    /// Paths of every failed field, in check order.
    pub fn paths(&self) -> Vec<&str> {
        self.issues().iter().map(|i| i.path.as_str()).collect()
    }
}

fn join_issues(issues: &[FieldIssue]) -> String {
    issues
        .iter()
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn display_missing() {
        let issue = FieldIssue::missing("topic");
        assert_eq!(issue.to_string(), "topic: required field missing");
    }

    #[test]
    fn display_type_mismatch_scalar_and_container() {
        let scalar = FieldIssue::type_mismatch("id", "integer", &json!("abc"));
        assert_eq!(scalar.to_string(), r#"id: expected integer, got "abc""#);

        let container = FieldIssue::type_mismatch("topic", "string", &json!({"a": 1}));
        assert_eq!(container.to_string(), "topic: expected string, got object");
    }

    #[test]
    fn display_not_allowed_lists_choices() {
        let issue = FieldIssue::not_allowed(
            "settings.audio",
            &json!("fax"),
            vec![json!("voip"), json!("telephony"), json!("both")],
        );
        assert_eq!(
            issue.to_string(),
            r#"settings.audio: "fax" is not one of ["voip", "telephony", "both"]"#
        );
    }

    #[test]
    fn invalid_error_joins_issues() {
        let err = ValidationError::Invalid {
            record: "Participant",
            issues: vec![FieldIssue::missing("id"), FieldIssue::missing("name")],
        };
        assert_eq!(
            err.to_string(),
            "invalid Participant: id: required field missing; name: required field missing"
        );
        assert_eq!(err.paths(), vec!["id", "name"]);
    }

    #[test]
    fn json_error_has_no_issues() {
        let parse_err = serde_json::from_str::<Value>("{not json").unwrap_err();
        let err = ValidationError::from(parse_err);
        assert!(err.issues().is_empty());
        assert!(err.to_string().starts_with("malformed JSON"));
    }

    #[test]
    fn issue_serializes_with_kind_tag() {
        let issue = FieldIssue::type_mismatch("duration", "integer", &json!(null));
        let value = serde_json::to_value(&issue).unwrap();
        assert_eq!(
            value,
            json!({"path": "duration", "kind": "type_mismatch", "expected": "integer", "actual": null})
        );
    }
}

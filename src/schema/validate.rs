//! The generic table-driven validation routine.

use log::{debug, trace};
use serde_json::{Map, Value};

use super::error::{FieldIssue, ValidationError};
use super::field::{FieldType, Presence, Schema};

/// Check `value` against `schema` and return a normalized copy.
///
/// Normalization drops `null`/absent optional fields and fills absent
/// defaulted ones, recursively, so the result deserializes straight into the typed
/// struct. Keys the schema does not declare are kept as-is.
///
/// Every failing field is reported, not just the first.
pub fn validate(schema: &Schema, value: &Value) -> Result<Value, ValidationError> {
    let mut issues = Vec::new();

    let normalized = match value.as_object() {
        Some(obj) => Value::Object(check_object(schema, obj, "", &mut issues)),
        None => {
            issues.push(FieldIssue::type_mismatch("$", "object", value));
            Value::Null
        }
    };

    if issues.is_empty() {
        debug!("{} valid", schema.name);
        Ok(normalized)
    } else {
        debug!("{} invalid ({} issue(s))", schema.name, issues.len());
        for issue in &issues {
            trace!("  {}", issue);
        }
        Err(ValidationError::Invalid {
            record: schema.name,
            issues,
        })
    }
}

fn child_path(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_string()
    } else {
        format!("{}.{}", parent, name)
    }
}

fn check_object(
    schema: &Schema,
    obj: &Map<String, Value>,
    path: &str,
    issues: &mut Vec<FieldIssue>,
) -> Map<String, Value> {
    let mut out = obj.clone();

    for field in schema.effective_fields() {
        let field_path = child_path(path, field.name);

        match (obj.get(field.name), field.presence) {
            (None, Presence::Required) => issues.push(FieldIssue::missing(field_path)),
            (Some(Value::Null), Presence::Required | Presence::Default(_)) => {
                issues.push(FieldIssue::type_mismatch(field_path, field.ty.expected(), &Value::Null))
            }
            (None, Presence::Optional)
            | (Some(Value::Null), Presence::Optional | Presence::NullableDefault(_)) => {
                out.remove(field.name);
            }
            (None, Presence::Default(default) | Presence::NullableDefault(default)) => {
                out.insert(field.name.to_string(), default.to_value());
            }
            (Some(v), _) => {
                if let Some(checked) = check_value(field.ty, v, &field_path, issues) {
                    out.insert(field.name.to_string(), checked);
                }
            }
        }
    }

    out
}

/// Check one present, non-null value. Returns the normalized value, or
/// `None` after recording an issue.
fn check_value(
    ty: FieldType,
    value: &Value,
    path: &str,
    issues: &mut Vec<FieldIssue>,
) -> Option<Value> {
    let mismatch = |issues: &mut Vec<FieldIssue>| -> Option<Value> {
        issues.push(FieldIssue::type_mismatch(path, ty.expected(), value));
        None
    };

    match ty {
        FieldType::Bool if value.is_boolean() => Some(value.clone()),
        FieldType::Int if value.is_i64() => Some(value.clone()),
        FieldType::Count if value.is_u64() => Some(value.clone()),
        FieldType::Str if value.is_string() => Some(value.clone()),

        FieldType::IntChoice(allowed) => match value.as_i64() {
            Some(n) if allowed.contains(&n) => Some(value.clone()),
            Some(_) => {
                let allowed = allowed.iter().map(|n| Value::from(*n)).collect();
                issues.push(FieldIssue::not_allowed(path, value, allowed));
                None
            }
            None => mismatch(issues),
        },

        FieldType::StrChoice(allowed) => match value.as_str() {
            Some(s) if allowed.contains(&s) => Some(value.clone()),
            Some(_) => {
                let allowed = allowed.iter().map(|s| Value::from(*s)).collect();
                issues.push(FieldIssue::not_allowed(path, value, allowed));
                None
            }
            None => mismatch(issues),
        },

        FieldType::StrList => {
            let Some(items) = value.as_array() else {
                return mismatch(issues);
            };
            let before = issues.len();
            for (i, item) in items.iter().enumerate() {
                if !item.is_string() {
                    issues.push(FieldIssue::type_mismatch(
                        format!("{}[{}]", path, i),
                        "string",
                        item,
                    ));
                }
            }
            (issues.len() == before).then(|| value.clone())
        }

        FieldType::ObjectList => {
            let Some(items) = value.as_array() else {
                return mismatch(issues);
            };
            let before = issues.len();
            for (i, item) in items.iter().enumerate() {
                if !item.is_object() {
                    issues.push(FieldIssue::type_mismatch(
                        format!("{}[{}]", path, i),
                        "object",
                        item,
                    ));
                }
            }
            (issues.len() == before).then(|| value.clone())
        }

        FieldType::Record(inner) => match value.as_object() {
            Some(obj) => Some(Value::Object(check_object(inner, obj, path, issues))),
            None => mismatch(issues),
        },

        FieldType::RecordList(inner) => {
            let Some(items) = value.as_array() else {
                return mismatch(issues);
            };
            let mut out = Vec::with_capacity(items.len());
            for (i, item) in items.iter().enumerate() {
                let item_path = format!("{}[{}]", path, i);
                match item.as_object() {
                    Some(obj) => out.push(Value::Object(check_object(inner, obj, &item_path, issues))),
                    None => issues.push(FieldIssue::type_mismatch(item_path, "object", item)),
                }
            }
            Some(Value::Array(out))
        }

        _ => mismatch(issues),
    }
}

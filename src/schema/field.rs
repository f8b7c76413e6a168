//! Declaration tables for record shapes.
//!
//! Each record type owns a `static` [`Schema`] listing its fields. The
//! generic routine in `validate` walks these tables; nothing in this module
//! knows about any particular record.

use serde_json::Value;

/// Whether a field must be present, and what absence means.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Presence {
    /// Absence is an error; `null` is a type mismatch.
    Required,
    /// Absence or `null` means "not set".
    Optional,
    /// Absence is replaced with a fixed value; `null` is a type mismatch.
    Default(DefaultValue),
    /// Absence is replaced with a fixed value; `null` means "not set".
    NullableDefault(DefaultValue),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DefaultValue {
    Int(i64),
    EmptyList,
}

impl DefaultValue {
    pub fn to_value(self) -> Value {
        match self {
            DefaultValue::Int(n) => Value::from(n),
            DefaultValue::EmptyList => Value::Array(Vec::new()),
        }
    }
}

/// Expected JSON shape of a field.
#[derive(Debug, Clone, Copy)]
pub enum FieldType {
    Bool,
    Int,
    /// Non-negative integer (page sizes, record totals).
    Count,
    Str,
    IntChoice(&'static [i64]),
    StrChoice(&'static [&'static str]),
    StrList,
    /// List of free-form objects, passed through untouched.
    ObjectList,
    Record(&'static Schema),
    RecordList(&'static Schema),
}

impl FieldType {
    /// Name used in type-mismatch messages.
    pub fn expected(&self) -> &'static str {
        match self {
            FieldType::Bool => "boolean",
            FieldType::Int | FieldType::IntChoice(_) => "integer",
            FieldType::Count => "non-negative integer",
            FieldType::Str | FieldType::StrChoice(_) => "string",
            FieldType::StrList => "array of strings",
            FieldType::ObjectList => "array of objects",
            FieldType::Record(_) => "object",
            FieldType::RecordList(_) => "array of objects",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub ty: FieldType,
    pub presence: Presence,
}

pub const fn required(name: &'static str, ty: FieldType) -> FieldSpec {
    FieldSpec {
        name,
        ty,
        presence: Presence::Required,
    }
}

pub const fn optional(name: &'static str, ty: FieldType) -> FieldSpec {
    FieldSpec {
        name,
        ty,
        presence: Presence::Optional,
    }
}

pub const fn defaulted(name: &'static str, ty: FieldType, default: DefaultValue) -> FieldSpec {
    FieldSpec {
        name,
        ty,
        presence: Presence::Default(default),
    }
}

pub const fn nullable_defaulted(
    name: &'static str,
    ty: FieldType,
    default: DefaultValue,
) -> FieldSpec {
    FieldSpec {
        name,
        ty,
        presence: Presence::NullableDefault(default),
    }
}

/// Field table for one record type.
///
/// `extends` points at the short form of a full record. The short form's
/// fields are checked first; a field the full form declares again replaces
/// the inherited rule.
#[derive(Debug)]
pub struct Schema {
    pub name: &'static str,
    pub extends: Option<&'static Schema>,
    pub fields: &'static [FieldSpec],
}

impl Schema {
    /// All fields in check order: inherited fields first, own fields last.
    pub fn effective_fields(&self) -> Vec<&'static FieldSpec> {
        let mut out: Vec<&'static FieldSpec> = match self.extends {
            Some(parent) => parent
                .effective_fields()
                .into_iter()
                .filter(|inherited| !self.fields.iter().any(|own| own.name == inherited.name))
                .collect(),
            None => Vec::new(),
        };
        out.extend(self.fields.iter());
        out
    }
}

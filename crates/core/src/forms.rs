//! Declarative field schemas and form-buffer coercion.
//!
//! Every admin screen is a CRUD form over one REST collection. Instead of
//! hand-duplicating a controller per screen, each module declares its fields
//! as a [`FormSchema`] and the generic machinery does the rest: building an
//! empty draft, pre-filling a draft from a fetched record (format-on-load),
//! and validating/coercing a draft into a wire payload (parse-on-submit).
//!
//! A draft is a JSON object whose values are what an input widget would
//! hold: strings for text/number/date fields, booleans for flags, arrays
//! for repeatable sub-groups. Coercion is the single place where widget
//! strings become typed wire values; unparseable input is rejected with a
//! [`CoreError::Parse`] naming the field rather than letting a `NaN` or an
//! invalid date reach the server.

use chrono::NaiveDate;
use serde_json::{Map, Value};

use crate::error::CoreError;

/// Wire/date format used by date input widgets.
pub const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

// ---------------------------------------------------------------------------
// Field specification
// ---------------------------------------------------------------------------

/// The widget/wire type of a form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Single-line free text. Wire type: string.
    Text,
    /// Multi-line free text. Wire type: string.
    LongText,
    /// Whole number entered as text. Wire type: number (integer).
    Integer,
    /// Monetary amount entered as text. Wire type: number.
    Currency,
    /// Calendar date entered as `YYYY-MM-DD`. Wire type: string (ISO date).
    Date,
    /// One of a fixed set of values. Wire type: string.
    Select { options: &'static [&'static str] },
    /// Boolean toggle. Wire type: bool.
    Flag,
    /// File picker. Submitted as the chosen file's name; prior uploads are
    /// not re-fetchable as file handles, so edit drafts hold null here.
    File,
    /// Repeatable sub-record group. Wire type: array of objects. Editing
    /// happens through [`crate::subrecords::KeyedList`]; by the time the
    /// value lands in the draft it is a plain array again.
    Group,
}

/// When a field must be non-blank for a draft to submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    Required,
    Optional,
    /// Required only while the named discriminant field holds `equals`
    /// (e.g. a citizen needs a civil id, a foreigner a residency number).
    RequiredWhen {
        field: &'static str,
        equals: &'static str,
    },
}

/// One field of a module's form.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    /// JSON key on the wire and in the draft.
    pub name: &'static str,
    /// Human label, also used as the CSV export column header.
    pub label: &'static str,
    pub kind: FieldKind,
    pub requirement: Requirement,
    /// Pre-filled value for a fresh draft (e.g. `status` = `"active"`).
    pub default: Option<&'static str>,
    /// Whether the free-text filter term is matched against this field.
    pub searchable: bool,
}

/// The declarative form definition for one module.
#[derive(Debug, Clone, Copy)]
pub struct FormSchema {
    pub fields: &'static [FieldSpec],
}

/// The mutable object backing a create/edit dialog before submission.
pub type Draft = Map<String, Value>;

// ---------------------------------------------------------------------------
// Blankness / requiredness
// ---------------------------------------------------------------------------

/// A value an input widget considers "not filled in".
pub fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}

impl FieldSpec {
    /// Whether this field must be non-blank given the rest of the draft.
    pub fn is_required(&self, draft: &Draft) -> bool {
        match self.requirement {
            Requirement::Required => true,
            Requirement::Optional => false,
            Requirement::RequiredWhen { field, equals } => draft
                .get(field)
                .and_then(Value::as_str)
                .is_some_and(|v| v == equals),
        }
    }
}

// ---------------------------------------------------------------------------
// Schema operations
// ---------------------------------------------------------------------------

impl FormSchema {
    /// Build a fresh draft with every field at its declared default.
    pub fn empty_draft(&self) -> Draft {
        let mut draft = Map::new();
        for field in self.fields {
            let value = match (field.kind, field.default) {
                (FieldKind::Flag, Some("true")) => Value::Bool(true),
                (FieldKind::Flag, _) => Value::Bool(false),
                (FieldKind::Group, _) => Value::Array(Vec::new()),
                (FieldKind::File, None) => Value::Null,
                (_, Some(default)) => Value::String(default.to_string()),
                (_, None) => Value::String(String::new()),
            };
            draft.insert(field.name.to_string(), value);
        }
        draft
    }

    /// Pre-fill a draft from a fetched record (format-on-load).
    ///
    /// Numbers become the strings an input widget edits, date values are cut
    /// down to `YYYY-MM-DD`, and file fields are nulled. Server-only fields
    /// not named by the schema (id, timestamps, computed values) are simply
    /// not carried into the draft.
    pub fn draft_from_record(&self, record: &Value) -> Draft {
        let mut draft = Map::new();
        for field in self.fields {
            let raw = record.get(field.name).cloned().unwrap_or(Value::Null);
            let value = match field.kind {
                FieldKind::Text | FieldKind::LongText | FieldKind::Select { .. } => {
                    Value::String(raw.as_str().unwrap_or_default().to_string())
                }
                FieldKind::Integer | FieldKind::Currency => match raw {
                    Value::Number(n) => Value::String(n.to_string()),
                    Value::String(s) => Value::String(s),
                    _ => Value::String(String::new()),
                },
                FieldKind::Date => {
                    let text = raw.as_str().unwrap_or_default();
                    // Timestamps shrink to their date part for the widget.
                    let date = text.split('T').next().unwrap_or_default();
                    Value::String(date.to_string())
                }
                FieldKind::Flag => Value::Bool(raw.as_bool().unwrap_or(false)),
                FieldKind::File => Value::Null,
                FieldKind::Group => match raw {
                    Value::Array(items) => Value::Array(items),
                    _ => Value::Array(Vec::new()),
                },
            };
            draft.insert(field.name.to_string(), value);
        }
        draft
    }

    /// Validate a draft and coerce it into a wire payload (parse-on-submit).
    ///
    /// Required (and conditionally required) fields must be non-blank.
    /// Unparseable numbers and dates are rejected; blank optional fields
    /// submit as null.
    pub fn payload(&self, draft: &Draft) -> Result<Value, CoreError> {
        let mut out = Map::new();
        for field in self.fields {
            let raw = draft.get(field.name).cloned().unwrap_or(Value::Null);
            if field.is_required(draft) && is_blank(&raw) {
                return Err(CoreError::Validation(format!(
                    "{} is required",
                    field.label
                )));
            }
            out.insert(field.name.to_string(), coerce_field(field, raw)?);
        }
        Ok(Value::Object(out))
    }

    /// Labels of all fields, in declaration order.
    pub fn labels(&self) -> Vec<&'static str> {
        self.fields.iter().map(|f| f.label).collect()
    }

    /// Names of the fields the free-text filter matches against.
    pub fn searchable_fields(&self) -> Vec<&'static str> {
        self.fields
            .iter()
            .filter(|f| f.searchable)
            .map(|f| f.name)
            .collect()
    }
}

/// Coerce one widget value to its wire form.
fn coerce_field(field: &FieldSpec, raw: Value) -> Result<Value, CoreError> {
    if is_blank(&raw) {
        return Ok(match field.kind {
            FieldKind::Text | FieldKind::LongText => Value::String(String::new()),
            FieldKind::Flag => Value::Bool(false),
            FieldKind::Group => Value::Array(Vec::new()),
            _ => Value::Null,
        });
    }

    let parse_err = |value: &Value| CoreError::Parse {
        field: field.name.to_string(),
        value: display_raw(value),
    };

    match field.kind {
        FieldKind::Text | FieldKind::LongText => Ok(Value::String(
            raw.as_str().map(|s| s.trim().to_string()).unwrap_or_default(),
        )),
        FieldKind::Integer => match &raw {
            Value::Number(n) if n.is_i64() => Ok(raw.clone()),
            Value::String(s) => s
                .trim()
                .parse::<i64>()
                .map(Value::from)
                .map_err(|_| parse_err(&raw)),
            _ => Err(parse_err(&raw)),
        },
        FieldKind::Currency => match &raw {
            Value::Number(_) => Ok(raw.clone()),
            Value::String(s) => {
                let amount: f64 = s.trim().parse().map_err(|_| parse_err(&raw))?;
                if !amount.is_finite() {
                    return Err(parse_err(&raw));
                }
                Ok(Value::from(amount))
            }
            _ => Err(parse_err(&raw)),
        },
        FieldKind::Date => {
            let text = raw.as_str().ok_or_else(|| parse_err(&raw))?;
            let date = NaiveDate::parse_from_str(text.trim(), DATE_INPUT_FORMAT)
                .map_err(|_| parse_err(&raw))?;
            Ok(Value::String(date.format(DATE_INPUT_FORMAT).to_string()))
        }
        FieldKind::Select { options } => {
            let text = raw.as_str().ok_or_else(|| parse_err(&raw))?;
            if !options.contains(&text) {
                return Err(CoreError::Validation(format!(
                    "{} must be one of: {}",
                    field.label,
                    options.join(", ")
                )));
            }
            Ok(Value::String(text.to_string()))
        }
        FieldKind::Flag => Ok(Value::Bool(raw.as_bool().unwrap_or(false))),
        FieldKind::File => match &raw {
            // A freshly picked file is staged as `{"name": "..."}`; only the
            // name travels on the wire.
            Value::String(s) => Ok(Value::String(s.clone())),
            Value::Object(map) => map
                .get("name")
                .and_then(Value::as_str)
                .map(|s| Value::String(s.to_string()))
                .ok_or_else(|| parse_err(&raw)),
            _ => Err(parse_err(&raw)),
        },
        FieldKind::Group => match raw {
            Value::Array(items) => Ok(Value::Array(items)),
            other => Err(parse_err(&other)),
        },
    }
}

fn display_raw(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

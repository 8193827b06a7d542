//! Form schemas and form values.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::error::ApiError;

/// Input widget and wire encoding for one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    TextArea,
    /// One of a fixed set of server choices
    Select(&'static [&'static str]),
    /// `YYYY-MM-DD`
    Date,
    /// Money with two decimals, sent as a string
    Decimal,
    /// A user id chosen from `GET users/`, sent as an integer
    UserPicker,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Key in the request body
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    /// Value after a reset
    pub default: &'static str,
}

impl FieldSpec {
    pub const fn required(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            label,
            kind,
            required: true,
            default: "",
        }
    }

    pub const fn with_default(mut self, default: &'static str) -> Self {
        self.default = default;
        self
    }
}

/// Current values of a form, keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    values: BTreeMap<&'static str, String>,
}

impl FormState {
    pub fn new(schema: &[FieldSpec]) -> Self {
        let mut form = Self::default();
        form.reset(schema);
        form
    }

    /// Put every field back to its default.
    pub fn reset(&mut self, schema: &[FieldSpec]) {
        self.values = schema
            .iter()
            .map(|field| (field.name, field.default.to_string()))
            .collect();
    }

    pub fn get(&self, name: &str) -> &str {
        self.values.get(name).map(String::as_str).unwrap_or("")
    }

    pub fn set(&mut self, name: &'static str, value: impl Into<String>) {
        self.values.insert(name, value.into());
    }

    /// Required fields must be non-blank. Nothing else is checked here; the
    /// backend owns format and business rules.
    pub fn validate(&self, schema: &[FieldSpec]) -> Result<(), ApiError> {
        match schema
            .iter()
            .find(|field| field.required && self.get(field.name).trim().is_empty())
        {
            Some(field) => Err(ApiError::Validation {
                field: field.label.to_string(),
            }),
            None => Ok(()),
        }
    }

    /// Request body for the schema's fields. Blank optional fields are
    /// left out.
    pub fn to_body(&self, schema: &[FieldSpec]) -> Value {
        let mut body = Map::new();
        for field in schema {
            let raw = self.get(field.name);
            if raw.trim().is_empty() && !field.required {
                continue;
            }
            let value = match field.kind {
                FieldKind::TextArea => Value::String(raw.to_string()),
                FieldKind::UserPicker => match raw.trim().parse::<i64>() {
                    Ok(id) => Value::from(id),
                    Err(_) => Value::String(raw.trim().to_string()),
                },
                _ => Value::String(raw.trim().to_string()),
            };
            body.insert(field.name.to_string(), value);
        }
        Value::Object(body)
    }
}

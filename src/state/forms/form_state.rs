//! Flat field-value store for one form

use super::field::{FieldSpec, FieldValue};
use std::collections::BTreeMap;

/// Values of every field of a form, keyed by field name.
///
/// The key set is fixed at construction; writes to unknown names are
/// ignored. No validation happens here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    values: BTreeMap<&'static str, FieldValue>,
}

impl FormState {
    /// Fresh state with an empty default for each field
    pub fn new<'a>(fields: impl IntoIterator<Item = &'a FieldSpec>) -> Self {
        Self {
            values: fields
                .into_iter()
                .map(|f| (f.name, f.empty_value()))
                .collect(),
        }
    }

    /// Replace the value at `field`
    pub fn update(&mut self, field: &str, value: impl Into<FieldValue>) {
        match self.values.get_mut(field) {
            Some(slot) => *slot = value.into(),
            None => tracing::debug!(field, "Ignoring update to unknown field"),
        }
    }

    /// Set-like toggle on a list field: remove the value if present, append otherwise
    pub fn toggle(&mut self, field: &str, value: &str) {
        let Some(FieldValue::List(items)) = self.values.get_mut(field) else {
            return;
        };
        match items.iter().position(|item| item == value) {
            Some(index) => {
                items.remove(index);
            }
            None => items.push(value.to_string()),
        }
    }

    /// Restore every field to its empty default
    pub fn reset(&mut self) {
        for value in self.values.values_mut() {
            *value = match value {
                FieldValue::List(_) => FieldValue::List(Vec::new()),
                FieldValue::Text(_) => FieldValue::Text(String::new()),
            };
        }
    }

    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.values.get(field)
    }

    /// Text at `field`, empty when unknown or a list
    pub fn text(&self, field: &str) -> &str {
        self.get(field).map(FieldValue::as_text).unwrap_or("")
    }

    /// List at `field`, empty when unknown or text
    pub fn list(&self, field: &str) -> &[String] {
        self.get(field).map(FieldValue::as_list).unwrap_or(&[])
    }

    pub fn is_filled(&self, field: &str) -> bool {
        self.get(field).is_some_and(|v| !v.is_empty())
    }

    pub fn push_char(&mut self, field: &str, c: char) {
        if let Some(FieldValue::Text(s)) = self.values.get_mut(field) {
            s.push(c);
        }
    }

    pub fn pop_char(&mut self, field: &str) {
        if let Some(FieldValue::Text(s)) = self.values.get_mut(field) {
            s.pop();
        }
    }

    pub fn field_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.values.keys().copied()
    }
}

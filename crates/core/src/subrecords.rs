//! Keyed editing for repeatable sub-record groups.
//!
//! Several records nest repeatable sub-groups: employee emergency contacts
//! and site passes, legal-case parties, facility "other approvals", travel
//! itinerary legs. While such a group is being edited, each entry carries a
//! client-generated key so add/update/remove address an entry by identity
//! rather than by array index, which would break under removal or reorder.
//! Keys never travel on the wire; payload assembly emits plain value arrays.

use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

use crate::error::CoreError;

/// One sub-record plus its client-local key.
#[derive(Debug, Clone)]
pub struct Keyed<T> {
    pub key: String,
    pub value: T,
}

/// An editable collection of sub-records addressed by key.
#[derive(Debug, Clone, Default)]
pub struct KeyedList<T> {
    entries: Vec<Keyed<T>>,
}

impl<T> KeyedList<T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Key a plain value array fetched from the server.
    pub fn from_values(values: Vec<T>) -> Self {
        Self {
            entries: values
                .into_iter()
                .map(|value| Keyed {
                    key: Uuid::new_v4().to_string(),
                    value,
                })
                .collect(),
        }
    }

    /// Append a new entry, returning its generated key.
    pub fn push(&mut self, value: T) -> String {
        let key = Uuid::new_v4().to_string();
        self.entries.push(Keyed {
            key: key.clone(),
            value,
        });
        key
    }

    /// Replace the entry with the given key.
    pub fn update(&mut self, key: &str, value: T) -> Result<(), CoreError> {
        let entry = self
            .entries
            .iter_mut()
            .find(|e| e.key == key)
            .ok_or_else(|| CoreError::UnknownKey(key.to_string()))?;
        entry.value = value;
        Ok(())
    }

    /// Remove and return the entry with the given key.
    pub fn remove(&mut self, key: &str) -> Result<T, CoreError> {
        let position = self
            .entries
            .iter()
            .position(|e| e.key == key)
            .ok_or_else(|| CoreError::UnknownKey(key.to_string()))?;
        Ok(self.entries.remove(position).value)
    }

    pub fn get(&self, key: &str) -> Option<&T> {
        self.entries.iter().find(|e| e.key == key).map(|e| &e.value)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Keyed<T>> {
        self.entries.iter()
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.entries.iter().map(|e| &e.value)
    }

    pub fn into_values(self) -> Vec<T> {
        self.entries.into_iter().map(|e| e.value).collect()
    }
}

impl<T: Serialize> KeyedList<T> {
    /// Render the entries as the plain JSON array a draft group field
    /// holds. Keys are client-local and stripped here.
    pub fn to_draft_value(&self) -> Result<Value, CoreError> {
        let values: Result<Vec<Value>, _> = self
            .entries
            .iter()
            .map(|e| serde_json::to_value(&e.value))
            .collect();
        values.map(Value::Array).map_err(|e| {
            CoreError::Validation(format!("Sub-records could not be serialized: {e}"))
        })
    }
}

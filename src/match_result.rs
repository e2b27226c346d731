//! Field name to value mapping produced by a match.

use std::fmt;
use std::ops::Index;

use itertools::Itertools;
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::engine::Groups;
use crate::value::{Value, infer};

/// Values of one match, keyed by field name.
///
/// Keys keep the order in which fields first appear in the expression. When an
/// expression repeats a field name, the later capture replaces the earlier
/// value without moving the key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchResult {
    entries: Vec<(String, Value)>,
}

impl MatchResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Zip capture groups onto `field_names` by position.
    ///
    /// A field whose group is missing or did not participate is left unset.
    pub fn from_groups(field_names: &[String], groups: &Groups<'_>, infer_types: bool) -> Self {
        let mut result = Self::new();
        for (name, group) in field_names.iter().zip(groups) {
            if let Some(capture) = group {
                let value = if infer_types {
                    infer(capture.text)
                } else {
                    Value::Text(capture.text.to_string())
                };
                result.insert(name, value);
            }
        }
        result
    }

    /// Set `name`, replacing any earlier value in place.
    pub fn insert(&mut self, name: &str, value: Value) {
        match self.entries.iter_mut().find(|(k, _)| k == name) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((name.to_string(), value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v)
    }

    /// The text of `name`, if it is set and was not coerced.
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Value::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl Index<&str> for MatchResult {
    type Output = Value;

    fn index(&self, name: &str) -> &Value {
        self.get(name)
            .unwrap_or_else(|| panic!("no field named {name:?} in match result"))
    }
}

impl<K: AsRef<str>, V: Into<Value>> FromIterator<(K, V)> for MatchResult {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut result = Self::new();
        for (k, v) in iter {
            result.insert(k.as_ref(), v.into());
        }
        result
    }
}

impl fmt::Display for MatchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{{}}}",
            self.entries
                .iter()
                .format_with(", ", |(k, v), f| f(&format_args!("{k}: {v}")))
        )
    }
}

impl Serialize for MatchResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

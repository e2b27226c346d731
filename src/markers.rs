//! Field marker resolution.
//!
//! Field markers are the optional literal text that brackets a field token in
//! an expression, e.g. `<` and `>` in `"<tags*>"`. Callers may describe them in
//! several shapes; every shape is resolved once into a [`FieldMarkers`] pair.

use serde::Deserialize;
use serde::de::IgnoredAny;

/// A user-supplied description of the field markers.
///
/// Deserializes from JSON `null`, a string, a two-element array or an object
/// with optional `left`/`right` keys. Any other JSON value is accepted as
/// [`MarkerSpec::Unrecognized`] and resolves to no markers.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum MarkerSpec {
    /// No markers: bare word tokens are fields.
    #[default]
    None,
    /// One string split in half; an odd middle character is shared.
    Symmetric(String),
    /// A sequence of strings. Only a length of exactly two is meaningful.
    Sequence(Vec<String>),
    /// Named sides; a missing side is empty.
    Sides {
        #[serde(default)]
        left: Option<String>,
        #[serde(default)]
        right: Option<String>,
    },
    /// Explicit left and right markers.
    #[serde(skip)]
    Pair(String, String),
    Unrecognized(IgnoredAny),
}

impl From<&str> for MarkerSpec {
    fn from(s: &str) -> Self {
        MarkerSpec::Symmetric(s.to_string())
    }
}

impl From<String> for MarkerSpec {
    fn from(s: String) -> Self {
        MarkerSpec::Symmetric(s)
    }
}

impl From<(&str, &str)> for MarkerSpec {
    fn from((left, right): (&str, &str)) -> Self {
        MarkerSpec::Pair(left.to_string(), right.to_string())
    }
}

impl From<Vec<String>> for MarkerSpec {
    fn from(items: Vec<String>) -> Self {
        MarkerSpec::Sequence(items)
    }
}

impl From<&[&str]> for MarkerSpec {
    fn from(items: &[&str]) -> Self {
        MarkerSpec::Sequence(items.iter().map(|s| s.to_string()).collect())
    }
}

impl<T: Into<MarkerSpec>> From<Option<T>> for MarkerSpec {
    fn from(spec: Option<T>) -> Self {
        spec.map_or(MarkerSpec::None, Into::into)
    }
}

/// Canonical left/right field markers.
///
/// Both sides are always present. Two empty sides mean "no markers".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldMarkers {
    left: String,
    right: String,
}

impl FieldMarkers {
    pub fn new(left: impl Into<String>, right: impl Into<String>) -> Self {
        Self {
            left: left.into(),
            right: right.into(),
        }
    }

    /// Markers that make bare word tokens the fields.
    pub fn none() -> Self {
        Self::default()
    }

    /// Resolve any [`MarkerSpec`] shape. Never fails: shapes that carry no
    /// usable markers resolve to [`FieldMarkers::none`].
    pub fn resolve(spec: &MarkerSpec) -> Self {
        match spec {
            MarkerSpec::None | MarkerSpec::Unrecognized(_) => Self::none(),
            MarkerSpec::Symmetric(s) => Self::split(s),
            MarkerSpec::Pair(left, right) => Self::new(left.as_str(), right.as_str()),
            MarkerSpec::Sequence(items) => match items.as_slice() {
                [left, right] => Self::new(left.as_str(), right.as_str()),
                _ => Self::none(),
            },
            MarkerSpec::Sides { left, right } => Self::new(
                left.as_deref().unwrap_or_default(),
                right.as_deref().unwrap_or_default(),
            ),
        }
    }

    /// Split a symmetric marker string in half by characters. For an odd
    /// length the middle character belongs to both sides.
    fn split(s: &str) -> Self {
        let chars: Vec<char> = s.chars().collect();
        let half = chars.len() / 2;
        Self {
            left: chars[..chars.len() - half].iter().collect(),
            right: chars[half..].iter().collect(),
        }
    }

    pub fn left(&self) -> &str {
        &self.left
    }

    pub fn right(&self) -> &str {
        &self.right
    }

    pub fn is_none(&self) -> bool {
        self.left.is_empty() && self.right.is_empty()
    }
}

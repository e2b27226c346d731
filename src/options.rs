//! Matcher options.
//!
//! Options are given either as a structure (or its JSON form with camelCase
//! keys) or as a regex-style flag string such as `"g"`.

use phf::{Map, phf_map};
use serde::Deserialize;

use crate::markers::{FieldMarkers, MarkerSpec};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flag {
    Global,
    StrictWhitespace,
    InferTypes,
}

const FLAG_MAP: Map<char, Flag> = phf_map! {
    'g' => Flag::Global,
    's' => Flag::StrictWhitespace,
    't' => Flag::InferTypes,
};

/// Configuration fixed at construction time of a [`Simplex`](crate::Simplex).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Options {
    /// `match_text` returns every occurrence instead of the first.
    pub global: bool,
    /// How fields are bracketed in the expression.
    #[serde(deserialize_with = "lenient_marker_spec")]
    pub field_markers: MarkerSpec,
    /// Whitespace in the expression must match exactly instead of elastically.
    pub strict_whitespace: bool,
    /// Coerce matched values to numbers and booleans where they look like one.
    pub infer_types: bool,
}

/// Accept `null` for the marker spec as well as every [`MarkerSpec`] shape.
fn lenient_marker_spec<'de, D>(deserializer: D) -> Result<MarkerSpec, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<MarkerSpec>::deserialize(deserializer)?.unwrap_or_default())
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a flag string. Characters without a meaning are ignored.
    pub fn from_flags(flags: &str) -> Self {
        let mut options = Self::default();
        for flag in flags.chars().filter_map(|c| FLAG_MAP.get(&c)) {
            match flag {
                Flag::Global => options.global = true,
                Flag::StrictWhitespace => options.strict_whitespace = true,
                Flag::InferTypes => options.infer_types = true,
            }
        }
        options
    }

    /// Parse options from JSON. Malformed input yields the defaults.
    pub fn from_json(json: &str) -> Self {
        serde_json::from_str(json).unwrap_or_else(|err| {
            log::warn!("Ignoring unreadable options {json:?}: {err}");
            Self::default()
        })
    }

    pub fn global(mut self, global: bool) -> Self {
        self.global = global;
        self
    }

    pub fn field_markers(mut self, markers: impl Into<MarkerSpec>) -> Self {
        self.field_markers = markers.into();
        self
    }

    pub fn strict_whitespace(mut self, strict: bool) -> Self {
        self.strict_whitespace = strict;
        self
    }

    pub fn infer_types(mut self, infer: bool) -> Self {
        self.infer_types = infer;
        self
    }

    /// The canonical markers these options describe.
    pub fn resolved_markers(&self) -> FieldMarkers {
        FieldMarkers::resolve(&self.field_markers)
    }
}

impl From<&str> for Options {
    fn from(flags: &str) -> Self {
        Self::from_flags(flags)
    }
}

impl From<()> for Options {
    fn from(_: ()) -> Self {
        Self::default()
    }
}

impl<T: Into<Options>> From<Option<T>> for Options {
    fn from(options: Option<T>) -> Self {
        options.map_or_else(Self::default, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_all_off() {
        let o = Options::default();
        assert!(!o.global);
        assert!(!o.strict_whitespace);
        assert!(!o.infer_types);
        assert!(o.resolved_markers().is_none());
    }

    #[test]
    fn g_flag_sets_global() {
        assert!(Options::from("g").global);
        assert!(!Options::from("").global);
        assert!(!Options::from("i").global);
    }

    #[test]
    fn flags_combine_and_ignore_unknown() {
        let o = Options::from("xgts?");
        assert!(o.global);
        assert!(o.strict_whitespace);
        assert!(o.infer_types);
    }

    #[test]
    fn absent_options_are_defaults() {
        assert_eq!(Options::from(None::<&str>), Options::default());
        assert_eq!(Options::from(()), Options::default());
    }

    #[test]
    fn builder_sets_fields() {
        let o = Options::new()
            .global(true)
            .field_markers("<>")
            .strict_whitespace(true)
            .infer_types(true);
        assert!(o.global && o.strict_whitespace && o.infer_types);
        assert_eq!(o.resolved_markers(), FieldMarkers::new("<", ">"));
    }

    #[test]
    fn json_uses_camel_case_keys() {
        let o = Options::from_json(
            r#"{"global": true, "fieldMarkers": "{{}}", "strictWhitespace": true}"#,
        );
        assert!(o.global);
        assert!(o.strict_whitespace);
        assert!(!o.infer_types);
        assert_eq!(o.resolved_markers(), FieldMarkers::new("{{", "}}"));
    }

    #[test]
    fn json_null_markers_are_none() {
        let o = Options::from_json(r#"{"fieldMarkers": null}"#);
        assert!(o.resolved_markers().is_none());
    }

    #[test]
    fn json_unrecognized_markers_degrade() {
        let o = Options::from_json(r#"{"global": true, "fieldMarkers": 7}"#);
        assert!(o.global);
        assert!(o.resolved_markers().is_none());
    }

    #[test]
    fn malformed_json_is_default() {
        assert_eq!(Options::from_json("not json"), Options::default());
        assert_eq!(Options::from_json(r#"{"global": "yes"}"#), Options::default());
    }
}

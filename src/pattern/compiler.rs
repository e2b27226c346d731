//! Expression-to-regex compiler.
//!
//! Turns a scanned expression into a regex source string with one capturing
//! group per field, plus the field names in group order.

use itertools::{Itertools, Position};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::SimplexError;
use crate::markers::FieldMarkers;

use super::ast::{Multiplicity, Segment};
use super::scanner::scan;

const SINGLE_WORD: &str = r"(\w+)";
const MULTI_WORD: &str = "(.*?)";
/// A multi-word field with nothing after it has no boundary to stop a lazy
/// capture, so it takes the rest of the line instead.
const MULTI_WORD_TRAILING: &str = "(.*)";
const ELASTIC_SPACE: &str = r"\s+";

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// The output of [`compile`]: a regex source and the ordered field names.
///
/// `field_names()[i]` names capture group `i + 1` of `pattern()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledMatcher {
    pattern: String,
    field_names: Vec<String>,
}

impl CompiledMatcher {
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn field_names(&self) -> &[String] {
        &self.field_names
    }
}

/// Compile `expression` under `markers`.
///
/// Literal text is escaped. Unless `strict_whitespace` is set, each run of
/// whitespace in literal text matches any run of whitespace in the input.
/// Markers are kept as exact literals around each capture.
pub fn compile(
    expression: &str,
    markers: &FieldMarkers,
    strict_whitespace: bool,
) -> Result<CompiledMatcher, SimplexError> {
    let segments = scan(expression, markers)?;
    let left = regex::escape(markers.left());
    let right = regex::escape(markers.right());

    let mut pattern = String::with_capacity(expression.len() * 2);
    let mut field_names = Vec::new();

    for (position, segment) in segments.iter().with_position() {
        match segment {
            Segment::Literal(text) => push_literal(&mut pattern, text, strict_whitespace),
            Segment::Field(token) => {
                let at_end = matches!(position, Position::Last | Position::Only) && right.is_empty();
                let capture = match token.multiplicity {
                    Multiplicity::SingleWord => SINGLE_WORD,
                    Multiplicity::MultiWord if at_end => MULTI_WORD_TRAILING,
                    Multiplicity::MultiWord => MULTI_WORD,
                };
                pattern.push_str(&left);
                pattern.push_str(capture);
                pattern.push_str(&right);
                field_names.push(token.name.clone());
            }
        }
    }

    log::debug!(
        "compiled {expression:?} to {pattern:?} with {} field(s)",
        field_names.len()
    );
    Ok(CompiledMatcher {
        pattern,
        field_names,
    })
}

fn push_literal(pattern: &mut String, text: &str, strict_whitespace: bool) {
    if strict_whitespace {
        pattern.push_str(&regex::escape(text));
    } else {
        let elastic = WHITESPACE_RUN
            .split(text)
            .map(regex::escape)
            .join(ELASTIC_SPACE);
        pattern.push_str(&elastic);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare(expr: &str) -> CompiledMatcher {
        compile(expr, &FieldMarkers::none(), false).unwrap()
    }

    #[test]
    fn assignment() {
        let m = bare("name=value");
        assert_eq!(m.pattern(), r"(\w+)=(\w+)");
        assert_eq!(m.field_names(), ["name", "value"]);
    }

    #[test]
    fn brackets_are_escaped() {
        let m = bare("pairName=[x,y]");
        assert_eq!(m.pattern(), r"(\w+)=\[(\w+),(\w+)\]");
        assert_eq!(m.field_names(), ["pairName", "x", "y"]);
    }

    #[test]
    fn all_metacharacters_are_escaped() {
        let m = bare("a.(b)+{c}^$|?");
        assert_eq!(m.pattern(), r"(\w+)\.\((\w+)\)\+\{(\w+)\}\^\$\|\?");
    }

    #[test]
    fn whitespace_is_elastic_by_default() {
        assert_eq!(bare("a b\t c").pattern(), r"(\w+)\s+(\w+)\s+(\w+)");
        assert_eq!(bare(" a ").pattern(), r"\s+(\w+)\s+");
    }

    #[test]
    fn strict_whitespace_is_exact() {
        let m = compile("a b", &FieldMarkers::none(), true).unwrap();
        assert_eq!(m.pattern(), r"(\w+) (\w+)");
    }

    #[test]
    fn multi_word_is_lazy_before_a_literal() {
        assert_eq!(bare("msg* .").pattern(), r"(.*?)\s+\.");
    }

    #[test]
    fn trailing_multi_word_is_greedy() {
        assert_eq!(bare("level: msg*").pattern(), r"(\w+):\s+(.*)");
    }

    #[test]
    fn trailing_whitespace_keeps_multi_word_lazy() {
        assert_eq!(bare("msg* ").pattern(), r"(.*?)\s+");
        assert_eq!(bare("msg*").pattern(), "(.*)");
    }

    #[test]
    fn markers_stay_in_the_pattern() {
        let m = compile("<tags*>", &FieldMarkers::new("<", ">"), false).unwrap();
        assert_eq!(m.pattern(), "<(.*?)>");
        assert_eq!(m.field_names(), ["tags"]);
    }

    #[test]
    fn left_only_marker_trailing_multi_word_is_greedy() {
        let m = compile("say :what*", &FieldMarkers::new(":", ""), false).unwrap();
        assert_eq!(m.pattern(), r"say\s+:(.*)");
    }

    #[test]
    fn repeated_names_are_kept() {
        assert_eq!(bare("a a").field_names(), ["a", "a"]);
    }

    #[test]
    fn no_fields() {
        let m = bare("-- + --");
        assert_eq!(m.pattern(), r"\-\-\s+\+\s+\-\-");
        assert!(m.field_names().is_empty());
        assert_eq!(bare("").pattern(), "");
    }

    #[test]
    fn compiling_twice_is_identical() {
        let markers = FieldMarkers::new("{", "}");
        let a = compile("{x} and {y*}", &markers, false).unwrap();
        let b = compile("{x} and {y*}", &markers, false).unwrap();
        assert_eq!(a, b);
    }
}

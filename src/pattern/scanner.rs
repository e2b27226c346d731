//! Single-pass scanner that splits an expression into literals and fields.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::SimplexError;
use crate::markers::FieldMarkers;

use super::ast::{FieldToken, Multiplicity, Segment};

/// Token body shared by every scanner: the field name, then an optional `*`.
const TOKEN_BODY: &str = r"(\w+)(\*)?";

static BARE_SCANNER: Lazy<Regex> = Lazy::new(|| Regex::new(TOKEN_BODY).unwrap());

/// Build the regex that recognises one field token under `markers`.
fn token_scanner(markers: &FieldMarkers) -> Result<Cow<'static, Regex>, SimplexError> {
    if markers.is_none() {
        return Ok(Cow::Borrowed(&*BARE_SCANNER));
    }
    let source = format!(
        "{}{TOKEN_BODY}{}",
        regex::escape(markers.left()),
        regex::escape(markers.right())
    );
    Regex::new(&source)
        .map(Cow::Owned)
        .map_err(|err| SimplexError::Compile {
            pattern: source,
            reason: err.to_string(),
        })
}

/// Scan `expression` left to right into [`Segment`]s.
pub fn scan(expression: &str, markers: &FieldMarkers) -> Result<Vec<Segment>, SimplexError> {
    let scanner = token_scanner(markers)?;
    let mut segments = Vec::new();
    let mut last_end = 0;

    for caps in scanner.captures_iter(expression) {
        let raw = caps.get_match();
        if raw.start() > last_end {
            segments.push(Segment::Literal(expression[last_end..raw.start()].to_string()));
        }
        let multiplicity = if caps.get(2).is_some() {
            Multiplicity::MultiWord
        } else {
            Multiplicity::SingleWord
        };
        let token = FieldToken {
            name: caps[1].to_string(),
            start: raw.start(),
            len: raw.len(),
            multiplicity,
        };
        log::trace!("scanned field {token:?}");
        last_end = token.end();
        segments.push(Segment::Field(token));
    }

    if last_end < expression.len() {
        segments.push(Segment::Literal(expression[last_end..].to_string()));
    }
    Ok(segments)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lit(s: &str) -> Segment {
        Segment::Literal(s.to_string())
    }

    fn names(segments: &[Segment]) -> Vec<(&str, Multiplicity)> {
        segments
            .iter()
            .filter_map(|s| match s {
                Segment::Field(t) => Some((t.name.as_str(), t.multiplicity)),
                Segment::Literal(_) => None,
            })
            .collect()
    }

    #[test]
    fn bare_words_are_fields() {
        let segs = scan("name=value", &FieldMarkers::none()).unwrap();
        assert_eq!(segs.len(), 3);
        assert_eq!(segs[1], lit("="));
        assert_eq!(
            names(&segs),
            vec![
                ("name", Multiplicity::SingleWord),
                ("value", Multiplicity::SingleWord)
            ]
        );
    }

    #[test]
    fn token_spans_cover_raw_text() {
        let segs = scan("ab  cd*", &FieldMarkers::none()).unwrap();
        match (&segs[0], &segs[2]) {
            (Segment::Field(a), Segment::Field(b)) => {
                assert_eq!((a.start, a.len), (0, 2));
                assert_eq!((b.start, b.len), (4, 3));
                assert_eq!(b.multiplicity, Multiplicity::MultiWord);
            }
            _ => panic!("expected two fields"),
        }
    }

    #[test]
    fn star_marks_multi_word() {
        let segs = scan("tags* rest", &FieldMarkers::none()).unwrap();
        assert_eq!(
            names(&segs),
            vec![
                ("tags", Multiplicity::MultiWord),
                ("rest", Multiplicity::SingleWord)
            ]
        );
    }

    #[test]
    fn stray_star_is_literal() {
        let segs = scan("a - * b", &FieldMarkers::none()).unwrap();
        assert_eq!(segs[1], lit(" - * "));
    }

    #[test]
    fn markers_bracket_fields() {
        let markers = FieldMarkers::new("<", ">");
        let segs = scan("Hello <name>, see <tags*>!", &markers).unwrap();
        assert_eq!(segs[0], lit("Hello "));
        assert_eq!(segs[2], lit(", see "));
        assert_eq!(segs[4], lit("!"));
        assert_eq!(
            names(&segs),
            vec![
                ("name", Multiplicity::SingleWord),
                ("tags", Multiplicity::MultiWord)
            ]
        );
    }

    #[test]
    fn star_after_right_marker_is_literal() {
        let markers = FieldMarkers::new("<", ">");
        let segs = scan("<tags>*", &markers).unwrap();
        assert_eq!(names(&segs), vec![("tags", Multiplicity::SingleWord)]);
        assert_eq!(segs[1], lit("*"));
    }

    #[test]
    fn metacharacter_markers_are_escaped() {
        let markers = FieldMarkers::new("(", ")");
        let segs = scan("f(x) = (y)", &markers).unwrap();
        assert_eq!(segs[0], lit("f"));
        assert_eq!(
            names(&segs),
            vec![("x", Multiplicity::SingleWord), ("y", Multiplicity::SingleWord)]
        );
    }

    #[test]
    fn no_tokens_is_one_literal() {
        let markers = FieldMarkers::new("{{", "}}");
        assert_eq!(scan("plain text", &markers).unwrap(), vec![lit("plain text")]);
        assert!(scan("", &markers).unwrap().is_empty());
    }
}

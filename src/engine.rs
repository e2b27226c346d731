//! Regex engine collaborator.
//!
//! The compiler only produces a pattern string. Executing it is delegated to
//! an [`Engine`], which can compile a pattern, find its first match and find
//! all non-overlapping matches. [`RegexEngine`] implements it on the `regex`
//! crate.

use regex::{Captures, Regex, RegexBuilder};

use crate::error::SimplexError;

/// One captured substring and its byte offset in the searched text.
///
/// Engines must report `start` so that `text == &haystack[start..start + text.len()]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capture<'t> {
    pub start: usize,
    pub text: &'t str,
}

/// Capture groups of one match, group 1 first. `None` for a group that did
/// not participate.
pub type Groups<'t> = Vec<Option<Capture<'t>>>;

pub trait Engine {
    type Program;

    fn compile(&self, pattern: &str) -> Result<Self::Program, SimplexError>;

    /// The leftmost match in `text`, if any.
    fn find<'t>(&self, program: &Self::Program, text: &'t str) -> Option<Groups<'t>>;

    /// Every non-overlapping match in `text`, left to right. Each search
    /// resumes where the previous match ended.
    fn find_all<'t>(&self, program: &Self::Program, text: &'t str) -> Vec<Groups<'t>>;
}

/// [`Engine`] backed by [`regex::Regex`].
#[derive(Debug, Clone, Default)]
pub struct RegexEngine {
    size_limit: Option<usize>,
}

impl RegexEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cap the compiled program size in bytes. Patterns over the limit fail
    /// to compile.
    pub fn with_size_limit(limit: usize) -> Self {
        Self {
            size_limit: Some(limit),
        }
    }
}

impl Engine for RegexEngine {
    type Program = Regex;

    fn compile(&self, pattern: &str) -> Result<Regex, SimplexError> {
        let mut builder = RegexBuilder::new(pattern);
        if let Some(limit) = self.size_limit {
            builder.size_limit(limit);
        }
        builder.build().map_err(|err| SimplexError::Compile {
            pattern: pattern.to_string(),
            reason: err.to_string(),
        })
    }

    fn find<'t>(&self, program: &Regex, text: &'t str) -> Option<Groups<'t>> {
        program.captures(text).map(|caps| groups(&caps))
    }

    fn find_all<'t>(&self, program: &Regex, text: &'t str) -> Vec<Groups<'t>> {
        program.captures_iter(text).map(|caps| groups(&caps)).collect()
    }
}

fn groups<'t>(caps: &Captures<'t>) -> Groups<'t> {
    caps.iter()
        .skip(1)
        .map(|m| {
            m.map(|m| Capture {
                start: m.start(),
                text: m.as_str(),
            })
        })
        .collect()
}

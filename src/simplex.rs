//! The constructible matcher type.

use std::fmt;

use crate::engine::{Engine, Groups, RegexEngine};
use crate::error::SimplexError;
use crate::match_result::MatchResult;
use crate::options::Options;
use crate::pattern::{CompiledMatcher, compile};


/// Outcome of [`Simplex::match_text`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Match {
    /// The first occurrence (non-global matchers).
    One(MatchResult),
    /// Every occurrence, in order (global matchers).
    All(Vec<MatchResult>),
}

impl Match {
    pub fn into_vec(self) -> Vec<MatchResult> {
        match self {
            Match::One(result) => vec![result],
            Match::All(results) => results,
        }
    }
}

/// An expression compiled once and matched against any number of texts.
///
/// Construction either fully succeeds or returns an error; a `Simplex` never
/// exists half-built. Matching does not mutate it.
pub struct Simplex<E: Engine = RegexEngine> {
    expression: String,
    options: Options,
    matcher: CompiledMatcher,
    engine: E,
    program: E::Program,
}

impl Simplex {
    pub fn new(expression: &str) -> Result<Self, SimplexError> {
        Self::with_options(expression, Options::default())
    }

    pub fn with_options(
        expression: &str,
        options: impl Into<Options>,
    ) -> Result<Self, SimplexError> {
        Self::with_engine(expression, options, RegexEngine::new())
    }
}

impl<E: Engine> Simplex<E> {
    /// Build a matcher that executes its pattern on `engine`.
    pub fn with_engine(
        expression: &str,
        options: impl Into<Options>,
        engine: E,
    ) -> Result<Self, SimplexError> {
        let options = options.into();
        let markers = options.resolved_markers();
        let matcher = compile(expression, &markers, options.strict_whitespace)?;
        let program = engine.compile(matcher.pattern())?;
        Ok(Self {
            expression: expression.to_string(),
            options,
            matcher,
            engine,
            program,
        })
    }

    /// Match `text`: the first occurrence, or every occurrence when the
    /// `global` option is set.
    ///
    /// A global matcher always returns `Some(Match::All(..))`, empty when
    /// nothing matches. Otherwise `None` means no match.
    pub fn match_text(&self, text: &str) -> Option<Match> {
        if self.options.global {
            Some(Match::All(self.match_all(text)))
        } else {
            self.match_first(text).map(Match::One)
        }
    }

    /// The first occurrence in `text`, regardless of the `global` option.
    pub fn match_first(&self, text: &str) -> Option<MatchResult> {
        let groups = self.engine.find(&self.program, text)?;
        let result = self.to_result(&groups);
        match groups.iter().flatten().next() {
            Some(first) => {
                log::trace!("{:?} matched {result} at {}", self.expression, first.start)
            }
            None => log::trace!("{:?} matched {result}", self.expression),
        }
        Some(result)
    }

    /// Every non-overlapping occurrence in `text`, left to right.
    ///
    /// Each call scans `text` from the start.
    pub fn match_all(&self, text: &str) -> Vec<MatchResult> {
        let results: Vec<MatchResult> = self
            .engine
            .find_all(&self.program, text)
            .iter()
            .map(|groups| self.to_result(groups))
            .collect();
        log::trace!("{:?} matched {} time(s)", self.expression, results.len());
        results
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.engine.find(&self.program, text).is_some()
    }

    fn to_result(&self, groups: &Groups<'_>) -> MatchResult {
        MatchResult::from_groups(
            self.matcher.field_names(),
            groups,
            self.options.infer_types,
        )
    }

    pub fn expression(&self) -> &str {
        &self.expression
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn matcher(&self) -> &CompiledMatcher {
        &self.matcher
    }

    /// The compiled regex source.
    pub fn pattern(&self) -> &str {
        self.matcher.pattern()
    }

    /// Field names in capture-group order.
    pub fn field_names(&self) -> &[String] {
        self.matcher.field_names()
    }
}

impl<E: Engine> fmt::Debug for Simplex<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Simplex")
            .field("expression", &self.expression)
            .field("options", &self.options)
            .field("matcher", &self.matcher)
            .finish_non_exhaustive()
    }
}

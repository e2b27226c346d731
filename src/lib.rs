//! Extract named values from text with human-readable expressions.
//!
//! An expression such as `"name=value"` is compiled once into a regular
//! expression with one capture group per field, then matched against any
//! number of texts.
//!
//! # Example
//!
//! ```rust
//! use simplex::{Options, Simplex};
//!
//! let s = Simplex::new("name=value").unwrap();
//! let result = s.match_first("foo=bar").unwrap();
//! assert_eq!(result.get_str("name"), Some("foo"));
//! assert_eq!(result.get_str("value"), Some("bar"));
//!
//! // Markers bracket fields; `*` makes a field span several words.
//! let tags = Simplex::with_options("<tags*>", Options::new().field_markers("<>")).unwrap();
//! let result = tags.match_first("blah <foo bar> blah").unwrap();
//! assert_eq!(result.get_str("tags"), Some("foo bar"));
//!
//! // `g` matches every occurrence.
//! let pairs = Simplex::with_options("k=v", "g").unwrap();
//! assert_eq!(pairs.match_all("a=1 b=2").len(), 2);
//! ```

pub mod engine;
mod error;
pub mod markers;
mod match_result;
mod options;
pub mod pattern;
mod simplex;
pub mod value;

pub use engine::{Engine, RegexEngine};
pub use error::SimplexError;
pub use markers::{FieldMarkers, MarkerSpec};
pub use match_result::MatchResult;
pub use options::Options;
pub use pattern::CompiledMatcher;
pub use simplex::{Match, Simplex};
pub use value::Value;

//! Simplex expression compiler.
//!
//! An expression is literal text with named fields in it. Each field becomes
//! one capturing group of the compiled regex.
//!
//! # Expression syntax
//!
//! | Token           | Meaning                                                  |
//! |-----------------|----------------------------------------------------------|
//! | `name`          | Field capturing one word (no markers configured)         |
//! | `name*`         | Field capturing every word up to the next literal        |
//! | `<name>`        | Field with markers `<`,`>`; markers must appear in input |
//! | `<name*>`       | Multi-word field with markers                            |
//! | whitespace      | Any run of whitespace (unless strict whitespace is set)  |
//! | anything else   | Literal text, matched exactly                            |
//!
//! Word characters are letters, digits and underscore.

pub mod ast;
pub mod compiler;
pub mod scanner;

pub use compiler::{CompiledMatcher, compile};
pub use scanner::scan;

//! Token types for scanned expressions.

/// How much input text a field captures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Multiplicity {
    /// Exactly one word.
    SingleWord,
    /// Everything up to the next literal or marker (`name*`).
    MultiWord,
}

/// One field occurrence found while scanning an expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldToken {
    pub name: String,
    /// Byte offset of the raw token (markers included) in the expression.
    pub start: usize,
    /// Byte length of the raw token.
    pub len: usize,
    pub multiplicity: Multiplicity,
}

impl FieldToken {
    pub fn end(&self) -> usize {
        self.start + self.len
    }
}

/// A scanned expression is a flat run of literal text and fields.
///
/// Literal segments are never empty; two literals are never adjacent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Literal(String),
    Field(FieldToken),
}

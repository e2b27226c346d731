/// Errors that can occur while building a [`Simplex`](crate::Simplex).
///
/// Failing to match is not an error; only construction can fail.
#[derive(Debug, Clone, PartialEq)]
pub enum SimplexError {
    /// The regex engine rejected the assembled pattern.
    Compile { pattern: String, reason: String },
}

impl std::fmt::Display for SimplexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Compile { pattern, reason } => {
                write!(f, "Failed to compile pattern {pattern:?}: {reason}")
            }
        }
    }
}

impl std::error::Error for SimplexError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_pattern_and_reason() {
        let err = SimplexError::Compile {
            pattern: "(\\w+)".to_string(),
            reason: "too big".to_string(),
        };
        assert_eq!(
            err.to_string(),
            r#"Failed to compile pattern "(\\w+)": too big"#
        );
    }
}

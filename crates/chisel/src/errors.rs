//! # Error Types

use crate::regex::ErrorWrapper;

/// Errors from chisel operations.
#[derive(Debug, thiserror::Error)]
pub enum ChiselError {
    /// The rendered pattern is not valid for the regex engine.
    ///
    /// This can only happen when raw (unescaped) text was inserted.
    #[error("invalid pattern {pattern:?}: {source}")]
    Syntax {
        /// The rendered pattern text which failed to compile.
        pattern: String,

        /// The engine error.
        source: ErrorWrapper,
    },

    /// A combinator was called with a malformed argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A date/time format directive which has no pattern.
    #[error("{directive:?} not supported")]
    UnsupportedFormat {
        /// The offending directive, including the leading `%`.
        directive: String,
    },

    /// Group access before any successful `matches()` call.
    #[error("no prior successful match")]
    NoPriorMatch,

    /// Group access with an unknown index or name.
    #[error("no such group: {0}")]
    NoSuchGroup(String),

    /// The regex engine failed while matching.
    #[error("match failed: {0}")]
    Runtime(ErrorWrapper),
}

/// Result type for chisel operations.
pub type ChiselResult<T> = core::result::Result<T, ChiselError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            ChiselError::NoPriorMatch.to_string(),
            "no prior successful match"
        );
        assert_eq!(
            ChiselError::UnsupportedFormat {
                directive: "%c".to_string()
            }
            .to_string(),
            "\"%c\" not supported"
        );
        assert_eq!(
            ChiselError::NoSuchGroup("foo".to_string()).to_string(),
            "no such group: foo"
        );
    }
}

//! # Regex Pattern Labeled Wrapper

use crate::regex::{ErrorWrapper, RegexWrapper};

/// Labeled wrapper for regex patterns.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum RegexPattern {
    /// This is a basic regex pattern, without extensions.
    Basic(String),

    /// This is a regex pattern that requires regex extensions.
    Fancy(String),

    /// The requirements of this pattern are unknown, and may require regex extensions.
    Adaptive(String),
}

impl<S: AsRef<str>> From<S> for RegexPattern {
    fn from(pattern: S) -> Self {
        Self::Adaptive(pattern.as_ref().to_string())
    }
}

impl RegexPattern {
    /// Get the underlying regex pattern.
    ///
    /// ## Returns
    /// The regex pattern string slice.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Basic(pattern) => pattern,
            Self::Fancy(pattern) => pattern,
            Self::Adaptive(pattern) => pattern,
        }
    }

    /// Wrap the pattern so it can only match at the start of the haystack.
    ///
    /// The label is preserved; the wrapping group is non-capturing,
    /// so group numbering is unchanged.
    ///
    /// ## Returns
    /// A new `RegexPattern` with the same label.
    pub fn anchored(&self) -> Self {
        let text = format!(r"\A(?:{})", self.as_str());
        match self {
            Self::Basic(_) => Self::Basic(text),
            Self::Fancy(_) => Self::Fancy(text),
            Self::Adaptive(_) => Self::Adaptive(text),
        }
    }

    /// Compile the regex pattern into a `RegexWrapper`.
    ///
    /// `Adaptive` patterns try the `regex` crate first,
    /// and fall up to `fancy_regex` when that fails.
    ///
    /// ## Returns
    /// A `Result` containing the compiled `RegexWrapper` or an `ErrorWrapper`.
    pub fn compile(&self) -> Result<RegexWrapper, ErrorWrapper> {
        match self {
            Self::Basic(pattern) => regex::Regex::new(pattern)
                .map(RegexWrapper::from)
                .map_err(ErrorWrapper::from),
            Self::Fancy(pattern) => fancy_regex::Regex::new(pattern)
                .map(RegexWrapper::from)
                .map_err(ErrorWrapper::from),
            Self::Adaptive(pattern) => {
                regex::Regex::new(pattern)
                    .map(RegexWrapper::from)
                    .or_else(|err| {
                        log::trace!("falling back to fancy_regex for {pattern:?}: {err}");
                        fancy_regex::Regex::new(pattern)
                            .map(RegexWrapper::from)
                            .map_err(ErrorWrapper::from)
                    })
            }
        }
    }
}

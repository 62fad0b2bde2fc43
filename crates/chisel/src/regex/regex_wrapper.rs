//! # Compiled Regex Wrapper
//!
//! One compiled-regex type over both engines, with match results
//! reduced to owned capture spans.

use core::{fmt::Debug, ops::Range};

/// Error wrapper for regex patterns.
#[non_exhaustive]
#[derive(Clone, Debug)]
pub enum ErrorWrapper {
    /// Error from `regex`.
    Basic(Box<regex::Error>),

    /// Error from `fancy_regex`.
    Fancy(Box<fancy_regex::Error>),
}

impl From<regex::Error> for ErrorWrapper {
    fn from(err: regex::Error) -> Self {
        Self::Basic(err.into())
    }
}

impl From<fancy_regex::Error> for ErrorWrapper {
    fn from(err: fancy_regex::Error) -> Self {
        Self::Fancy(err.into())
    }
}

impl core::fmt::Display for ErrorWrapper {
    fn fmt(
        &self,
        f: &mut core::fmt::Formatter<'_>,
    ) -> core::fmt::Result {
        match self {
            Self::Basic(err) => core::fmt::Display::fmt(err, f),
            Self::Fancy(err) => core::fmt::Display::fmt(err, f),
        }
    }
}

impl core::error::Error for ErrorWrapper {}

/// Per-group byte spans of one match; group 0 is the whole match.
pub type CaptureSpans = Vec<Option<Range<usize>>>;

/// Wrapper for regex patterns.
#[derive(Debug, Clone)]
pub enum RegexWrapper {
    /// Wrapper for `regex::Regex`.
    Basic(regex::Regex),

    /// Wrapper for `fancy_regex::Regex`.
    Fancy(fancy_regex::Regex),
}

impl PartialEq for RegexWrapper {
    fn eq(
        &self,
        other: &Self,
    ) -> bool {
        match (self, other) {
            (Self::Basic(a), Self::Basic(b)) => a.as_str() == b.as_str(),
            (Self::Fancy(a), Self::Fancy(b)) => a.as_str() == b.as_str(),
            _ => false,
        }
    }
}

impl From<regex::Regex> for RegexWrapper {
    fn from(regex: regex::Regex) -> Self {
        Self::Basic(regex)
    }
}

impl From<fancy_regex::Regex> for RegexWrapper {
    fn from(regex: fancy_regex::Regex) -> Self {
        Self::Fancy(regex)
    }
}

impl RegexWrapper {
    /// Was this compiled by the `regex` crate?
    pub fn is_basic(&self) -> bool {
        matches!(self, Self::Basic(_))
    }

    /// Was this compiled by `fancy_regex`?
    pub fn is_fancy(&self) -> bool {
        matches!(self, Self::Fancy(_))
    }

    /// Get the underlying regex pattern.
    ///
    /// ## Returns
    /// The regex pattern string slice.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Basic(regex) => regex.as_str(),
            Self::Fancy(regex) => regex.as_str(),
        }
    }

    /// The names of all groups, in group order; group 0 and unnamed groups are `None`.
    pub fn capture_names(&self) -> Vec<Option<String>> {
        match self {
            Self::Basic(regex) => regex
                .capture_names()
                .map(|name| name.map(str::to_string))
                .collect(),
            Self::Fancy(regex) => regex
                .capture_names()
                .map(|name| name.map(str::to_string))
                .collect(),
        }
    }

    /// Wrapper for `captures`, detached from the haystack borrow.
    ///
    /// ## Arguments
    /// * `haystack` - The string to search in.
    ///
    /// ## Returns
    /// The spans of the leftmost-first match, or `None`;
    /// `Err` only when the `fancy_regex` backtracker gives up.
    pub fn spans(
        &self,
        haystack: &str,
    ) -> Result<Option<CaptureSpans>, ErrorWrapper> {
        match self {
            Self::Basic(regex) => Ok(regex
                .captures(haystack)
                .map(|caps| caps.iter().map(|m| m.map(|m| m.range())).collect())),
            Self::Fancy(regex) => {
                let caps = regex.captures(haystack)?;
                Ok(caps.map(|caps| {
                    (0..caps.len())
                        .map(|i| caps.get(i).map(|m| m.start()..m.end()))
                        .collect()
                }))
            }
        }
    }
}

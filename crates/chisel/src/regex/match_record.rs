//! # Match Records
//!
//! Engine captures borrow the haystack; a [`MatchRecord`] owns a copy of the
//! subject instead, so it can be stored on a [`Fragment`](crate::Fragment)
//! as last-match state and handed back to callers.

use core::{fmt, ops::Range};
use std::sync::Arc;

use crate::{
    errors::{ChiselError, ChiselResult},
    regex::CaptureSpans,
};

/// A group selector: positional index or capture name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GroupKey {
    /// Positional group; `0` is the whole match.
    Index(usize),

    /// Named group.
    Name(String),
}

impl From<usize> for GroupKey {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

impl From<&str> for GroupKey {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for GroupKey {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl fmt::Display for GroupKey {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::Index(index) => write!(f, "{index}"),
            Self::Name(name) => write!(f, "{name:?}"),
        }
    }
}

/// An owned regex match: subject text, group spans and group names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRecord {
    subject: String,
    spans: CaptureSpans,
    names: Arc<[Option<String>]>,
}

impl MatchRecord {
    /// Build a record from engine spans.
    ///
    /// ## Arguments
    /// * `subject` - The matched haystack.
    /// * `spans` - Group spans; index 0 must be present.
    /// * `names` - Group names, parallel to `spans`.
    pub fn new(
        subject: &str,
        spans: CaptureSpans,
        names: Arc<[Option<String>]>,
    ) -> Self {
        Self {
            subject: subject.to_string(),
            spans,
            names,
        }
    }

    /// The haystack this record was matched against.
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// Byte range of the whole match.
    pub fn range(&self) -> Range<usize> {
        self.spans
            .first()
            .cloned()
            .flatten()
            .unwrap_or(0..0)
    }

    /// Start offset of the whole match.
    pub fn start(&self) -> usize {
        self.range().start
    }

    /// End offset of the whole match.
    pub fn end(&self) -> usize {
        self.range().end
    }

    /// Text of the whole match.
    pub fn as_str(&self) -> &str {
        &self.subject[self.range()]
    }

    /// Number of groups, including group 0.
    pub fn group_count(&self) -> usize {
        self.spans.len()
    }

    /// Text of group `index`; `None` if out of range or it did not participate.
    pub fn get(
        &self,
        index: usize,
    ) -> Option<&str> {
        self.spans
            .get(index)
            .cloned()
            .flatten()
            .map(|span| &self.subject[span])
    }

    /// Text of the named group; `None` if unknown or it did not participate.
    pub fn name(
        &self,
        name: &str,
    ) -> Option<&str> {
        self.index_of(name).and_then(|index| self.get(index))
    }

    /// Text of a group selected by index or name.
    ///
    /// ## Returns
    /// `Ok(None)` for a known group which did not participate in the match;
    /// `Err(NoSuchGroup)` for an unknown one.
    pub fn group<K: Into<GroupKey>>(
        &self,
        key: K,
    ) -> ChiselResult<Option<&str>> {
        let key = key.into();
        let index = match &key {
            GroupKey::Index(index) if *index < self.spans.len() => *index,
            GroupKey::Name(name) => match self.index_of(name) {
                Some(index) => index,
                None => return Err(ChiselError::NoSuchGroup(key.to_string())),
            },
            GroupKey::Index(_) => return Err(ChiselError::NoSuchGroup(key.to_string())),
        };
        Ok(self.get(index))
    }

    /// Texts of all groups after group 0, in order.
    pub fn groups(&self) -> Vec<Option<&str>> {
        (1..self.spans.len()).map(|i| self.get(i)).collect()
    }

    fn index_of(
        &self,
        name: &str,
    ) -> Option<usize> {
        self.names
            .iter()
            .position(|n| n.as_deref() == Some(name))
    }
}

//! # Compiled Matcher
//!
//! The executable form of a rendered pattern: one unanchored regex for
//! `search`, and one `\A`-anchored regex for start-of-subject matching.

use std::sync::Arc;

use crate::{
    errors::{ChiselError, ChiselResult},
    regex::{MatchRecord, RegexPattern, RegexWrapper},
};

/// A rendered pattern compiled for both anchored and unanchored matching.
#[derive(Debug, Clone)]
pub struct CompiledMatcher {
    search: RegexWrapper,
    anchored: RegexWrapper,
    names: Arc<[Option<String>]>,
}

impl CompiledMatcher {
    /// Compile a rendered pattern.
    ///
    /// The anchored form is compiled with whichever engine accepted
    /// the plain pattern.
    ///
    /// ## Arguments
    /// * `pattern` - The rendered pattern text.
    ///
    /// ## Returns
    /// The matcher, or `ChiselError::Syntax` naming the rejected text.
    pub fn compile(pattern: &str) -> ChiselResult<Self> {
        let search = RegexPattern::from(pattern)
            .compile()
            .map_err(|source| ChiselError::Syntax {
                pattern: pattern.to_string(),
                source,
            })?;

        let label = if search.is_basic() {
            RegexPattern::Basic(pattern.to_string())
        } else {
            RegexPattern::Fancy(pattern.to_string())
        };
        let anchored_label = label.anchored();
        let anchored = anchored_label
            .compile()
            .map_err(|source| ChiselError::Syntax {
                pattern: anchored_label.as_str().to_string(),
                source,
            })?;

        log::debug!(
            "compiled {pattern:?} with {}",
            if search.is_basic() { "regex" } else { "fancy_regex" }
        );

        let names = search.capture_names().into();
        Ok(Self {
            search,
            anchored,
            names,
        })
    }

    /// The rendered pattern text.
    pub fn as_str(&self) -> &str {
        self.search.as_str()
    }

    /// Does this matcher need the `fancy_regex` engine?
    pub fn is_fancy(&self) -> bool {
        self.search.is_fancy()
    }

    /// Match at the start of `subject`.
    pub fn match_start(
        &self,
        subject: &str,
    ) -> ChiselResult<Option<MatchRecord>> {
        self.record(&self.anchored, subject)
    }

    /// Find the leftmost match anywhere in `subject`.
    pub fn search(
        &self,
        subject: &str,
    ) -> ChiselResult<Option<MatchRecord>> {
        self.record(&self.search, subject)
    }

    fn record(
        &self,
        regex: &RegexWrapper,
        subject: &str,
    ) -> ChiselResult<Option<MatchRecord>> {
        let spans = regex.spans(subject).map_err(ChiselError::Runtime)?;
        Ok(spans.map(|spans| MatchRecord::new(subject, spans, self.names.clone())))
    }
}

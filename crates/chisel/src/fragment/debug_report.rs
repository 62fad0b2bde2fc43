//! Incremental-failure diagnostic.
//!
//! A long composed fragment which fails to match says nothing about *where*
//! it diverged from the input. [`Fragment::debug`] finds out by matching the
//! growing prefixes of its pieces against the subject.

use crate::{Fragment, errors::ChiselResult, regex::CompiledMatcher};

/// The outcome of [`Fragment::debug`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DebugReport {
    /// Every prefix, including the whole fragment, matched.
    Matched,

    /// The first prefix which compiled but did not match.
    Diverged {
        /// Index of the first piece whose addition broke the match.
        index: usize,

        /// The pieces before `index`, concatenated; this prefix matched.
        matched_prefix: String,

        /// The piece at `index`.
        failing_piece: String,
    },
}

impl DebugReport {
    /// Did every prefix match?
    pub fn is_matched(&self) -> bool {
        matches!(self, Self::Matched)
    }

    /// The prefix which failed: `matched_prefix` followed by `failing_piece`.
    pub fn failing_prefix(&self) -> Option<String> {
        match self {
            Self::Matched => None,
            Self::Diverged {
                matched_prefix,
                failing_piece,
                ..
            } => Some(format!("{matched_prefix}{failing_piece}")),
        }
    }
}

impl Fragment {
    /// Match the prefixes of this fragment's pieces against the start of `subject`,
    /// shortest first, and report the first one which does not match.
    ///
    /// This is a development aid; each prefix is compiled afresh.
    ///
    /// ## Returns
    /// * `Ok(DebugReport::Matched)` if every prefix matches.
    /// * `Ok(DebugReport::Diverged { .. })` at the first non-matching prefix.
    /// * `Err(ChiselError::Syntax)` if a prefix does not compile.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self)))]
    pub fn debug(
        &self,
        subject: &str,
    ) -> ChiselResult<DebugReport> {
        let mut prefix = String::new();
        for (index, piece) in self.pieces.iter().enumerate() {
            let matched_len = prefix.len();
            prefix.push_str(piece);

            log::trace!("debug prefix {index}: {prefix:?}");
            let matcher = CompiledMatcher::compile(&prefix)?;
            if matcher.match_start(subject)?.is_none() {
                prefix.truncate(matched_len);
                return Ok(DebugReport::Diverged {
                    index,
                    matched_prefix: prefix,
                    failing_piece: piece.clone(),
                });
            }
        }
        Ok(DebugReport::Matched)
    }
}

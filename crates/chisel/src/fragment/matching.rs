//! Compile-on-demand matching for [`Fragment`].
//!
//! Two calling conventions share one compiled matcher:
//!
//! * [`Fragment::match_start`] / [`Fragment::search`] return the match;
//! * [`Fragment::matches`] stores it, to be read back through
//!   [`Fragment::groups`] / [`Fragment::group`].

use crate::{
    Fragment,
    errors::{ChiselError, ChiselResult},
    regex::{CompiledMatcher, GroupKey, MatchRecord},
};

impl Fragment {
    /// The compiled matcher for this fragment, compiling it on first use.
    ///
    /// ## Returns
    /// The cached matcher; or `ChiselError::Syntax` if the rendered
    /// pattern is invalid, in which case nothing is cached.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self)))]
    pub fn compile(&self) -> ChiselResult<&CompiledMatcher> {
        self.compiled
            .get_or_try_init(|| CompiledMatcher::compile(self.as_str()))
    }

    /// Has this fragment been compiled yet?
    pub fn is_compiled(&self) -> bool {
        self.compiled.get().is_some()
    }

    /// Match at the start of `subject`, and remember the result.
    ///
    /// A failed match clears any previously remembered match.
    ///
    /// ## Returns
    /// `true` on a match; `false` (not an error) otherwise.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub fn matches(
        &self,
        subject: &str,
    ) -> ChiselResult<bool> {
        let found = self.compile()?.match_start(subject)?;
        let matched = found.is_some();
        *self.last_match.lock() = found;
        Ok(matched)
    }

    /// Match at the start of `subject`.
    ///
    /// Does not touch the remembered match.
    pub fn match_start(
        &self,
        subject: &str,
    ) -> ChiselResult<Option<MatchRecord>> {
        self.compile()?.match_start(subject)
    }

    /// Find the leftmost match anywhere in `subject`.
    ///
    /// Does not touch the remembered match.
    pub fn search(
        &self,
        subject: &str,
    ) -> ChiselResult<Option<MatchRecord>> {
        self.compile()?.search(subject)
    }

    /// The match remembered by the last successful [`Fragment::matches`] call.
    pub fn last_match(&self) -> Option<MatchRecord> {
        self.last_match.lock().clone()
    }

    /// The captured groups (1..) of the remembered match.
    ///
    /// ## Returns
    /// `ChiselError::NoPriorMatch` if there is no remembered match.
    pub fn groups(&self) -> ChiselResult<Vec<Option<String>>> {
        let guard = self.last_match.lock();
        let record = guard.as_ref().ok_or(ChiselError::NoPriorMatch)?;
        Ok(record
            .groups()
            .into_iter()
            .map(|group| group.map(str::to_string))
            .collect())
    }

    /// One group of the remembered match, by index or name.
    ///
    /// ## Returns
    /// `ChiselError::NoPriorMatch` if there is no remembered match;
    /// `ChiselError::NoSuchGroup` for an unknown group.
    pub fn group<K: Into<GroupKey>>(
        &self,
        key: K,
    ) -> ChiselResult<Option<String>> {
        let guard = self.last_match.lock();
        let record = guard.as_ref().ok_or(ChiselError::NoPriorMatch)?;
        Ok(record.group(key)?.map(str::to_string))
    }

    /// Several groups of the remembered match, in the order of `keys`.
    ///
    /// ## Returns
    /// `ChiselError::NoPriorMatch` if there is no remembered match;
    /// `ChiselError::NoSuchGroup` if any key is unknown.
    pub fn group_many<I, K>(
        &self,
        keys: I,
    ) -> ChiselResult<Vec<Option<String>>>
    where
        I: IntoIterator<Item = K>,
        K: Into<GroupKey>,
    {
        let guard = self.last_match.lock();
        let record = guard.as_ref().ok_or(ChiselError::NoPriorMatch)?;
        keys.into_iter()
            .map(|key| record.group(key).map(|group| group.map(str::to_string)))
            .collect()
    }
}

//! # Regex Utilities
//!
//! Fragments render to a single pattern dialect, but only some patterns need
//! the extended machinery provided by the [`fancy_regex`] crate
//! (backreferences, lookaround); naturally, this has performance costs.
//! We'd prefer to avoid using the [`fancy_regex`] crate when possible, falling
//! back on the standard [`regex`] crate when patterns permit this.
//!
//! This recurses into a few problems:
//!
//! * Labeling Patterns - [`RegexPattern`]
//!   * [`RegexPattern::Basic`] - a pattern which was written for basic regular expressions.
//!   * [`RegexPattern::Fancy`] - a pattern which was written for regex extensions.
//!   * [`RegexPattern::Adaptive`] - unknown target, try basic; then fall-up to fancy.
//! * Wrapping Compiled Regex - [`RegexWrapper`]
//! * Detaching Matches from the haystack - [`MatchRecord`]
//! * Anchored and unanchored matching of one pattern - [`CompiledMatcher`]

mod compiled_matcher;
mod match_record;
mod regex_pattern;
mod regex_wrapper;

#[doc(inline)]
pub use compiled_matcher::*;
#[doc(inline)]
pub use match_record::*;
#[doc(inline)]
pub use regex_pattern::*;
#[doc(inline)]
pub use regex_wrapper::*;

/// Escape `text` so that it matches itself verbatim.
pub fn escape(text: &str) -> String {
    fancy_regex::escape(text).into_owned()
}

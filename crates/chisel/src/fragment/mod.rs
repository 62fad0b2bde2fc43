//! # Fragments
//!
//! A [`Fragment`] is an ordered list of pattern-syntax pieces which,
//! concatenated, form a regex pattern. Fragments are values: extending one
//! (with `+`, [`Fragment::concat`], or any combinator) builds a new fragment
//! and leaves the operands untouched, so small fragments can be shared as
//! building blocks of many larger ones.
//!
//! Each fragment lazily caches its rendered text, its compiled matcher,
//! and the last match recorded by [`Fragment::matches`].
//!
//! ```rust
//! use chisel::{Fragment, capture, one_or_more, any_of};
//!
//! let word = one_or_more(any_of("a-z"));
//! let assignment = capture(&word) + " = " + capture(&word);
//!
//! assert!(assignment.matches("foo = bar").unwrap());
//! assert_eq!(
//!     assignment.groups().unwrap(),
//!     vec![Some("foo".to_string()), Some("bar".to_string())]
//! );
//! ```

mod debug_report;
mod matching;
mod operators;

use core::{
    fmt,
    hash::{Hash, Hasher},
};

#[doc(inline)]
pub use debug_report::DebugReport;
use once_cell::sync::OnceCell;
use parking_lot::Mutex;

use crate::regex::{CompiledMatcher, MatchRecord, escape};

/// A (possibly partial) regex pattern, built from pieces.
///
/// Equality and hashing look at the pieces only; the caches never participate.
pub struct Fragment {
    pieces: Vec<String>,

    rendered: OnceCell<String>,
    compiled: OnceCell<CompiledMatcher>,
    last_match: Mutex<Option<MatchRecord>>,
}

impl Fragment {
    /// Build a single-piece fragment.
    ///
    /// ## Arguments
    /// * `text` - The piece text.
    /// * `escape` - When `true`, `text` is escaped to match itself verbatim;
    ///   when `false`, it is inserted as raw pattern syntax.
    pub fn new(
        text: &str,
        escape: bool,
    ) -> Self {
        if escape {
            Self::literal(text)
        } else {
            Self::raw(text)
        }
    }

    /// Build a fragment matching `text` verbatim.
    pub fn literal(text: &str) -> Self {
        Self::from_pieces(vec![escape(text)])
    }

    /// Build a fragment from raw pattern syntax.
    ///
    /// The text is not checked; an invalid pattern surfaces as
    /// [`ChiselError::Syntax`](crate::ChiselError::Syntax) on first match.
    pub fn raw<S: Into<String>>(text: S) -> Self {
        Self::from_pieces(vec![text.into()])
    }

    pub(crate) fn from_pieces(pieces: Vec<String>) -> Self {
        Self {
            pieces,
            rendered: OnceCell::new(),
            compiled: OnceCell::new(),
            last_match: Mutex::new(None),
        }
    }

    /// The pieces, in order.
    pub fn pieces(&self) -> &[String] {
        &self.pieces
    }

    /// The number of pieces.
    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    /// Does this fragment have no pieces?
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// The rendered pattern text.
    ///
    /// Rendered once, on first call.
    pub fn as_str(&self) -> &str {
        self.rendered.get_or_init(|| self.pieces.concat())
    }

    /// Concatenate `other` after this fragment.
    ///
    /// Text operands are escaped. Neither operand is modified.
    ///
    /// ## Returns
    /// A new fragment with `self`'s pieces followed by `other`'s.
    pub fn concat<T: Into<Fragment>>(
        &self,
        other: T,
    ) -> Fragment {
        let other = other.into();
        let mut pieces = Vec::with_capacity(self.pieces.len() + other.pieces.len());
        pieces.extend(self.pieces.iter().cloned());
        pieces.extend(other.pieces);
        Fragment::from_pieces(pieces)
    }
}

/// Concatenate two fragments (or texts, which are escaped).
///
/// `concat(concat(a, b), c)` and `concat(a, concat(b, c))` render identically.
pub fn concat<A, B>(
    a: A,
    b: B,
) -> Fragment
where
    A: Into<Fragment>,
    B: Into<Fragment>,
{
    a.into().concat(b)
}

impl Default for Fragment {
    fn default() -> Self {
        Self::from_pieces(Vec::new())
    }
}

impl Clone for Fragment {
    /// Copies the pieces; the clone starts with empty caches.
    fn clone(&self) -> Self {
        Self::from_pieces(self.pieces.clone())
    }
}

impl PartialEq for Fragment {
    fn eq(
        &self,
        other: &Self,
    ) -> bool {
        self.pieces == other.pieces
    }
}

impl Eq for Fragment {}

impl Hash for Fragment {
    fn hash<H: Hasher>(
        &self,
        state: &mut H,
    ) {
        self.pieces.hash(state);
    }
}

impl fmt::Debug for Fragment {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "Fragment{:?}", self.pieces)
    }
}

impl fmt::Display for Fragment {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for Fragment {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_escapes() {
        assert_eq!(Fragment::literal("a").as_str(), "a");
        assert_eq!(Fragment::literal("[]").as_str(), r"\[\]");
        assert_eq!(Fragment::new("[]", false).as_str(), "[]");
        assert_eq!(Fragment::raw(r"\d").pieces(), &[r"\d".to_string()]);
    }

    #[test]
    fn test_concat_leaves_operands_alone() {
        let a = Fragment::literal("a");
        let b = Fragment::raw(r"\d");

        let ab = a.concat(&b);
        assert_eq!(ab.pieces(), &["a".to_string(), r"\d".to_string()]);
        assert_eq!(a.len(), 1);
        assert_eq!(b.len(), 1);

        let abc = ab.concat("c.");
        assert_eq!(abc.as_str(), r"a\dc\.");
        assert_eq!(ab.as_str(), r"a\d");
    }

    #[test]
    fn test_concat_associative() {
        let a = Fragment::literal("a");
        let b = Fragment::raw("[bc]");
        let c = Fragment::literal("?");

        let left = concat(concat(&a, &b), &c);
        let right = concat(&a, concat(&b, &c));
        assert_eq!(left.as_str(), right.as_str());
        assert_eq!(left, right);
    }

    #[test]
    fn test_structural_equality() {
        let a = Fragment::literal("a");
        let b = Fragment::literal("a");
        assert_eq!(a, b);
        assert!(!core::ptr::eq(&a, &b));

        assert_eq!(Fragment::from(&a), a);

        // The same text split differently is a different fragment.
        let split = Fragment::literal("a").concat("b");
        let whole = Fragment::literal("ab");
        assert_eq!(split.as_str(), whole.as_str());
        assert_ne!(split, whole);
    }

    #[test]
    fn test_clone_has_fresh_caches() {
        let a = Fragment::literal("a");
        assert!(a.matches("a").unwrap());

        let b = a.clone();
        assert_eq!(a, b);
        assert!(b.last_match().is_none());
        assert!(a.last_match().is_some());
    }

    #[test]
    fn test_render_is_idempotent() {
        let f = Fragment::literal("x").concat(Fragment::raw("+"));
        let first = f.as_str().to_string();
        assert_eq!(f.as_str(), first);
        assert_eq!(f.to_string(), first);
        assert!(core::ptr::eq(f.as_str(), f.as_str()));
    }

    #[test]
    fn test_debug_format() {
        let f = Fragment::literal("a").concat(Fragment::raw("."));
        assert_eq!(format!("{f:?}"), r#"Fragment["a", "."]"#);
    }

    #[test]
    fn test_default_is_empty() {
        let f = Fragment::default();
        assert!(f.is_empty());
        assert_eq!(f.as_str(), "");
    }

    proptest::proptest! {
        #[test]
        fn test_literal_round_trip(text in "\\PC{0,24}") {
            let f = crate::capture(Fragment::literal(&text));
            proptest::prop_assert!(f.matches(&text).unwrap());
            proptest::prop_assert_eq!(f.group(1usize).unwrap(), Some(text.clone()));
        }

        #[test]
        fn test_concat_associative_prop(
            a in "[a-z.*+?()]{0,6}",
            b in "[a-z.*+?()]{0,6}",
            c in "[a-z.*+?()]{0,6}",
        ) {
            let (a, b, c) = (Fragment::literal(&a), Fragment::literal(&b), Fragment::literal(&c));
            let left = concat(concat(&a, &b), &c);
            let right = concat(&a, concat(&b, &c));
            proptest::prop_assert_eq!(left.as_str(), right.as_str());
        }
    }
}

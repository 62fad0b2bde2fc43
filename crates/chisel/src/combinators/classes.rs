//! Single-position combinators: characters, classes and anchors.

use crate::{Fragment, combinators::wrap};

/// Matches any one character (except newline).
pub fn anything() -> Fragment {
    Fragment::raw(".")
}

/// Matches `text` verbatim; reads well at the head of a chain.
pub fn then(text: &str) -> Fragment {
    Fragment::literal(text)
}

/// A character class: `[set]`.
///
/// `set` is inserted raw and must be valid class syntax, e.g. `a-z_`.
pub fn any_of(set: &str) -> Fragment {
    wrap("[", &Fragment::raw(set), "]")
}

/// A negated character class: `[^set]`.
///
/// `set` is inserted raw, as for [`any_of`].
pub fn none_of(set: &str) -> Fragment {
    wrap("[^", &Fragment::raw(set), "]")
}

/// Start-of-subject anchor: `^`.
pub fn bol() -> Fragment {
    Fragment::raw("^")
}

/// End-of-subject anchor: `$`.
pub fn eol() -> Fragment {
    Fragment::raw("$")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{capture, either};

    #[test]
    fn test_rendering() {
        assert_eq!(anything().as_str(), ".");
        assert_eq!(then("a").as_str(), "a");
        assert_eq!(then("[]").as_str(), r"\[\]");
        assert_eq!(any_of("a-z").as_str(), "[a-z]");
        assert_eq!(none_of("a-z").as_str(), "[^a-z]");
        assert_eq!(bol().as_str(), "^");
        assert_eq!(eol().as_str(), "$");
    }

    #[test]
    fn test_class_is_one_piece() {
        assert_eq!(any_of("a-z").len(), 1);
    }

    #[test]
    fn test_any_of() {
        let f = capture(any_of("a-z"));
        assert!(f.matches("abc").unwrap());
        assert_eq!(f.groups().unwrap(), vec![Some("a".to_string())]);
    }

    #[test]
    fn test_none_of() {
        let f = none_of("0-9");
        assert!(f.matches("x").unwrap());
        assert!(!f.matches("7").unwrap());
    }

    #[test]
    fn test_anything() {
        let f = capture(anything());
        assert!(f.matches("def").unwrap());
        assert_eq!(f.groups().unwrap(), vec![Some("d".to_string())]);
    }

    #[test]
    fn test_anchors() {
        let one = bol() + capture(anything()) + eol();
        assert!(!one.matches("def").unwrap());
        assert!(one.matches("d").unwrap());

        let word = bol() + capture(either(["abc", "def"])) + eol();
        assert!(word.matches("def").unwrap());
        assert_eq!(word.groups().unwrap(), vec![Some("def".to_string())]);
    }
}

//! Quantifier combinators.
//!
//! `one_or_more`, `zero_or_more` and `maybe` group their operand, so any
//! fragment can be quantified. The counted forms (`exactly`, `between`,
//! `at_least`, `at_most`) append the count directly, `s{m,n}`; their
//! operand should be a single atom (a character, a class, or a group).

use crate::{Fragment, combinators::wrap};

fn lazy_suffix(
    fragment: Fragment,
    greedy: bool,
) -> Fragment {
    if greedy {
        fragment
    } else {
        Fragment::raw(format!("{fragment}?"))
    }
}

pub(crate) fn one_or_more_greedy<S: Into<Fragment>>(
    s: S,
    greedy: bool,
) -> Fragment {
    lazy_suffix(wrap("(?:", &s.into(), ")+"), greedy)
}

pub(crate) fn zero_or_more_greedy<S: Into<Fragment>>(
    s: S,
    greedy: bool,
) -> Fragment {
    lazy_suffix(wrap("(?:", &s.into(), ")*"), greedy)
}

pub(crate) fn maybe_greedy<S: Into<Fragment>>(
    s: S,
    greedy: bool,
) -> Fragment {
    lazy_suffix(wrap("(?:", &s.into(), ")?"), greedy)
}

pub(crate) fn between_greedy<S: Into<Fragment>>(
    m: Option<usize>,
    n: Option<usize>,
    s: S,
    greedy: bool,
) -> Fragment {
    let m = m.unwrap_or(0);
    let count = match n {
        Some(n) => format!("{{{m},{n}}}"),
        None => format!("{{{m},}}"),
    };
    lazy_suffix(wrap("", &s.into(), &count), greedy)
}

/// One or more, greedy: `(?:s)+`.
pub fn one_or_more<S: Into<Fragment>>(s: S) -> Fragment {
    one_or_more_greedy(s, true)
}

/// One or more, as few as possible: `(?:s)+?`.
pub fn one_or_more_lazy<S: Into<Fragment>>(s: S) -> Fragment {
    one_or_more_greedy(s, false)
}

/// Zero or more, greedy: `(?:s)*`.
pub fn zero_or_more<S: Into<Fragment>>(s: S) -> Fragment {
    zero_or_more_greedy(s, true)
}

/// Zero or more, as few as possible: `(?:s)*?`.
pub fn zero_or_more_lazy<S: Into<Fragment>>(s: S) -> Fragment {
    zero_or_more_greedy(s, false)
}

/// Optional, greedy: `(?:s)?`.
pub fn maybe<S: Into<Fragment>>(s: S) -> Fragment {
    maybe_greedy(s, true)
}

/// Optional, preferring absence: `(?:s)??`.
pub fn maybe_lazy<S: Into<Fragment>>(s: S) -> Fragment {
    maybe_greedy(s, false)
}

/// Exactly `n` times: `s{n}`.
pub fn exactly<S: Into<Fragment>>(
    n: usize,
    s: S,
) -> Fragment {
    wrap("", &s.into(), &format!("{{{n}}}"))
}

/// Between `m` and `n` times, greedy: `s{m,n}`.
///
/// An omitted `m` means 0; an omitted `n` means unbounded.
pub fn between<S, M, N>(
    m: M,
    n: N,
    s: S,
) -> Fragment
where
    S: Into<Fragment>,
    M: Into<Option<usize>>,
    N: Into<Option<usize>>,
{
    between_greedy(m.into(), n.into(), s, true)
}

/// Between `m` and `n` times, as few as possible: `s{m,n}?`.
pub fn between_lazy<S, M, N>(
    m: M,
    n: N,
    s: S,
) -> Fragment
where
    S: Into<Fragment>,
    M: Into<Option<usize>>,
    N: Into<Option<usize>>,
{
    between_greedy(m.into(), n.into(), s, false)
}

/// At least `m` times: `s{m,}`.
pub fn at_least<S: Into<Fragment>>(
    m: usize,
    s: S,
) -> Fragment {
    between_greedy(Some(m), None, s, true)
}

/// At most `n` times: `s{0,n}`.
pub fn at_most<S: Into<Fragment>>(
    n: usize,
    s: S,
) -> Fragment {
    between_greedy(None, Some(n), s, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{any_of, anything, capture, digit, then};

    #[test]
    fn test_rendering() {
        assert_eq!(one_or_more("a").as_str(), "(?:a)+");
        assert_eq!(one_or_more_lazy("a").as_str(), "(?:a)+?");
        assert_eq!(zero_or_more("a").as_str(), "(?:a)*");
        assert_eq!(zero_or_more_lazy("a").as_str(), "(?:a)*?");
        assert_eq!(maybe("a").as_str(), "(?:a)?");
        assert_eq!(maybe_lazy("a").as_str(), "(?:a)??");
        assert_eq!(exactly(2, digit()).as_str(), r"\d{2}");
        assert_eq!(between(1, 3, digit()).as_str(), r"\d{1,3}");
        assert_eq!(between_lazy(1, 3, digit()).as_str(), r"\d{1,3}?");
        assert_eq!(between(None, 3, digit()).as_str(), r"\d{0,3}");
        assert_eq!(between(2, None, digit()).as_str(), r"\d{2,}");
        assert_eq!(at_least(2, digit()).as_str(), r"\d{2,}");
        assert_eq!(at_most(2, digit()).as_str(), r"\d{0,2}");
    }

    #[test]
    fn test_quantifier_is_one_piece() {
        assert_eq!(one_or_more(then("a") + "b").len(), 1);
    }

    #[test]
    fn test_zero_or_more() {
        let f = capture(zero_or_more(any_of("a-z")));
        assert!(f.matches("abc").unwrap());
        assert_eq!(f.groups().unwrap(), vec![Some("abc".to_string())]);
        assert!(f.matches("").unwrap());
        assert_eq!(f.groups().unwrap(), vec![Some(String::new())]);
    }

    #[test]
    fn test_one_or_more() {
        let f = capture(one_or_more(any_of("a-z")));
        assert!(!f.matches("").unwrap());
        assert!(f.matches("a").unwrap());
        assert_eq!(f.groups().unwrap(), vec![Some("a".to_string())]);
    }

    #[test]
    fn test_greediness() {
        let greedy = capture(one_or_more(anything())) + ">";
        assert!(greedy.matches("<a><b>").unwrap());
        assert_eq!(greedy.groups().unwrap(), vec![Some("<a><b".to_string())]);

        let lazy = capture(one_or_more_lazy(anything())) + ">";
        assert!(lazy.matches("<a><b>").unwrap());
        assert_eq!(lazy.groups().unwrap(), vec![Some("<a".to_string())]);
    }

    #[test]
    fn test_counts() {
        let f = capture(between(1, 3, digit()));
        assert!(f.matches("12345").unwrap());
        assert_eq!(f.groups().unwrap(), vec![Some("123".to_string())]);
        assert!(!f.matches("x").unwrap());

        let f = capture(exactly(2, digit()));
        assert!(!f.matches("1").unwrap());
        assert!(f.matches("123").unwrap());
        assert_eq!(f.groups().unwrap(), vec![Some("12".to_string())]);
    }

    #[test]
    fn test_repeated_capture_keeps_last() {
        let name = one_or_more(any_of("a-z"));
        let key = zero_or_more(any_of("a-z"));
        let subexp = capture(&name) + zero_or_more(then("[") + capture(&key) + "]");

        let f = capture(&subexp);
        assert!(f.matches("foo").unwrap());
        assert_eq!(
            f.groups().unwrap(),
            vec![Some("foo".to_string()), Some("foo".to_string()), None]
        );

        assert!(subexp.matches("foo[]").unwrap());
        assert_eq!(
            subexp.groups().unwrap(),
            vec![Some("foo".to_string()), Some(String::new())]
        );

        assert!(subexp.matches("foo[bar]").unwrap());
        assert_eq!(
            subexp.groups().unwrap(),
            vec![Some("foo".to_string()), Some("bar".to_string())]
        );
    }
}

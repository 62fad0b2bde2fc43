//! Grouping combinators: alternation, captures, backreferences,
//! comments and lookaround.

use crate::{
    Fragment,
    combinators::{Capture, wrap},
    errors::{ChiselError, ChiselResult},
};

/// Build an alternation of fragments, mixing fragments and text.
///
/// Text arguments are escaped.
///
/// ```rust
/// use chisel::{either, digit};
///
/// let sign = either!("+", "x", digit());
/// assert_eq!(sign.as_str(), r"(?:\+|x|\d)");
/// ```
#[macro_export]
macro_rules! either {
    ($($e:expr),* $(,)?) => {
        $crate::either([$($crate::Fragment::from($e)),*])
    };
}

fn join_alternatives<I, T>(alts: I) -> Fragment
where
    I: IntoIterator<Item = T>,
    T: Into<Fragment>,
{
    let parts = alts
        .into_iter()
        .map(|alt| alt.into().as_str().to_string())
        .collect::<Vec<_>>();
    Fragment::raw(parts.join("|"))
}

/// Alternation, first alternative wins: `(?:a|b|...)`.
///
/// Order matters: put the longer forms before their prefixes.
pub fn either<I, T>(alts: I) -> Fragment
where
    I: IntoIterator<Item = T>,
    T: Into<Fragment>,
{
    wrap("(?:", &join_alternatives(alts), ")")
}

/// Alternation which is itself the capture group.
///
/// ## Arguments
/// * `alts` - The alternatives.
/// * `capture` - `Capture::None` gives `(?:a|b)`; `Capture::Positional`
///   gives `(a|b)`; `Capture::Named(n)` gives `(?P<n>a|b)`.
///
/// ## Returns
/// The alternation; `InvalidArgument` for a malformed name.
pub fn alternation<I, T, C>(
    alts: I,
    capture: C,
) -> ChiselResult<Fragment>
where
    I: IntoIterator<Item = T>,
    T: Into<Fragment>,
    C: Into<Capture>,
{
    let body = join_alternatives(alts);
    match capture.into() {
        Capture::None => Ok(wrap("(?:", &body, ")")),
        Capture::Positional => Ok(wrap("(", &body, ")")),
        Capture::Named(name) => {
            validate_group_name(&name)?;
            Ok(wrap(&format!("(?P<{name}>"), &body, ")"))
        }
    }
}

/// Positional capture group: `(s)`.
pub fn capture<S: Into<Fragment>>(s: S) -> Fragment {
    wrap("(", &s.into(), ")")
}

/// Named capture group: `(?P<name>s)`.
///
/// ## Returns
/// The group; `InvalidArgument` if `name` is not an identifier.
pub fn capture_as<S: Into<Fragment>>(
    name: &str,
    s: S,
) -> ChiselResult<Fragment> {
    validate_group_name(name)?;
    Ok(wrap(&format!("(?P<{name}>"), &s.into(), ")"))
}

/// Apply a capture request to `s`.
///
/// `Capture::None` returns `s` unchanged.
pub fn capture_with<S, C>(
    s: S,
    capture: C,
) -> ChiselResult<Fragment>
where
    S: Into<Fragment>,
    C: Into<Capture>,
{
    match capture.into() {
        Capture::None => Ok(s.into()),
        Capture::Positional => Ok(self::capture(s)),
        Capture::Named(name) => capture_as(&name, s),
    }
}

/// Backreference to a named group: `(?P=name)`.
///
/// Needs the `fancy_regex` engine.
pub fn backref(name: &str) -> ChiselResult<Fragment> {
    validate_group_name(name)?;
    Ok(Fragment::raw(format!("(?P={name})")))
}

/// Inline comment: `(?#text)`.
///
/// ## Returns
/// The comment; `InvalidArgument` if `text` contains `)`, which would end it.
pub fn comment(text: &str) -> ChiselResult<Fragment> {
    if text.contains(')') {
        return Err(ChiselError::InvalidArgument(format!(
            "comment text may not contain ')': {text:?}"
        )));
    }
    Ok(Fragment::raw(format!("(?#{text})")))
}

/// Positive lookahead: `(?=s)`.
pub fn lookahead<S: Into<Fragment>>(s: S) -> Fragment {
    wrap("(?=", &s.into(), ")")
}

/// Negative lookahead: `(?!s)`.
pub fn neg_lookahead<S: Into<Fragment>>(s: S) -> Fragment {
    wrap("(?!", &s.into(), ")")
}

/// Positive lookbehind: `(?<=s)`.
///
/// The engine only supports fixed-width `s`.
pub fn lookbehind<S: Into<Fragment>>(s: S) -> Fragment {
    wrap("(?<=", &s.into(), ")")
}

/// Negative lookbehind: `(?<!s)`.
///
/// The engine only supports fixed-width `s`.
pub fn neg_lookbehind<S: Into<Fragment>>(s: S) -> Fragment {
    wrap("(?<!", &s.into(), ")")
}

/// Group names must be non-empty identifiers: a letter or `_`, then
/// letters, digits or `_`. Letters and digits may be any Unicode ones.
pub(crate) fn validate_group_name(name: &str) -> ChiselResult<()> {
    let mut chars = name.chars();
    let valid = match chars.next() {
        Some(first) => {
            (first.is_alphabetic() || first == '_')
                && chars.all(|c| c.is_alphanumeric() || c == '_')
        }
        None => false,
    };
    if valid {
        Ok(())
    } else {
        Err(ChiselError::InvalidArgument(format!(
            "invalid group name: {name:?}"
        )))
    }
}

//! Shape Options
//!
//! Call-site capture and repetition for any fragment, so a prebuilt grammar
//! can be captured or repeated without an explicit outer wrap:
//!
//! ```rust
//! use chisel::{ShapeOptions, float};
//!
//! let price = float().shaped(&ShapeOptions::default().with_capture("price")).unwrap();
//! assert!(price.matches("12.50").unwrap());
//! assert_eq!(price.group("price").unwrap(), Some("12.50".to_string()));
//! ```

use crate::{
    Fragment,
    combinators::{
        capture_with,
        repetition::{between_greedy, maybe_greedy, one_or_more_greedy, zero_or_more_greedy},
        wrap,
    },
    errors::{ChiselError, ChiselResult},
    exactly,
};

/// A capture request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Capture {
    /// Do not capture.
    #[default]
    None,

    /// Positional capture: `(s)`.
    Positional,

    /// Named capture: `(?P<name>s)`.
    Named(String),
}

impl From<bool> for Capture {
    fn from(capture: bool) -> Self {
        if capture { Self::Positional } else { Self::None }
    }
}

impl From<&str> for Capture {
    fn from(name: &str) -> Self {
        Self::Named(name.to_string())
    }
}

impl From<String> for Capture {
    fn from(name: String) -> Self {
        Self::Named(name)
    }
}

/// A repetition bound shape.
///
/// * `Times(n)` - exactly `n` times.
/// * `Bounds([0])` - zero or more; `Bounds([1])` - one or more;
///   `Bounds([m])` - at least `m`.
/// * `Bounds([None, 1])` - optional.
/// * `Bounds([m, n])` - between `m` and `n`; either side may be `None`.
///
/// Any other `Bounds` shape is rejected when applied.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Repeat {
    /// An exact count.
    Times(usize),

    /// A one- or two-element bound list.
    Bounds(Vec<Option<usize>>),
}

impl From<usize> for Repeat {
    fn from(n: usize) -> Self {
        Self::Times(n)
    }
}

impl From<[usize; 1]> for Repeat {
    fn from([m]: [usize; 1]) -> Self {
        Self::Bounds(vec![Some(m)])
    }
}

impl From<[usize; 2]> for Repeat {
    fn from([m, n]: [usize; 2]) -> Self {
        Self::Bounds(vec![Some(m), Some(n)])
    }
}

impl From<(Option<usize>, Option<usize>)> for Repeat {
    fn from((m, n): (Option<usize>, Option<usize>)) -> Self {
        Self::Bounds(vec![m, n])
    }
}

impl From<Vec<Option<usize>>> for Repeat {
    fn from(bounds: Vec<Option<usize>>) -> Self {
        Self::Bounds(bounds)
    }
}

fn group<S: Into<Fragment>>(s: S) -> Fragment {
    wrap("(?:", &s.into(), ")")
}

/// Repeat `s` according to a bound shape.
///
/// Unlike the bare counted combinators, every shape here groups `s` first,
/// so a multi-atom fragment repeats as a whole: `integer()` twice is
/// `(?:[+\-]?\d+){2}`, not `[+\-]?\d+{2}`.
///
/// ## Returns
/// The repeated fragment; `InvalidArgument` for a malformed shape,
/// or for `m > n`.
pub fn repeat<S, R>(
    s: S,
    times: R,
    greedy: bool,
) -> ChiselResult<Fragment>
where
    S: Into<Fragment>,
    R: Into<Repeat>,
{
    let bounds = match times.into() {
        Repeat::Times(n) => return Ok(exactly(n, group(s))),
        Repeat::Bounds(bounds) => bounds,
    };
    match bounds.as_slice() {
        [Some(0)] => Ok(zero_or_more_greedy(s, greedy)),
        [Some(1)] => Ok(one_or_more_greedy(s, greedy)),
        [Some(m)] => Ok(between_greedy(Some(*m), None, group(s), greedy)),
        [None, Some(1)] => Ok(maybe_greedy(s, greedy)),
        [Some(m), Some(n)] if m > n => Err(ChiselError::InvalidArgument(format!(
            "lower bound {m} exceeds upper bound {n}"
        ))),
        [m, n] => Ok(between_greedy(*m, *n, group(s), greedy)),
        _ => Err(ChiselError::InvalidArgument(format!(
            "bounds must be an integer, a one-element lower-bound list, \
             or a two-element [m, n] list; got {bounds:?}"
        ))),
    }
}

/// Options for shaping a [`Fragment`] at the call site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeOptions {
    /// The capture request, applied after repetition.
    pub capture: Capture,

    /// The repetition, if any.
    pub times: Option<Repeat>,

    /// Should the repetition be greedy?
    pub greedy: bool,
}

impl Default for ShapeOptions {
    fn default() -> Self {
        Self {
            capture: Capture::None,
            times: None,
            greedy: true,
        }
    }
}

impl ShapeOptions {
    /// Get the configured [`Capture`].
    pub fn capture(&self) -> &Capture {
        &self.capture
    }

    /// Set the configured [`Capture`].
    pub fn set_capture<C>(
        &mut self,
        capture: C,
    ) where
        C: Into<Capture>,
    {
        self.capture = capture.into();
    }

    /// Set the configured [`Capture`] and return the builder.
    pub fn with_capture<C>(
        mut self,
        capture: C,
    ) -> Self
    where
        C: Into<Capture>,
    {
        self.set_capture(capture);
        self
    }

    /// Get the configured [`Repeat`].
    pub fn times(&self) -> Option<&Repeat> {
        self.times.as_ref()
    }

    /// Set the configured [`Repeat`].
    pub fn set_times<R>(
        &mut self,
        times: R,
    ) where
        R: Into<Repeat>,
    {
        self.times = Some(times.into());
    }

    /// Set the configured [`Repeat`] and return the builder.
    pub fn with_times<R>(
        mut self,
        times: R,
    ) -> Self
    where
        R: Into<Repeat>,
    {
        self.set_times(times);
        self
    }

    /// Is the repetition greedy?
    pub fn greedy(&self) -> bool {
        self.greedy
    }

    /// Set whether the repetition is greedy.
    pub fn set_greedy(
        &mut self,
        greedy: bool,
    ) {
        self.greedy = greedy;
    }

    /// Set whether the repetition is greedy and return the builder.
    pub fn with_greedy(
        mut self,
        greedy: bool,
    ) -> Self {
        self.set_greedy(greedy);
        self
    }
}

impl Fragment {
    /// Repeat, then capture, this fragment according to `options`.
    ///
    /// ## Returns
    /// A new fragment; `InvalidArgument` for a malformed bound shape
    /// or capture name.
    pub fn shaped(
        &self,
        options: &ShapeOptions,
    ) -> ChiselResult<Fragment> {
        let repeated = match &options.times {
            Some(times) => repeat(self, times.clone(), options.greedy)?,
            None => self.clone(),
        };
        capture_with(repeated, options.capture.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{anything, digit, integer, then};

    #[test]
    fn test_repeat_shapes() {
        assert_eq!(repeat(digit(), 4usize, true).unwrap().as_str(), r"(?:\d){4}");
        assert_eq!(repeat(digit(), [0], true).unwrap().as_str(), r"(?:\d)*");
        assert_eq!(repeat(digit(), [1], true).unwrap().as_str(), r"(?:\d)+");
        assert_eq!(repeat(digit(), [1], false).unwrap().as_str(), r"(?:\d)+?");
        assert_eq!(repeat(digit(), [3], true).unwrap().as_str(), r"(?:\d){3,}");
        assert_eq!(repeat(digit(), [2, 5], true).unwrap().as_str(), r"(?:\d){2,5}");
        assert_eq!(
            repeat(digit(), (None, Some(1)), true).unwrap().as_str(),
            r"(?:\d)?"
        );
        assert_eq!(
            repeat(digit(), (Some(2), None), true).unwrap().as_str(),
            r"(?:\d){2,}"
        );
    }

    #[test]
    fn test_repeat_counts_whole_fragment() {
        let twice = ShapeOptions::default().with_times(2usize).with_capture(true);

        let f = integer().shaped(&twice).unwrap();
        assert!(f.matches("1-2").unwrap());
        assert_eq!(f.groups().unwrap(), vec![Some("1-2".to_string())]);

        let f = then("ab").shaped(&twice).unwrap();
        assert!(f.matches("abab").unwrap());
        assert_eq!(f.groups().unwrap(), vec![Some("abab".to_string())]);
        assert!(!f.matches("abb").unwrap());

        let f = then("ab")
            .shaped(&ShapeOptions::default().with_times([2, 3]).with_capture(true))
            .unwrap();
        assert!(f.matches("abababab").unwrap());
        assert_eq!(f.groups().unwrap(), vec![Some("ababab".to_string())]);

        let f = then("ab")
            .shaped(&ShapeOptions::default().with_times([2]).with_capture(true))
            .unwrap();
        assert!(!f.matches("ab").unwrap());
        assert!(f.matches("ababab").unwrap());
        assert_eq!(f.groups().unwrap(), vec![Some("ababab".to_string())]);
    }

    #[test]
    fn test_repeat_rejects_malformed_shapes() {
        let shapes: [Vec<Option<usize>>; 3] = [vec![], vec![None], vec![Some(1), Some(2), Some(3)]];
        for bad in shapes {
            assert!(matches!(
                repeat(digit(), bad, true),
                Err(ChiselError::InvalidArgument(_))
            ));
        }
        assert!(matches!(
            repeat(digit(), [5, 2], true),
            Err(ChiselError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_capture_from() {
        assert_eq!(Capture::from(false), Capture::None);
        assert_eq!(Capture::from(true), Capture::Positional);
        assert_eq!(Capture::from("x"), Capture::Named("x".to_string()));
    }

    #[test]
    fn test_options_builder() {
        let options = ShapeOptions::default()
            .with_capture(true)
            .with_times([1])
            .with_greedy(false);
        assert_eq!(options.capture(), &Capture::Positional);
        assert_eq!(options.times(), Some(&Repeat::Bounds(vec![Some(1)])));
        assert!(!options.greedy());

        let f = anything().shaped(&options).unwrap();
        assert_eq!(f.as_str(), "((?:.)+?)");
    }

    #[test]
    fn test_shaped_default_is_identity() {
        let f = digit();
        assert_eq!(f.shaped(&ShapeOptions::default()).unwrap(), f);
    }

    #[test]
    fn test_shaped_named() {
        let f = digit()
            .shaped(&ShapeOptions::default().with_times(2usize).with_capture("dd"))
            .unwrap();
        assert!(f.matches("42").unwrap());
        assert_eq!(f.group("dd").unwrap(), Some("42".to_string()));

        assert!(digit()
            .shaped(&ShapeOptions::default().with_capture("9x"))
            .is_err());
    }
}

//! # Combinators
//!
//! Pure functions from fragments (or text, which is escaped) to new fragments.
//!
//! Every combinator emits its result as a *single* piece: the complete
//! wrapped syntax of the operand. Piece boundaries are therefore syntax
//! boundaries, which is what [`Fragment::debug`] relies on when it compiles
//! growing prefixes.

mod classes;
mod groups;
mod repetition;
mod shape_options;

#[doc(inline)]
pub use classes::*;
#[doc(inline)]
pub use groups::*;
#[doc(inline)]
pub use repetition::{
    at_least,
    at_most,
    between,
    between_lazy,
    exactly,
    maybe,
    maybe_lazy,
    one_or_more,
    one_or_more_lazy,
    zero_or_more,
    zero_or_more_lazy,
};
#[doc(inline)]
pub use shape_options::*;

use crate::Fragment;

/// The common shape of most combinators: `left`, `middle`, `right` as one raw piece.
pub(crate) fn wrap(
    left: &str,
    middle: &Fragment,
    right: &str,
) -> Fragment {
    Fragment::raw(format!("{left}{middle}{right}"))
}

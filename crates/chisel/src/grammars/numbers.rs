//! Number grammars.
//!
//! None of these check values; `integer()` happily matches `-0000`.

use crate::{Fragment, any_of, either, maybe, one_or_more, then};

/// One decimal digit: `\d`.
pub fn digit() -> Fragment {
    Fragment::raw(r"\d")
}

/// Alias of [`digit`]; reads better as a quantifier operand.
pub fn digits() -> Fragment {
    digit()
}

/// An optional-free sign: `+` or `-`.
pub fn sign() -> Fragment {
    any_of(r"+\-")
}

/// One or more digits.
pub fn uint() -> Fragment {
    one_or_more(digit())
}

/// An optionally signed [`uint`].
pub fn integer() -> Fragment {
    maybe(sign()) + uint()
}

/// An exponent suffix: `e` or `E`, optional sign, digits.
pub fn exponent() -> Fragment {
    any_of("Ee") + maybe(sign()) + one_or_more(digit())
}

/// A decimal number, with an optional exponent.
///
/// Accepts `1.5`, `-.5`, `1.`, `1`, `1.5e-3`. The alternatives are ordered
/// longest-form first; the alternation takes the first alternative which
/// matches, so `1942.5` is taken whole rather than stopping at `1942`.
pub fn float() -> Fragment {
    let mantissa = either([
        maybe(sign()) + maybe(one_or_more(digit())) + then(".") + one_or_more(digit()),
        integer() + then("."),
        integer(),
    ]);
    mantissa + maybe(exponent())
}

/// One or more hexadecimal digits, either case.
pub fn hexadecimal() -> Fragment {
    one_or_more(any_of("0-9A-Fa-f"))
}

/// Alias of [`hexadecimal`].
pub fn hex() -> Fragment {
    hexadecimal()
}

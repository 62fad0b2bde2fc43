//! strptime-style date/time grammar.
//!
//! Numeric directives become fixed-width digit runs. Textual directives
//! (weekday and month names, AM/PM) become a lazy run of any characters;
//! there is no locale table. No values are checked: `%H` accepts `99`.

use crate::{
    Fragment,
    anything,
    digit,
    either,
    errors::{ChiselError, ChiselResult},
    exactly,
    one_or_more_lazy,
    then,
};

/// The format used by `ctime()` style timestamps: `Fri Apr 28 13:34:19 2017`.
pub const DEFAULT_DATETIME_FORMAT: &str = "%a %b %d %H:%M:%S %Y";

fn directive_pattern(
    directive: char,
    buggy_day: bool,
) -> ChiselResult<Fragment> {
    Ok(match directive {
        'a' | 'A' | 'b' | 'B' | 'p' => one_or_more_lazy(anything()),
        // syslog renders days below 10 as a space and one digit: "Apr  7".
        'd' if buggy_day => either([" " + digit(), exactly(2, digit())]),
        'd' | 'H' | 'I' | 'm' | 'M' | 'S' | 'U' | 'W' | 'y' => exactly(2, digit()),
        'j' => exactly(3, digit()),
        'w' => digit(),
        'Y' => exactly(4, digit()),
        'z' => either(["+", "-"]) + exactly(4, digit()),
        '%' => then("%"),
        other => {
            return Err(ChiselError::UnsupportedFormat {
                directive: format!("%{other}"),
            });
        }
    })
}

/// Build a grammar for timestamps rendered with a strftime `format`.
///
/// Supported directives: `%a %A %b %B %d %H %I %j %m %M %p %S %U %w %W %y %Y %z %%`.
/// Text between directives matches verbatim.
///
/// ## Arguments
/// * `format` - The strftime format, e.g. [`DEFAULT_DATETIME_FORMAT`].
/// * `buggy_day` - Also accept `%d` rendered as a space and one digit.
///
/// ## Returns
/// The grammar; `UnsupportedFormat` for any other directive
/// (including the locale composites `%c`, `%x`, `%X`) or a dangling `%`.
pub fn datetime(
    format: &str,
    buggy_day: bool,
) -> ChiselResult<Fragment> {
    let mut result = Fragment::default();
    let mut text = String::new();

    let mut chars = format.chars();
    while let Some(c) = chars.next() {
        if c != '%' {
            text.push(c);
            continue;
        }
        let Some(directive) = chars.next() else {
            return Err(ChiselError::UnsupportedFormat {
                directive: "%".to_string(),
            });
        };
        if !text.is_empty() {
            result += core::mem::take(&mut text);
        }
        result += directive_pattern(directive, buggy_day)?;
    }
    if !text.is_empty() {
        result += text;
    }

    Ok(result)
}

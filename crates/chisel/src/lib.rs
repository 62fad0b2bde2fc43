//! # `chisel` Regex Builder
//!
//! Build regular expressions from small, named, reusable pieces instead of
//! writing one long pattern string.
//!
//! See:
//! * [`fragment`] for the [`Fragment`] value, `+`, and matching.
//! * [`combinators`] for quantifiers, groups, alternation, and lookaround.
//! * [`grammars`] for prebuilt numbers, timestamps, and addresses.
//! * [`regex`] for the engine wrappers and [`MatchRecord`].
//!
//! ## Crate Features
//!
//! #### feature: ``default``
//!
//! * ``std``
//!
//! #### feature: ``std``
//!
//! The "std" feature enables the default feature sets of the regex engines,
//! which both currently require the `std` library.
//!
//! #### feature: ``tracing``
//!
//! This enables ``tracing`` instrumentation points around compilation,
//! matching, and [`Fragment::debug`].
//!
//! ## Engines
//!
//! Patterns are compiled with the `regex` crate when they fit its syntax,
//! and with `fancy-regex` otherwise; backreferences and lookaround need the
//! latter. Both accept the same `(?P<name>...)` group syntax.
//!
//! ## Parsing a Log Line
//!
//! ```rust
//! use chisel::{DebugReport, capture, datetime, ip_port};
//!
//! let stamp = datetime("%b %d %H:%M:%S", false).unwrap();
//! let line = "[" + capture(stamp) + "] <--- Transmitting to " + capture(ip_port());
//!
//! assert!(line.matches("[Apr 27 06:25:21] <--- Transmitting to 10.0.0.1:5060").unwrap());
//! assert_eq!(
//!     line.groups().unwrap(),
//!     vec![
//!         Some("Apr 27 06:25:21".to_string()),
//!         Some("10.0.0.1:5060".to_string()),
//!     ]
//! );
//!
//! // When a line doesn't match, find where it stops matching:
//! let report = line.debug("[Apr 27 06:25:21] <--- Receiving").unwrap();
//! assert!(matches!(report, DebugReport::Diverged { index: 2, .. }));
//! ```
#![warn(missing_docs, unused)]

pub mod combinators;
pub mod errors;
pub mod fragment;
pub mod grammars;
pub mod regex;

#[doc(inline)]
pub use crate::combinators::*;
#[doc(inline)]
pub use crate::errors::{ChiselError, ChiselResult};
#[doc(inline)]
pub use crate::fragment::{DebugReport, Fragment, concat};
#[doc(inline)]
pub use crate::grammars::*;
#[doc(inline)]
pub use crate::regex::{GroupKey, MatchRecord};

//! # Grammars
//!
//! Prebuilt fragments for tokens which show up in logs and reports:
//! numbers, timestamps, and network addresses.
//!
//! These are ordinary [`Fragment`](crate::Fragment)s; wrap them in
//! [`capture`](crate::capture) or [`Fragment::shaped`](crate::Fragment::shaped)
//! to pull values out.

mod datetime;
mod network;
mod numbers;

#[doc(inline)]
pub use datetime::*;
#[doc(inline)]
pub use network::*;
#[doc(inline)]
pub use numbers::*;

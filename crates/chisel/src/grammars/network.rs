//! Network address grammars.
//!
//! Shapes only: `999.1.1.1` is an IPv4 address here, and ports are not range checked.

use crate::{Fragment, between, digit, either, integer};

/// Four dot-separated runs of one to three digits.
pub fn ipv4() -> Fragment {
    let octet = || between(1, 3, digit());
    octet() + "." + octet() + "." + octet() + "." + octet()
}

/// Any IP address; currently only [`ipv4`].
pub fn ip_number() -> Fragment {
    either([ipv4()])
}

/// An [`ip_number`], a colon, and a port number.
pub fn ip_port() -> Fragment {
    ip_number() + ":" + integer()
}

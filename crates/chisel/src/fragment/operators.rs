//! Conversions and `+` for [`Fragment`].
//!
//! Only fragments and text convert into fragments; text is always escaped.

use core::ops::{Add, AddAssign};

use crate::Fragment;

impl From<&str> for Fragment {
    fn from(text: &str) -> Self {
        Fragment::literal(text)
    }
}

impl From<String> for Fragment {
    fn from(text: String) -> Self {
        Fragment::literal(&text)
    }
}

impl From<&String> for Fragment {
    fn from(text: &String) -> Self {
        Fragment::literal(text)
    }
}

impl From<char> for Fragment {
    fn from(c: char) -> Self {
        Fragment::literal(c.encode_utf8(&mut [0; 4]))
    }
}

impl From<&Fragment> for Fragment {
    fn from(fragment: &Fragment) -> Self {
        fragment.clone()
    }
}

impl<T: Into<Fragment>> Add<T> for Fragment {
    type Output = Fragment;

    fn add(
        self,
        rhs: T,
    ) -> Fragment {
        self.concat(rhs)
    }
}

impl<T: Into<Fragment>> Add<T> for &Fragment {
    type Output = Fragment;

    fn add(
        self,
        rhs: T,
    ) -> Fragment {
        self.concat(rhs)
    }
}

impl Add<Fragment> for &str {
    type Output = Fragment;

    fn add(
        self,
        rhs: Fragment,
    ) -> Fragment {
        Fragment::literal(self).concat(rhs)
    }
}

impl Add<&Fragment> for &str {
    type Output = Fragment;

    fn add(
        self,
        rhs: &Fragment,
    ) -> Fragment {
        Fragment::literal(self).concat(rhs)
    }
}

impl<T: Into<Fragment>> AddAssign<T> for Fragment {
    /// Replaces `self` with the concatenation; the caches start empty.
    fn add_assign(
        &mut self,
        rhs: T,
    ) {
        *self = self.concat(rhs);
    }
}

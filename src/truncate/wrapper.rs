use std::fmt::{self, Write};

use super::limit::Limit;
use super::text::cut;

/// Formats the `Debug` representation of a value, truncated, only when it
/// is actually printed.
///
/// Useful as a `tracing` field:
///
/// ```
/// use reprtrunc::trunc;
///
/// let payload = vec![0u8; 4096];
/// tracing::debug!(payload = %trunc(&payload), "received");
/// ```
pub struct Truncated<'a, T: ?Sized> {
    value: &'a T,
    limit: Limit,
}

/// Wrap a value for truncated formatting at the default limit
pub fn trunc<T: fmt::Debug + ?Sized>(value: &T) -> Truncated<'_, T> {
    Truncated {
        value,
        limit: Limit::default(),
    }
}

pub fn trunc_with<T: fmt::Debug + ?Sized>(value: &T, limit: impl Into<Limit>) -> Truncated<'_, T> {
    Truncated {
        value,
        limit: limit.into(),
    }
}

impl<T: fmt::Debug + ?Sized> fmt::Display for Truncated<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut full = String::new();
        write!(full, "{:?}", self.value)?;
        f.pad(&cut(&full, self.limit).0)
    }
}

impl<T: fmt::Debug + ?Sized> fmt::Debug for Truncated<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

mod limit;
mod text;
mod truncator;
mod wrapper;

use std::fmt;

pub use limit::{DEFAULT_LIMIT, GRACE_MARGIN, Limit};
pub use text::{ELLIPSIS, truncate_text};
pub use truncator::{TruncateOutcome, Truncator};
pub use wrapper::{Truncated, trunc, trunc_with};

use crate::error::Result;

/// `Debug` representation of `value`, shortened if it reaches
/// `DEFAULT_LIMIT + GRACE_MARGIN` chars
pub fn trunc_repr<T: fmt::Debug + ?Sized>(value: &T) -> Result<String> {
    trunc_repr_with(value, DEFAULT_LIMIT)
}

pub fn trunc_repr_with<T: fmt::Debug + ?Sized>(value: &T, limit: usize) -> Result<String> {
    Truncator::new().with_limit(limit).debug(value)
}

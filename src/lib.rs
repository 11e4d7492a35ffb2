//! Length-bounded representations of arbitrary values.
//!
//! A value's `Debug` text is returned unchanged while it is shorter than
//! `limit + 20` characters. At or past that point only the first and last
//! `limit / 2` characters are kept, joined by `"..."`.
//!
//! ```
//! assert_eq!(reprtrunc::trunc_repr("hello").unwrap(), "\"hello\"");
//!
//! let long = "x".repeat(50);
//! assert_eq!(reprtrunc::trunc_repr_with(&long, 10).unwrap(), "\"xxxx...xxxx\"");
//! ```

pub mod cli;
pub mod error;
pub mod input;
pub mod output;
pub mod repr;
pub mod truncate;

pub use error::{Error, Result};
pub use repr::ReprStyle;
pub use truncate::{
    DEFAULT_LIMIT, ELLIPSIS, GRACE_MARGIN, Limit, TruncateOutcome, Truncated, Truncator, trunc,
    trunc_repr, trunc_repr_with, trunc_with, truncate_text,
};

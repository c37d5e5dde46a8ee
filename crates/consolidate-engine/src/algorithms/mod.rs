//! Grouped-reduce algorithms: predicate scan, cached-key scan, hashed index.
//!
//! All three are fallible over the caller's error type `E`. Infallible callers
//! instantiate `E = Infallible` and unwrap through [`infallible`].

pub mod indexed;
pub mod scan;
mod slots;

use std::convert::Infallible;

pub use indexed::try_fold_hashed;
pub use scan::{try_fold_by_key, try_fold_by_predicate};

/// Strip an `Infallible` error.
pub fn infallible<T>(result: Result<T, Infallible>) -> T {
    match result {
        Ok(value) => value,
        Err(never) => match never {},
    }
}

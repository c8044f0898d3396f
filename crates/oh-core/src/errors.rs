//! Error types for openinghours-rs.
//!
//! Every fallible operation in the workspace returns the single
//! `thiserror`-derived [`Error`] below. Configuration problems (bad weekday
//! names, unparseable `HH:MM` strings, invalid `MM-DD` pairs, empty slot
//! lists) surface as [`Error::Config`] while the schedule is being loaded;
//! evaluation itself only produces [`Error::Date`] when date arithmetic
//! leaves the supported range.

use thiserror::Error;

/// The top-level error type used throughout openinghours-rs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid schedule configuration, reported at load time (maps to
    /// `ensure!`).
    #[error("configuration error: {0}")]
    Config(String),

    /// Date-related error.
    #[error("date error: {0}")]
    Date(String),

    /// Time-of-day parse or range error.
    #[error("time error: {0}")]
    Time(String),
}

/// Shorthand `Result` type used throughout openinghours-rs.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Check a configuration invariant, returning `Err(Error::Config(...))` if
/// it does not hold.
///
/// # Example
/// ```
/// use oh_core::{ensure, errors::Error};
/// fn non_empty(slots: &[(u8, u8)]) -> oh_core::errors::Result<()> {
///     ensure!(!slots.is_empty(), "day has an empty slot list");
///     Ok(())
/// }
/// assert!(non_empty(&[(9, 17)]).is_ok());
/// assert!(non_empty(&[]).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Config(
                format!($($msg)*)
            ));
        }
    };
}

//! Error types for the gazette workspace.
//!
//! Every failure in the workspace is a value of the single `thiserror`-derived
//! enum below. Computations are deterministic and side-effect-free, so errors
//! are raised immediately and left to the caller; nothing here retries or
//! degrades.

use thiserror::Error;

/// The top-level error type used throughout the gazette crates.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// General runtime error.
    #[error("{0}")]
    Runtime(String),

    /// A caller-contract violation (maps to the `ensure!` macro).
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// Date-related error: out-of-range construction or arithmetic.
    #[error("date error: {0}")]
    Date(String),

    /// The date is not admissible as a holiday designation: Saturday, Sunday,
    /// the null date, or a fixed no-publication date.
    #[error("invalid holiday date: {0}")]
    InvalidHolidayDate(String),

    /// A holiday was given an empty or blank description.
    #[error("invalid holiday description: {0}")]
    InvalidDescription(String),

    /// Invalid argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Shorthand `Result` type used throughout the gazette crates.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Check a caller-supplied precondition.
///
/// Returns `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use gz_core::ensure;
/// fn issues(count: i32) -> gz_core::errors::Result<i32> {
///     ensure!(count > 0, "issue count must be positive, got {count}");
///     Ok(count)
/// }
/// assert!(issues(1).is_ok());
/// assert!(issues(-1).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

/// Fail immediately with a runtime error.
///
/// # Example
/// ```
/// use gz_core::fail;
/// fn always_err() -> gz_core::errors::Result<()> {
///     fail!("something went wrong");
/// }
/// assert!(always_err().is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Runtime(format!($($msg)*)))
    };
}

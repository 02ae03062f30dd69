//! Error types for the month-end workspace.
//!
//! Every fallible constructor in the date and holiday layers reports a
//! variant of the single `thiserror`-derived [`Error`] enum. Queries against
//! a calendar never fail; only building the values they work on can.

use thiserror::Error;

/// The top-level error type used by the date and calendar crates.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Precondition violated (raised by [`ensure!`](crate::ensure)).
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// Date outside the supported range or otherwise invalid.
    #[error("date error: {0}")]
    Date(String),

    /// Text that could not be parsed into the requested value.
    #[error("cannot parse {input:?}: {reason}")]
    Parse {
        /// The offending input.
        input: String,
        /// Why it was rejected.
        reason: String,
    },
}

impl Error {
    /// Build a [`Error::Parse`] from any displayable reason.
    pub fn parse(input: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        Error::Parse {
            input: input.into(),
            reason: reason.to_string(),
        }
    }
}

/// Shorthand `Result` type used throughout the workspace.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return early with `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use eom_core::{ensure, errors::Error};
/// fn positive(x: i32) -> eom_core::errors::Result<i32> {
///     ensure!(x > 0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1).is_ok());
/// assert_eq!(
///     positive(-1),
///     Err(Error::Precondition("x must be positive, got -1".into()))
/// );
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

//! Error types for logger construction.

use thiserror::Error;

/// Errors surfaced when building a [`Logger`](crate::Logger).
///
/// An unknown formatter name signals a defect in the calling code rather
/// than bad user input: the only legal names are the two this crate
/// defines. Unknown severity names are never errors anywhere; they fall
/// back to `Info`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    /// Formatter name outside the `text`/`json` table.
    #[error("unknown formatter {0:?}, expected \"text\" or \"json\"")]
    UnknownFormatter(String),
}

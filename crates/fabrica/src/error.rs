//! Error taxonomy for the construction API.
//!
//! All builder failures are synchronous values local to the call chain.
//! A failed chain is not recoverable mid-flight: the caller discards the
//! builder and starts over.

#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

use thiserror::Error;

/// Errors that can occur while staging or freezing an entity.
///
/// Reuse after build has no variant here: the terminal build method
/// consumes the builder by value, so a second build or a chain call on a
/// spent builder is rejected by the compiler rather than at runtime.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BuildError {
    /// Required field not set when the terminal build ran.
    #[error("missing required field: {field}")]
    MissingRequired {
        /// Name of the field that was never staged.
        field: &'static str,
    },

    /// Invalid value rejected eagerly by a chain method, before it could
    /// enter staging state.
    #[error("invalid value for field '{field}': {reason}")]
    InvalidValue {
        /// Name of the field the value was destined for.
        field: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
}

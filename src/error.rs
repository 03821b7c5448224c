//! Error types for the structures crate
//!
//! Provides unified error handling using thiserror. Expected outcomes such as
//! cache misses, unreachable targets and cyclic graphs are `Option`s, not errors.

use thiserror::Error;

// == Error Enum ==
/// Unified error type for the crate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A shortest-path algorithm found a negative edge weight
    #[error("Invalid weight {weight} on edge {from} -> {to}: shortest paths require non-negative weights")]
    InvalidWeight {
        /// Edge source, formatted with `Debug`
        from: String,
        /// Edge destination, formatted with `Debug`
        to: String,
        /// Offending weight, formatted with `Debug`
        weight: String,
    },

    /// An environment variable held a value that could not be parsed
    #[error("Invalid configuration: {var}={value:?}")]
    InvalidConfig {
        /// Variable name
        var: String,
        /// Raw value found in the environment
        value: String,
    },
}

// == Result Type Alias ==
/// Convenience Result type for the crate.
pub type Result<T> = std::result::Result<T, Error>;

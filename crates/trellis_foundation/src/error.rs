//! Error types for the Trellis system.
//!
//! Uses `thiserror` for ergonomic error definition. Every error here is a
//! contract violation by the caller; the protocol never catches its own
//! errors internally.

use thiserror::Error;

/// Convenience result type for Trellis operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for Trellis operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Creates a composition-time error for a capability without a typeguard.
    #[must_use]
    pub fn missing_typeguard(capability: &'static str) -> Self {
        Self::new(ErrorKind::MissingTypeguard { capability })
    }

    /// Creates a navigation error for a path absent from the current state.
    #[must_use]
    pub fn invalid_state(path: impl ToString) -> Self {
        Self::new(ErrorKind::InvalidState {
            path: path.to_string(),
        })
    }

    /// Creates a shape error for a deep set against a scalar state.
    #[must_use]
    pub fn scalar_state(kind: &'static str) -> Self {
        Self::new(ErrorKind::ScalarState { kind })
    }

    /// Creates a cycle error for a state tree that references itself.
    #[must_use]
    pub fn cyclic_state() -> Self {
        Self::new(ErrorKind::CyclicState)
    }

    /// Creates a type mismatch error for a field update of the wrong shape.
    #[must_use]
    pub fn type_mismatch(expected: &'static str, actual: &'static str) -> Self {
        Self::new(ErrorKind::TypeMismatch { expected, actual })
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A capability was composed without a runtime typeguard.
    ///
    /// This is a programmer error surfaced at composition time, never at
    /// use time.
    #[error("capability `{capability}` has not implemented a required typeguard")]
    MissingTypeguard {
        /// The name of the offending capability.
        capability: &'static str,
    },

    /// A path does not exist in the current state tree.
    #[error("Invalid state at path: {path}")]
    InvalidState {
        /// Rendered form of the offending path.
        path: String,
    },

    /// A deep, path-addressed set was attempted against a scalar state.
    ///
    /// Scalar states only support whole-value replacement at the root.
    #[error("cannot deep-set a scalar state (kind `{kind}`)")]
    ScalarState {
        /// The state kind that was the target of the deep set.
        kind: &'static str,
    },

    /// A recursive walk revisited a node already on the current path.
    #[error("state tree contains a reference cycle")]
    CyclicState,

    /// A field update carried a value of the wrong shape.
    #[error("type mismatch: expected {expected}, got {actual}")]
    TypeMismatch {
        /// The expected state kind.
        expected: &'static str,
        /// The actual state kind encountered.
        actual: &'static str,
    },
}

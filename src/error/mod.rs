//! Error handling for the mode-of-operation layer
//!
//! Every failure is reported synchronously to the caller; nothing in this
//! layer retries or recovers. Zero-length input to an engine operation is a
//! benign no-op (`Ok` with empty output), never an error. A schedule/state
//! pair stays valid for further calls after a rejected operation.

use core::fmt;

/// The error type for mode-of-operation and padding operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Unsupported key size or malformed key material
    KeyMaterial {
        /// Reason why the key material was rejected
        reason: &'static str,
    },

    /// Malformed initialization vector
    CipherInstance {
        /// Reason why the cipher instance could not be initialized
        reason: &'static str,
    },

    /// Operation invoked with an incompatible direction/mode combination
    CipherState {
        /// Operation that was rejected
        operation: &'static str,
        /// What the operation requires
        details: &'static str,
    },

    /// Ciphertext not block-aligned, or padding verification failure
    Data {
        /// Reason why the data was rejected
        reason: &'static str,
    },
}

/// Result type for mode-of-operation and padding operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::KeyMaterial { reason } => {
                write!(f, "Invalid key material: {}", reason)
            }
            Error::CipherInstance { reason } => {
                write!(f, "Invalid cipher instance: {}", reason)
            }
            Error::CipherState { operation, details } => {
                write!(f, "Invalid cipher state for {}: {}", operation, details)
            }
            Error::Data { reason } => {
                write!(f, "Invalid data: {}", reason)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

// Include the validation submodule
pub mod validate;

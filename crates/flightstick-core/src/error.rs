//! Error types for flightstick operations.
//!
//! One centralized enum via `thiserror`. The only failure condition in the
//! system is asking the registry for a device name it does not know; queries
//! and the polling loop itself are infallible.

use thiserror::Error;

/// The main error type for flightstick operations.
#[derive(Error, Debug)]
pub enum FlightstickError {
    /// Requested device name is not in the registry.
    #[error("unknown input device '{name}' (expected one of: keyboard, gamecontroller, null)")]
    UnknownDevice { name: String },
}

/// Standard Result type for flightstick operations.
pub type Result<T> = std::result::Result<T, FlightstickError>;

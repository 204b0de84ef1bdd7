use std::fmt::Debug;
use thiserror::Error;

/// Enum with all errors in this crate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MapError {
    /// A checked lookup was made for a point that has no entry in the map.
    #[error("Key not found: {0}")]
    KeyNotFound(String),

    /// An argument could not be used, e.g. a vote over zero neighbours or a
    /// coordinate slice of the wrong length.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result type used throughout this crate.
pub type Result<T> = std::result::Result<T, MapError>;

//! Error type for parsing shared types.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypesError {
    #[error("unknown network name: {0}")]
    UnknownNetwork(String),

    #[error("unknown balance bucket: {0}")]
    UnknownBucket(String),
}

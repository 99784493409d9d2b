//! Error types for fixture generation.
//!
//! ## Authors
//!
//! The Veracruz Development Team.
//!
//! ## Licensing and copyright notice
//!
//! See the `LICENSE_MIT.markdown` file in the Veracruz root directory for
//! information on licensing and copyright.

use std::{io, path::PathBuf};
use thiserror::Error;

/// A generic catch-all error type for fixture generation and serialization.
#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    /// More distinct strings were requested than `52^item_byte_count` allows.
    #[error(
        "cannot generate {requested} distinct {what} of length {item_byte_count}: only {available} are available"
    )]
    CapacityExceeded {
        what: &'static str,
        requested: u64,
        available: u64,
        item_byte_count: usize,
    },
    #[error("I/O error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("CSV error on {path:?}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("malformed record at line {line} of {path:?}: {reason}")]
    MalformedRecord {
        path: PathBuf,
        line: u64,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, FixtureError>;

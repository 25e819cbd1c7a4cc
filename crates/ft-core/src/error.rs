//! Framework error type.
//!
//! Sub-crates may define their own error enums and convert them into
//! `FtError` via `From` impls, or keep them separate and wrap `FtError` as
//! one variant.  Both patterns are acceptable; prefer whichever keeps error
//! sites clean.

use thiserror::Error;

use crate::TargetId;

/// The top-level error type for `ft-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum FtError {
    #[error("target {0} not found")]
    TargetNotFound(TargetId),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `ft-*` crates.
pub type FtResult<T> = Result<T, FtError>;

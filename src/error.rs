//! Error types for payload recovery.

use thiserror::Error;

/// Errors a recovery run can fail with.
///
/// Per-fragment conditions are not errors: a fragment that carries no key is
/// skipped, and a decoded candidate the plausibility filter rejects is
/// dropped silently. Only the conditions below terminate a run.
#[derive(Error, Debug)]
pub enum Error {
    /// No fragment on the page yielded a decode key.
    #[error("no decode key found in any candidate fragment")]
    KeyNotFound,

    /// An explicitly supplied key override was empty.
    #[error("decode key must not be empty")]
    EmptyKey,

    /// A user-supplied element selector failed to parse.
    #[error("invalid element selector: {0}")]
    InvalidSelector(String),

    /// IO error reading the target page.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for recovery operations.
pub type Result<T> = std::result::Result<T, Error>;

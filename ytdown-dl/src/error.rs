//! Error types for ytdown-dl.

use pyo3::PyErr;
use thiserror::Error;

/// Engine error variants.
#[derive(Debug, Error)]
pub enum Error {
    /// Exception raised by yt-dlp or the embedded interpreter
    #[error(transparent)]
    Python(#[from] PyErr),

    /// Local filesystem failure around the engine call, e.g. preparing the output directory
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Best-effort classification from the engine message.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Python(e) => ErrorKind::from_message(&e.to_string()),
            Error::Io(_) => ErrorKind::Filesystem,
        }
    }
}

/// Coarse failure categories, used for diagnostics only.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Host unreachable, DNS failure, timeout
    Network,
    /// Malformed, removed, private, or region-restricted content
    Unavailable,
    /// Requested format or quality does not exist for this content
    Format,
    /// Output directory or file could not be written
    Filesystem,
    /// `yt_dlp` is not importable from the embedded interpreter
    EngineMissing,
    Other,
}

const ENGINE_MISSING_PATTERNS: &[&str] = &["no module named 'yt_dlp'"];

const FORMAT_PATTERNS: &[&str] = &[
    "requested format is not available",
    "invalid format specification",
];

const NETWORK_PATTERNS: &[&str] = &[
    "unable to download webpage",
    "urlopen error",
    "timed out",
    "timeout",
    "connection refused",
    "connection reset",
    "name or service not known",
    "temporary failure in name resolution",
    "network is unreachable",
];

const UNAVAILABLE_PATTERNS: &[&str] = &[
    "unsupported url",
    "is not a valid url",
    "video unavailable",
    "private video",
    "has been removed",
    "not available in your country",
    "sign in to confirm",
    "http error 404",
    "http error 403",
];

const FILESYSTEM_PATTERNS: &[&str] = &[
    "permission denied",
    "no space left on device",
    "read-only file system",
    "unable to create directory",
    "unable to open for writing",
];

impl ErrorKind {
    /// Classify a yt-dlp error message. Checked in order, first match wins.
    pub fn from_message(message: &str) -> Self {
        let message = message.to_lowercase();
        let matches = |patterns: &[&str]| patterns.iter().any(|p| message.contains(p));

        if matches(ENGINE_MISSING_PATTERNS) {
            Self::EngineMissing
        } else if matches(FORMAT_PATTERNS) {
            Self::Format
        } else if matches(FILESYSTEM_PATTERNS) {
            Self::Filesystem
        } else if matches(NETWORK_PATTERNS) {
            Self::Network
        } else if matches(UNAVAILABLE_PATTERNS) {
            Self::Unavailable
        } else {
            Self::Other
        }
    }
}

/// Result type alias for ytdown-dl operations.
pub type Result<T> = std::result::Result<T, Error>;

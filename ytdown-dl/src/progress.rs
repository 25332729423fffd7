//! Typed yt-dlp progress hook events.

/// Positional fields `dl.py` extracts from a progress hook dict:
/// `(status, filename, downloaded_bytes, total_bytes, speed, eta)`.
///
/// `total_bytes` already falls back to `total_bytes_estimate`.
pub(crate) type HookFields = (
    Option<String>,
    Option<String>,
    Option<f64>,
    Option<f64>,
    Option<f64>,
    Option<f64>,
);

const UNKNOWN_FILENAME: &str = "Unknown";

/// A single progress hook call from yt-dlp.
#[derive(Clone, Debug, PartialEq)]
pub enum ProgressEvent {
    /// A chunk arrived. Totals may be missing for live or chunked streams.
    Downloading {
        filename: String,
        downloaded_bytes: Option<u64>,
        total_bytes: Option<u64>,
        /// Bytes per second
        speed: Option<f64>,
        /// Seconds remaining
        eta: Option<u64>,
    },
    /// The file is on disk; muxing and post-processing may still follow.
    Finished { filename: String },
    /// yt-dlp gave up on this file.
    Error { filename: String },
}

impl ProgressEvent {
    pub(crate) fn from_hook(fields: HookFields) -> Option<Self> {
        let (status, filename, downloaded_bytes, total_bytes, speed, eta) = fields;
        let filename = filename.unwrap_or_else(|| UNKNOWN_FILENAME.to_string());

        match status.as_deref()? {
            "downloading" => Some(Self::Downloading {
                filename,
                downloaded_bytes: downloaded_bytes.map(to_u64),
                total_bytes: total_bytes.map(to_u64),
                speed,
                eta: eta.map(to_u64),
            }),
            "finished" => Some(Self::Finished { filename }),
            "error" => Some(Self::Error { filename }),
            _ => None,
        }
    }

    pub fn filename(&self) -> &str {
        match self {
            Self::Downloading { filename, .. }
            | Self::Finished { filename }
            | Self::Error { filename } => filename,
        }
    }

    /// Completion in percent, when both counters are known.
    pub fn percent(&self) -> Option<f64> {
        match *self {
            Self::Downloading {
                downloaded_bytes: Some(done),
                total_bytes: Some(total),
                ..
            } if total > 0 => Some(done as f64 / total as f64 * 100.0),
            _ => None,
        }
    }
}

// yt-dlp reports estimates as floats; negative or NaN values saturate to zero.
fn to_u64(value: f64) -> u64 {
    value as u64
}

/// Receives progress events during a download.
///
/// `Send + Sync` because the observer is handed to the Python interpreter as a callable.
pub trait ProgressObserver: Send + Sync {
    fn on_progress(&self, event: &ProgressEvent);
}

impl<F> ProgressObserver for F
where
    F: Fn(&ProgressEvent) + Send + Sync,
{
    fn on_progress(&self, event: &ProgressEvent) {
        self(event)
    }
}

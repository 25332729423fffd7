//! Single-line terminal progress rendering.

use std::io::{self, Stdout, Write};
use std::path::Path;
use std::sync::{Mutex, MutexGuard, PoisonError};
use ytdown_dl::progress::{ProgressEvent, ProgressObserver};

const UNKNOWN: &str = "?";

/// Progress observer that rewrites one status line per download.
///
/// ```text
/// Downloading Me at the zoo.mp4...  42.0% at 1.50MiB/s, ETA: 00:07
/// ```
#[derive(Debug)]
pub struct StatusLine<W> {
    out: Mutex<W>,
}

impl StatusLine<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> StatusLine<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    /// Access the underlying writer.
    pub fn writer(&self) -> MutexGuard<'_, W> {
        self.out.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn render(&self, event: &ProgressEvent) -> io::Result<()> {
        let mut out = self.writer();

        match event {
            ProgressEvent::Downloading { .. } => {
                write!(out, "\r{}", status_text(event))?;
                out.flush()
            }
            ProgressEvent::Finished { .. } => {
                writeln!(out, "\nDownload finished. Processing file...")
            }
            ProgressEvent::Error { filename } => {
                tracing::warn!(filename = %filename, "engine reported a failed download");
                Ok(())
            }
        }
    }
}

impl<W: Write + Send> ProgressObserver for StatusLine<W> {
    fn on_progress(&self, event: &ProgressEvent) {
        if let Err(e) = self.render(event) {
            tracing::debug!(error = %e, "failed to write progress");
        }
    }
}

/// Status text without the leading carriage return.
pub fn status_text(event: &ProgressEvent) -> String {
    let (speed, eta) = match *event {
        ProgressEvent::Downloading { speed, eta, .. } => (speed, eta),
        _ => (None, None),
    };

    format!(
        "Downloading {}... {} at {}, ETA: {}",
        display_name(event.filename()),
        event
            .percent()
            .map_or_else(|| UNKNOWN.to_string(), |p| format!("{p:5.1}%")),
        speed.map_or_else(|| UNKNOWN.to_string(), |s| format!("{}/s", format_bytes(s))),
        eta.map_or_else(|| UNKNOWN.to_string(), format_eta),
    )
}

fn display_name(filename: &str) -> String {
    Path::new(filename)
        .file_name()
        .map_or_else(|| filename.to_string(), |name| name.to_string_lossy().into_owned())
}

/// Binary-prefixed size, two decimals: `1.50MiB`.
pub fn format_bytes(bytes: f64) -> String {
    const UNITS: [&str; 5] = ["B", "KiB", "MiB", "GiB", "TiB"];

    let mut value = bytes;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    format!("{value:.2}{}", UNITS[unit])
}

/// `MM:SS`, or `H:MM:SS` past an hour.
pub fn format_eta(secs: u64) -> String {
    let (hours, minutes, seconds) = (secs / 3600, secs % 3600 / 60, secs % 60);

    if hours > 0 {
        format!("{hours}:{minutes:02}:{seconds:02}")
    } else {
        format!("{minutes:02}:{seconds:02}")
    }
}

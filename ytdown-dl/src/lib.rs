//! Type-safe Rust bindings to the [yt-dlp](https://github.com/yt-dlp/yt-dlp) Python library.
//!
//! ## Modules
//!
//! - [`dl`] - Core yt-dlp API wrappers and the [`dl::YtDlp`] engine
//! - [`presets`] - Resolution-capped video and MP3 audio presets
//! - [`progress`] - Typed progress hook events
//! - [`traits`] - The [`traits::Engine`] seam
//! - [`error`] - Error types
//!
//! ## Quick Start
//!
//! **Preset** (best video up to 1080p plus best audio):
//! ```no_run
//! use std::sync::Arc;
//! use ytdown_dl::{dl::YtDlp, presets::Quality, progress::ProgressEvent, traits::Engine};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let observer = Arc::new(|_: &ProgressEvent| {});
//! YtDlp.download("https://youtube.com/watch?v=example", Quality::P1080.into(), observer)?;
//! # Ok(())
//! # }
//! ```
//!
//! **Custom configuration**:
//! ```no_run
//! use std::sync::Arc;
//! use ytdown_dl::dl::{DownloadOptions, OutputTemplates, PostProcessor, YtDlp};
//! use ytdown_dl::progress::ProgressEvent;
//! use ytdown_dl::traits::Engine;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let opts = DownloadOptions {
//!     format: Some("bestaudio".to_string()),
//!     outtmpl: Some(OutputTemplates::simple("%(uploader)s/%(title)s.%(ext)s".to_string())),
//!     postprocessors: Some(vec![PostProcessor {
//!         key: "FFmpegExtractAudio".to_string(),
//!         preferredcodec: Some("opus".to_string()),
//!         preferredquality: None,
//!     }]),
//!     ignoreerrors: Some(true),
//!     ..Default::default()
//! };
//!
//! let observer = Arc::new(|event: &ProgressEvent| eprintln!("{event:?}"));
//! YtDlp.download("https://youtube.com/watch?v=example", opts, observer)?;
//! # Ok(())
//! # }
//! ```

pub mod dl;
pub mod error;
pub mod presets;
pub mod progress;
pub mod traits;

//! Format presets: resolution-capped video and MP3 audio extraction.
//!
//! **Qualities:** [`Quality::Best`] (no cap) or a height cap from 2160p down to 144p.
//!
//! ```no_run
//! use std::sync::Arc;
//! use ytdown_dl::{dl::YtDlp, presets::AudioFormat, progress::ProgressEvent, traits::Engine};
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let observer = Arc::new(|_: &ProgressEvent| {});
//! YtDlp.download("https://youtube.com/watch?v=example", AudioFormat::Mp3.into(), observer)?;
//! # Ok(())
//! # }
//! ```

use crate::dl::{DownloadOptions, PostProcessor};
use std::fmt;

/// Format selector for audio-only downloads.
pub const AUDIO_FORMAT_SELECTOR: &str = "bestaudio/best";

/// Video quality: best available, or best video no taller than the threshold plus best audio.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Quality {
    #[default]
    Best,
    P2160,
    P1440,
    P1080,
    P720,
    P480,
    P360,
    P240,
    P144,
}

impl Quality {
    /// Height threshold in pixels, `None` for [`Quality::Best`].
    pub const fn height(self) -> Option<u32> {
        match self {
            Self::Best => None,
            Self::P2160 => Some(2160),
            Self::P1440 => Some(1440),
            Self::P1080 => Some(1080),
            Self::P720 => Some(720),
            Self::P480 => Some(480),
            Self::P360 => Some(360),
            Self::P240 => Some(240),
            Self::P144 => Some(144),
        }
    }

    /// yt-dlp format expression, e.g. `bestvideo[height<=720]+bestaudio/best`.
    ///
    /// Falls back to the best single file when no split streams match.
    pub fn format_selector(self) -> String {
        match self.height() {
            None => "best".to_string(),
            Some(height) => format!("bestvideo[height<={height}]+bestaudio/best"),
        }
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.height() {
            None => f.write_str("best"),
            Some(height) => write!(f, "{height}p"),
        }
    }
}

impl From<Quality> for DownloadOptions {
    /// Video preset: format expression only, no post-processing.
    fn from(quality: Quality) -> Self {
        Self {
            format: Some(quality.format_selector()),
            ..Default::default()
        }
    }
}

/// Audio extraction target.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum AudioFormat {
    /// MP3 at 192 kbps
    #[default]
    Mp3,
}

impl AudioFormat {
    pub const fn codec(self) -> &'static str {
        match self {
            Self::Mp3 => "mp3",
        }
    }

    /// Target bitrate in kbps.
    pub const fn bitrate(self) -> u32 {
        match self {
            Self::Mp3 => 192,
        }
    }
}

impl From<AudioFormat> for PostProcessor {
    /// `FFmpegExtractAudio` with codec and bitrate.
    fn from(format: AudioFormat) -> Self {
        Self {
            key: "FFmpegExtractAudio".to_string(),
            preferredcodec: Some(format.codec().to_string()),
            preferredquality: Some(format.bitrate().to_string()),
        }
    }
}

impl From<AudioFormat> for DownloadOptions {
    /// Audio preset: best audio track, transcoded after download.
    fn from(format: AudioFormat) -> Self {
        Self {
            format: Some(AUDIO_FORMAT_SELECTOR.to_string()),
            postprocessors: Some(vec![format.into()]),
            ..Default::default()
        }
    }
}

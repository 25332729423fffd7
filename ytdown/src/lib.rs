//! Command-line downloader for YouTube videos and playlists, driving yt-dlp through [`ytdown_dl`].
//!
//! - [`cli`] - Argument parsing and the entry point
//! - [`request`] - Resolved download request and its yt-dlp options
//! - [`dl`] - Dispatcher: one engine call, progress, error report
//! - [`progress`] - Terminal status line

pub mod cli;
pub mod dl;
pub mod progress;
pub mod request;

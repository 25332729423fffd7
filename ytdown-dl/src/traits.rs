//! Seam between the dispatcher and the download engine.

use crate::dl::{DownloadOptions, DownloadStatus};
use crate::error::Result;
use crate::progress::ProgressObserver;
use std::sync::Arc;

/// Download engine that resolves URLs into media files.
///
/// [`crate::dl::YtDlp`] is the real implementation; tests substitute recording fakes.
pub trait Engine {
    /// Download `url` with `opts`, reporting progress to `observer`.
    ///
    /// Blocks until every item has been downloaded and post-processed.
    fn download(
        &self,
        url: &str,
        opts: DownloadOptions,
        observer: Arc<dyn ProgressObserver>,
    ) -> Result<DownloadStatus>;

    /// Print the available formats for `url` without downloading.
    fn list_formats(&self, url: &str) -> Result<()>;
}

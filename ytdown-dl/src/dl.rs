//! yt-dlp Python API wrappers.
//!
//! Type-safe bindings to [yt-dlp](https://github.com/yt-dlp/yt-dlp) `YoutubeDL` parameters.
//!
//! ```no_run
//! use std::sync::Arc;
//! use ytdown_dl::{dl::YtDlp, presets::Quality, progress::ProgressEvent, traits::Engine};
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let observer = Arc::new(|event: &ProgressEvent| println!("{event:?}"));
//! YtDlp.download("https://youtube.com/watch?v=example", Quality::P720.into(), observer)?;
//! # Ok(())
//! # }
//! ```

use crate::error::Result;
use crate::progress::{HookFields, ProgressEvent, ProgressObserver};
use crate::traits::Engine;
use pyo3::ffi::c_str;
use pyo3::prelude::*;
use pyo3::types::{PyCFunction, PyDict, PyTuple};
use std::collections::HashMap;
use std::sync::Arc;

/// Filename templates using `%(field)s` syntax. Key `default` required.
#[derive(Clone, Debug, Default, PartialEq, Eq, IntoPyObject)]
pub struct OutputTemplates(pub Option<HashMap<String, String>>);

impl OutputTemplates {
    /// Create with a single default template.
    pub fn simple(default: String) -> Self {
        Self(Some(HashMap::from([("default".to_string(), default)])))
    }

    /// The `default` template, if set.
    pub fn default_template(&self) -> Option<&str> {
        self.0.as_ref()?.get("default").map(String::as_str)
    }
}

/// Post-download operation: `key` (e.g., `"FFmpegExtractAudio"`), optional codec and quality.
///
/// `preferredquality` is a bitrate in kbps for lossy codecs (e.g., `"192"`).
#[derive(Clone, Debug, Default, PartialEq, Eq, IntoPyObject)]
pub struct PostProcessor {
    pub key: String,
    pub preferredcodec: Option<String>,
    pub preferredquality: Option<String>,
}

/// yt-dlp download configuration passed to `YoutubeDL(params)`.
///
/// `None` fields are dropped before reaching yt-dlp, so its own defaults apply.
#[derive(Clone, Debug, Default, PartialEq, Eq, IntoPyObject)]
pub struct DownloadOptions {
    pub format: Option<String>,
    pub outtmpl: Option<OutputTemplates>,
    pub postprocessors: Option<Vec<PostProcessor>>,
    pub ignoreerrors: Option<bool>,
    pub noplaylist: Option<bool>,
    pub quiet: Option<bool>,
    pub no_warnings: Option<bool>,
}

/// Outcome of a download that did not raise.
///
/// With `ignoreerrors` set, yt-dlp skips failed playlist items and reports them
/// through a non-zero return code instead of an exception.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DownloadStatus {
    Complete,
    CompletedWithErrors,
}

impl DownloadStatus {
    pub fn from_retcode(retcode: i64) -> Self {
        if retcode == 0 {
            Self::Complete
        } else {
            Self::CompletedWithErrors
        }
    }
}

/// yt-dlp running inside the embedded Python interpreter.
#[derive(Clone, Copy, Debug, Default)]
pub struct YtDlp;

impl Engine for YtDlp {
    /// Uses `YoutubeDL.download([url])` with `observer` registered as the only progress hook.
    fn download(
        &self,
        url: &str,
        opts: DownloadOptions,
        observer: Arc<dyn ProgressObserver>,
    ) -> Result<DownloadStatus> {
        Python::attach(|py| {
            let module = load_module(py)?;

            let py_params = opts.into_pyobject(py)?;
            let hook = progress_hook(py, observer)?;

            let retcode: i64 = module
                .getattr("download")?
                .call1((url, py_params, hook))?
                .extract()?;

            tracing::debug!(url, retcode, "yt-dlp returned");

            Ok(DownloadStatus::from_retcode(retcode))
        })
    }

    /// Uses `YoutubeDL({"listformats": True})`, which prints the format table and downloads nothing.
    fn list_formats(&self, url: &str) -> Result<()> {
        Python::attach(|py| {
            let module = load_module(py)?;
            module.getattr("list_formats")?.call1((url,))?;
            Ok(())
        })
    }
}

fn load_module(py: Python<'_>) -> PyResult<Bound<'_, PyModule>> {
    PyModule::from_code(py, c_str!(include_str!("./dl.py")), c"dl.py", c"dl")
}

/// Wrap `observer` as a Python callable.
///
/// `dl.py` flattens each hook dict into positional [`HookFields`] before calling it.
fn progress_hook(
    py: Python<'_>,
    observer: Arc<dyn ProgressObserver>,
) -> PyResult<Bound<'_, PyCFunction>> {
    PyCFunction::new_closure(
        py,
        Some(c"progress_hook"),
        None,
        move |args: &Bound<'_, PyTuple>, _kwargs: Option<&Bound<'_, PyDict>>| -> PyResult<()> {
            let fields: HookFields = args.extract()?;

            match ProgressEvent::from_hook(fields) {
                Some(event) => observer.on_progress(&event),
                None => tracing::trace!("ignored progress hook with unknown status"),
            }

            Ok(())
        },
    )
}

//! Download dispatcher - turns a request into one engine call and reports the outcome.

use crate::request::DownloadRequest;
use eyre::{Context, Report, Result, bail};
use std::io::Write;
use std::sync::Arc;
use ytdown_dl::dl::DownloadStatus;
use ytdown_dl::error::{Error as EngineError, ErrorKind};
use ytdown_dl::progress::ProgressObserver;
use ytdown_dl::traits::Engine;

/// Printed after every failure, whatever the cause.
pub const TROUBLESHOOTING_TIPS: [&str; 4] = [
    "Check your internet connection",
    "Verify the YouTube URL is correct and accessible",
    "Some YouTube videos might be restricted or region-locked",
    "Try listing available formats with --list-formats",
];

/// Run `request` against `engine`, writing status to `out`.
///
/// Every failure is caught here and reported on `out` with [`TROUBLESHOOTING_TIPS`].
/// Returns whether the run succeeded.
pub fn execute<E: Engine + ?Sized>(
    engine: &E,
    request: &DownloadRequest,
    observer: Arc<dyn ProgressObserver>,
    out: &mut impl Write,
) -> bool {
    let result = if request.list_only {
        list_formats(engine, request, out)
    } else {
        download(engine, request, observer, out)
    };

    match result {
        Ok(()) => true,
        Err(report) => {
            tracing::debug!(url = %request.url, kind = ?classify(&report), error = ?report, "download failed");

            if let Err(e) = report_failure(&report, out) {
                tracing::error!(error = %e, "failed to write error report");
            }

            false
        }
    }
}

fn list_formats<E: Engine + ?Sized>(
    engine: &E,
    request: &DownloadRequest,
    out: &mut impl Write,
) -> Result<()> {
    writeln!(out, "Fetching available formats for: {}", request.url)?;
    out.flush()?;

    engine
        .list_formats(&request.url)
        .wrap_err("failed to list formats")
}

fn download<E: Engine + ?Sized>(
    engine: &E,
    request: &DownloadRequest,
    observer: Arc<dyn ProgressObserver>,
    out: &mut impl Write,
) -> Result<()> {
    let output_dir = request
        .resolve_output_dir()
        .map_err(EngineError::from)
        .wrap_err("failed to resolve current directory")?;

    std::fs::create_dir_all(&output_dir)
        .map_err(EngineError::from)
        .wrap_err_with(|| {
            format!(
                "failed to create output directory: {}",
                output_dir.display()
            )
        })?;

    let opts = request.to_options(&output_dir);

    tracing::info!(
        url = %request.url,
        format = opts.format.as_deref(),
        template = %request.output_template(&output_dir).display(),
        playlist = request.is_playlist(),
        "starting download"
    );

    request.write_summary(&output_dir, out)?;
    out.flush()?;

    let status = engine.download(&request.url, opts, observer)?;

    if status == DownloadStatus::CompletedWithErrors {
        // A single item has nothing left to skip to, so its error is the whole run
        if !request.is_playlist() {
            bail!("yt-dlp could not download {}", request.url);
        }

        tracing::warn!(url = %request.url, "some playlist items failed and were skipped");
    }

    writeln!(out, "\nDownload completed successfully!")?;

    Ok(())
}

fn classify(report: &Report) -> ErrorKind {
    if let Some(e) = report.downcast_ref::<EngineError>() {
        e.kind()
    } else if report.downcast_ref::<std::io::Error>().is_some() {
        ErrorKind::Filesystem
    } else {
        ErrorKind::Other
    }
}

fn report_failure(report: &Report, out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out, "\nError: {report:#}")?;
    writeln!(out, "\nTroubleshooting tips:")?;

    for (i, tip) in TROUBLESHOOTING_TIPS.iter().enumerate() {
        writeln!(out, "{}. {tip}", i + 1)?;
    }

    out.flush()
}

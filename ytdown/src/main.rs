//! yt-download CLI - YouTube video and playlist downloader

use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use ytdown::cli::{Cli, run_cli};

fn main() -> ExitCode {
    let (non_blocking, _guard) = tracing_appender::non_blocking(std::io::stderr());

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    if run_cli(Cli::parse()) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

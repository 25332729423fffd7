//! CLI argument definitions using clap.

use crate::progress::StatusLine;
use crate::request::DownloadRequest;
use clap::builder::NonEmptyStringValueParser;
use clap::{Parser, ValueEnum};
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use ytdown_dl::dl::YtDlp;
use ytdown_dl::presets::Quality;

#[derive(Debug, Parser)]
#[command(name = "yt-download")]
#[command(about = "Download YouTube videos or playlists from the command line")]
#[command(version)]
pub struct Cli {
    /// YouTube video or playlist URL
    #[arg(value_parser = NonEmptyStringValueParser::new())]
    pub url: String,

    /// Output directory (default: current directory)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Video quality
    #[arg(short, long, value_enum, default_value_t = QualityArg::Best)]
    pub quality: QualityArg,

    /// Specific format ID (overrides quality setting)
    #[arg(short, long = "format", value_name = "ID")]
    pub format_id: Option<String>,

    /// List all available formats and exit
    #[arg(short = 'F', long)]
    pub list_formats: bool,

    /// Download audio only (MP3)
    #[arg(short, long)]
    pub audio_only: bool,
}

/// Quality choices accepted on the command line. `4k` and `2160p` are synonyms.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum QualityArg {
    #[default]
    #[value(name = "best")]
    Best,
    #[value(name = "4k")]
    FourK,
    #[value(name = "2160p")]
    P2160,
    #[value(name = "1440p")]
    P1440,
    #[value(name = "1080p")]
    P1080,
    #[value(name = "720p")]
    P720,
    #[value(name = "480p")]
    P480,
    #[value(name = "360p")]
    P360,
    #[value(name = "240p")]
    P240,
    #[value(name = "144p")]
    P144,
}

impl From<QualityArg> for Quality {
    fn from(arg: QualityArg) -> Self {
        match arg {
            QualityArg::Best => Quality::Best,
            QualityArg::FourK | QualityArg::P2160 => Quality::P2160,
            QualityArg::P1440 => Quality::P1440,
            QualityArg::P1080 => Quality::P1080,
            QualityArg::P720 => Quality::P720,
            QualityArg::P480 => Quality::P480,
            QualityArg::P360 => Quality::P360,
            QualityArg::P240 => Quality::P240,
            QualityArg::P144 => Quality::P144,
        }
    }
}

/// Prints the value as accepted on the command line.
impl fmt::Display for QualityArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_possible_value() {
            Some(value) => f.write_str(value.get_name()),
            None => Ok(()),
        }
    }
}

/// Execute CLI command - separated for testing.
///
/// Returns `false` when the download failed; the failure has already been reported on stdout.
pub fn run_cli(cli: Cli) -> bool {
    tracing::debug!(?cli, "parsed arguments");

    let request = DownloadRequest::from(cli);
    let observer = Arc::new(StatusLine::stdout());

    crate::dl::execute(&YtDlp, &request, observer, &mut std::io::stdout())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_url_only() {
        let cli = Cli::parse_from(["yt-download", "https://example.com/watch?v=abc"]);

        assert!(matches!(
            &cli,
            Cli {
                url,
                output: None,
                quality: QualityArg::Best,
                format_id: None,
                list_formats: false,
                audio_only: false,
            } if url == "https://example.com/watch?v=abc"
        ));
    }

    #[test]
    fn parses_all_flags() {
        let cli = Cli::parse_from([
            "yt-download",
            "https://example.com/playlist?list=XYZ",
            "-o",
            "/tmp/output",
            "-q",
            "720p",
            "-f",
            "137+140",
            "-F",
            "-a",
        ]);

        assert!(matches!(
            &cli,
            Cli {
                url,
                output,
                quality: QualityArg::P720,
                format_id: Some(format_id),
                list_formats: true,
                audio_only: true,
            } if url == "https://example.com/playlist?list=XYZ"
                && output.as_deref().is_some_and(|p| p == "/tmp/output")
                && format_id == "137+140"
        ));
    }

    #[test]
    fn parses_long_flags() {
        let cli = Cli::parse_from([
            "yt-download",
            "https://example.com/watch?v=abc",
            "--output",
            "out",
            "--quality",
            "1080p",
            "--format",
            "22",
            "--list-formats",
            "--audio-only",
        ]);

        assert_eq!(cli.quality, QualityArg::P1080);
        assert_eq!(cli.format_id.as_deref(), Some("22"));
        assert!(cli.list_formats);
        assert!(cli.audio_only);
        assert!(cli.output.as_deref().is_some_and(|p| p == "out"));
    }

    #[test]
    fn four_k_is_2160p() {
        let four_k = Cli::parse_from(["yt-download", "u", "-q", "4k"]);
        let p2160 = Cli::parse_from(["yt-download", "u", "-q", "2160p"]);

        assert_eq!(Quality::from(four_k.quality), Quality::P2160);
        assert_eq!(Quality::from(p2160.quality), Quality::P2160);
    }

    #[test]
    fn quality_displays_as_typed() {
        let four_k = Cli::parse_from(["yt-download", "u", "-q", "4k"]);

        assert_eq!(four_k.quality.to_string(), "4k");
        assert_eq!(QualityArg::P2160.to_string(), "2160p");
        assert_eq!(QualityArg::default().to_string(), "best");
    }

    #[test]
    fn rejects_unknown_quality() {
        let result = Cli::try_parse_from(["yt-download", "u", "-q", "8k"]);
        assert!(result.is_err());
    }

    #[test]
    fn rejects_missing_or_empty_url() {
        assert!(Cli::try_parse_from(["yt-download"]).is_err());
        assert!(Cli::try_parse_from(["yt-download", ""]).is_err());
    }

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}

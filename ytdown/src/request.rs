//! Download request resolved from CLI arguments.
//!
//! The [`Cli`] struct (for parsing) stays in cli.rs; this module turns it into a
//! [`DownloadRequest`] and maps the request onto yt-dlp options.

use crate::cli::{Cli, QualityArg};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use ytdown_dl::dl::{DownloadOptions, OutputTemplates};
use ytdown_dl::presets::{AudioFormat, Quality};

/// Output template for playlist items, relative to the output directory.
pub const PLAYLIST_TEMPLATE: &str = "%(playlist_title)s/%(playlist_index)s-%(title)s.%(ext)s";

/// Output template for single items, relative to the output directory.
pub const SINGLE_TEMPLATE: &str = "%(title)s.%(ext)s";

/// Whether `url` looks like a playlist.
///
/// Plain substring match on `playlist` or `list=`, so `watch?v=...&list=...` counts as a
/// playlist and a video URL that merely contains the word "playlist" is misclassified.
pub fn is_playlist_url(url: &str) -> bool {
    url.contains("playlist") || url.contains("list=")
}

/// One invocation's worth of download parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DownloadRequest {
    pub url: String,
    /// `None` means the current directory, looked up when the download starts
    pub output_dir: Option<PathBuf>,
    /// Kept as typed so the summary echoes the user's choice (`4k` stays `4k`)
    pub quality: QualityArg,
    /// Explicit yt-dlp format; wins over `quality`
    pub format_id: Option<String>,
    pub list_only: bool,
    pub audio_only: bool,
}

impl From<Cli> for DownloadRequest {
    fn from(cli: Cli) -> Self {
        Self {
            url: cli.url,
            output_dir: cli.output,
            quality: cli.quality,
            format_id: cli.format_id,
            list_only: cli.list_formats,
            audio_only: cli.audio_only,
        }
    }
}

impl DownloadRequest {
    pub fn is_playlist(&self) -> bool {
        is_playlist_url(&self.url)
    }

    /// The requested output directory, or the current directory when none was given.
    pub fn resolve_output_dir(&self) -> io::Result<PathBuf> {
        match &self.output_dir {
            Some(dir) => Ok(dir.clone()),
            None => std::env::current_dir(),
        }
    }

    /// Full output template rooted at `output_dir`.
    pub fn output_template(&self, output_dir: &Path) -> PathBuf {
        let template = if self.is_playlist() {
            PLAYLIST_TEMPLATE
        } else {
            SINGLE_TEMPLATE
        };

        output_dir.join(template)
    }

    /// yt-dlp options for this request, writing under `output_dir`.
    ///
    /// Audio-only beats an explicit format, which beats the quality preset.
    pub fn to_options(&self, output_dir: &Path) -> DownloadOptions {
        let mut opts: DownloadOptions = if self.audio_only {
            AudioFormat::Mp3.into()
        } else if let Some(format_id) = &self.format_id {
            DownloadOptions {
                format: Some(format_id.clone()),
                ..Default::default()
            }
        } else {
            Quality::from(self.quality).into()
        };

        opts.outtmpl = Some(OutputTemplates::simple(
            self.output_template(output_dir)
                .to_string_lossy()
                .into_owned(),
        ));
        // Skip failed playlist items instead of aborting the whole run
        opts.ignoreerrors = Some(true);
        opts.noplaylist = Some(!self.is_playlist());
        opts.quiet = Some(false);
        opts.no_warnings = Some(false);

        opts
    }

    /// Print what is about to be downloaded.
    pub fn write_summary(&self, output_dir: &Path, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "Downloading from: {}", self.url)?;
        writeln!(out, "Output directory: {}", output_dir.display())?;

        match &self.format_id {
            Some(format_id) => writeln!(out, "Quality: Format ID: {format_id}")?,
            None => writeln!(out, "Quality: {}", self.quality)?,
        }

        if self.audio_only {
            writeln!(out, "Type: Audio only (MP3)")?;
        } else {
            writeln!(out, "Type: Video with audio")?;
        }

        if self.is_playlist() {
            writeln!(out, "Detected playlist URL. Will download all videos in the playlist.")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use ytdown_dl::dl::PostProcessor;

    const SINGLE_URL: &str = "https://example.com/watch?v=abc";
    const PLAYLIST_URL: &str = "https://example.com/playlist?list=XYZ";
    const OUTPUT_DIR: &str = "/tmp/downloads";

    fn request(url: &str) -> DownloadRequest {
        DownloadRequest {
            url: url.to_string(),
            output_dir: Some(PathBuf::from(OUTPUT_DIR)),
            quality: QualityArg::Best,
            format_id: None,
            list_only: false,
            audio_only: false,
        }
    }

    fn options(req: &DownloadRequest) -> DownloadOptions {
        req.to_options(Path::new(OUTPUT_DIR))
    }

    fn summary(req: &DownloadRequest) -> String {
        let mut out = Vec::new();
        req.write_summary(Path::new(OUTPUT_DIR), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn template(opts: &DownloadOptions) -> &str {
        opts.outtmpl
            .as_ref()
            .and_then(OutputTemplates::default_template)
            .expect("outtmpl should be set")
    }

    #[test]
    fn classifies_playlists_by_substring() {
        assert!(is_playlist_url(PLAYLIST_URL));
        assert!(is_playlist_url("https://example.com/watch?v=abc&list=PL123"));
        assert!(is_playlist_url("https://example.com/my-playlist-video"));
        assert!(!is_playlist_url(SINGLE_URL));
        assert!(!is_playlist_url("https://youtu.be/jNQXAC9IVRw"));
    }

    #[test]
    fn resolves_cli_defaults() {
        let cli = Cli::parse_from(["yt-download", SINGLE_URL]);
        let request = DownloadRequest::from(cli);

        assert_eq!(request.output_dir, None);
        assert_eq!(request.quality, QualityArg::Best);
        assert_eq!(request.format_id, None);
        assert!(!request.list_only);
        assert!(!request.audio_only);
    }

    #[test]
    fn resolves_cli_flags() {
        let cli = Cli::parse_from([
            "yt-download",
            PLAYLIST_URL,
            "-o",
            "/tmp/out",
            "-q",
            "4k",
            "-F",
        ]);
        let request = DownloadRequest::from(cli);

        assert_eq!(request.output_dir.as_deref(), Some(Path::new("/tmp/out")));
        assert_eq!(request.quality, QualityArg::FourK);
        assert!(request.list_only);
    }

    #[test]
    fn missing_output_dir_resolves_to_current_dir() {
        let mut req = request(SINGLE_URL);
        req.output_dir = None;

        assert_eq!(
            req.resolve_output_dir().unwrap(),
            std::env::current_dir().unwrap()
        );

        req.output_dir = Some(PathBuf::from("relative/out"));
        assert_eq!(req.resolve_output_dir().unwrap(), Path::new("relative/out"));
    }

    #[test]
    fn single_item_defaults() {
        let opts = options(&request(SINGLE_URL));

        assert_eq!(opts.format.as_deref(), Some("best"));
        assert_eq!(opts.postprocessors, None);
        assert_eq!(opts.ignoreerrors, Some(true));
        assert_eq!(opts.noplaylist, Some(true));
        assert_eq!(
            Path::new(template(&opts)),
            Path::new(OUTPUT_DIR).join(SINGLE_TEMPLATE)
        );
    }

    #[test]
    fn playlist_with_quality_cap() {
        let mut req = request(PLAYLIST_URL);
        req.quality = QualityArg::P720;
        let opts = options(&req);

        assert_eq!(
            opts.format.as_deref(),
            Some("bestvideo[height<=720]+bestaudio/best")
        );
        assert_eq!(opts.noplaylist, Some(false));
        assert_eq!(
            Path::new(template(&opts)),
            Path::new(OUTPUT_DIR).join(PLAYLIST_TEMPLATE)
        );
    }

    #[test]
    fn four_k_selects_2160p_formats() {
        let mut req = request(SINGLE_URL);
        req.quality = QualityArg::FourK;

        assert_eq!(
            options(&req).format.as_deref(),
            Some("bestvideo[height<=2160]+bestaudio/best")
        );
    }

    #[test]
    fn format_id_wins_over_quality() {
        let mut req = request(SINGLE_URL);
        req.quality = QualityArg::P144;
        req.format_id = Some("137+140".to_string());
        let opts = options(&req);

        assert_eq!(opts.format.as_deref(), Some("137+140"));
        assert_eq!(opts.postprocessors, None);
    }

    #[test]
    fn audio_only_wins_over_everything() {
        let mut req = request(SINGLE_URL);
        req.quality = QualityArg::P1080;
        req.format_id = Some("22".to_string());
        req.audio_only = true;
        let opts = options(&req);

        assert_eq!(opts.format.as_deref(), Some("bestaudio/best"));
        assert_eq!(
            opts.postprocessors,
            Some(vec![PostProcessor {
                key: "FFmpegExtractAudio".to_string(),
                preferredcodec: Some("mp3".to_string()),
                preferredquality: Some("192".to_string()),
            }])
        );
    }

    #[test]
    fn summary_for_playlist_audio() {
        let mut req = request(PLAYLIST_URL);
        req.audio_only = true;

        assert_eq!(
            summary(&req),
            "Downloading from: https://example.com/playlist?list=XYZ\n\
             Output directory: /tmp/downloads\n\
             Quality: best\n\
             Type: Audio only (MP3)\n\
             Detected playlist URL. Will download all videos in the playlist.\n"
        );
    }

    #[test]
    fn summary_echoes_quality_as_typed() {
        let mut req = request(SINGLE_URL);

        req.quality = QualityArg::FourK;
        assert!(summary(&req).contains("Quality: 4k\n"));

        req.quality = QualityArg::P2160;
        assert!(summary(&req).contains("Quality: 2160p\n"));
    }

    #[test]
    fn summary_shows_format_id() {
        let mut req = request(SINGLE_URL);
        req.format_id = Some("18".to_string());
        let text = summary(&req);

        assert!(text.contains("Quality: Format ID: 18\n"));
        assert!(text.contains("Type: Video with audio\n"));
        assert!(!text.contains("Detected playlist URL"));
    }
}

//! Input classification and output path derivation.
//!
//! All functions here are pure string/path manipulation and never touch the
//! file system.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Extension given to every derived output file.
pub const AUDIO_EXTENSION: &str = "mp3";

/// File stem used when a URL has no final path segment.
pub const FALLBACK_OUTPUT_STEM: &str = "output";

const URL_SCHEMES: &[&str] = &["http://", "https://"];

/// An input/output pair handed to the transcoder.
///
/// Paths are kept as `PathBuf` so file names that are not valid UTF-8 reach
/// ffmpeg unchanged. A URL input is stored as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionRequest {
    /// Local file path or URL to read from.
    pub input: PathBuf,
    /// Path of the MP3 file to write.
    pub output: PathBuf,
}

impl ConversionRequest {
    /// Builds a request for a typed path or URL, deriving the output path from it.
    #[must_use]
    pub fn for_input(input: impl Into<String>) -> Self {
        let input = input.into();
        let output = derive_output_path(&input);
        Self {
            input: input.into(),
            output: output.into(),
        }
    }

    /// Builds a request for a local file, keeping its path byte-for-byte.
    #[must_use]
    pub fn for_local_file(input: impl Into<PathBuf>) -> Self {
        let input = input.into();
        let output = audio_path_for(&input);
        Self { input, output }
    }

    /// Returns true if the input is an `http://` or `https://` URL.
    #[must_use]
    pub fn is_remote(&self) -> bool {
        self.input.to_str().is_some_and(is_url)
    }
}

/// Returns true if `input` starts with `http://` or `https://`, ignoring case.
///
/// This is a prefix check only; the rest of the string is not validated.
#[must_use]
pub fn is_url(input: &str) -> bool {
    URL_SCHEMES.iter().any(|scheme| {
        input
            .get(..scheme.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
    })
}

/// Derives the MP3 output path for an input path or URL.
///
/// URLs produce a bare file name (relative to the working directory) built
/// from the last path segment. Local paths keep their parent directory.
///
/// ```rust
/// use mp3rip_core::paths::derive_output_path;
///
/// assert_eq!(derive_output_path("https://example.com/path/video.mp4"), "video.mp3");
/// assert_eq!(derive_output_path("/a/b/movie.mkv"), "/a/b/movie.mp3");
/// ```
#[must_use]
pub fn derive_output_path(input: &str) -> String {
    if is_url(input) {
        let segment = input
            .rsplit_once('/')
            .map(|(_, last)| last)
            .filter(|last| !last.is_empty())
            .unwrap_or(FALLBACK_OUTPUT_STEM);
        let stem = segment
            .rsplit_once('.')
            .map_or(segment, |(stem, _)| stem);
        return format!("{stem}.{AUDIO_EXTENSION}");
    }

    audio_path_for(Path::new(input))
        .to_string_lossy()
        .into_owned()
}

/// The MP3 path next to a local file: same directory, same stem.
#[must_use]
pub fn audio_path_for(path: &Path) -> PathBuf {
    let mut file_name = path
        .file_stem()
        .unwrap_or(OsStr::new(FALLBACK_OUTPUT_STEM))
        .to_os_string();
    file_name.push(".");
    file_name.push(AUDIO_EXTENSION);

    match path.parent() {
        Some(parent) => parent.join(file_name),
        None => PathBuf::from(file_name),
    }
}

/// Resolves a menu selection or manual entry against the chosen root directory.
///
/// URLs and absolute paths are returned unchanged; anything else is treated
/// as relative to `root_dir`.
#[must_use]
pub fn resolve_input(selection: &str, root_dir: &Path) -> String {
    if is_url(selection) || Path::new(selection).is_absolute() {
        selection.to_string()
    } else {
        root_dir.join(selection).to_string_lossy().into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_is_url() {
        assert!(is_url("HTTP://x.com/a.mp4"));
        assert!(is_url("https://example.com/video"));
        assert!(is_url("hTtPs://example.com"));
        assert!(!is_url("/local/file.mp4"));
        assert!(!is_url("ftp://x"));
        assert!(!is_url("http:/missing-slash"));
        assert!(!is_url("http"));
        assert!(!is_url(""));
    }

    #[test]
    fn test_is_url_multibyte_input() {
        // Must not panic when the scheme length falls inside a code point.
        assert!(!is_url("ヴィデオ.mp4"));
    }

    #[test]
    fn test_derive_output_path_urls() {
        assert_eq!(
            derive_output_path("https://example.com/path/video.mp4"),
            "video.mp3"
        );
        assert_eq!(
            derive_output_path("https://example.com/path/video"),
            "video.mp3"
        );
        assert_eq!(derive_output_path("https://example.com/"), "output.mp3");
        assert_eq!(
            derive_output_path("https://example.com/a/clip.final.webm"),
            "clip.final.mp3"
        );
    }

    #[test]
    fn test_derive_output_path_keeps_query_text() {
        assert_eq!(
            derive_output_path("https://example.com/video.mp4?x=1"),
            "video.mp3"
        );
        assert_eq!(
            derive_output_path("https://example.com/watch?v=abc"),
            "watch?v=abc.mp3"
        );
    }

    #[test]
    fn test_derive_output_path_local() {
        assert_eq!(derive_output_path("/a/b/movie.mkv"), "/a/b/movie.mp3");
        assert_eq!(derive_output_path("movie.mkv"), "movie.mp3");
        assert_eq!(derive_output_path("/a/b/no_extension"), "/a/b/no_extension.mp3");
    }

    #[test]
    fn test_derive_output_path_is_deterministic() {
        let input = "/videos/Holiday 2019.MOV";
        assert_eq!(derive_output_path(input), derive_output_path(input));
    }

    #[test]
    fn test_resolve_input() {
        let root = PathBuf::from("/videos");
        assert_eq!(resolve_input("clip.mp4", &root), "/videos/clip.mp4");
        assert_eq!(resolve_input("/elsewhere/clip.mp4", &root), "/elsewhere/clip.mp4");
        assert_eq!(
            resolve_input("https://example.com/clip.mp4", &root),
            "https://example.com/clip.mp4"
        );
    }

    #[test]
    fn test_conversion_request_for_input() {
        let request = ConversionRequest::for_input("/videos/clip.mp4");
        assert_eq!(request.input, PathBuf::from("/videos/clip.mp4"));
        assert_eq!(request.output, PathBuf::from("/videos/clip.mp3"));
        assert!(!request.is_remote());

        let request = ConversionRequest::for_input("https://example.com/talk.webm");
        assert_eq!(request.output, PathBuf::from("talk.mp3"));
        assert!(request.is_remote());
    }

    #[cfg(unix)]
    #[test]
    fn test_for_local_file_keeps_non_utf8_name() {
        use std::os::unix::ffi::OsStrExt;

        let input = Path::new("/videos").join(OsStr::from_bytes(b"clip\xff.mkv"));
        let request = ConversionRequest::for_local_file(&input);
        assert_eq!(request.input, input);
        assert_eq!(
            request.output,
            Path::new("/videos").join(OsStr::from_bytes(b"clip\xff.mp3"))
        );
    }
}

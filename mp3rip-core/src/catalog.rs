//! Directory scanning for convertible video files.
//!
//! Only the top level of the chosen directory is searched. Files are kept when
//! their extension belongs to [`SUPPORTED_EXTENSIONS`] (case-insensitive) and
//! their size can be read; the result is sorted by name, ignoring case.

use crate::error::{CoreError, directory_read_error};
use crate::utils::bytes_to_mb;

use std::fmt;
use std::path::{Path, PathBuf};

/// Video extensions accepted by the scanner, lowercase and without the dot.
pub const SUPPORTED_EXTENSIONS: &[&str] = &[
    "mp4", "avi", "mov", "mkv", "flv", "wmv", "webm", "m4v", "3gp",
];

/// Returns true if `ext` (without the leading dot) is a supported video extension.
#[must_use]
pub fn is_supported_extension(ext: &str) -> bool {
    SUPPORTED_EXTENSIONS
        .iter()
        .any(|supported| supported.eq_ignore_ascii_case(ext))
}

/// Extracts the lowercase text after the last `.` of a file name.
#[must_use]
pub fn extension_of(file_name: &str) -> Option<String> {
    file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_lowercase())
}

/// A video file discovered during a directory scan.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaFileEntry {
    /// File name including extension, lossily decoded for display.
    pub name: String,
    /// Path as discovered; use this, not `name`, to open the file.
    pub path: PathBuf,
    /// Size in MiB at scan time.
    pub size_mb: f64,
    /// Lowercase extension without the dot; always a supported one.
    pub extension: String,
}

impl MediaFileEntry {
    /// Builds an entry for `path` if it is a supported video file whose size can be read.
    ///
    /// Returns `None` for unsupported extensions and for files whose metadata
    /// cannot be read; neither is treated as an error.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        let name = path.file_name()?.to_string_lossy().into_owned();
        let extension = extension_of(&name).filter(|ext| is_supported_extension(ext))?;

        let size_bytes = match std::fs::metadata(path) {
            Ok(metadata) => metadata.len(),
            Err(e) => {
                log::trace!("Skipping {}: {}", path.display(), e);
                return None;
            }
        };

        Some(Self {
            name,
            path: path.to_path_buf(),
            size_mb: bytes_to_mb(size_bytes),
            extension,
        })
    }
}

impl fmt::Display for MediaFileEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.1} MB)", self.name, self.size_mb)
    }
}

/// Outcome of scanning a directory.
#[derive(Debug)]
pub enum CatalogScan {
    /// The directory was read; the list may be empty.
    Found(Vec<MediaFileEntry>),
    /// The path does not exist or is not a directory.
    Missing,
    /// The directory exists but could not be enumerated.
    Failed(CoreError),
}

impl CatalogScan {
    /// Collapses the outcome into a list, logging anything other than `Found`.
    #[must_use]
    pub fn into_entries(self) -> Vec<MediaFileEntry> {
        match self {
            Self::Found(entries) => entries,
            Self::Missing => {
                log::warn!("Scan target is missing or not a directory");
                Vec::new()
            }
            Self::Failed(e) => {
                log::warn!("{}", e);
                Vec::new()
            }
        }
    }
}

/// Scans the top level of `dir` for supported video files.
///
/// # Examples
///
/// ```rust,no_run
/// use mp3rip_core::catalog::{scan_directory, CatalogScan};
/// use std::path::{Path, PathBuf};
///
/// match scan_directory(Path::new("/path/to/videos")) {
///     CatalogScan::Found(entries) => {
///         for entry in entries {
///             println!("{}", entry);
///         }
///     }
///     CatalogScan::Missing => println!("No such directory"),
///     CatalogScan::Failed(e) => println!("Scan failed: {}", e),
/// }
/// ```
#[must_use]
pub fn scan_directory(dir: &Path) -> CatalogScan {
    if !dir.is_dir() {
        return CatalogScan::Missing;
    }

    let read_dir = match std::fs::read_dir(dir) {
        Ok(read_dir) => read_dir,
        Err(e) => return CatalogScan::Failed(directory_read_error(dir, e)),
    };

    let mut entries: Vec<MediaFileEntry> = read_dir
        .filter_map(|entry| {
            let path = entry.ok()?.path();
            if !path.is_file() {
                return None;
            }
            MediaFileEntry::from_path(&path)
        })
        .collect();

    // Stable, so equal keys keep enumeration order.
    entries.sort_by_cached_key(|entry| entry.name.to_lowercase());

    log::debug!(
        "Found {} supported video file(s) in {}",
        entries.len(),
        dir.display()
    );
    CatalogScan::Found(entries)
}

/// Scans `dir` and returns its video files, or an empty list on any failure.
#[must_use]
pub fn find_media_files(dir: &Path) -> Vec<MediaFileEntry> {
    scan_directory(dir).into_entries()
}

//! Size conversion helpers shared by the catalog and the CLI report.

use std::path::Path;

/// Number of bytes in one MiB; sizes are reported as `bytes / BYTES_PER_MB`.
pub const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Converts a byte count to MiB.
#[must_use]
pub fn bytes_to_mb(bytes: u64) -> f64 {
    bytes as f64 / BYTES_PER_MB
}

/// Returns the size of the file at `path` in MiB, or `None` if it cannot be read.
#[must_use]
pub fn file_size_mb(path: &Path) -> Option<f64> {
    std::fs::metadata(path)
        .ok()
        .filter(std::fs::Metadata::is_file)
        .map(|metadata| bytes_to_mb(metadata.len()))
}

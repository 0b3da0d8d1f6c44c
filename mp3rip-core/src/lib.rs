//! Core library for converting video files to MP3 with ffmpeg.
//!
//! This crate provides video file discovery, input classification, output
//! path derivation, settings loading, and a blocking ffmpeg runner. It has no
//! terminal interaction of its own; see `mp3rip-cli` for the interactive front end.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use mp3rip_core::{ConversionRequest, Interrupt, Settings, TranscodeOutcome, TranscodeRunner};
//! use mp3rip_core::catalog::find_media_files;
//!
//! let settings = Settings::load();
//! let files = find_media_files(&settings.default_dir);
//!
//! if let Some(first) = files.first() {
//!     let request = ConversionRequest::for_local_file(&first.path);
//!     let runner = TranscodeRunner::new(Interrupt::new());
//!     match runner.run(&request, |time| println!("at {time}")).unwrap() {
//!         TranscodeOutcome::Success => println!("Wrote {}", request.output.display()),
//!         other => println!("Conversion did not succeed: {other}"),
//!     }
//! }
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod external;
pub mod paths;
pub mod transcode;
pub mod utils;

// Re-exports for public API
pub use catalog::{CatalogScan, MediaFileEntry, SUPPORTED_EXTENSIONS, find_media_files};
pub use config::Settings;
pub use error::{CoreError, CoreResult};
pub use paths::{ConversionRequest, derive_output_path, is_url, resolve_input};
pub use transcode::{Interrupt, TranscodeOutcome, TranscodeRunner};
pub use utils::{bytes_to_mb, file_size_mb};

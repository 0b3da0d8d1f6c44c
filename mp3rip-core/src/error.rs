// ============================================================================
// mp3rip-core/src/error.rs
// ============================================================================
//
// ERROR HANDLING: Error types for the core library
//
// Every fallible operation in mp3rip-core returns `CoreResult<T>`. Recoverable
// conditions that the interactive flow handles locally (missing directories,
// per-file stat failures, non-zero ffmpeg exits) are modelled as outcome
// enums in their own modules instead of errors.
//
// AI-ASSISTANT-INFO: Core error enum and constructor helpers

// ---- External crate imports ----
use thiserror::Error;

// ---- Standard library imports ----
use std::io;
use std::path::{Path, PathBuf};

/// Errors produced by the core library.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to read directory '{}': {source}", path.display())]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("File not found: {0}")]
    InputNotFound(String),

    #[error("Failed to start command '{cmd}': {source}")]
    CommandStart {
        cmd: String,
        #[source]
        source: io::Error,
    },

    #[error("Failed while waiting for command '{cmd}': {source}")]
    CommandWait {
        cmd: String,
        #[source]
        source: io::Error,
    },

    #[error("{0}")]
    OperationFailed(String),
}

impl CoreError {
    /// True when the error means the executable could not be located.
    #[must_use]
    pub fn is_command_not_found(&self) -> bool {
        matches!(
            self,
            Self::CommandStart { source, .. } if source.kind() == io::ErrorKind::NotFound
        )
    }
}

/// Result type for mp3rip-core operations.
pub type CoreResult<T> = Result<T, CoreError>;

pub(crate) fn directory_read_error(path: &Path, source: io::Error) -> CoreError {
    CoreError::DirectoryRead {
        path: path.to_path_buf(),
        source,
    }
}

pub(crate) fn command_start_error(cmd: &str, source: io::Error) -> CoreError {
    CoreError::CommandStart {
        cmd: cmd.to_string(),
        source,
    }
}

pub(crate) fn command_wait_error(cmd: &str, source: io::Error) -> CoreError {
    CoreError::CommandWait {
        cmd: cmd.to_string(),
        source,
    }
}

// ============================================================================
// mp3rip-core/src/external/mod.rs
// ============================================================================
//
// EXTERNAL TOOLS: Interactions with the ffmpeg executable
//
// This module encapsulates everything that launches a child process. The
// spawner traits keep the transcoder testable; `check_dependency` is a cheap
// start-up probe used for diagnostics only.
//
// AI-ASSISTANT-INFO: External tool interactions and abstractions for ffmpeg

// ---- Internal crate imports ----
use crate::error::{CoreResult, command_start_error};

// ---- Standard library imports ----
use std::process::{Command, Stdio};

// ============================================================================
// SUBMODULES
// ============================================================================

/// Contains traits and implementations for executing ffmpeg commands
pub mod ffmpeg_executor;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use ffmpeg_executor::{FfmpegProcess, FfmpegSpawner, SidecarProcess, SidecarSpawner};

/// Name of the transcoding executable, resolved through the search path.
pub const FFMPEG_BINARY: &str = "ffmpeg";

// ============================================================================
// DEPENDENCY CHECKING
// ============================================================================

/// Checks if a required external command is available and executable.
///
/// Runs `<cmd_name> -version` with all output discarded. Only the ability to
/// start the process matters; its exit status is ignored.
///
/// # Returns
///
/// * `Ok(())` - The command could be started
/// * `Err(CoreError::CommandStart)` - The command is missing or failed to start
pub fn check_dependency(cmd_name: &str) -> CoreResult<()> {
    match Command::new(cmd_name)
        .arg("-version")
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
    {
        Ok(_) => {
            log::debug!("Found dependency: {}", cmd_name);
            Ok(())
        }
        Err(e) => {
            log::debug!("Dependency check for '{}' failed: {}", cmd_name, e);
            Err(command_start_error(cmd_name, e))
        }
    }
}

/// Returns true if `ffmpeg` can be started from the search path.
#[must_use]
pub fn is_ffmpeg_available() -> bool {
    check_dependency(FFMPEG_BINARY).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_dependency_missing_command() {
        let err = check_dependency("mp3rip-definitely-not-a-real-binary").unwrap_err();
        assert!(err.is_command_not_found());
    }
}

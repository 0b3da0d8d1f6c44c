// ============================================================================
// mp3rip-cli/src/error.rs
// ============================================================================
//
// CLI ERROR HANDLING: Error types and utilities for the CLI
//
// The CLI reuses mp3rip-core's `CoreError` so errors from the library and from
// terminal I/O flow through the same type up to `main`, where anything left
// over is reported as an unexpected error.
//
// KEY COMPONENTS:
// - CliResult: Type alias for CLI operations
// - CliErrorContext: Attach a human-readable context to an error
//
// AI-ASSISTANT-INFO: CLI error handling utilities

// ---- Internal crate imports ----
use mp3rip_core::{CoreError, CoreResult};

// ---- Standard library imports ----
use std::fmt;

// ============================================================================
// RESULT TYPE ALIAS
// ============================================================================

/// Type alias for CLI results using CoreError.
pub type CliResult<T> = CoreResult<T>;

// ============================================================================
// ERROR CONVERSION UTILITIES
// ============================================================================

/// Extension trait for adding context to errors in the CLI.
///
/// Similar to anyhow's `context`, but produces a `CoreError`.
pub trait CliErrorContext<T> {
    /// Add context to an error.
    fn cli_context<C>(self, context: C) -> CliResult<T>
    where
        C: fmt::Display;
}

impl<T, E> CliErrorContext<T> for Result<T, E>
where
    E: Into<CoreError>,
{
    fn cli_context<C>(self, context: C) -> CliResult<T>
    where
        C: fmt::Display,
    {
        self.map_err(|e| {
            let core_error: CoreError = e.into();
            CoreError::OperationFailed(format!("{}: {}", context, core_error))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_cli_context_prefixes_message() {
        let result: Result<(), io::Error> = Err(io::Error::other("pipe closed"));
        let err = result.cli_context("Failed to write prompt").unwrap_err();
        assert!(matches!(err, CoreError::OperationFailed(_)));
        assert_eq!(err.to_string(), "Failed to write prompt: I/O error: pipe closed");
    }
}

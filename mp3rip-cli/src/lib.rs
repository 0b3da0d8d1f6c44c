// mp3rip-cli/src/lib.rs
//
// Library portion of the mp3rip CLI application.
// Contains the argument definition, terminal helpers and the interactive flow.

pub mod cli;
pub mod error;
pub mod flow;
pub mod logging;
pub mod prompt;
pub mod terminal;

// Re-export items needed by the binary or integration tests
pub use cli::Cli;
pub use error::{CliErrorContext, CliResult};
pub use flow::{FailureKind, FlowOutcome, InteractionFlow};
pub use prompt::Prompter;

// mp3rip-cli/src/main.rs
//
// Entry point for the mp3rip binary.
//
// Responsibilities:
// - Parsing arguments (only --help and --version).
// - Initializing logging and loading settings.
// - Running the blocking interactive session on a blocking thread.
// - Handling Ctrl-C: an in-flight ffmpeg is killed and reaped before the
//   process exits; otherwise the session is abandoned immediately.
// - Mapping the session outcome to the process exit code.

use clap::Parser;
use mp3rip_cli::{Cli, CliResult, FlowOutcome, InteractionFlow, Prompter, logging, terminal};
use mp3rip_core::external::is_ffmpeg_available;
use mp3rip_core::{Interrupt, Settings, TranscodeRunner};
use std::io;
use std::process::{self, ExitCode};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let _cli = Cli::parse();
    logging::init();
    if log::log_enabled!(log::Level::Debug) {
        log::debug!("ffmpeg available on PATH: {}", is_ffmpeg_available());
    }

    let settings = Settings::load();
    let interrupt = Interrupt::new();

    let session_interrupt = interrupt.clone();
    let mut session =
        tokio::task::spawn_blocking(move || run_session(&settings, session_interrupt));

    let joined = tokio::select! {
        joined = &mut session => joined,
        signal = tokio::signal::ctrl_c() => match signal {
            Ok(()) => {
                log::debug!("Ctrl-C received");
                interrupt.request();
                if interrupt.is_transcoding() {
                    let _ = session.await;
                }
                println!();
                println!("{}", terminal::farewell());
                // The session thread may be blocked on stdin, which would
                // stall runtime shutdown.
                process::exit(0);
            }
            Err(e) => {
                log::warn!("Unable to listen for Ctrl-C: {}", e);
                session.await
            }
        },
    };

    let result = match joined {
        Ok(result) => result.map_err(|e| e.to_string()),
        Err(e) => Err(e.to_string()),
    };
    let outcome = match result {
        Ok(outcome) => outcome,
        Err(message) => {
            println!("{}", terminal::error(format!("Unexpected error: {message}")));
            return ExitCode::FAILURE;
        }
    };

    log::debug!("Session finished: {:?}", outcome);
    if outcome == FlowOutcome::UserAborted {
        println!();
        println!("{}", terminal::farewell());
    }
    ExitCode::from(outcome.exit_code())
}

/// Runs one interactive session on the process's stdin and stdout.
fn run_session(settings: &Settings, interrupt: Interrupt) -> CliResult<FlowOutcome> {
    let stdin = io::stdin();
    let prompter = Prompter::new(stdin.lock(), io::stdout());
    let runner = TranscodeRunner::new(interrupt);
    InteractionFlow::new(settings, prompter, runner).run()
}

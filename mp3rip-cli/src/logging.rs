// ============================================================================
// mp3rip-cli/src/logging.rs
// ============================================================================
//
// LOGGING: env_logger setup for the CLI
//
// Diagnostic logs go to stderr so they never mix with the prompts on stdout.
// The default filter is `warn`; set RUST_LOG to see more:
// - RUST_LOG=debug: settings source, scan counts, the ffmpeg command line
// - RUST_LOG=trace: also files skipped during the scan
//
// AI-ASSISTANT-INFO: Logging initialization for the CLI

use console::style;
use std::io::Write;

/// Filter used when RUST_LOG is not set.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Initializes env_logger with a compact, colored format.
///
/// Safe to call more than once; later calls are ignored.
pub fn init() {
    let env = env_logger::Env::default().default_filter_or(DEFAULT_LOG_FILTER);
    let _ = env_logger::Builder::from_env(env)
        .format(|buf, record| {
            let level = match record.level() {
                log::Level::Error => style("ERROR").red().bold(),
                log::Level::Warn => style("WARN ").yellow(),
                log::Level::Info => style("INFO ").green(),
                log::Level::Debug => style("DEBUG").blue(),
                log::Level::Trace => style("TRACE").magenta(),
            };
            writeln!(buf, "{} {}", level.for_stderr(), record.args())
        })
        .try_init();

    log::debug!("Logger initialized");
}

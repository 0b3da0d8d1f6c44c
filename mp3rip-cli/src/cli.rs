// mp3rip-cli/src/cli.rs
//
// Defines the command-line argument structure using clap. The session itself
// is interactive, so the only flags are clap's built-in --help and --version.

use clap::Parser;

// --- CLI Argument Definition ---

#[derive(Parser, Debug)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "mp3rip: Convert video files to MP3",
    long_about = "Interactively pick a video file (or enter a path or URL) and convert \
its audio track to a 192 kbps MP3 with ffmpeg.\n\n\
The default root directory is read from DEFAULT_DIR in ../.env and can be \
overridden with the MP3RIP_DEFAULT_DIR environment variable."
)]
pub struct Cli {}

//! Audio extraction through ffmpeg.
//!
//! [`TranscodeRunner`] turns a [`ConversionRequest`] into an ffmpeg invocation
//! that drops the video stream and encodes the audio as MP3 at a fixed
//! bitrate, overwriting any existing output. The call blocks until ffmpeg
//! exits; the child's exit status is mapped to a [`TranscodeOutcome`].
//!
//! An [`Interrupt`] shared with the signal handler lets the caller stop a
//! running conversion. The child is killed and reaped before `run` returns,
//! so no ffmpeg process outlives the session.

use crate::error::CoreResult;
use crate::external::{FfmpegProcess, FfmpegSpawner, SidecarSpawner};
use crate::paths::ConversionRequest;

use ffmpeg_sidecar::command::FfmpegCommand;
use ffmpeg_sidecar::event::{FfmpegEvent, LogLevel};

use std::fmt;
use std::ops::ControlFlow;
use std::process::ExitStatus;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Audio codec passed to ffmpeg.
pub const AUDIO_CODEC: &str = "libmp3lame";

/// Target audio bitrate passed to ffmpeg.
pub const AUDIO_BITRATE: &str = "192k";

/// Exit codes meaning the executable could not be located: 127 from POSIX
/// shells, 9009 from the Windows command interpreter.
pub const NOT_FOUND_EXIT_CODES: &[i32] = &[127, 9009];

/// How a conversion ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranscodeOutcome {
    /// ffmpeg exited with status 0.
    Success,
    /// ffmpeg is not installed or not on the search path.
    ToolNotFound,
    /// ffmpeg exited unsuccessfully. `code` is `None` when killed by a signal.
    Failed { code: Option<i32> },
    /// The conversion was stopped through the [`Interrupt`].
    Interrupted,
}

impl TranscodeOutcome {
    /// Maps an exit code (as returned by `ExitStatus::code`) to an outcome.
    #[must_use]
    pub fn from_exit_code(code: Option<i32>) -> Self {
        match code {
            Some(0) => Self::Success,
            Some(code) if NOT_FOUND_EXIT_CODES.contains(&code) => Self::ToolNotFound,
            code => Self::Failed { code },
        }
    }

    /// Maps a process exit status to an outcome.
    #[must_use]
    pub fn from_status(status: ExitStatus) -> Self {
        if status.success() {
            Self::Success
        } else {
            Self::from_exit_code(status.code())
        }
    }

    #[must_use]
    pub fn is_success(self) -> bool {
        self == Self::Success
    }
}

impl fmt::Display for TranscodeOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => write!(f, "conversion succeeded"),
            Self::ToolNotFound => write!(f, "ffmpeg not found"),
            Self::Failed { code: Some(code) } => {
                write!(f, "ffmpeg failed with status code {code}")
            }
            Self::Failed { code: None } => write!(f, "ffmpeg was terminated by a signal"),
            Self::Interrupted => write!(f, "conversion interrupted"),
        }
    }
}

/// Cancellation state shared between the signal handler and the runner.
#[derive(Debug, Clone, Default)]
pub struct Interrupt {
    requested: Arc<AtomicBool>,
    transcoding: Arc<AtomicBool>,
}

impl Interrupt {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Asks any running conversion to stop.
    pub fn request(&self) {
        self.requested.store(true, Ordering::SeqCst);
    }

    #[must_use]
    pub fn is_requested(&self) -> bool {
        self.requested.load(Ordering::SeqCst)
    }

    /// True while a runner owns a live (or about to be spawned) ffmpeg child.
    #[must_use]
    pub fn is_transcoding(&self) -> bool {
        self.transcoding.load(Ordering::SeqCst)
    }

    fn begin_transcode(&self) -> TranscodeGuard<'_> {
        self.transcoding.store(true, Ordering::SeqCst);
        TranscodeGuard(self)
    }
}

/// Clears the transcoding flag on every exit path of `run`.
struct TranscodeGuard<'a>(&'a Interrupt);

impl Drop for TranscodeGuard<'_> {
    fn drop(&mut self) {
        self.0.transcoding.store(false, Ordering::SeqCst);
    }
}

/// Builds the ffmpeg command for a conversion request.
///
/// Equivalent to
/// `ffmpeg -hide_banner -i <input> -vn -c:a libmp3lame -b:a 192k -y <output>`.
#[must_use]
pub fn build_command(request: &ConversionRequest) -> FfmpegCommand {
    let mut cmd = FfmpegCommand::new();
    cmd.arg("-hide_banner");
    cmd.arg("-i");
    cmd.arg(&request.input);
    cmd.arg("-vn"); // No video
    cmd.arg("-c:a");
    cmd.arg(AUDIO_CODEC);
    cmd.arg("-b:a");
    cmd.arg(AUDIO_BITRATE);
    cmd.arg("-y"); // Overwrite without asking
    cmd.arg(&request.output);
    cmd
}

/// Runs ffmpeg conversions through an [`FfmpegSpawner`].
pub struct TranscodeRunner<S: FfmpegSpawner = SidecarSpawner> {
    spawner: S,
    interrupt: Interrupt,
}

impl TranscodeRunner<SidecarSpawner> {
    /// Creates a runner that launches the real ffmpeg executable.
    #[must_use]
    pub fn new(interrupt: Interrupt) -> Self {
        Self::with_spawner(SidecarSpawner, interrupt)
    }
}

impl<S: FfmpegSpawner> TranscodeRunner<S> {
    pub fn with_spawner(spawner: S, interrupt: Interrupt) -> Self {
        Self { spawner, interrupt }
    }

    #[must_use]
    pub fn interrupt(&self) -> &Interrupt {
        &self.interrupt
    }

    /// Converts `request.input` to an MP3 at `request.output`, blocking until done.
    ///
    /// `on_progress` receives ffmpeg's current output timestamp whenever it
    /// reports progress. Errors are returned only for failures that are not
    /// a plain ffmpeg exit status, such as being unable to wait on the child.
    pub fn run<P>(&self, request: &ConversionRequest, mut on_progress: P) -> CoreResult<TranscodeOutcome>
    where
        P: FnMut(&str),
    {
        let _guard = self.interrupt.begin_transcode();
        if self.interrupt.is_requested() {
            return Ok(TranscodeOutcome::Interrupted);
        }

        let cmd = build_command(request);
        log::debug!("Running ffmpeg command: {:?}", cmd);

        let mut process = match self.spawner.spawn(cmd) {
            Ok(process) => process,
            Err(e) if e.is_command_not_found() => {
                log::debug!("ffmpeg could not be started: {}", e);
                return Ok(TranscodeOutcome::ToolNotFound);
            }
            Err(e) => return Err(e),
        };

        let interrupt = &self.interrupt;
        let flow = process.handle_events(|event| {
            if interrupt.is_requested() {
                return ControlFlow::Break(());
            }
            match event {
                FfmpegEvent::Progress(progress) => on_progress(&progress.time),
                FfmpegEvent::Error(message)
                | FfmpegEvent::Log(LogLevel::Error | LogLevel::Fatal, message) => {
                    log::debug!("ffmpeg: {}", message);
                }
                _ => {}
            }
            ControlFlow::Continue(())
        })?;

        if flow.is_break() {
            log::debug!("Interrupt requested; killing ffmpeg");
            if let Err(e) = process.kill() {
                log::warn!("Failed to kill ffmpeg: {}", e);
            }
        }

        let status = process.wait()?;
        if self.interrupt.is_requested() {
            return Ok(TranscodeOutcome::Interrupted);
        }

        let outcome = TranscodeOutcome::from_status(status);
        log::debug!("ffmpeg finished: {} ({})", outcome, status);
        Ok(outcome)
    }
}

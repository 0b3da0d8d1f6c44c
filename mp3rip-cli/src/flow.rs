//! The interactive conversion session.
//!
//! One linear pass: choose a root directory, pick a file (or enter a path or
//! URL), resolve paths, run ffmpeg and report. Only the directory prompt and
//! the menu prompt loop; every other problem ends the session with a
//! [`FlowOutcome`].

use crate::error::CliResult;
use crate::prompt::Prompter;
use crate::terminal;

use mp3rip_core::catalog::{SUPPORTED_EXTENSIONS, find_media_files};
use mp3rip_core::external::FfmpegSpawner;
use mp3rip_core::{
    ConversionRequest, CoreError, MediaFileEntry, Settings, TranscodeOutcome, TranscodeRunner,
    file_size_mb, resolve_input,
};

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

/// Why a session ended without producing a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    /// The resolved local input does not exist.
    InputNotFound(String),
    /// ffmpeg is not installed or not on the search path.
    ToolNotFound,
    /// ffmpeg exited unsuccessfully.
    Transcode { code: Option<i32> },
}

/// How a session ended.
#[derive(Debug, Clone, PartialEq)]
pub enum FlowOutcome {
    /// The MP3 was written. `size_mb` is `None` if its size could not be read.
    Converted { output: PathBuf, size_mb: Option<f64> },
    /// The user declined to continue, closed the input, or interrupted ffmpeg.
    UserAborted,
    /// The session failed; the reason has already been reported.
    Failed(FailureKind),
}

impl FlowOutcome {
    /// Process exit code for this outcome.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Converted { .. } | Self::UserAborted => 0,
            Self::Failed(_) => 1,
        }
    }
}

/// What the user picked: a scanned file, or text typed at the manual prompt.
enum Selection {
    Listed(PathBuf),
    Entered(String),
}

const MANUAL_ENTRY_PROMPT: &str = "Enter video file path or URL:";
const MANUAL_ENTRY_HINT: &str = "Please enter a file path or URL";

/// Drives one session against a prompter and a transcode runner.
pub struct InteractionFlow<'a, R, W, S: FfmpegSpawner> {
    settings: &'a Settings,
    prompter: Prompter<R, W>,
    runner: TranscodeRunner<S>,
}

impl<'a, R: BufRead, W: Write, S: FfmpegSpawner> InteractionFlow<'a, R, W, S> {
    pub fn new(settings: &'a Settings, prompter: Prompter<R, W>, runner: TranscodeRunner<S>) -> Self {
        Self {
            settings,
            prompter,
            runner,
        }
    }

    /// Runs the session to completion.
    ///
    /// Errors are returned only for unexpected failures (terminal I/O, being
    /// unable to wait on ffmpeg); every anticipated failure is a
    /// [`FlowOutcome::Failed`].
    pub fn run(&mut self) -> CliResult<FlowOutcome> {
        for line in terminal::banner() {
            self.prompter.say(line)?;
        }
        self.prompter.blank()?;

        let Some(root_dir) = self.choose_root_directory()? else {
            return Ok(FlowOutcome::UserAborted);
        };
        self.prompter.blank()?;
        self.prompter
            .say(terminal::processing(format!("Working in: {}", root_dir.display())))?;

        let files = find_media_files(&root_dir);
        let Some(selection) = self.select_input(&files)? else {
            return Ok(FlowOutcome::UserAborted);
        };

        let request = match selection {
            Selection::Listed(path) => ConversionRequest::for_local_file(path),
            Selection::Entered(text) => ConversionRequest::for_input(resolve_input(&text, &root_dir)),
        };
        if !request.is_remote() && !request.input.exists() {
            let input = request.input.to_string_lossy().into_owned();
            self.prompter
                .say(terminal::error(CoreError::InputNotFound(input.clone())))?;
            return Ok(FlowOutcome::Failed(FailureKind::InputNotFound(input)));
        }

        self.prompter.blank()?;
        self.prompter
            .say(terminal::status("Input", request.input.display()))?;
        self.prompter
            .say(terminal::status("Output", request.output.display()))?;
        self.prompter.blank()?;

        self.convert(&request)
    }

    /// Offers the configured default directory, or reads another one.
    fn choose_root_directory(&mut self) -> CliResult<Option<PathBuf>> {
        let default_dir = &self.settings.default_dir;
        self.prompter
            .say(terminal::status("Default", default_dir.display()))?;

        match self
            .prompter
            .ask_yes_no("Use this as the root directory?", true)?
        {
            None => Ok(None),
            Some(true) => Ok(Some(default_dir.clone())),
            Some(false) => self.prompter.ask_existing_dir("Enter root directory path:"),
        }
    }

    /// Lets the user pick a scanned file or type a path/URL.
    ///
    /// Returns the scanned path of a menu pick, or the manual entry verbatim.
    fn select_input(&mut self, files: &[MediaFileEntry]) -> CliResult<Option<Selection>> {
        if files.is_empty() {
            self.prompter
                .say(terminal::warning("No supported video files found in the directory."))?;
            self.prompter.say(terminal::hint(format!(
                "Supported formats: {}",
                SUPPORTED_EXTENSIONS.join(", ")
            )))?;

            return match self
                .prompter
                .ask_yes_no("Would you like to enter a file path or URL manually?", true)?
            {
                Some(true) => self.read_manual_entry(),
                Some(false) | None => Ok(None),
            };
        }

        self.prompter
            .say(terminal::success(format!("Found {} video file(s)", files.len())))?;
        self.prompter.blank()?;
        self.prompter.say("Select a video file to convert:")?;
        for (i, file) in files.iter().enumerate() {
            self.prompter.say(terminal::menu_item(i + 1, file))?;
        }
        let manual_option = files.len() + 1;
        self.prompter.say(terminal::menu_item(
            manual_option,
            "Enter file path or URL manually",
        ))?;
        self.prompter.blank()?;

        match self.prompter.ask_menu_choice(manual_option)? {
            None => Ok(None),
            Some(index) if index == files.len() => self.read_manual_entry(),
            Some(index) => Ok(Some(Selection::Listed(files[index].path.clone()))),
        }
    }

    fn read_manual_entry(&mut self) -> CliResult<Option<Selection>> {
        Ok(self
            .prompter
            .ask_non_empty(MANUAL_ENTRY_PROMPT, MANUAL_ENTRY_HINT)?
            .map(Selection::Entered))
    }

    /// Runs ffmpeg and reports the result.
    fn convert(&mut self, request: &ConversionRequest) -> CliResult<FlowOutcome> {
        self.prompter.say(terminal::processing(format!(
            "Converting: {} -> {}",
            display_name(&request.input),
            display_name(&request.output)
        )))?;

        let spinner = terminal::start_spinner("ffmpeg started...");
        let result = self
            .runner
            .run(request, |time| spinner.set_message(format!("Converting... {time}")));
        spinner.finish_and_clear();

        match result? {
            TranscodeOutcome::Success => {
                self.prompter
                    .say(terminal::success(format!(
                        "Conversion finished: {}",
                        request.output.display()
                    )))?;
                let size_mb = file_size_mb(&request.output);
                if let Some(size_mb) = size_mb {
                    self.prompter
                        .say(terminal::status("Size", format!("{size_mb:.2} MB")))?;
                }
                Ok(FlowOutcome::Converted {
                    output: request.output.clone(),
                    size_mb,
                })
            }
            TranscodeOutcome::ToolNotFound => {
                self.prompter.say(terminal::error("ffmpeg not found."))?;
                self.prompter.say(terminal::hint(
                    "Please make sure ffmpeg is installed and on your PATH.",
                ))?;
                Ok(FlowOutcome::Failed(FailureKind::ToolNotFound))
            }
            TranscodeOutcome::Failed { code } => {
                let message = match code {
                    Some(code) => format!("Conversion failed with status code {code}"),
                    None => "Conversion failed: ffmpeg was terminated by a signal".to_string(),
                };
                self.prompter.say(terminal::error(message))?;
                Ok(FlowOutcome::Failed(FailureKind::Transcode { code }))
            }
            TranscodeOutcome::Interrupted => Ok(FlowOutcome::UserAborted),
        }
    }

    /// Consumes the flow, returning the prompter's output handle.
    pub fn into_output(self) -> W {
        self.prompter.into_output()
    }
}

/// Last path or URL segment, for the one-line conversion summary.
fn display_name(path: &Path) -> String {
    let text = path.to_string_lossy();
    text.rsplit(['/', '\\']).next().unwrap_or(&text).to_string()
}

//! Line-oriented prompting over any reader/writer pair.
//!
//! Every `ask_*` method returns `Ok(None)` when the input reaches end of file,
//! which the interaction flow treats as the user leaving the session.

use crate::error::{CliErrorContext, CliResult};
use crate::terminal;

use std::fmt::Display;
use std::io::{BufRead, Write};
use std::path::PathBuf;

/// Reads answers from `R` and writes prompts and messages to `W`.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writes one line of output.
    pub fn say(&mut self, line: impl Display) -> CliResult<()> {
        writeln!(self.output, "{line}").cli_context("Failed to write to terminal")
    }

    /// Writes an empty line.
    pub fn blank(&mut self) -> CliResult<()> {
        self.say("")
    }

    /// Shows `prompt` and reads one trimmed line, or `None` at end of input.
    pub fn ask(&mut self, prompt: &str) -> CliResult<Option<String>> {
        write!(self.output, "{} ", terminal::question(prompt))
            .and_then(|()| self.output.flush())
            .cli_context("Failed to write prompt")?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .cli_context("Failed to read from terminal")?;
        if read == 0 {
            log::debug!("End of input while waiting for: {}", prompt);
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Asks a yes/no question. An empty answer selects `default`.
    pub fn ask_yes_no(&mut self, question: &str, default: bool) -> CliResult<Option<bool>> {
        let choices = if default { "Y/n" } else { "y/N" };
        let prompt = format!("{question} ({choices}):");
        loop {
            let Some(answer) = self.ask(&prompt)? else {
                return Ok(None);
            };
            match answer.to_lowercase().as_str() {
                "" => return Ok(Some(default)),
                "y" | "yes" => return Ok(Some(true)),
                "n" | "no" => return Ok(Some(false)),
                _ => self.say(terminal::hint("Please enter 'y' or 'n'"))?,
            }
        }
    }

    /// Reads lines until a non-empty one is entered.
    pub fn ask_non_empty(&mut self, prompt: &str, retry_hint: &str) -> CliResult<Option<String>> {
        loop {
            match self.ask(prompt)? {
                None => return Ok(None),
                Some(answer) if !answer.is_empty() => return Ok(Some(answer)),
                Some(_) => self.say(terminal::hint(retry_hint))?,
            }
        }
    }

    /// Reads paths until one names an existing directory.
    pub fn ask_existing_dir(&mut self, prompt: &str) -> CliResult<Option<PathBuf>> {
        loop {
            let Some(answer) = self.ask_non_empty(prompt, "Please enter a directory path")? else {
                return Ok(None);
            };
            let dir = PathBuf::from(&answer);
            if dir.is_dir() {
                return Ok(Some(dir));
            }
            self.say(terminal::error(format!("Directory not found: {answer}")))?;
        }
    }

    /// Asks for a menu choice in `1..=option_count` and returns it zero-based.
    ///
    /// Non-numeric and out-of-range answers are rejected with a hint and the
    /// question is asked again, without limit.
    pub fn ask_menu_choice(&mut self, option_count: usize) -> CliResult<Option<usize>> {
        let prompt = format!("Enter choice (1-{option_count}):");
        loop {
            let Some(answer) = self.ask(&prompt)? else {
                return Ok(None);
            };
            match answer.parse::<usize>() {
                Ok(choice) if (1..=option_count).contains(&choice) => {
                    return Ok(Some(choice - 1));
                }
                Ok(_) => self.say(terminal::hint(format!(
                    "Please enter a number between 1 and {option_count}"
                )))?,
                Err(_) => self.say(terminal::hint("Please enter a valid number"))?,
            }
        }
    }

    /// Consumes the prompter, returning the output handle.
    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        console::set_colors_enabled(false);
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output_of(prompter: Prompter<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(prompter.into_output()).unwrap()
    }

    #[test]
    fn test_menu_choice_rejects_until_valid() {
        let mut p = prompter("0\n4\nabc\n\n2\n");
        assert_eq!(p.ask_menu_choice(3).unwrap(), Some(1));

        let out = output_of(p);
        assert_eq!(out.matches("Enter choice (1-3):").count(), 5);
        assert_eq!(out.matches("Please enter a number between 1 and 3").count(), 2);
        assert_eq!(out.matches("Please enter a valid number").count(), 2);
    }

    #[test]
    fn test_menu_choice_bounds() {
        let mut p = prompter("1\n");
        assert_eq!(p.ask_menu_choice(5).unwrap(), Some(0));

        let mut p = prompter("5\n");
        assert_eq!(p.ask_menu_choice(5).unwrap(), Some(4));

        let mut p = prompter(" 3 \n");
        assert_eq!(p.ask_menu_choice(5).unwrap(), Some(2));
    }

    #[test]
    fn test_menu_choice_end_of_input() {
        let mut p = prompter("abc\n");
        assert_eq!(p.ask_menu_choice(2).unwrap(), None);
    }

    #[test]
    fn test_yes_no_default_and_retry() {
        let mut p = prompter("\n");
        assert_eq!(p.ask_yes_no("Continue?", true).unwrap(), Some(true));

        let mut p = prompter("\n");
        assert_eq!(p.ask_yes_no("Continue?", false).unwrap(), Some(false));

        let mut p = prompter("maybe\nYES\n");
        assert_eq!(p.ask_yes_no("Continue?", false).unwrap(), Some(true));
        assert!(output_of(p).contains("Please enter 'y' or 'n'"));

        let mut p = prompter("N\n");
        assert_eq!(p.ask_yes_no("Continue?", true).unwrap(), Some(false));
    }

    #[test]
    fn test_yes_no_prompt_shows_default() {
        let mut p = prompter("y\n");
        p.ask_yes_no("Use this?", true).unwrap();
        assert!(output_of(p).contains("Use this? (Y/n):"));
    }

    #[test]
    fn test_ask_non_empty_skips_blank_lines() {
        let mut p = prompter("\n   \n/videos/a.mp4\n");
        assert_eq!(
            p.ask_non_empty("Path:", "Please enter a file path or URL").unwrap(),
            Some("/videos/a.mp4".to_string())
        );
        assert_eq!(output_of(p).matches("Please enter a file path or URL").count(), 2);
    }

    #[test]
    fn test_ask_existing_dir_reprompts() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("file.txt");
        std::fs::write(&file, "x").unwrap();

        let input = format!(
            "/surely/not/a/dir\n{}\n{}\n",
            file.display(),
            dir.path().display()
        );
        let mut p = prompter(&input);
        assert_eq!(
            p.ask_existing_dir("Enter root directory path:").unwrap(),
            Some(dir.path().to_path_buf())
        );
        assert_eq!(output_of(p).matches("Directory not found").count(), 2);
    }
}

use std::fmt;
use std::io;
use std::string::FromUtf8Error;

use thiserror::Error;

use crate::cmd::Command;
use crate::status::ExitStatus;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to launch `{program}`: {source}")]
    Launch {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Status(#[from] CommandError),

    #[error("command output is not valid UTF-8: {0}")]
    Utf8(#[from] FromUtf8Error),

    #[cfg(feature = "json")]
    #[error("command output is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// The failed-status error, if this is one.
    pub fn command_error(&self) -> Option<&CommandError> {
        match self {
            Error::Status(e) => Some(e),
            _ => None,
        }
    }
}

/// A command ran and did not succeed.
///
/// The `Display` form is meant to be shown to users as-is: it names the
/// command and includes whatever output was captured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandError {
    command: String,
    status: ExitStatus,
    stdout: Option<String>,
    stderr: Option<String>,
}

impl CommandError {
    pub fn new(command: &Command, status: ExitStatus) -> Self {
        Self { command: command.to_string(), status, stdout: None, stderr: None }
    }

    /// Attach captured streams.
    pub fn with_output(mut self, stdout: impl Into<String>, stderr: impl Into<String>) -> Self {
        self.stdout = Some(stdout.into());
        self.stderr = Some(stderr.into());
        self
    }

    /// The command as rendered at the time of failure.
    pub fn command(&self) -> &str { &self.command }
    pub fn status(&self) -> ExitStatus { self.status }
    pub fn stdout(&self) -> Option<&str> { self.stdout.as_deref() }
    pub fn stderr(&self) -> Option<&str> { self.stderr.as_deref() }

    fn fmt_header(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.status.code(), self.status.signal()) {
            (Some(code), _) => write!(f, "command exited with non-zero status code {}:", code),
            (None, Some(sig)) => write!(f, "command was terminated by signal {}:", sig),
            (None, None) => f.write_str("command exited with unknown status:"),
        }
    }

    fn fmt_command(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cmd = self.command.as_str();
        if cmd.chars().count() < 22 && !cmd.contains('\n') {
            return write!(f, " {}", cmd);
        }
        write!(f, "\n\n{}\n", indent(cmd.trim_end_matches('\n')))
    }
}

fn fmt_output(f: &mut fmt::Formatter<'_>, label: &str, output: Option<&str>) -> fmt::Result {
    match output {
        Some(out) if !out.is_empty() => {
            write!(f, "\n{}\n\n{}\n", label, indent(out.trim_end_matches('\n')))
        }
        _ => Ok(()),
    }
}

/// Prefix each non-blank line with two spaces.
fn indent(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 16);
    for line in text.split_inclusive('\n') {
        if !line.trim().is_empty() { out.push_str("  "); }
        out.push_str(line);
    }
    out
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_header(f)?;
        self.fmt_command(f)?;
        fmt_output(f, "Stdout:", self.stdout())?;
        fmt_output(f, "Stderr:", self.stderr())
    }
}

impl std::error::Error for CommandError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cmd::cmd;

    #[test]
    fn short_command_inline() {
        let c = cmd("echo").arg("some arg");
        let e = CommandError::new(&c, ExitStatus::from_code(42));
        assert_eq!(e.to_string(), "command exited with non-zero status code 42: echo 'some arg'");
    }

    #[test]
    fn long_command_with_output() {
        let c = cmd("grep").flag("fixed_strings").flag("recursive").args(["needle", "."]);
        let e = CommandError::new(&c, ExitStatus::from_code(2))
            .with_output("Stdout message.\nMore stdout.\n", "Stderr message.\nMore stderr.\n");
        let expected = "\
command exited with non-zero status code 2:

  grep --fixed-strings --recursive needle .

Stdout:

  Stdout message.
  More stdout.

Stderr:

  Stderr message.
  More stderr.
";
        assert_eq!(e.to_string(), expected);
    }

    #[test]
    fn empty_output_is_omitted() {
        let c = cmd("false");
        let e = CommandError::new(&c, ExitStatus::from_code(1)).with_output("", "boom\n");
        assert_eq!(e.to_string(), "command exited with non-zero status code 1: false\nStderr:\n\n  boom\n");
    }

    #[test]
    fn command_with_newline_goes_on_own_block() {
        let c = cmd("sh").args(["-c", "a\nb"]);
        let e = CommandError::new(&c, ExitStatus::from_code(3));
        assert_eq!(e.to_string(), "command exited with non-zero status code 3:\n\n  sh -c 'a\n  b'\n");
    }

    #[test]
    fn indent_skips_blank_lines() {
        assert_eq!(indent("a\n\nb"), "  a\n\n  b");
        assert_eq!(indent("one"), "  one");
    }

    #[test]
    fn signal_header() {
        let c = cmd("sleep").arg("100");
        let e = CommandError::new(&c, ExitStatus::from_signal(9));
        assert_eq!(e.to_string(), "command was terminated by signal 9: sleep 100");
    }

    #[test]
    fn wraps_into_crate_error() {
        let c = cmd("false");
        let err: Error = CommandError::new(&c, ExitStatus::from_code(1)).into();
        assert_eq!(err.to_string(), "command exited with non-zero status code 1: false");
        assert_eq!(err.command_error().map(|e| e.status().code()), Some(Some(1)));
    }
}

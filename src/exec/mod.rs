//! Execution interfaces.
//!
//! [`Executor`] is the seam to the operating system. Implementors only
//! provide [`spawn`](Executor::spawn) and [`replace`](Executor::replace);
//! the capturing, interactive, status-only and JSON modes are layered on
//! top as provided methods, so every executor fails the same way.

use std::io;
use std::process::Stdio;

use crate::cmd::Command;
use crate::error::{CommandError, Error, Result};
use crate::status::ExitStatus;
use crate::sys;

/// Where the child's stdout and stderr go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capture {
    /// Share the caller's streams.
    Inherit,
    /// Collect both streams into memory.
    Pipe,
}

/// A finished child. Streams are empty unless it ran with [`Capture::Pipe`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completed {
    pub status: ExitStatus,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}

impl Completed {
    pub fn new(status: ExitStatus) -> Self {
        Self { status, stdout: Vec::new(), stderr: Vec::new() }
    }

    pub fn with_output(mut self, stdout: impl Into<Vec<u8>>, stderr: impl Into<Vec<u8>>) -> Self {
        self.stdout = stdout.into();
        self.stderr = stderr.into();
        self
    }
}

pub trait Executor {
    /// Start `cmd` as a child, wait for it and collect whatever `capture` asks for.
    fn spawn(&self, cmd: &Command, capture: Capture) -> Result<Completed>;

    /// Turn the current process into `cmd`. Only returns on failure.
    fn replace(&self, cmd: &Command) -> Error;

    /// Run with inherited streams and report the status, whatever it is.
    fn status(&self, cmd: &Command) -> Result<ExitStatus> {
        Ok(self.spawn(cmd, Capture::Inherit)?.status)
    }

    /// Run with inherited streams; a failed status is an error.
    fn run(&self, cmd: &Command) -> Result<()> {
        let status = self.status(cmd)?;
        if !status.success() {
            return Err(CommandError::new(cmd, status).into());
        }
        Ok(())
    }

    /// Run capturing both streams and return stdout.
    fn output_bytes(&self, cmd: &Command) -> Result<Vec<u8>> {
        let done = self.spawn(cmd, Capture::Pipe)?;
        let status = done.status;
        if !status.success() {
            let err = CommandError::new(cmd, status).with_output(
                String::from_utf8_lossy(&done.stdout),
                String::from_utf8_lossy(&done.stderr),
            );
            return Err(err.into());
        }
        Ok(done.stdout)
    }

    /// Like [`output_bytes`](Executor::output_bytes), decoded as UTF-8.
    fn output(&self, cmd: &Command) -> Result<String> {
        Ok(String::from_utf8(self.output_bytes(cmd)?)?)
    }

    /// Parse captured stdout as JSON.
    #[cfg(feature = "json")]
    fn json<T>(&self, cmd: &Command) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
        Self: Sized,
    {
        Ok(serde_json::from_slice(&self.output_bytes(cmd)?)?)
    }
}

/// Runs commands through `std::process`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemExecutor;

impl SystemExecutor {
    fn build(&self, cmd: &Command) -> std::process::Command {
        let argv = cmd.get_args();
        let mut c = std::process::Command::new(&argv[0]);
        c.args(&argv[1..]);
        if let Some(dir) = cmd.get_current_dir() { c.current_dir(dir); }
        c.envs(cmd.get_envs());
        #[cfg(unix)]
        {
            use std::os::unix::process::CommandExt;
            // SAFETY: the hook only calls signal(2), which is async-signal-safe.
            unsafe {
                c.pre_exec(|| {
                    sys::restore_signals();
                    Ok(())
                });
            }
        }
        c
    }
}

fn launch_error(cmd: &Command, source: io::Error) -> Error {
    Error::Launch { program: cmd.get_program().to_string_lossy().into_owned(), source }
}

impl Executor for SystemExecutor {
    fn spawn(&self, cmd: &Command, capture: Capture) -> Result<Completed> {
        tracing::debug!(command = %cmd, cwd = ?cmd.get_current_dir(), ?capture, "spawning");
        let mut c = self.build(cmd);
        c.stdin(Stdio::inherit());
        let done = match capture {
            Capture::Inherit => {
                let status = c.status().map_err(|e| launch_error(cmd, e))?;
                Completed::new(status.into())
            }
            Capture::Pipe => {
                c.stdout(Stdio::piped()).stderr(Stdio::piped());
                let out = c.output().map_err(|e| launch_error(cmd, e))?;
                Completed::new(out.status.into()).with_output(out.stdout, out.stderr)
            }
        };
        tracing::debug!(command = %cmd, status = %done.status, "finished");
        Ok(done)
    }

    #[cfg(unix)]
    fn replace(&self, cmd: &Command) -> Error {
        use std::os::unix::process::CommandExt;
        tracing::debug!(command = %cmd, cwd = ?cmd.get_current_dir(), "replacing process image");
        let err = self.build(cmd).exec();
        launch_error(cmd, err)
    }

    #[cfg(not(unix))]
    fn replace(&self, cmd: &Command) -> Error {
        // No image replacement here: run to completion and hand its code back as ours.
        match self.status(cmd) {
            Ok(status) => std::process::exit(status.code().unwrap_or(1)),
            Err(err) => err,
        }
    }
}

impl Command {
    /// Replace the current process with this command. Never returns.
    ///
    /// If the program cannot be started the error is printed to stderr and
    /// the process exits with 127 (not found) or 126 (anything else).
    pub fn exec(&self) -> ! {
        let err = SystemExecutor.replace(self);
        tracing::error!(command = %self, error = %err, "exec failed");
        eprintln!("cmdkit: {}", err);
        let code = match &err {
            Error::Launch { source, .. } if source.kind() == io::ErrorKind::NotFound => 127,
            _ => 126,
        };
        std::process::exit(code)
    }

    /// Run with inherited streams and report the status without judging it.
    pub fn status(&self) -> Result<ExitStatus> { SystemExecutor.status(self) }

    /// Run with inherited streams; a failed status is an error.
    pub fn run(&self) -> Result<()> { SystemExecutor.run(self) }

    /// Run capturing output; returns stdout as text.
    pub fn output(&self) -> Result<String> { SystemExecutor.output(self) }

    pub fn out(&self) -> Result<String> { self.output() }

    /// Run capturing output; returns stdout untouched.
    pub fn output_bytes(&self) -> Result<Vec<u8>> { SystemExecutor.output_bytes(self) }

    /// Run capturing output and deserialize stdout as JSON.
    #[cfg(feature = "json")]
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T> { SystemExecutor.json(self) }
}

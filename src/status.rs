//! Process termination status.

use std::fmt;

/// How a child process terminated.
///
/// A process either exits with a code or is killed by a signal; exactly one
/// of [`code`](ExitStatus::code) and [`signal`](ExitStatus::signal) is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExitStatus {
    code: Option<i32>,
    signal: Option<i32>,
}

impl ExitStatus {
    /// Status of a process that exited normally with `code`.
    pub fn from_code(code: i32) -> Self { Self { code: Some(code), signal: None } }

    /// Status of a process terminated by signal number `signal`.
    pub fn from_signal(signal: i32) -> Self { Self { code: None, signal: Some(signal) } }

    pub fn success(&self) -> bool { self.code == Some(0) }

    /// Exit code, or `None` when the process was killed by a signal.
    pub fn code(&self) -> Option<i32> { self.code }

    /// Terminating signal, if any.
    pub fn signal(&self) -> Option<i32> { self.signal }
}

impl From<std::process::ExitStatus> for ExitStatus {
    fn from(status: std::process::ExitStatus) -> Self {
        if let Some(code) = status.code() {
            return Self::from_code(code);
        }
        #[cfg(unix)]
        {
            use std::os::unix::process::ExitStatusExt;
            if let Some(sig) = status.signal() {
                return Self::from_signal(sig);
            }
        }
        // Stopped/continued states never reach us through wait(); treat as failure.
        Self { code: None, signal: None }
    }
}

impl fmt::Display for ExitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.code, self.signal) {
            (Some(code), _) => write!(f, "exit code {}", code),
            (None, Some(sig)) => write!(f, "signal {}", sig),
            (None, None) => f.write_str("unknown status"),
        }
    }
}

//! Command modeling.
//!
//! A [`Command`] is a value: every builder method borrows the receiver and
//! hands back a new command, so a base command can be shared and extended
//! from several places without one caller seeing another's arguments.

use std::collections::BTreeMap;
use std::ffi::{OsStr, OsString};
use std::fmt;
use std::path::{Path, PathBuf};

use crate::render;

/// Start a command for `program`.
pub fn cmd(program: impl AsRef<OsStr>) -> Command { Command::new(program) }

/// Value of a named option.
///
/// `Flag(true)` encodes as `--name`, `Value(v)` as `--name=v`.
/// `Flag(false)` is dropped from the argument vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Opt {
    Flag(bool),
    Value(OsString),
}

impl From<bool> for Opt {
    fn from(b: bool) -> Self { Opt::Flag(b) }
}

macro_rules! opt_from_os {
    ($($t:ty),*) => {$(
        impl From<$t> for Opt {
            fn from(v: $t) -> Self { Opt::Value(OsString::from(v)) }
        }
    )*};
}
opt_from_os!(&str, String, &String, &OsStr, OsString, &Path, PathBuf);

macro_rules! opt_from_display {
    ($($t:ty),*) => {$(
        impl From<$t> for Opt {
            fn from(v: $t) -> Self { Opt::Value(v.to_string().into()) }
        }
    )*};
}
opt_from_display!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, char);

/// Encode one named option; `None` when the option is dropped.
fn encode_opt(name: &str, value: &Opt) -> Option<OsString> {
    let flag = name.replace('_', "-");
    match value {
        Opt::Flag(true) => Some(OsString::from(format!("--{}", flag))),
        Opt::Flag(false) => {
            tracing::warn!(option = %flag, "dropping option set to false");
            None
        }
        Opt::Value(v) => {
            let mut s = OsString::from(format!("--{}=", flag));
            s.push(v);
            Some(s)
        }
    }
}

/// An external program invocation that has not run yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    args: Vec<OsString>,
    cwd: Option<PathBuf>,
    env: BTreeMap<OsString, OsString>,
}

impl Command {
    pub fn new(program: impl AsRef<OsStr>) -> Self {
        Self { args: vec![program.as_ref().to_owned()], cwd: None, env: BTreeMap::new() }
    }

    /// Append one positional argument.
    pub fn arg(&self, arg: impl AsRef<OsStr>) -> Self {
        self.args(std::iter::once(arg))
    }

    /// Append positional arguments in order.
    pub fn args<I, S>(&self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let mut next = self.clone();
        next.args.extend(args.into_iter().map(|a| a.as_ref().to_owned()));
        next
    }

    /// Append a bare `--name` flag. Underscores in `name` become hyphens.
    pub fn flag(&self, name: &str) -> Self { self.opt(name, true) }

    /// Append `--name=value` (or `--name` when `value` is `true`).
    pub fn opt(&self, name: &str, value: impl Into<Opt>) -> Self {
        self.opts([(name, value.into())])
    }

    /// Append several named options, keeping their order.
    pub fn opts<I, N>(&self, opts: I) -> Self
    where
        I: IntoIterator<Item = (N, Opt)>,
        N: AsRef<str>,
    {
        let mut next = self.clone();
        for (name, value) in opts {
            if let Some(encoded) = encode_opt(name.as_ref(), &value) {
                next.args.push(encoded);
            }
        }
        next
    }

    /// Run in `dir`; `None` keeps the caller's working directory.
    pub fn current_dir<P: AsRef<Path>>(&self, dir: Option<P>) -> Self {
        let mut next = self.clone();
        next.cwd = dir.map(|d| d.as_ref().to_path_buf());
        next
    }

    /// Add one variable to the environment overlay.
    pub fn env(&self, key: impl AsRef<OsStr>, value: impl AsRef<OsStr>) -> Self {
        self.envs([(key, value)])
    }

    /// Add variables to the environment overlay. Later keys win.
    pub fn envs<I, K, V>(&self, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<OsStr>,
        V: AsRef<OsStr>,
    {
        let mut next = self.clone();
        for (k, v) in vars {
            next.env.insert(k.as_ref().to_owned(), v.as_ref().to_owned());
        }
        next
    }

    pub fn get_program(&self) -> &OsStr { &self.args[0] }

    /// The whole argument vector; index 0 is the program.
    pub fn get_args(&self) -> &[OsString] { &self.args }

    pub fn get_current_dir(&self) -> Option<&Path> { self.cwd.as_deref() }

    pub fn get_envs(&self) -> impl Iterator<Item = (&OsStr, &OsStr)> {
        self.env.iter().map(|(k, v)| (k.as_os_str(), v.as_os_str()))
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render::join(&self.args))
    }
}

//! cmdkit::prelude - grab-and-go imports

pub use crate::cmd::{cmd, Command, Opt};
pub use crate::error::{CommandError, Error, Result};
pub use crate::exec::{Capture, Completed, Executor, SystemExecutor};
pub use crate::status::ExitStatus;

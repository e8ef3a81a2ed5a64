//! cmdkit: immutable command builder with structured failures.
//!
//! ```no_run
//! use cmdkit::prelude::*;
//!
//! fn main() -> cmdkit::Result<()> {
//!     let git = cmd("git").arg("log");
//!     let subjects = git.opt("format", "%s").opt("max_count", 5).output()?;
//!     print!("{}", subjects);
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod cmd;
pub mod render;
pub mod status;
pub mod exec;
pub mod prelude;
pub mod macros;
mod sys;

pub use cmd::{cmd, Command, Opt};
pub use error::{CommandError, Error, Result};
pub use status::ExitStatus;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    #[test]
    fn version_matches_manifest() {
        assert_eq!(super::VERSION, "0.8.0");
    }
}

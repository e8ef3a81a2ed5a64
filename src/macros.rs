//! Terse macros for everyday usage

/// Build a [`Command`](crate::cmd::Command) in one expression.
///
/// Positional arguments come first, then `;` and named options. Option names
/// are identifiers, so `fixed_strings = true` becomes `--fixed-strings`.
///
/// ```
/// let ls = cmdkit::cmd!("ls", "dir1"; color = "never", recursive = true);
/// assert_eq!(ls.to_string(), "ls dir1 --color=never --recursive");
/// ```
#[macro_export]
macro_rules! cmd {
    ($prog:expr $(, $arg:expr)* $(; $($name:ident = $val:expr),* $(,)?)?) => {{
        $crate::cmd::Command::new($prog)
            $( .arg($arg) )*
            $( $( .opt(stringify!($name), $val) )* )?
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn positional_only() {
        let ls = cmd!("ls", "--recursive", "--size");
        assert_eq!(ls.get_args(), ["ls", "--recursive", "--size"]);
    }

    #[test]
    fn positional_and_named() {
        let ls = cmd!("ls", "dir1"; color = "never");
        assert_eq!(ls.get_args(), ["ls", "dir1", "--color=never"]);
    }

    #[test]
    fn program_alone_and_named_only() {
        assert_eq!(cmd!("true").get_args(), ["true"]);
        let grep = cmd!("grep"; fixed_strings = true, max_count = 3,);
        assert_eq!(grep.get_args(), ["grep", "--fixed-strings", "--max-count=3"]);
    }

    #[test]
    fn chains_like_any_command() {
        let cp = cmd!("cp"; verbose = true).args(["a", "b"]);
        assert_eq!(cp.get_args(), ["cp", "--verbose", "a", "b"]);
    }
}

//! Display rendering for argument vectors.
//!
//! The output is meant for people reading logs and error messages. It is
//! never handed back to a shell.

use std::borrow::Cow;
use std::ffi::OsStr;

/// Quote a single word for a POSIX shell.
///
/// Words made only of safe characters are returned bare. Anything else is
/// wrapped in single quotes, with embedded single quotes spelled `'"'"'`.
pub fn quote(s: &str) -> Cow<'_, str> {
    if s.is_empty() { return Cow::Borrowed("''"); }
    if is_simple_word(s) { return Cow::Borrowed(s); }
    let escaped = s.replace('\'', "'\"'\"'");
    Cow::Owned(format!("'{}'", escaped))
}

/// Quote every word and join them with single spaces.
pub fn join<I, S>(words: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let mut parts: Vec<String> = Vec::new();
    for w in words {
        let w = w.as_ref().to_string_lossy();
        parts.push(quote(&w).into_owned());
    }
    parts.join(" ")
}

fn is_simple_word(s: &str) -> bool {
    s.chars().all(|c| matches!(c,
        'a'..='z' | 'A'..='Z' | '0'..='9' | '_' | '-' | '.' | '/' | ':' | '+' | '%' | '@' | '=' | ','))
}

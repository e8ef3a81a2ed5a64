//! Platform hooks applied right before a program image is loaded.

/// Put back the default disposition for signals a host process often ignores
/// (broken pipe, CPU and file-size limits), so the next program sees them the
/// way a freshly started process would.
///
/// Runs between `fork` and `exec`; it must stay async-signal-safe.
#[cfg(unix)]
pub(crate) fn restore_signals() {
    for sig in [libc::SIGPIPE, libc::SIGXCPU, libc::SIGXFSZ] {
        // SAFETY: signal(2) with SIG_DFL is async-signal-safe and touches no Rust state.
        unsafe { libc::signal(sig, libc::SIG_DFL); }
    }
}

#[cfg(not(unix))]
pub(crate) fn restore_signals() {}

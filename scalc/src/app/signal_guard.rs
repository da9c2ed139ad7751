// Copyright (c) 2025 scalc contributors. Licensed under Apache License, Version 2.0.

//! The prompt turns off `ISIG`, so Ctrl+C reaches the line editor as a byte. Signals
//! sent from elsewhere (`kill`, a closed terminal) still terminate the process without
//! running destructors. [`SignalGuard`] watches for them on a background thread and
//! puts the terminal back before exiting.

use signal_hook::{consts::signal::{SIGHUP, SIGQUIT, SIGTERM},
                  iterator::{Handle, Signals}};
use sline::TerminalRestorer;
use std::{io, process, thread::JoinHandle};

/// Signals that end the session.
pub const TERMINATION_SIGNALS: [i32; 3] = [SIGTERM, SIGHUP, SIGQUIT];

/// Exit status for a process ended by `signal`, as a shell reports it.
#[must_use]
pub fn exit_code_for(signal: i32) -> i32 { 128 + signal }

/// Runs the watcher thread until dropped.
#[derive(Debug)]
pub struct SignalGuard {
    handle: Handle,
    thread: Option<JoinHandle<()>>,
}

impl SignalGuard {
    /// # Errors
    ///
    /// Returns an error if the signal handlers can't be registered.
    pub fn new(restorer: TerminalRestorer) -> io::Result<Self> {
        let mut signals = Signals::new(TERMINATION_SIGNALS)?;
        let handle = signals.handle();
        let thread = std::thread::Builder::new()
            .name("signal-guard".into())
            .spawn(move || {
                if let Some(signal) = signals.forever().next() {
                    tracing::warn!(message = "termination signal received", signal);
                    if let Err(err) = restorer.restore() {
                        tracing::warn!(message = "could not restore terminal", error = %err);
                    }
                    process::exit(exit_code_for(signal));
                }
            })?;
        Ok(Self {
            handle,
            thread: Some(thread),
        })
    }
}

impl Drop for SignalGuard {
    fn drop(&mut self) {
        self.handle.close();
        if let Some(thread) = self.thread.take() {
            drop(thread.join());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serial_test::serial;
    use sline::{TerminalMode, open_pty_pair};

    #[test]
    fn test_exit_code() {
        assert_eq!(exit_code_for(SIGTERM), 143);
        assert_eq!(exit_code_for(SIGHUP), 129);
    }

    #[test]
    #[serial]
    fn test_drop_stops_watcher_without_exiting() {
        let pty = open_pty_pair().unwrap();
        let mut mode = TerminalMode::new_tty(pty.tty.try_clone().unwrap());
        mode.setup().unwrap();
        let restorer = mode.restorer().unwrap().unwrap();

        let guard = SignalGuard::new(restorer).unwrap();
        drop(guard);

        mode.teardown().unwrap();
    }
}

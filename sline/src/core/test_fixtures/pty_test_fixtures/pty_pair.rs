// Copyright (c) 2025 scalc contributors. Licensed under Apache License, Version 2.0.

use rustix::{fd::OwnedFd,
             pty::{OpenptFlags, grantpt, openpt, ptsname, unlockpt}};
use std::{ffi::OsStr, fs::File, io, os::unix::ffi::OsStrExt, path::Path};

/// Both ends of a pseudo terminal. `tty` behaves like a user's terminal (it has termios
/// attributes), and bytes written to `controller` show up as input on `tty`.
#[derive(Debug)]
pub struct PtyPair {
    pub controller: OwnedFd,
    pub tty: File,
}

/// Opens a fresh PTY pair.
///
/// # Errors
///
/// Returns an error if the system has no free PTYs, or the follower device can't be
/// opened.
pub fn open_pty_pair() -> io::Result<PtyPair> {
    let controller = openpt(OpenptFlags::RDWR | OpenptFlags::NOCTTY)?;
    grantpt(&controller)?;
    unlockpt(&controller)?;

    let name = ptsname(&controller, Vec::new())?;
    let tty = File::options()
        .read(true)
        .write(true)
        .open(Path::new(OsStr::from_bytes(name.as_bytes())))?;

    Ok(PtyPair { controller, tty })
}

// This file is part of decomment, a comment stripper.
// Copyright 2022 Jeffrey Sharp
//
// SPDX-License-Identifier: GPL-3.0-or-later
//
// decomment is free software: you can redistribute it and/or modify it
// under the terms of the GNU General Public License as published
// by the Free Software Foundation, either version 3 of the License,
// or (at your option) any later version.
//
// decomment is distributed in the hope that it will be useful, but
// WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See
// the GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with decomment.  If not, see <http://www.gnu.org/licenses/>.

//! Stripping session.

use std::fs::File;
use std::io::{stdin, BufReader, Read, Write};
use std::process::ExitCode;

use log::{debug, info};

use crate::error::Error;
use crate::lang::int::scan_int;
use crate::lang::strip::{Report, Stripper};
use crate::location::Location;
use crate::message::{Message, Severity};

/// The type returned by session operations.  `Err` means the session cannot
/// continue; the cause has already been reported.
pub type Status = Result<(), ()>;

// ----------------------------------------------------------------------------

/// Stripping session.  Processes inputs one at a time, reports diagnostics,
/// and tallies them to decide the exit status.
#[derive(Debug)]
pub struct Session {
    quiet:         bool,
    warning_count: u16,
    error_count:   u16,
}

impl Session {
    /// Creates a new [`Session`].  If `quiet` is `true`, warnings about
    /// unterminated literals and comments are suppressed.
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            warning_count: 0,
            error_count:   0,
        }
    }

    /// Returns the count of warnings reported so far.  The count stops at
    /// [`u16::MAX`].
    pub fn warning_count(&self) -> u16 {
        self.warning_count
    }

    /// Returns the count of errors (including fatal errors) reported so far.
    /// The count stops at [`u16::MAX`].
    pub fn error_count(&self) -> u16 {
        self.error_count
    }

    /// Returns the process exit status for the messages reported so far.
    pub fn exit_code(&self) -> ExitCode {
        match self.error_count {
            0 => ExitCode::SUCCESS,
            _ => ExitCode::FAILURE,
        }
    }

    /// Strips the file at the given `path` into `out`.
    ///
    /// A file that cannot be opened or read is reported as an error, and the
    /// session continues.
    pub fn strip_file<W: Write>(&mut self, path: &str, out: &mut W) -> Status {
        match File::open(path) {
            Ok (f) => self.strip_from(path, BufReader::new(f), out),
            Err(e) => {
                let e = Error::Read(e);
                self.tell(Message::at(path, Location::UNKNOWN, Severity::Error, &e));
                Ok(())
            },
        }
    }

    /// Strips standard input into `out`.
    pub fn strip_stdin<W: Write>(&mut self, out: &mut W) -> Status {
        self.strip_from("stdin", stdin().lock(), out)
    }

    /// Strips the bytes read from `src` into `out`, using `path` as the
    /// pathname in messages.
    pub fn strip_from<R: Read, W: Write>(&mut self, path: &str, src: R, out: &mut W) -> Status {
        info!("stripping {}", path);

        match Stripper::new(src, &mut *out).run() {
            Ok(report) => {
                self.review(path, &report);
                Ok(())
            },
            Err(e @ Error::Write(_)) => {
                self.tell(Message::new(Severity::Fatal, &e));
                Err(())
            },
            Err(e) => {
                self.tell(Message::at(path, Location::UNKNOWN, Severity::Error, &e));
                Ok(())
            },
        }
    }

    /// Scans the integer literal `text` and prints its value to `out`.
    pub fn scan_number<W: Write>(&mut self, text: &str, out: &mut W) -> Status {
        let value = match scan_int(text.as_bytes()) {
            Ok (v) => v,
            Err(e) => {
                self.tell(Message::new(Severity::Error, &e));
                return Ok(())
            },
        };

        if let Err(e) = writeln!(out, "'{}' -> {}", text, value) {
            let e = Error::Write(e);
            self.tell(Message::new(Severity::Fatal, &e));
            return Err(())
        }
        Ok(())
    }

    fn review(&mut self, path: &str, report: &Report) {
        debug!("{}: removed {} comment(s)", path, report.comments);

        if self.quiet {
            return
        }

        if let Some((region, loc)) = report.unterminated {
            let text = format!("unterminated {}", region);
            self.tell(Message::at(path, loc, Severity::Warning, &text));
        }
    }

    /// Reports the given message.
    pub fn tell(&mut self, msg: Message) {
        match msg.severity {
            Severity::Normal  => (),
            Severity::Warning => self.warning_count = self.warning_count.saturating_add(1),
            Severity::Error   => self.error_count   = self.error_count  .saturating_add(1),
            Severity::Fatal   => self.error_count   = self.error_count  .saturating_add(1),
        }
        eprintln!("{}", msg.for_terminal());
    }
}

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;

    #[test]
    fn session_strip_from() {
        let mut session = Session::new(false);
        let mut out     = vec![];

        let status = session.strip_from("test.c", "a /* b */ c // d\n".as_bytes(), &mut out);

        assert_eq!( status,                  Ok(())        );
        assert_eq!( out,                     b"a  c \n"    );
        assert_eq!( session.warning_count(), 0             );
        assert_eq!( session.error_count(),   0             );
    }

    #[test]
    fn session_strip_from_unterminated() {
        let mut session = Session::new(false);
        let mut out     = vec![];

        let status = session.strip_from("test.c", "a /* b".as_bytes(), &mut out);

        assert_eq!( status,                  Ok(())        );
        assert_eq!( out,                     b"a "         );
        assert_eq!( session.warning_count(), 1             );
        assert_eq!( session.error_count(),   0             );
    }

    #[test]
    fn session_strip_from_unterminated_quiet() {
        let mut session = Session::new(true);
        let mut out     = vec![];

        let _ = session.strip_from("test.c", "\"abc".as_bytes(), &mut out);

        assert_eq!( session.warning_count(), 0 );
    }

    #[test]
    fn session_strip_several_inputs() {
        let mut session = Session::new(false);
        let mut out     = vec![];

        let _ = session.strip_from("a.c", "x; // a\n".as_bytes(), &mut out);
        let _ = session.strip_from("b.c", "y; /* b */\n".as_bytes(), &mut out);

        assert_eq!( out, b"x; \ny; \n" );
    }

    #[test]
    fn session_strip_file_missing() {
        let mut session = Session::new(false);
        let mut out     = vec![];

        let status = session.strip_file("/nonexistent/decomment/test.c", &mut out);

        assert_eq!( status,                Ok(()) );
        assert_eq!( session.error_count(), 1      );
    }

    #[test]
    fn session_strip_write_failure_is_fatal() {
        struct Full;

        impl Write for Full {
            fn write(&mut self, _: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::Other, "device full"))
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let mut session = Session::new(false);

        let status = session.strip_from("test.c", "x".as_bytes(), &mut Full);

        assert_eq!( status,                Err(()) );
        assert_eq!( session.error_count(), 1       );
    }

    #[test]
    fn session_scan_number() {
        let mut session = Session::new(false);
        let mut out     = vec![];

        let status = session.scan_number("0x1F", &mut out);

        assert_eq!( status, Ok(()) );
        assert_eq!( out,    b"'0x1F' -> 31\n" );
    }

    #[test]
    fn session_scan_number_overflow() {
        let mut session = Session::new(false);
        let mut out     = vec![];

        let _ = session.scan_number("99999999999999999999", &mut out);

        assert_eq!( session.error_count(), 1 );
        assert!(    out.is_empty() );
    }

    #[test]
    fn session_counts_saturate() {
        let mut session = Session {
            quiet:         false,
            warning_count: u16::MAX,
            error_count:   u16::MAX,
        };

        session.tell(Message::new(Severity::Warning, &"w"));
        session.tell(Message::new(Severity::Error,   &"e"));
        session.tell(Message::new(Severity::Fatal,   &"f"));

        assert_eq!( session.warning_count(), u16::MAX );
        assert_eq!( session.error_count(),   u16::MAX );
    }
}

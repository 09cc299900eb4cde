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

//! Diagnostic messages.

use std::fmt::{self, Display, Formatter};

use colored::*;

use crate::location::Location;

// -----------------------------------------------------------------------------

/// A diagnostic message.
#[derive(Copy, Clone)]
pub struct Message<'a> {
    /// Severity of the message.
    pub severity: Severity,

    /// Path of a source file related to the message, or the program name if no
    /// source file is related.
    pub source: &'a str,

    /// Textual location within source file related to the message, or
    /// [`Location::UNKNOWN`] if no location is related.
    pub location: Location,

    /// Message content.
    content: &'a dyn Display,
}

impl<'a> Message<'a> {
    /// Creates a `Message` with the given severity and content, without a
    /// related source file path or textual location.
    #[inline]
    pub fn new(sev: Severity, content: &'a dyn Display) -> Self {
        Self::at(crate::PROGRAM_NAME, Location::UNKNOWN, sev, content)
    }

    /// Creates a `Message` with the given severity and content, related to
    /// the given source file path and textual location.
    #[inline]
    pub fn at(path: &'a str, loc: Location, sev: Severity, content: &'a dyn Display) -> Self {
        Self {
            severity: sev,
            source:   path,
            location: loc,
            content,
        }
    }

    /// Returns a wrapper over the message that implements [`Display`] with
    /// the severity highlighted for a terminal.
    pub fn for_terminal(&self) -> impl Display + '_ {
        ForTerminal(self)
    }

    fn write_prefix(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(self.source)?;
        if self.location.is_known() {
            write!(f, ":{}", self.location)?;
        }
        f.write_str(": ")
    }
}

// Display is used when a Message is printed as output.
impl Display for Message<'_> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        self.write_prefix(f)?;
        write!(f, "{}{}", self.severity, self.content)
    }
}

impl fmt::Debug for Message<'_> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "Message({})", self)
    }
}

struct ForTerminal<'m>(&'m Message<'m>);

impl Display for ForTerminal<'_> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let msg   = self.0;
        let label = msg.severity.to_string();

        msg.write_prefix(f)?;
        match msg.severity {
            Severity::Normal  => write!(f, "{}",   msg.content),
            Severity::Warning => write!(f, "{}{}", label.yellow().bold(), msg.content),
            Severity::Error   => write!(f, "{}{}", label.red().bold(),    msg.content),
            Severity::Fatal   => write!(f, "{}{}", label.red().bold(),    msg.content),
        }
    }
}

// -----------------------------------------------------------------------------

/// Message severity levels.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub enum Severity {
    /// For informational messages.
    Normal,

    /// For potential problems that do not prevent complete output, such as an
    /// unterminated comment.
    Warning,

    /// For problems that prevent processing one input.  Processing continues
    /// with the next input, but the program exits unsuccessfully.
    Error,

    /// For severe, unrecoverable problems, such as a failure to write output.
    /// The program terminates immediately.
    Fatal,
}

// Display is used when a Severity is printed in a message.
impl Display for Severity {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(match *self {
            Severity::Normal  => "",
            Severity::Warning => "warning: ",
            Severity::Error   => "error: ",
            Severity::Fatal   => "fatal: ",
        })
    }
}

// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_without_location() {
        assert_eq!(
            format!("{}", Message::at("foo.c", Location::UNKNOWN, Severity::Error, &"file not found")),
            "foo.c: error: file not found"
        )
    }

    #[test]
    fn message_with_location() {
        assert_eq!(
            format!("{}", Message::at("foo.c", Location::new(2, 3), Severity::Warning, &"unterminated block comment")),
            "foo.c:2:3: warning: unterminated block comment"
        )
    }

    #[test]
    fn message_program() {
        assert_eq!(
            format!("{}", Message::new(Severity::Fatal, &"write failed")),
            "decomment: fatal: write failed"
        )
    }

    #[test]
    fn message_normal() {
        assert_eq!(
            format!("{}", Message::new(Severity::Normal, &"hello")),
            "decomment: hello"
        )
    }

    #[test]
    fn message_for_terminal_keeps_text() {
        let msg  = Message::at("foo.c", Location::new(1, 1), Severity::Warning, &"oops");
        let text = msg.for_terminal().to_string();

        assert!( text.starts_with("foo.c:1:1: ") );
        assert!( text.contains("warning: ") );
        assert!( text.ends_with("oops") );
    }
}

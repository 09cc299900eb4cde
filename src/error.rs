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

//! Error types.

use std::io;

use thiserror::Error as ThisError;

/// Errors that abort a scanner run.
///
/// Malformed input is never an error: an unterminated literal or comment
/// simply ends the run.  Only failures of the underlying streams, and numbers
/// too large to represent, are reported.
#[derive(ThisError, Debug)]
pub enum Error {
    /// The input stream reported a fault.
    #[error("read failed: {0}")]
    Read(#[source] io::Error),

    /// The output stream reported a fault.
    #[error("write failed: {0}")]
    Write(#[source] io::Error),

    /// An integer literal does not fit in 64 bits.
    #[error("integer literal out of range")]
    Overflow,
}

/// The type returned by fallible scanner operations.
pub type Result<T = (), E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_read() {
        let e = Error::Read(io::Error::new(io::ErrorKind::Other, "disk on fire"));

        assert_eq!( e.to_string(), "read failed: disk on fire" );
    }

    #[test]
    fn error_display_overflow() {
        assert_eq!( Error::Overflow.to_string(), "integer literal out of range" );
    }
}

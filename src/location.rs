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

//! Source locations.

use std::fmt::{self, Display, Formatter};

/// A source code location.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub struct Location {
    /// The 1-based line number, or `0` to indicate an unknown line.
    pub line: u32,

    /// The 1-based column number, or `0` to indicate an unknown column.
    /// Columns count bytes, not characters.
    pub column: u32,
}

impl Location {
    pub const UNKNOWN: Self = Self::new(0, 0);
    pub const BOF:     Self = Self::new(1, 1);

    pub const fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }

    /// Returns `true` if the location refers to a known line.
    pub const fn is_known(&self) -> bool {
        self.line != 0
    }

    /// Moves the location past the given `byte`.
    #[inline]
    pub fn step(&mut self, byte: u8) {
        if byte == b'\n' {
            self.line   = self.line.saturating_add(1);
            self.column = 1;
        } else {
            self.column = self.column.saturating_add(1);
        }
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match (self.line, self.column) {
            (0, 0) => Ok(()),
            (l, 0) => write!(f, "{}",    l   ),
            (l, c) => write!(f, "{}:{}", l, c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_unknown() {
        assert_eq!( Location::UNKNOWN, Location::new(0, 0) );
        assert!(   !Location::UNKNOWN.is_known() );
    }

    #[test]
    fn location_step() {
        let mut loc = Location::BOF;

        loc.step(b'a');
        assert_eq!( loc, Location::new(1, 2) );

        loc.step(b'\n');
        assert_eq!( loc, Location::new(2, 1) );

        loc.step(b'\r');
        assert_eq!( loc, Location::new(2, 2) );
    }

    #[test]
    fn location_step_saturates() {
        let mut loc = Location::new(1, u32::MAX);

        loc.step(b'a');
        assert_eq!( loc, Location::new(1, u32::MAX) );

        let mut loc = Location::new(u32::MAX, 5);

        loc.step(b'\n');
        assert_eq!( loc, Location::new(u32::MAX, 1) );
    }

    #[test]
    fn location_display_fmt_0_0() {
        assert_eq!( format!("{}", Location::new(0, 0)), "" );
    }

    #[test]
    fn location_display_fmt_n_0() {
        assert_eq!( format!("{}", Location::new(1, 0)), "1" );
    }

    #[test]
    fn location_display_fmt_n_n() {
        assert_eq!( format!("{}", Location::new(1, 2)), "1:2" );
    }
}

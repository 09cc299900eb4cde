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

//! Number support.

/// Numeric bases of C integer literals.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub enum Base {
    /// Octal, selected by a leading `0`.
    Oct,

    /// Decimal.
    Dec,

    /// Hexadecimal, selected by a leading `0x` or `0X`.
    Hex,
}

impl Base {
    /// Returns the count of digits used to represent numbers in the base.
    #[inline]
    pub const fn radix(self) -> u8 {
        use Base::*;

        match self {
            Oct =>  8,
            Dec => 10,
            Hex => 16,
        }
    }

    /// Returns `true` if `digit` is a valid digit value in the base.
    #[inline]
    pub const fn accepts(self, digit: u8) -> bool {
        digit < self.radix()
    }
}

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

//! Integer literal scanner.
//!
//! ### Literal format:
//!
//! ```text
//! [junk] [sign | 0x | 0] digits
//!        ─┬─────────────
//!         ├─ +  -  → decimal
//!         ├─ 0x 0X → hexadecimal
//!         ├─ 0     → octal
//!         └─ 1-9   → decimal
//! ```
//!
//! Bytes before the literal that cannot begin one are skipped.  Scanning
//! stops at the first byte that is not a digit of the selected base.

use std::io::Read;

use log::trace;

use crate::error::{Error, Result};
use crate::num::Base;
use super::input::{Cursor, LogicalChar};

// ----------------------------------------------------------------------------

/// Logical characters recognized by the integer literal scanner.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[repr(u8)]
enum Char {
    // Digits
    Dig0, Dig1, Dig2, Dig3, Dig4, Dig5, Dig6, Dig7,
    Dig8, Dig9, DigA, DigB, DigC, DigD, DigE, DigF,

    // Non-digits
    Pos  = 0x80, // +
    Neg  = 0x81, // -
    LetX = 0x82, // X x
    Etc  = 0x83, // everything else
    Eof  = 0x84, // end of input
}

impl LogicalChar for Char {
    const NON_ASCII: Self = Self::Etc;
    const EOF:       Self = Self::Eof;
}

impl Char {
    /// Returns the digit value if the character is a digit; otherwise,
    /// returns a value greater than any radix.
    #[inline]
    const fn digit(self) -> u8 {
        self as u8
    }
}

/// Mapping of 7-bit ASCII to logical characters.
static CHARS: [Char; 128] = {
    use Char::*;
    const __: Char = Etc;
[
//  x0      x1      x2      x3      x4      x5      x6      x7
//  x8      x9      xA      xB      xC      xD      xE      xF
    __,     __,     __,     __,     __,     __,     __,     __,     // 0x │········│
    __,     __,     __,     __,     __,     __,     __,     __,     // 0x │·tnvfr··│
    __,     __,     __,     __,     __,     __,     __,     __,     // 1x │········│
    __,     __,     __,     __,     __,     __,     __,     __,     // 1x │········│
    __,     __,     __,     __,     __,     __,     __,     __,     // 2x │ !"#$%&'│
    __,     __,     __,     Pos,    __,     Neg,    __,     __,     // 2x │()*+,-./│
    Dig0,   Dig1,   Dig2,   Dig3,   Dig4,   Dig5,   Dig6,   Dig7,   // 3x │01234567│
    Dig8,   Dig9,   __,     __,     __,     __,     __,     __,     // 3x │89:;<=>?│
    __,     DigA,   DigB,   DigC,   DigD,   DigE,   DigF,   __,     // 4x │@ABCDEFG│
    __,     __,     __,     __,     __,     __,     __,     __,     // 4x │HIJKLMNO│
    __,     __,     __,     __,     __,     __,     __,     __,     // 5x │PQRSTUVW│
    LetX,   __,     __,     __,     __,     __,     __,     __,     // 5x │XYZ[\]^_│
    __,     DigA,   DigB,   DigC,   DigD,   DigE,   DigF,   __,     // 6x │`abcdefg│
    __,     __,     __,     __,     __,     __,     __,     __,     // 6x │hijklmno│
    __,     __,     __,     __,     __,     __,     __,     __,     // 7x │pqrstuvw│
    LetX,   __,     __,     __,     __,     __,     __,     __,     // 7x │xyz{|}~░│
]};

// ----------------------------------------------------------------------------

/// Integer literal scanner states.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum State {
    /// Before the literal.
    Start,

    /// After a leading `0`.  Either a `0x` prefix or an octal literal.
    Zero,

    /// In the digits of a literal.
    Digits(Base),
}

/// Result of one scanner step.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Step {
    /// Continue scanning in the given state.
    Next(State),

    /// Stop scanning.
    Exit,
}

// ----------------------------------------------------------------------------

struct IntScanner<R: Read> {
    input:     Cursor<R>,
    negative:  bool,
    magnitude: u64,
}

impl<R: Read> IntScanner<R> {
    fn step(&mut self, state: State) -> Result<Step> {
        use Char::*;
        use State::*;

        let (ch, byte) = self.input.classify(&CHARS);
        trace!("{}: {:?}: {:?}", self.input.position(), state, byte as char);

        Ok(match (state, ch) {
            (_,     Eof)                       => Step::Exit,
            (Start, Pos)                       => self.consume(Digits(Base::Dec))?,
            (Start, Neg)                       => { self.negative = true; self.consume(Digits(Base::Dec))? },
            (Start, Dig0)                      => self.consume(Zero)?,
            (Start, c) if Base::Dec.accepts(c.digit())
                                               => Step::Next(Digits(Base::Dec)),
            (Start, _)                         => self.consume(Start)?,
            (Zero,  LetX)                      => self.consume(Digits(Base::Hex))?,
            (Zero,  _)                         => Step::Next(Digits(Base::Oct)),
            (Digits(base), c)                  => self.accumulate(base, c.digit())?,
        })
    }

    #[inline]
    fn consume(&mut self, next: State) -> Result<Step> {
        self.input.advance()?;
        Ok(Step::Next(next))
    }

    fn accumulate(&mut self, base: Base, digit: u8) -> Result<Step> {
        if !base.accepts(digit) {
            return Ok(Step::Exit)
        }

        self.magnitude = self.magnitude
            .checked_mul(base.radix() as u64)
            .and_then(|v| v.checked_add(digit as u64))
            .ok_or(Error::Overflow)?;

        self.consume(State::Digits(base))
    }

    fn value(&self) -> Result<i64> {
        let magnitude = self.magnitude as i128;
        let value     = if self.negative { -magnitude } else { magnitude };
        i64::try_from(value).map_err(|_| Error::Overflow)
    }
}

/// Scans a C integer literal from `input` and returns its value.
///
/// Input without any digits yields `0`.  Returns [`Error::Overflow`] if the
/// value does not fit in an `i64`.
pub fn scan_int<R: Read>(input: R) -> Result<i64> {
    let mut scanner = IntScanner {
        input:     Cursor::new(input),
        negative:  false,
        magnitude: 0,
    };

    scanner.input.advance()?;

    let mut state = State::Start;
    while let Step::Next(s) = scanner.step(state)? {
        state = s;
    }

    scanner.value()
}

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(s: &str) -> Result<i64> {
        scan_int(s.as_bytes())
    }

    #[test]
    fn scan_int_empty() {
        assert_eq!( scan("").unwrap(), 0 );
    }

    #[test]
    fn scan_int_dec() {
        assert_eq!( scan("42").unwrap(),      42 );
        assert_eq!( scan("1234567").unwrap(), 1234567 );
    }

    #[test]
    fn scan_int_signed() {
        assert_eq!( scan("+7").unwrap(),   7 );
        assert_eq!( scan("-42").unwrap(), -42 );
    }

    #[test]
    fn scan_int_sign_selects_dec() {
        assert_eq!( scan("+0x10").unwrap(), 0 );
        assert_eq!( scan("-017").unwrap(), -17 );
    }

    #[test]
    fn scan_int_oct() {
        assert_eq!( scan("0").unwrap(),    0 );
        assert_eq!( scan("017").unwrap(), 15 );
        assert_eq!( scan("019").unwrap(),  1 );
    }

    #[test]
    fn scan_int_hex() {
        assert_eq!( scan("0x1F").unwrap(),     31 );
        assert_eq!( scan("0X1f").unwrap(),     31 );
        assert_eq!( scan("0xdeadBEEF").unwrap(), 0xDEAD_BEEF );
        assert_eq!( scan("0x").unwrap(),        0 );
    }

    #[test]
    fn scan_int_stops_at_non_digit() {
        assert_eq!( scan("12abc").unwrap(), 12 );
        assert_eq!( scan("0x1g2").unwrap(),  1 );
    }

    #[test]
    fn scan_int_skips_leading_junk() {
        assert_eq!( scan("x12").unwrap(),   12 );
        assert_eq!( scan("abc 9").unwrap(),  9 );
        assert_eq!( scan("junk").unwrap(),   0 );
    }

    #[test]
    fn scan_int_limits() {
        assert_eq!( scan( "9223372036854775807").unwrap(), i64::MAX );
        assert_eq!( scan("-9223372036854775808").unwrap(), i64::MIN );
    }

    #[test]
    fn scan_int_overflow() {
        assert!( matches!(scan("9223372036854775808"),  Err(Error::Overflow)) );
        assert!( matches!(scan("18446744073709551616"), Err(Error::Overflow)) );
        assert!( matches!(scan("0x10000000000000000"), Err(Error::Overflow)) );
    }
}

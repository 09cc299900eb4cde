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

//! Input cursor and logical character set trait.

use std::io::{Bytes, Read};

use crate::error::{Error, Result};
use crate::location::Location;

// ----------------------------------------------------------------------------

/// Trait for logical characters yielded by a [`Cursor`].
///
/// A 'logical character' is effectively a character equivalence class: a
/// value that represents a set of input bytes which receive identical
/// treatment by some scanner.  A 'logical character set' is a set that
/// contains sufficient logical characters to represent all byte values plus
/// an additional logical character to indicate the end of input.
///
pub trait LogicalChar: Copy + Eq {
    /// Logical character that represents a byte beyond the 7-bit ASCII range.
    const NON_ASCII: Self;

    /// Logical character that represents an end-of-input condition.
    const EOF: Self;
}

// ----------------------------------------------------------------------------

/// Input cursor specialized for scanning.
///
/// A `Cursor` takes a byte stream as input and provides a forward-only cursor
/// over a sequence of logical characters.  The cursor holds exactly one byte
/// of lookahead: the byte at the current position, which may be classified
/// any number of times before it is consumed by [`Self::advance()`].
///
/// Faults reported by the underlying stream surface as [`Error::Read`].
/// The stream is not read again after it reports end of input.
///
#[derive(Debug)]
pub struct Cursor<R: Read> {
    cur:   Option<u8>,
    pos:   usize,
    loc:   Location,
    bytes: Bytes<R>,
    done:  bool,
}

impl<R: Read> Cursor<R> {
    /// Creates a new [`Cursor`] over the given reader.
    ///
    /// The cursor is positioned before the first byte; call
    /// [`Self::advance()`] once to load it.
    #[inline]
    pub fn new(reader: R) -> Self {
        Self {
            cur:   None,
            pos:   0,
            loc:   Location::BOF,
            bytes: reader.bytes(),
            done:  false,
        }
    }

    /// Advances the cursor to the next byte.
    ///
    /// If the cursor is positioned before the end of input, this method
    /// increments the [`Self::position()`] of the cursor.  Otherwise, this
    /// method does nothing.
    #[inline]
    pub fn advance(&mut self) -> Result {
        if let Some(b) = self.cur {
            self.pos += 1;
            self.loc.step(b);
        }

        if self.done {
            return Ok(())
        }

        self.cur  = self.bytes.next().transpose().map_err(Error::Read)?;
        self.done = self.cur.is_none();
        Ok(())
    }

    /// Returns the current position of the cursor.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Returns the line and column of the byte at the current position.
    #[inline]
    pub fn location(&self) -> Location {
        self.loc
    }

    /// Classifies the byte at the current position of the cursor as some
    /// logical character of type `C` using the given character `map`.
    #[inline]
    pub fn classify<C: LogicalChar>(&self, map: &[C; 128]) -> (C, u8) {
        match self.cur {
            Some(b) if b < 128 => (map[b as usize], b),
            Some(b)            => (C::NON_ASCII,    b),
            None               => (C::EOF,          0),
        }
    }
}

#[cfg(test)]
pub mod tests {
    use std::io;

    use super::*;
    use Char::*;

    #[derive(Clone, Copy, PartialEq, Eq, Debug)]
    enum Char { Lc, Uc, Etc, Non, Eof }

    impl LogicalChar for Char {
        const NON_ASCII: Self = Non;
        const EOF:       Self = Eof;
    }

    /// Mapping of 7-bit ASCII to logical characters.
    static CHARS: [Char; 128] = {
        const __: Char = Etc;
    [
    //  x0  x1  x2  x3  x4  x5  x6  x7
    //  x8  x9  xA  xB  xC  xD  xE  xF
        __, __, __, __, __, __, __, __, // 0x │········│
        __, __, __, __, __, __, __, __, // 0x │·tn··r··│
        __, __, __, __, __, __, __, __, // 1x │········│
        __, __, __, __, __, __, __, __, // 1x │········│
        __, __, __, __, __, __, __, __, // 2x │ !"#$%&'│
        __, __, __, __, __, __, __, __, // 2x │()*+,-./│
        __, __, __, __, __, __, __, __, // 3x │01234567│
        __, __, __, __, __, __, __, __, // 3x │89:;<=>?│
        __, Uc, Uc, Uc, Uc, Uc, Uc, Uc, // 4x │@ABCDEFG│
        Uc, Uc, Uc, Uc, Uc, Uc, Uc, Uc, // 4x │HIJKLMNO│
        Uc, Uc, Uc, Uc, Uc, Uc, Uc, Uc, // 5x │PQRSTUVW│
        Uc, Uc, Uc, __, __, __, __, __, // 5x │XYZ[\]^_│
        __, Lc, Lc, Lc, Lc, Lc, Lc, Lc, // 6x │`abcdefg│
        Lc, Lc, Lc, Lc, Lc, Lc, Lc, Lc, // 6x │hijklmno│
        Lc, Lc, Lc, Lc, Lc, Lc, Lc, Lc, // 7x │pqrstuvw│
        Lc, Lc, Lc, __, __, __, __, __, // 7x │xyz{|}~░│
    ]};

    /// Reader that fails on every read.
    pub struct Broken;

    impl Read for Broken {
        fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "broken reader"))
        }
    }

    #[test]
    fn cursor_use() {
        let mut cursor = Cursor::new("Hi!\u{ED}".as_bytes());

        assert_eq!( cursor.position(),       0          );

        cursor.advance().unwrap();
        assert_eq!( cursor.classify(&CHARS), (Uc, b'H') );
        assert_eq!( cursor.position(),       0          );

        cursor.advance().unwrap();
        assert_eq!( cursor.classify(&CHARS), (Lc, b'i') );
        assert_eq!( cursor.position(),       1          );

        cursor.advance().unwrap();
        assert_eq!( cursor.classify(&CHARS), (Etc, b'!') );
        assert_eq!( cursor.position(),       2           );

        assert_eq!( cursor.classify(&CHARS), (Etc, b'!') );
        assert_eq!( cursor.position(),       2           );

        cursor.advance().unwrap();
        assert_eq!( cursor.classify(&CHARS), (Non, 0xC3) );
        assert_eq!( cursor.position(),       3           );

        cursor.advance().unwrap();
        assert_eq!( cursor.classify(&CHARS), (Non, 0xAD) );
        assert_eq!( cursor.position(),       4           );

        cursor.advance().unwrap();
        assert_eq!( cursor.classify(&CHARS), (Eof, 0)    );
        assert_eq!( cursor.position(),       5           );

        cursor.advance().unwrap();
        assert_eq!( cursor.classify(&CHARS), (Eof, 0)    );
        assert_eq!( cursor.position(),       5           );
    }

    #[test]
    fn cursor_location() {
        let mut cursor = Cursor::new("a\nb".as_bytes());

        cursor.advance().unwrap();
        assert_eq!( cursor.location(), Location::new(1, 1) );

        cursor.advance().unwrap();
        assert_eq!( cursor.location(), Location::new(1, 2) );

        cursor.advance().unwrap();
        assert_eq!( cursor.location(), Location::new(2, 1) );

        cursor.advance().unwrap();
        assert_eq!( cursor.location(), Location::new(2, 2) );
    }

    #[test]
    fn cursor_read_error() {
        let mut cursor = Cursor::new(Broken);

        assert!( matches!(cursor.advance(), Err(Error::Read(_))) );
    }
}

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

//! Comment-stripping transducer.
//!
//! Copies C-like source text from an input stream to an output stream,
//! removing `//` line comments and `/* */` block comments.  String and
//! character literals are copied verbatim, including any comment markers,
//! quotes, or escape sequences they contain.
//!
//! The transducer is a finite state machine.  Each input byte is classified
//! as a logical character, and the pair (state, logical character) selects a
//! transition from [`TRANSITION_MAP`].  A transition decodes to an action,
//! and performing the action yields either the next state or an exit.
//!
//! End of input is a valid transition from every state and always ends the
//! run.  An unterminated literal or comment is not a fault; whatever was
//! emitted before the end of input is the result.

use std::fmt::{self, Display, Formatter};
use std::io::{Read, Write};

use log::{debug, trace};

use crate::error::{Error, Result};
use crate::location::Location;
use super::input::{Cursor, LogicalChar};


// ----------------------------------------------------------------------------

/// Logical characters recognized by the transducer.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[repr(u8)]
enum Char {
    Other   = char(0), // everything else
    Lf      = char(1), // \n
    DQuote  = char(2), // "
    SQuote  = char(3), // '
    Star    = char(4), // *
    Slash   = char(5), // /
    BSlash  = char(6), // \
    Eof     = char(7), // end of input // <- COUNT references this
}

// Helper to define Char variants
const fn char(n: u8) -> u8 {
    n * State::COUNT as u8
}

impl Char {
    /// Count of logical characters.
    const COUNT: usize = Self::Eof as usize / State::COUNT + 1;
}

impl LogicalChar for Char {
    const NON_ASCII: Self = Self::Other;
    const EOF:       Self = Self::Eof;
}

/// Mapping of 7-bit ASCII to logical characters.
static CHARS: [Char; 128] = {
    use Char::*;
    const __: Char = Other;
[
//  x0       x1       x2       x3       x4       x5       x6       x7
//  x8       x9       xA       xB       xC       xD       xE       xF
    __,      __,      __,      __,      __,      __,      __,      __,      // 0x │········│
    __,      __,      Lf,      __,      __,      __,      __,      __,      // 0x │·tnvfr··│
    __,      __,      __,      __,      __,      __,      __,      __,      // 1x │········│
    __,      __,      __,      __,      __,      __,      __,      __,      // 1x │········│
    __,      __,      DQuote,  __,      __,      __,      __,      SQuote,  // 2x │ !"#$%&'│
    __,      __,      Star,    __,      __,      __,      __,      Slash,   // 2x │()*+,-./│
    __,      __,      __,      __,      __,      __,      __,      __,      // 3x │01234567│
    __,      __,      __,      __,      __,      __,      __,      __,      // 3x │89:;<=>?│
    __,      __,      __,      __,      __,      __,      __,      __,      // 4x │@ABCDEFG│
    __,      __,      __,      __,      __,      __,      __,      __,      // 4x │HIJKLMNO│
    __,      __,      __,      __,      __,      __,      __,      __,      // 5x │PQRSTUVW│
    __,      __,      __,      __,      BSlash,  __,      __,      __,      // 5x │XYZ[\]^_│
    __,      __,      __,      __,      __,      __,      __,      __,      // 6x │`abcdefg│
    __,      __,      __,      __,      __,      __,      __,      __,      // 6x │hijklmno│
    __,      __,      __,      __,      __,      __,      __,      __,      // 7x │pqrstuvw│
    __,      __,      __,      __,      __,      __,      __,      __,      // 7x │xyz{|}~░│
]};

// ----------------------------------------------------------------------------

/// Transducer states.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[repr(u8)]
enum State {
    /// In code.  The initial state.
    Code,

    /// After a `/` in code.  The `/` has not been emitted yet.
    Slash,

    /// In a string literal.
    StringLiteral,

    /// In a character literal.
    CharLiteral,

    /// After a `\` in a literal.
    Escape,

    /// In a line comment.
    LineComment,

    /// In a block comment.
    BlockComment,

    /// After a `*` in a block comment.
    StarInBlockComment, // <- COUNT references this
}

impl State {
    /// Count of transducer states.
    const COUNT: usize = Self::StarInBlockComment as usize + 1;

    /// Returns the literal state closed by the given `quote` byte.
    #[inline]
    fn literal(quote: u8) -> Self {
        match quote {
            b'"' => State::StringLiteral,
            _    => State::CharLiteral,
        }
    }
}

// ----------------------------------------------------------------------------

// Transducer transitions.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[repr(u8)]
enum Transition {
    /// Emit and consume the current input byte, then continue scanning in
    /// `Code` state.
    Code,

    /// Consume the current input byte and continue scanning in `Slash` state.
    /// Nothing is emitted until the next byte decides what the `/` means.
    Slash_,

    /// Emit the deferred `/`, then rescan the current input byte in `Code`
    /// state.
    Flush,

    /// Emit the deferred `/` and stop.
    FlushEnd,

    /// Emit and consume the current input byte, then continue scanning in
    /// `StringLiteral` state.  Marks the start of a literal.
    Str_,

    /// Emit and consume the current input byte, then continue scanning in
    /// `StringLiteral` state.
    Str,

    /// Emit and consume the current input byte, then continue scanning in
    /// `Escape` state, returning to `StringLiteral` state afterward.
    StrEsc_,

    /// Emit and consume the current input byte, then continue scanning in
    /// `CharLiteral` state.  Marks the start of a literal.
    Char_,

    /// Emit and consume the current input byte, then continue scanning in
    /// `CharLiteral` state.
    Char,

    /// Emit and consume the current input byte, then continue scanning in
    /// `Escape` state, returning to `CharLiteral` state afterward.
    CharEsc_,

    /// Emit and consume the current input byte, then continue scanning in the
    /// literal state that preceded the escape.
    Unescape,

    /// Consume the current input byte and continue scanning in `LineComment`
    /// state.  Counts a comment.
    LineComment_,

    /// Consume the current input byte and continue scanning in `LineComment`
    /// state.
    LineComment,

    /// Consume the current input byte and continue scanning in `BlockComment`
    /// state.  Counts a comment.
    BlockComment_,

    /// Consume the current input byte and continue scanning in `BlockComment`
    /// state.
    BlockComment,

    /// Consume the current input byte and continue scanning in
    /// `StarInBlockComment` state.
    Star_,

    /// Consume the current input byte and continue scanning in `Code` state.
    Uncomment,

    /// Stop.
    End,
}

impl Transition {
    /// Returns a tuple consisting of the action, region start flag, and
    /// comment flag for the transition.
    fn decode(self) -> (Action, u8, u8) {
        use Action::*;
        use State      as S;
        use Transition as X;

        match self {
            //                     Action      Arguments             R  C
            // Code              ------------------------------------------
            X::Code           => ( Emit        (S::Code),            0, 0 ),
            X::Slash_         => ( Skip        (S::Slash),           1, 0 ),
            X::Flush          => ( Flush       ,                     0, 0 ),
            X::FlushEnd       => ( FlushEnd    ,                     0, 0 ),
            // Literals          ------------------------------------------
            X::Str_           => ( Emit        (S::StringLiteral),   1, 0 ),
            X::Str            => ( Emit        (S::StringLiteral),   0, 0 ),
            X::StrEsc_        => ( Escape      (b'"'),               0, 0 ),
            X::Char_          => ( Emit        (S::CharLiteral),     1, 0 ),
            X::Char           => ( Emit        (S::CharLiteral),     0, 0 ),
            X::CharEsc_       => ( Escape      (b'\''),              0, 0 ),
            X::Unescape       => ( Unescape    ,                     0, 0 ),
            // Comments          ------------------------------------------
            X::LineComment_   => ( Skip        (S::LineComment),     0, 1 ),
            X::LineComment    => ( Skip        (S::LineComment),     0, 0 ),
            X::BlockComment_  => ( Skip        (S::BlockComment),    0, 1 ),
            X::BlockComment   => ( Skip        (S::BlockComment),    0, 0 ),
            X::Star_          => ( Skip        (S::StarInBlockComment), 0, 0 ),
            X::Uncomment      => ( Skip        (S::Code),            0, 0 ),
            // Other             ------------------------------------------
            X::End            => ( End         ,                     0, 0 ),
        }
    }
}

// ----------------------------------------------------------------------------

/// Transducer actions.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Action {
    /// Consume the current input byte and continue scanning in a new state.
    Skip(State),

    /// Emit and consume the current input byte, then continue scanning in a
    /// new state.
    Emit(State),

    /// Emit and consume the current input byte, then continue scanning in
    /// `Escape` state.  The argument is the quote that closes the enclosing
    /// literal.
    Escape(u8),

    /// Emit and consume the current input byte, then continue scanning in the
    /// literal state that preceded the escape.
    Unescape,

    /// Emit a deferred `/`, then rescan the current input byte in `Code`
    /// state.
    Flush,

    /// Emit a deferred `/` and stop.
    FlushEnd,

    /// Stop.
    End,
}

/// Result of performing one action.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Step {
    /// Continue scanning in the given state.
    Next(State),

    /// Stop scanning.
    Exit,
}

// ----------------------------------------------------------------------------

/// Transducer state transition map.
static TRANSITION_MAP: [Transition; State::COUNT * Char::COUNT] = {
    use Transition::*;
[
//          Code      Slash          StringLiteral  CharLiteral  Escape    LineComment    BlockComment   StarInBlockComment
//          ---------------------------------------------------------------------------------------------------------------
/* Other */ Code,     Flush,         Str,           Char,        Unescape, LineComment,   BlockComment,  BlockComment,
/*  Lf   */ Code,     Flush,         Str,           Char,        Unescape, Code,          BlockComment,  BlockComment,
/*   "   */ Str_,     Flush,         Code,          Char,        Unescape, LineComment,   BlockComment,  BlockComment,
/*   '   */ Char_,    Flush,         Str,           Code,        Unescape, LineComment,   BlockComment,  BlockComment,
/*   *   */ Code,     BlockComment_, Str,           Char,        Unescape, LineComment,   Star_,         Star_,
/*   /   */ Slash_,   LineComment_,  Str,           Char,        Unescape, LineComment,   BlockComment,  Uncomment,
/*   \   */ Code,     Flush,         StrEsc_,       CharEsc_,    Unescape, LineComment,   BlockComment,  BlockComment,
/*  Eof  */ End,      FlushEnd,      End,           End,         End,      End,           End,           End,
]};

// ----------------------------------------------------------------------------

/// Kinds of region that can be left open at the end of input.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Region {
    /// A string literal: `"…"`.
    StringLiteral,

    /// A character literal: `'…'`.
    CharLiteral,

    /// A block comment: `/*…*/`.
    BlockComment,
}

impl Display for Region {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(match *self {
            Region::StringLiteral => "string literal",
            Region::CharLiteral   => "character literal",
            Region::BlockComment  => "block comment",
        })
    }
}

/// Summary of a completed transducer run.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct Report {
    /// Count of comments removed.
    pub comments: usize,

    /// The region left open at the end of input, if any, with the location
    /// of its opening delimiter.
    pub unterminated: Option<(Region, Location)>,
}

// ----------------------------------------------------------------------------

/// Comment-stripping transducer.  Reads input and writes it, less comments,
/// to an output stream.
///
/// A `Stripper` is the complete context of one run.  It is consumed by
/// [`Self::run()`], so no state survives from one input to the next.
#[derive(Debug)]
pub struct Stripper<R: Read, W: Write> {
    input:    Cursor<R>,
    output:   W,
    state:    State,
    quote:    u8,
    opened:   Location,
    comments: usize,
}

impl<R: Read, W: Write> Stripper<R, W> {
    /// Creates a new transducer that reads `input` and writes `output`.
    pub fn new(input: R, output: W) -> Self {
        Self {
            input:    Cursor::new(input),
            output,
            state:    State::Code,
            quote:    b'"',
            opened:   Location::UNKNOWN,
            comments: 0,
        }
    }

    /// Runs the transducer to the end of input.
    ///
    /// The output is flushed before this method returns successfully.  A
    /// fault in either stream stops the run immediately and is returned.
    pub fn run(mut self) -> Result<Report> {
        self.input.advance()?;

        loop {
            // Translate input into action
            let (kind, byte) = self.input.classify(&CHARS);
            let transition   = TRANSITION_MAP[self.state as usize + kind as usize];
            let (action, region_flag, comment_flag) = transition.decode();

            // Record region start position
            if region_flag != 0 {
                self.opened = self.input.location();
            }
            self.comments += comment_flag as usize;

            // Perform action
            match self.perform(action, byte)? {
                Step::Next(s) => self.enter(s),
                Step::Exit    => break,
            }
        }

        self.output.flush().map_err(Error::Write)?;

        let report = Report {
            comments:     self.comments,
            unterminated: self.open_region().map(|r| (r, self.opened)),
        };
        debug!("end of input in {:?} state: {:?}", self.state, report);
        Ok(report)
    }

    fn perform(&mut self, action: Action, byte: u8) -> Result<Step> {
        use Action::*;

        Ok(match action {
            Skip(s) => {
                self.input.advance()?;
                Step::Next(s)
            },
            Emit(s) => {
                self.emit(byte)?;
                self.input.advance()?;
                Step::Next(s)
            },
            Escape(quote) => {
                self.quote = quote;
                self.emit(byte)?;
                self.input.advance()?;
                Step::Next(State::Escape)
            },
            Unescape => {
                self.emit(byte)?;
                self.input.advance()?;
                Step::Next(State::literal(self.quote))
            },
            Flush => {
                self.emit(b'/')?;
                Step::Next(State::Code)
            },
            FlushEnd => {
                self.emit(b'/')?;
                Step::Exit
            },
            End => Step::Exit,
        })
    }

    #[inline]
    fn enter(&mut self, s: State) {
        if s != self.state {
            trace!("{}: {:?} -> {:?}", self.input.location(), self.state, s);
            self.state = s;
        }
    }

    #[inline]
    fn emit(&mut self, byte: u8) -> Result {
        self.output.write_all(&[byte]).map_err(Error::Write)
    }

    fn open_region(&self) -> Option<Region> {
        use State::*;

        match self.state {
            StringLiteral                      => Some(Region::StringLiteral),
            CharLiteral                        => Some(Region::CharLiteral),
            Escape if self.quote == b'"'       => Some(Region::StringLiteral),
            Escape                             => Some(Region::CharLiteral),
            BlockComment | StarInBlockComment  => Some(Region::BlockComment),
            Code | Slash | LineComment         => None,
        }
    }
}

// ----------------------------------------------------------------------------

/// Copies `input` to `output`, removing comments.
///
/// Returns an error only if reading `input` or writing `output` fails.
pub fn strip<R: Read, W: Write>(input: R, output: W) -> Result {
    Stripper::new(input, output).run().map(|_| ())
}

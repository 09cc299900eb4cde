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

//! Finite-state scanners for C-like source text, and crate root.
//!
//! The main scanner is a comment-stripping transducer:
//!
//! ```
//! let mut out = vec![];
//! decomment::strip("a = b / c; // divide\n".as_bytes(), &mut out).unwrap();
//! assert_eq!(out, b"a = b / c; \n");
//! ```

pub mod error;
pub mod lang;
pub mod location;
pub mod message;
pub mod num;
pub mod session;

pub use error::{Error, Result};
pub use lang::int::scan_int;
pub use lang::strip::{strip, Region, Report, Stripper};

/// Program name used in messages not related to a source file.
pub const PROGRAM_NAME: &str = "decomment";

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

//! Program entry point.

use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::process::ExitCode;

use clap::{ArgAction, Args, Parser, Subcommand};
use log::LevelFilter;

use decomment::error::Error;
use decomment::location::Location;
use decomment::message::{Message, Severity};
use decomment::session::{Session, Status};

/// Removes comments from C-like source code.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase logging verbosity.  Repeat for more detail.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Clone, Debug)]
enum Command {
    Strip(Strip),
    Number(Number),
}

impl Command {
    fn run(self) -> ExitCode {
        match self {
            Command::Strip(strip)   => strip.run(),
            Command::Number(number) => number.run(),
        }
    }
}

/// Copy source files to the output with comments removed.
#[derive(Args, Clone, Debug)]
struct Strip {
    /// Input files.  `-` or no files at all reads standard input.
    files: Vec<String>,

    /// Output file.  Defaults to standard output.
    #[arg(short, long)]
    output: Option<String>,

    /// Do not warn about unterminated literals and comments.
    #[arg(short, long)]
    quiet: bool,
}

impl Strip {
    fn run(self) -> ExitCode {
        let mut session = Session::new(self.quiet);

        let _ = match &self.output {
            None       => self.strip_into(&mut session, stdout().lock()),
            Some(path) => match File::create(path) {
                Ok (file) => self.strip_into(&mut session, file),
                Err(e)    => {
                    let e = Error::Write(e);
                    session.tell(Message::at(path, Location::UNKNOWN, Severity::Fatal, &e));
                    Err(())
                },
            },
        };

        session.exit_code()
    }

    fn strip_into<W: Write>(&self, session: &mut Session, out: W) -> Status {
        let mut out = BufWriter::new(out);

        if self.files.is_empty() {
            return session.strip_stdin(&mut out)
        }

        for path in &self.files {
            match path.as_str() {
                "-"  => session.strip_stdin(&mut out)?,
                path => session.strip_file(path, &mut out)?,
            }
        }
        Ok(())
    }
}

/// Scan a C integer literal and print its value.
#[derive(Args, Clone, Debug)]
struct Number {
    /// Text of the literal, such as `0x1F`, `017`, or `-42`.
    #[arg(allow_hyphen_values = true)]
    text: String,
}

impl Number {
    fn run(self) -> ExitCode {
        let mut session = Session::new(false);
        let _ = session.scan_number(&self.text, &mut stdout().lock());
        session.exit_code()
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(match cli.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        })
        .parse_default_env()
        .init();

    cli.command.run()
}

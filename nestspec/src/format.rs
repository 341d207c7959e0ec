//! Text renderings of a finished run.
//!
//! [`VerboseFormat`] is meant for people: root specs become headings and
//! failures carry full trace locations. [`SimpleFormat`] prints indentation
//! only and bare file names, so its output can be compared as a string.

use std::io::{self, Write};

use crate::core::types::{Failure, FailureKind};

/// Receives specs in pre-order, then the summary.
pub trait PrintFormat {
    fn print_passing(&mut self, depth: usize, name: &str) -> io::Result<()>;
    fn print_failing(&mut self, depth: usize, name: &str, failures: &[Failure]) -> io::Result<()>;
    fn print_ignored(&mut self, depth: usize, name: &str) -> io::Result<()>;
    fn print_summary(&mut self, passed: usize, failed: usize, ignored: usize) -> io::Result<()>;
}

pub struct VerboseFormat<W: Write> {
    out: W,
}

impl<W: Write> VerboseFormat<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn print_failure(&mut self, failure: &Failure) -> io::Result<()> {
        write!(self.out, "{}", failure_message(failure))?;
        for location in &failure.trace {
            writeln!(
                self.out,
                "    at {}:{}:{}",
                location.file, location.line, location.column
            )?;
        }
        writeln!(self.out)
    }
}

impl<W: Write> PrintFormat for VerboseFormat<W> {
    fn print_passing(&mut self, depth: usize, name: &str) -> io::Result<()> {
        if depth == 0 {
            write!(self.out, "\n{name}\n")
        } else {
            writeln!(self.out, "{}- {name}", indent(depth))
        }
    }

    fn print_failing(&mut self, depth: usize, name: &str, failures: &[Failure]) -> io::Result<()> {
        write!(self.out, "{}- {name} [FAIL]\n\n", indent(depth))?;
        for failure in failures {
            self.print_failure(failure)?;
        }
        writeln!(self.out)
    }

    fn print_ignored(&mut self, depth: usize, name: &str) -> io::Result<()> {
        if depth == 0 {
            write!(self.out, "\n{name} [IGNORED]\n")
        } else {
            writeln!(self.out, "{}- {name} [IGNORED]", indent(depth))
        }
    }

    fn print_summary(&mut self, passed: usize, failed: usize, ignored: usize) -> io::Result<()> {
        write_summary(&mut self.out, passed, failed, ignored)
    }
}

pub struct SimpleFormat<W: Write> {
    out: W,
}

impl<W: Write> SimpleFormat<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> PrintFormat for SimpleFormat<W> {
    fn print_passing(&mut self, depth: usize, name: &str) -> io::Result<()> {
        writeln!(self.out, "{}- {name}", indent(depth))
    }

    fn print_failing(&mut self, depth: usize, name: &str, failures: &[Failure]) -> io::Result<()> {
        writeln!(self.out, "{}- {name} [FAIL]", indent(depth))?;
        for failure in failures {
            write!(self.out, "{}", failure_message(failure))?;
            for location in &failure.trace {
                writeln!(self.out, "    at {}", location.file_name())?;
            }
        }
        Ok(())
    }

    fn print_ignored(&mut self, depth: usize, name: &str) -> io::Result<()> {
        writeln!(self.out, "{}- {name} [IGNORED]", indent(depth))
    }

    fn print_summary(&mut self, passed: usize, failed: usize, ignored: usize) -> io::Result<()> {
        write_summary(&mut self.out, passed, failed, ignored)
    }
}

fn write_summary<W: Write>(
    out: &mut W,
    passed: usize,
    failed: usize,
    ignored: usize,
) -> io::Result<()> {
    let total = passed + failed + ignored;
    write!(out, "\n{total} specs, {failed} failures, {ignored} ignored\n")
}

fn failure_message(failure: &Failure) -> String {
    match failure.kind {
        FailureKind::ExpectFailed => format!(
            "*** Expected: {}\n         got: “{}”\n",
            failure.message, failure.actual
        ),
        FailureKind::AssumeFailed => format!(
            "*** Assumed: {}\n        got: “{}”\n",
            failure.message, failure.actual
        ),
        FailureKind::Fault => format!("*** {}\n", failure.message),
    }
}

fn indent(depth: usize) -> String {
    "  ".repeat(depth)
}

//! Progress and diagnostic logging.
//!
//! Generation logs are fire-and-forget: nothing in the pipeline depends on a
//! log line being written. The `Logger` trait is the seam; the console
//! implementation writes to stderr so stdout stays reserved for the final report.

use std::{
    cell::RefCell,
    io::{self, Write},
};

use colored::Colorize;

pub trait Logger {
    fn info(&self, msg: &str);
    fn warn(&self, msg: &str);
    fn error(&self, msg: &str);
    /// Detail lines only shown in verbose mode.
    fn debug(&self, _msg: &str) {}
}

/// Writes prefixed lines to stderr.
///
/// Colors follow `colored`'s global switch, which honors `NO_COLOR`.
pub struct ConsoleLogger {
    verbose: bool,
}

impl ConsoleLogger {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    fn write(&self, prefix: colored::ColoredString, msg: &str) {
        let _ = writeln!(io::stderr().lock(), "{} {}", prefix, msg);
    }
}

impl Logger for ConsoleLogger {
    fn info(&self, msg: &str) {
        self.write("info:".bold().cyan(), msg);
    }

    fn warn(&self, msg: &str) {
        self.write("warning:".bold().yellow(), msg);
    }

    fn error(&self, msg: &str) {
        self.write("error:".bold().red(), msg);
    }

    fn debug(&self, msg: &str) {
        if self.verbose {
            self.write("debug:".dimmed(), msg);
        }
    }
}

/// Severity of a recorded log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
}

/// Keeps every line in memory. Used by tests and library callers that want
/// to inspect what a run reported.
#[derive(Debug, Default)]
pub struct MemoryLogger {
    lines: RefCell<Vec<(Level, String)>>,
}

impl MemoryLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<(Level, String)> {
        self.lines.borrow().clone()
    }

    pub fn messages(&self, level: Level) -> Vec<String> {
        self.lines
            .borrow()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m.clone())
            .collect()
    }

    fn push(&self, level: Level, msg: &str) {
        self.lines.borrow_mut().push((level, msg.to_string()));
    }
}

impl Logger for MemoryLogger {
    fn info(&self, msg: &str) {
        self.push(Level::Info, msg);
    }

    fn warn(&self, msg: &str) {
        self.push(Level::Warn, msg);
    }

    fn error(&self, msg: &str) {
        self.push(Level::Error, msg);
    }

    fn debug(&self, msg: &str) {
        self.push(Level::Debug, msg);
    }
}

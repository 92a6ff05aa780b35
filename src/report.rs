//! The three-line build report written to stdout.

use std::io::{self, Write};

use crate::greeter;

/// Prefix of the second report line.
pub const COMPLETED_PREFIX: &str = "Build completed at: ";

/// Final report line.
pub const READY_MESSAGE: &str = "Application ready for Jenkins multibranch pipeline testing!";

/// Values captured for a single run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    greeting: &'static str,
    timestamp: String,
}

impl BuildReport {
    /// Create a report with a pre-formatted timestamp.
    pub fn new(timestamp: impl Into<String>) -> Self {
        Self {
            greeting: greeter::greeting(),
            timestamp: timestamp.into(),
        }
    }

    /// Snapshot the greeting and the current local time.
    pub fn capture() -> Self {
        Self::new(greeter::current_timestamp())
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    /// The report lines, in print order.
    pub fn lines(&self) -> [String; 3] {
        [
            self.greeting.to_string(),
            format!("{}{}", COMPLETED_PREFIX, self.timestamp),
            READY_MESSAGE.to_string(),
        ]
    }

    /// Write each line followed by `\n`.
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for line in self.lines() {
            writeln!(out, "{}", line)?;
        }
        Ok(())
    }
}

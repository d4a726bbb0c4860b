//! Timestamp prefix formatting

use std::io::Write;
use std::time::Duration;

/// Default number of fractional digits
pub const DEFAULT_DIGITS: u8 = 1;

/// Largest supported precision; the host clock does not resolve below nanoseconds
pub const MAX_DIGITS: u8 = 9;

/// Default text between the unit and the line
pub const DEFAULT_SEPARATOR: &str = "\t";

/// Renders `"<seconds>s<separator>"`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimestampFormat {
    digits: u8,
    separator: String,
}

impl TimestampFormat {
    pub fn new(digits: u8, separator: impl Into<String>) -> Self {
        Self {
            digits: digits.min(MAX_DIGITS),
            separator: separator.into(),
        }
    }

    pub fn digits(&self) -> u8 {
        self.digits
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Append the prefix for `elapsed` to `out`
    pub fn write_prefix(&self, elapsed: Duration, out: &mut Vec<u8>) {
        // Writing into a Vec cannot fail.
        let _ = write!(
            out,
            "{:.*}s{}",
            self.digits as usize,
            elapsed.as_secs_f64(),
            self.separator
        );
    }

    /// The prefix for `elapsed` as a string
    pub fn prefix(&self, elapsed: Duration) -> String {
        let mut out = Vec::new();
        self.write_prefix(elapsed, &mut out);
        String::from_utf8_lossy(&out).into_owned()
    }
}

impl Default for TimestampFormat {
    fn default() -> Self {
        Self::new(DEFAULT_DIGITS, DEFAULT_SEPARATOR)
    }
}

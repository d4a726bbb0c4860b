//! The read, stamp, escape, write loop

use super::clock::{Clock, SessionClock, SystemClock, TimestampPolicy};
use super::escape::Escaper;
use super::format::TimestampFormat;
use super::reassembler::split_lines;
use crate::error::{ErrorCode, LinestampError, Result};
use std::io::{ErrorKind, Read, Write};
use std::time::Instant;
use tracing::{debug, trace};

/// Default maximum chunk size
pub const DEFAULT_READ_SIZE: usize = 64 * 1024;

/// Largest accepted chunk size
pub const MAX_READ_SIZE: usize = 16 * 1024 * 1024;

const TIMESTAMPED_SINK: &str = "timestamped output";
const RAW_SINK: &str = "raw output";

/// Everything that shapes the annotated output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotateOptions {
    pub policy: TimestampPolicy,
    pub format: TimestampFormat,
    pub escaper: Escaper,
    pub read_size: usize,
}

impl Default for AnnotateOptions {
    fn default() -> Self {
        Self {
            policy: TimestampPolicy::default(),
            format: TimestampFormat::default(),
            escaper: Escaper::Identity,
            read_size: DEFAULT_READ_SIZE,
        }
    }
}

/// The sinks a run writes to
pub struct OutputSinks<'a> {
    /// Receives the stamped, possibly escaped lines
    pub timestamped: &'a mut dyn Write,
    /// Receives every chunk unmodified, when tee is on
    pub raw: Option<&'a mut dyn Write>,
}

/// Counters for a finished run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub chunks: u64,
    pub lines: u64,
    pub bytes: u64,
}

/// Streaming annotator
///
/// Owns the session clock for the lifetime of the run. Each chunk is stamped
/// at the instant its read returns, fully written and flushed before the next
/// read is issued.
pub struct StreamAnnotator<C: Clock = SystemClock> {
    clock: C,
    session: SessionClock,
    format: TimestampFormat,
    escaper: Escaper,
    read_size: usize,
}

impl StreamAnnotator<SystemClock> {
    /// Create an annotator on the host clock; from-launch sessions start now
    pub fn new(options: AnnotateOptions) -> Self {
        Self::with_clock(options, SystemClock)
    }

    /// Create an annotator on the host clock; from-launch sessions start at `launch`
    pub fn with_launch(options: AnnotateOptions, launch: Instant) -> Self {
        Self::with_clock_and_launch(options, SystemClock, launch)
    }
}

impl<C: Clock> StreamAnnotator<C> {
    pub fn with_clock(options: AnnotateOptions, clock: C) -> Self {
        let launch = clock.now();
        Self::with_clock_and_launch(options, clock, launch)
    }

    pub fn with_clock_and_launch(options: AnnotateOptions, clock: C, launch: Instant) -> Self {
        let session = SessionClock::new(options.policy, launch);
        Self {
            clock,
            session,
            format: options.format,
            escaper: options.escaper,
            read_size: options.read_size.clamp(1, MAX_READ_SIZE),
        }
    }

    /// Stamp, format and escape one chunk into `out`, returning its line count
    ///
    /// Nothing is appended for an empty chunk and the clock is not consulted.
    pub fn annotate_chunk(&mut self, chunk: &[u8], out: &mut Vec<u8>) -> Result<usize> {
        if chunk.is_empty() {
            return Ok(0);
        }

        let stamp = self.session.stamp_chunk(self.clock.now());
        let mut count = 0;
        for (index, line) in split_lines(chunk).enumerate() {
            self.format.write_prefix(stamp.for_line(index), out);
            self.escaper.escape_into(line, out)?;
            count += 1;
        }
        Ok(count)
    }

    /// Annotate `input` until end-of-stream
    pub fn run<R: Read>(&mut self, mut input: R, mut sinks: OutputSinks<'_>) -> Result<RunSummary> {
        let mut buf = vec![0u8; self.read_size];
        let mut annotated = Vec::with_capacity(self.read_size * 2);
        let mut summary = RunSummary::default();

        debug!(
            read_size = self.read_size,
            escaper = ?self.escaper,
            tee = sinks.raw.is_some(),
            "Starting annotation"
        );

        loop {
            let n = match input.read(&mut buf) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(LinestampError::read_failed(e)),
            };
            let chunk = &buf[..n];

            annotated.clear();
            let lines = self.annotate_chunk(chunk, &mut annotated)?;
            write_and_flush(&mut *sinks.timestamped, &annotated, TIMESTAMPED_SINK)?;
            if let Some(raw) = sinks.raw.as_deref_mut() {
                write_and_flush(raw, chunk, RAW_SINK)?;
            }

            summary.chunks += 1;
            summary.lines += lines as u64;
            summary.bytes += n as u64;
            trace!(bytes = n, lines, "Annotated chunk");
        }

        debug!(
            chunks = summary.chunks,
            lines = summary.lines,
            bytes = summary.bytes,
            "Input reached end of stream"
        );
        Ok(summary)
    }
}

fn write_and_flush(sink: &mut dyn Write, bytes: &[u8], name: &str) -> Result<()> {
    sink.write_all(bytes)
        .map_err(|e| LinestampError::write_failed(name, e))?;
    sink.flush().map_err(|e| match e.kind() {
        ErrorKind::BrokenPipe => LinestampError::write_failed(name, e),
        _ => LinestampError::output_with_code(
            ErrorCode::OUTPUT_FLUSH_FAILED,
            "Failed to flush output",
            Some(name.to_string()),
        )
        .with_source(e),
    })
}

//! Timestamp annotation of a live byte stream
//!
//! This module turns raw reads into stamped lines:
//! - `reassembler` splits each chunk into lines
//! - `clock` decides the timestamp of each chunk
//! - `escape` makes lines printable
//! - `format` renders the timestamp prefix
//! - `annotator` drives the read/write loop over the sinks
//! - `streams` opens stdin and the output sinks

pub mod annotator;
pub mod clock;
pub mod escape;
pub mod format;
pub mod reassembler;
pub mod streams;

pub use annotator::{
    AnnotateOptions, OutputSinks, RunSummary, StreamAnnotator, DEFAULT_READ_SIZE, MAX_READ_SIZE,
};
pub use clock::{
    Anchor, ChunkStamp, Clock, ManualClock, Origin, SessionClock, SystemClock, TimestampPolicy,
};
pub use escape::{unescape_control, EscapeError, Escaper, UnescapeError};
pub use format::{TimestampFormat, DEFAULT_DIGITS, DEFAULT_SEPARATOR, MAX_DIGITS};
pub use reassembler::{is_terminated, split_lines, Lines};
pub use streams::{open_stdin, Outputs};

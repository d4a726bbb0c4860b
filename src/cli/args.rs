// Included verbatim by build.rs for man page generation: only clap and std here.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Prefix every line of stdin with the time it arrived
#[derive(Parser, Debug)]
#[command(name = "linestamp")]
#[command(
    about = "linestamp - Prefix every line of stdin with the time it arrived",
    long_about = "Reads stdin as it arrives and writes each line prefixed with a timestamp, \
                  making delays between output events visible so two runs of a program \
                  can be compared with diff."
)]
#[command(version)]
pub struct Cli {
    /// Calculate absolute timestamps (relative timestamps are the default)
    #[arg(short, long)]
    pub absolute: bool,

    /// Count time from the launch of linestamp (the default is to count from the first input)
    #[arg(long)]
    pub from_launch: bool,

    /// Precision of the timestamps, as the number of fractional digits of a second [default: 1]
    #[arg(short, long, value_name = "N", value_parser = clap::value_parser!(u8).range(0..=9))]
    pub digits: Option<u8>,

    /// Escape non-printable bytes so every input line becomes one printable output line
    #[arg(short, long)]
    pub escape: bool,

    /// Escaping style used with --escape [default: control]
    #[arg(long, value_enum, value_name = "STYLE")]
    pub escape_style: Option<EscapeStyle>,

    /// Save the timestamped output to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Together with --output, also print the raw input to stdout
    #[arg(short, long)]
    pub tee: bool,

    /// Text placed between the timestamp and the line [default: tab]
    #[arg(long, value_name = "TEXT")]
    pub separator: Option<String>,

    /// Maximum number of bytes taken from stdin per read [default: 65536]
    #[arg(long, value_name = "BYTES", value_parser = clap::value_parser!(u64).range(1..=16_777_216))]
    pub read_size: Option<u64>,

    /// Settings file (defaults to config.toml in the user config directory, if present)
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose diagnostics on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// How --escape renders lines
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EscapeStyle {
    /// Escape control bytes and backslash; bytes 0x80 and above pass through
    Control,
    /// Require UTF-8 and escape everything outside printable ASCII
    Unicode,
}

//! Command-line interface
//!
//! Argument parsing and range validation belong to clap; everything past
//! this module sees already-validated values.

pub mod args;

pub use args::{Cli, EscapeStyle};

use crate::annotate::Escaper;

impl EscapeStyle {
    /// The escaper for this style
    pub fn escaper(self) -> Escaper {
        match self {
            Self::Control => Escaper::Control,
            Self::Unicode => Escaper::Unicode,
        }
    }
}

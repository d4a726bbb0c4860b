//! Application configuration
//!
//! Merges the command line with the settings file into the options a run needs.

use crate::annotate::{
    AnnotateOptions, Escaper, TimestampFormat, TimestampPolicy, DEFAULT_DIGITS, DEFAULT_READ_SIZE,
    DEFAULT_SEPARATOR,
};
use crate::cli::{Cli, EscapeStyle};
use crate::config::Settings;
use crate::error::Result;
use std::path::PathBuf;

/// Application configuration structure
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Verbosity level for logging
    pub verbose: u8,
    /// File receiving the timestamped output; stdout when unset
    pub output: Option<PathBuf>,
    /// Copy raw input to stdout (only with `output`)
    pub tee: bool,
    /// Annotation options
    pub annotate: AnnotateOptions,
}

impl AppConfig {
    /// Resolve the command line over the settings file
    ///
    /// Flags can only switch features on; valued options replace the
    /// file's value when given.
    pub fn resolve(cli: &Cli, settings: &Settings) -> Result<Self> {
        let absolute = cli.absolute || settings.absolute.unwrap_or(false);
        let from_launch = cli.from_launch || settings.from_launch.unwrap_or(false);
        let escape = cli.escape || settings.escape.unwrap_or(false);

        let style = match cli.escape_style {
            Some(style) => style,
            None => settings.escape_style()?.unwrap_or(EscapeStyle::Control),
        };
        let escaper = if escape {
            style.escaper()
        } else {
            Escaper::Identity
        };

        let digits = cli.digits.or(settings.digits).unwrap_or(DEFAULT_DIGITS);
        let separator = cli
            .separator
            .clone()
            .or_else(|| settings.separator.clone())
            .unwrap_or_else(|| DEFAULT_SEPARATOR.to_string());
        let read_size = cli
            .read_size
            .map(|size| size as usize)
            .or(settings.read_size)
            .unwrap_or(DEFAULT_READ_SIZE);

        Ok(Self {
            verbose: cli.verbose,
            output: cli.output.clone(),
            tee: cli.tee,
            annotate: AnnotateOptions {
                policy: TimestampPolicy::new(absolute, from_launch),
                format: TimestampFormat::new(digits, separator),
                escaper,
                read_size,
            },
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            verbose: 0,
            output: None,
            tee: false,
            annotate: AnnotateOptions::default(),
        }
    }
}

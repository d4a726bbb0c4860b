//! Opening the input stream and the output sinks

use super::annotator::OutputSinks;
use crate::error::{ErrorCode, LinestampError, Result};
use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::Path;
use tracing::{debug, warn};

/// Open standard input for unbuffered chunk reads
///
/// On Unix this reads a duplicate of descriptor 0 directly, so each read
/// returns whatever the OS delivered and nothing more.
#[cfg(unix)]
pub fn open_stdin() -> Result<Box<dyn Read>> {
    use std::os::fd::AsFd;

    let fd = io::stdin().as_fd().try_clone_to_owned().map_err(|e| {
        LinestampError::input_with_code(ErrorCode::INPUT_OPEN_FAILED, "Failed to open stdin")
            .with_source(e)
    })?;
    Ok(Box::new(File::from(fd)))
}

#[cfg(not(unix))]
pub fn open_stdin() -> Result<Box<dyn Read>> {
    Ok(Box::new(io::stdin()))
}

/// The timestamped sink and the optional raw tee sink
pub struct Outputs {
    timestamped: Box<dyn Write>,
    raw: Option<Box<dyn Write>>,
}

impl Outputs {
    /// Timestamped output to `output` (or stdout), raw copy to stdout when teeing
    ///
    /// `tee` without an output file has nowhere to send the raw copy that is
    /// not already taken, so it is ignored with a warning.
    pub fn open(output: Option<&Path>, tee: bool) -> Result<Self> {
        let Some(path) = output else {
            if tee {
                warn!("--tee has no effect without --output");
            }
            return Ok(Self::new(Box::new(io::stdout().lock()), None));
        };

        let file = File::create(path).map_err(|e| {
            LinestampError::output_with_code(
                ErrorCode::OUTPUT_CREATE_FAILED,
                "Failed to create output file",
                Some(path.display().to_string()),
            )
            .with_source(e)
        })?;
        debug!(path = %path.display(), tee, "Writing timestamped output to file");

        let raw: Option<Box<dyn Write>> = if tee {
            Some(Box::new(io::stdout().lock()))
        } else {
            None
        };
        Ok(Self::new(Box::new(BufWriter::new(file)), raw))
    }

    pub fn new(timestamped: Box<dyn Write>, raw: Option<Box<dyn Write>>) -> Self {
        Self { timestamped, raw }
    }

    pub fn is_teeing(&self) -> bool {
        self.raw.is_some()
    }

    /// Borrow both sinks for one run
    pub fn sinks(&mut self) -> OutputSinks<'_> {
        OutputSinks {
            timestamped: &mut *self.timestamped,
            raw: self.raw.as_mut().map(|w| &mut **w as &mut dyn Write),
        }
    }
}

use std::fmt::Display;
use std::path::PathBuf;
use thiserror::Error;

pub mod codes;

pub use codes::{describe_error_code, ErrorCode};

/// The unified error type for linestamp
#[derive(Error, Debug)]
pub enum LinestampError {
    #[error("[E{code:04}] Configuration error: {message}")]
    Config {
        code: u16,
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("[E{code:04}] Input error: {message}")]
    Input {
        code: u16,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("[E{code:04}] Output error: {message}")]
    Output {
        code: u16,
        message: String,
        sink: Option<String>,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("[E{code:04}] Encoding error: {message}")]
    Encoding {
        code: u16,
        message: String,
        offset: Option<usize>,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("[E{code:04}] {message}")]
    Other {
        code: u16,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl LinestampError {
    /// Create a configuration error with default code
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            code: ErrorCode::CONFIG_GENERIC,
            message: message.into(),
            path: None,
            source: None,
        }
    }

    /// Create a configuration error with specific code and settings path
    pub fn config_with_code(code: u16, message: impl Into<String>, path: Option<PathBuf>) -> Self {
        Self::Config {
            code,
            message: message.into(),
            path,
            source: None,
        }
    }

    /// Create an input error with default code
    pub fn input(message: impl Into<String>) -> Self {
        Self::Input {
            code: ErrorCode::INPUT_GENERIC,
            message: message.into(),
            source: None,
        }
    }

    /// Create an input error with specific code
    pub fn input_with_code(code: u16, message: impl Into<String>) -> Self {
        Self::Input {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Create an output error with default code
    pub fn output(message: impl Into<String>) -> Self {
        Self::Output {
            code: ErrorCode::OUTPUT_GENERIC,
            message: message.into(),
            sink: None,
            source: None,
        }
    }

    /// Create an output error with specific code and sink name
    pub fn output_with_code(code: u16, message: impl Into<String>, sink: Option<String>) -> Self {
        Self::Output {
            code,
            message: message.into(),
            sink,
            source: None,
        }
    }

    /// Create an encoding error with default code
    pub fn encoding(message: impl Into<String>) -> Self {
        Self::Encoding {
            code: ErrorCode::ENCODING_GENERIC,
            message: message.into(),
            offset: None,
            source: None,
        }
    }

    /// Create an encoding error with specific code and byte offset
    pub fn encoding_with_code(
        code: u16,
        message: impl Into<String>,
        offset: Option<usize>,
    ) -> Self {
        Self::Encoding {
            code,
            message: message.into(),
            offset,
            source: None,
        }
    }

    /// Create a generic other error
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            code: ErrorCode::OTHER_GENERIC,
            message: message.into(),
            source: None,
        }
    }

    /// Wrap a failed read of the input stream
    pub fn read_failed(err: std::io::Error) -> Self {
        Self::input_with_code(ErrorCode::INPUT_READ_FAILED, "Failed to read input stream")
            .with_source(err)
    }

    /// Wrap a failed write or flush on the named sink
    pub fn write_failed(sink: &str, err: std::io::Error) -> Self {
        use std::io::ErrorKind;

        let (code, message) = match err.kind() {
            ErrorKind::BrokenPipe => (ErrorCode::OUTPUT_BROKEN_PIPE, "Output pipe closed"),
            ErrorKind::StorageFull => (ErrorCode::OUTPUT_DISK_FULL, "No space left on device"),
            _ => (ErrorCode::OUTPUT_WRITE_FAILED, "Failed to write output"),
        };

        Self::output_with_code(code, message, Some(sink.to_string())).with_source(err)
    }

    /// Add a source error to this error
    pub fn with_source(
        mut self,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        match &mut self {
            Self::Config { source: src, .. }
            | Self::Input { source: src, .. }
            | Self::Output { source: src, .. }
            | Self::Encoding { source: src, .. }
            | Self::Other { source: src, .. } => {
                *src = Some(source.into());
            }
        }
        self
    }

    /// Add context to the error message
    pub fn with_context(mut self, context: impl Display) -> Self {
        match &mut self {
            Self::Config { message, .. }
            | Self::Input { message, .. }
            | Self::Output { message, .. }
            | Self::Encoding { message, .. }
            | Self::Other { message, .. } => {
                *message = format!("{}: {}", message, context);
            }
        }
        self
    }

    /// Get the process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config { .. } => 2,
            Self::Input { .. } => 3,
            Self::Output { .. } => 4,
            Self::Encoding { .. } => 5,
            Self::Other { .. } => 1,
        }
    }

    /// Get the error code
    pub fn code(&self) -> u16 {
        match self {
            Self::Config { code, .. }
            | Self::Input { code, .. }
            | Self::Output { code, .. }
            | Self::Encoding { code, .. }
            | Self::Other { code, .. } => *code,
        }
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::Config { message, path, .. } => {
                if let Some(p) = path {
                    format!("Configuration problem in {}: {}", p.display(), message)
                } else {
                    format!("Configuration problem: {}", message)
                }
            }
            Self::Input { message, .. } => format!("Input error: {}", message),
            Self::Output { message, sink, .. } => {
                if let Some(s) = sink {
                    format!("Output error on {}: {}", s, message)
                } else {
                    format!("Output error: {}", message)
                }
            }
            Self::Encoding {
                message, offset, ..
            } => {
                if let Some(o) = offset {
                    format!("Encoding error at byte {}: {}", o, message)
                } else {
                    format!("Encoding error: {}", message)
                }
            }
            Self::Other { message, .. } => message.clone(),
        }
    }

    /// Get a developer-friendly error message with full chain
    pub fn developer_message(&self) -> String {
        let mut msg = self.to_string();
        let mut source = std::error::Error::source(self);
        while let Some(cause) = source {
            msg.push_str(&format!("\n  caused by: {}", cause));
            source = cause.source();
        }
        msg
    }
}

/// Type alias for Results using LinestampError
pub type Result<T> = std::result::Result<T, LinestampError>;

impl From<toml::de::Error> for LinestampError {
    fn from(err: toml::de::Error) -> Self {
        LinestampError::config_with_code(
            ErrorCode::CONFIG_INVALID_TOML,
            "Invalid settings file syntax",
            None,
        )
        .with_source(err)
    }
}

/// Error code registry for linestamp
///
/// Error codes are organized by category:
/// - 1000-1999: Configuration errors
/// - 2000-2999: Input errors
/// - 3000-3999: Output errors
/// - 4000-4999: Encoding errors
/// - 9000-9999: Other errors
pub struct ErrorCode;

impl ErrorCode {
    // Configuration errors (1000-1999)
    pub const CONFIG_GENERIC: u16 = 1000;
    pub const CONFIG_NOT_FOUND: u16 = 1001;
    pub const CONFIG_INVALID_TOML: u16 = 1002;
    pub const CONFIG_INVALID_VALUE: u16 = 1003;
    pub const CONFIG_PATH_ERROR: u16 = 1004;

    // Input errors (2000-2999)
    pub const INPUT_GENERIC: u16 = 2000;
    pub const INPUT_READ_FAILED: u16 = 2001;
    pub const INPUT_OPEN_FAILED: u16 = 2002;

    // Output errors (3000-3999)
    pub const OUTPUT_GENERIC: u16 = 3000;
    pub const OUTPUT_WRITE_FAILED: u16 = 3001;
    pub const OUTPUT_FLUSH_FAILED: u16 = 3002;
    pub const OUTPUT_CREATE_FAILED: u16 = 3003;
    pub const OUTPUT_BROKEN_PIPE: u16 = 3004;
    pub const OUTPUT_DISK_FULL: u16 = 3005;

    // Encoding errors (4000-4999)
    pub const ENCODING_GENERIC: u16 = 4000;
    pub const ENCODING_INVALID_UTF8: u16 = 4001;
    pub const ENCODING_INVALID_ESCAPE: u16 = 4002;

    // Other errors (9000-9999)
    pub const OTHER_GENERIC: u16 = 9000;
}

/// Get a human-readable description for an error code
pub fn describe_error_code(code: u16) -> &'static str {
    match code {
        ErrorCode::CONFIG_GENERIC => "General configuration error",
        ErrorCode::CONFIG_NOT_FOUND => "Settings file not found",
        ErrorCode::CONFIG_INVALID_TOML => "Settings file is not valid TOML",
        ErrorCode::CONFIG_INVALID_VALUE => "Setting has an out-of-range value",
        ErrorCode::CONFIG_PATH_ERROR => "Settings path could not be resolved",

        ErrorCode::INPUT_GENERIC => "General input error",
        ErrorCode::INPUT_READ_FAILED => "Reading the input stream failed",
        ErrorCode::INPUT_OPEN_FAILED => "Opening the input stream failed",

        ErrorCode::OUTPUT_GENERIC => "General output error",
        ErrorCode::OUTPUT_WRITE_FAILED => "Writing to an output sink failed",
        ErrorCode::OUTPUT_FLUSH_FAILED => "Flushing an output sink failed",
        ErrorCode::OUTPUT_CREATE_FAILED => "Creating the output file failed",
        ErrorCode::OUTPUT_BROKEN_PIPE => "Output reader went away",
        ErrorCode::OUTPUT_DISK_FULL => "No space left on the output device",

        ErrorCode::ENCODING_GENERIC => "General encoding error",
        ErrorCode::ENCODING_INVALID_UTF8 => "Input is not valid UTF-8",
        ErrorCode::ENCODING_INVALID_ESCAPE => "Malformed escape sequence",

        ErrorCode::OTHER_GENERIC => "Unknown error",
        _ => "Unrecognized error code",
    }
}

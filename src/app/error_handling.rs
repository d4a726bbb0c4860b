//! Error handling utilities
//!
//! This module provides centralized fatal error handling for the binary.

use crate::error::LinestampError;
use tracing::error;

/// Decide the message and exit code for a fatal error
///
/// Returns the lines to print on stderr and the process exit code:
/// - For `LinestampError`: the user message, plus the full chain in verbose mode
/// - For other errors: the error message, plus its causes in verbose mode
pub fn describe_fatal_error(error: &anyhow::Error, verbose: u8) -> (Vec<String>, i32) {
    let mut lines = Vec::new();

    if let Some(err) = error.downcast_ref::<LinestampError>() {
        lines.push(format!("Error: {}", err.user_message()));
        if verbose >= 1 {
            lines.push(format!("\nContext Chain:\n{}", err.developer_message()));
        }
        return (lines, err.exit_code());
    }

    lines.push(format!("Error: {error}"));
    if verbose >= 1 {
        lines.push("\nError chain:".to_string());
        for (i, cause) in error.chain().enumerate() {
            lines.push(format!("  {}: {}", i, cause));
        }
    }
    (lines, 1)
}

/// Handle fatal errors and exit with appropriate status code
pub fn handle_fatal_error(error: anyhow::Error, verbose: u8) -> ! {
    error!("Fatal error: {:#}", error);

    let (lines, exit_code) = describe_fatal_error(&error, verbose);
    for line in lines {
        eprintln!("{line}");
    }

    std::process::exit(exit_code)
}

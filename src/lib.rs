//! # linestamp
//!
//! Prefixes every line of a live byte stream with the time it arrived, so the
//! timing of two runs of a program can be compared with an ordinary diff.
//!
//! ## Usage
//!
//! ```bash
//! some-program | linestamp [-a] [--from-launch] [-d digits] [-e] [-o file [-t]]
//! ```
//!
//! ## Modules
//!
//! - `annotate` - Chunk reassembly, session clock, escaping and the annotation loop
//! - `app` - Configuration resolution, logging and fatal error handling for the binary
//! - `cli` - Command-line argument definitions
//! - `config` - Optional TOML settings file
//! - `error` - Coded error type and exit codes
pub mod annotate;
pub mod app;
pub mod cli;
pub mod config;
pub mod error;

mod property_tests;

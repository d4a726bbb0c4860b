//! Runtime entry point
//!
//! Wires stdin and the configured sinks to a stream annotator.

use crate::annotate::{open_stdin, Outputs, RunSummary, StreamAnnotator};
use crate::app::config::AppConfig;
use anyhow::{Context, Result};
use std::time::Instant;
use tracing::info;

/// Annotate stdin until it closes; from-launch sessions count from `launch`
pub fn run(config: &AppConfig, launch: Instant) -> Result<RunSummary> {
    let mut annotator = StreamAnnotator::with_launch(config.annotate.clone(), launch);

    let input = open_stdin().context("Failed to open input")?;
    let mut outputs =
        Outputs::open(config.output.as_deref(), config.tee).context("Failed to open output")?;

    let summary = annotator
        .run(input, outputs.sinks())
        .context("Annotation stopped")?;

    info!(
        chunks = summary.chunks,
        lines = summary.lines,
        bytes = summary.bytes,
        "Finished annotating input"
    );
    Ok(summary)
}

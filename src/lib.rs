//! Counts how often a circular dial passes zero while it replays a list of
//! `L<n>` / `R<n>` rotations.

pub mod config;
pub mod input;
pub mod instruction;
pub mod json_io;
pub mod simulator;

use anyhow::{Context, Result};
use config::DialConfig;
use input::{decode_lines, read_input};
use json_io::save_log;
use simulator::Simulator;
use std::io::Write;
use tracing::info;

/// Replays the configured instruction file and returns the number of zero
/// crossings. With `debug` set, one trace line per instruction goes to `out`.
pub fn run(config: &DialConfig, out: &mut impl Write) -> Result<u64> {
    let content = read_input(&config.file_name)
        .with_context(|| format!("reading file {}", config.file_name.display()))?;
    info!(path = %config.file_name.display(), bytes = content.len(), "loaded instruction file");

    let mut sim = Simulator::new(config).context("invalid dial configuration")?;

    for decoded in decode_lines(&content) {
        let instr = decoded?;
        let step = sim
            .apply(&instr)
            .with_context(|| format!("applying {instr}"))?;
        if config.debug {
            writeln!(out, "{step}").context("writing debug trace")?;
        }
    }
    info!(
        dial = sim.dial(),
        zero_crossings = sim.zero_crossings(),
        "simulation finished"
    );

    if let Some(output_path) = &config.trace_output {
        save_log(output_path, config.dial_max, config.dial_start, &sim.log)?;
        info!(path = %output_path.display(), steps = sim.log.len(), "trace log saved");
    }

    Ok(sim.zero_crossings())
}

/// Writes the final result lines.
pub fn report(out: &mut impl Write, zero_crossings: u64) -> std::io::Result<()> {
    writeln!(out, "The dial passed 0 {} times", zero_crossings)?;
    writeln!(out, "success!")
}

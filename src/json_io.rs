use crate::simulator::StepTrace;
use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::Path;

#[derive(Serialize)]
struct TraceLog<'a> {
    #[serde(rename = "DialMax")]
    dial_max: i64,
    #[serde(rename = "DialStart")]
    dial_start: i64,
    #[serde(rename = "Steps")]
    steps: &'a [StepTrace],
}

/// Saves the simulation log as pretty-printed JSON.
pub fn save_log(
    output_path: &Path,
    dial_max: i64,
    dial_start: i64,
    log: &[StepTrace],
) -> Result<()> {
    let trace = TraceLog {
        dial_max,
        dial_start,
        steps: log,
    };
    let output = serde_json::to_string_pretty(&trace).context("serializing simulation log")?;
    fs::write(output_path, output)
        .with_context(|| format!("writing output file {}", output_path.display()))?;
    Ok(())
}

use anyhow::{Context, Result};
use clap::Parser;
use dial_crossings::config::{DEFAULT_DIAL_MAX, DEFAULT_DIAL_START, DEFAULT_FILE_NAME, DialConfig};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "dial-crossings")]
#[command(version, about = "Count how many times a dial passes 0 while replaying a combination list", long_about = None)]
struct Cli {
    /// The number of valid dial markers starting from 0, e.g. 100 means 0-99 are valid
    #[arg(long, default_value_t = DEFAULT_DIAL_MAX)]
    dial_max: i64,

    /// The dial marker to start the operation at
    #[arg(long, default_value_t = DEFAULT_DIAL_START)]
    dial_start: i64,

    /// File that contains the combination list
    #[arg(long, default_value = DEFAULT_FILE_NAME)]
    file_name: PathBuf,

    /// Print out the dial before/after of each combo applied
    #[arg(long)]
    debug: bool,

    /// Save every applied step as JSON to this file
    #[arg(long, value_name = "PATH")]
    trace_output: Option<PathBuf>,
}

impl From<Cli> for DialConfig {
    fn from(cli: Cli) -> Self {
        DialConfig {
            dial_max: cli.dial_max,
            dial_start: cli.dial_start,
            file_name: cli.file_name,
            debug: cli.debug,
            trace_output: cli.trace_output,
        }
    }
}

fn main() -> Result<()> {
    // Logs go to stderr so stdout only carries the result.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let config = DialConfig::from(Cli::parse());
    config.validate().context("invalid command-line options")?;

    let mut stdout = io::stdout().lock();
    let zeros = dial_crossings::run(&config, &mut stdout).context("failed to run")?;
    dial_crossings::report(&mut stdout, zeros).context("writing result")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_config_defaults() {
        let cli = Cli::try_parse_from(["dial-crossings"]).unwrap();
        assert_eq!(DialConfig::from(cli), DialConfig::default());
    }

    #[test]
    fn parses_all_options() {
        let cli = Cli::try_parse_from([
            "dial-crossings",
            "--dial-max",
            "10",
            "--dial-start",
            "3",
            "--file-name",
            "combo.txt",
            "--debug",
            "--trace-output",
            "trace.json",
        ])
        .unwrap();
        let config = DialConfig::from(cli);
        assert_eq!(config.dial_max, 10);
        assert_eq!(config.dial_start, 3);
        assert_eq!(config.file_name, PathBuf::from("combo.txt"));
        assert!(config.debug);
        assert_eq!(config.trace_output, Some(PathBuf::from("trace.json")));
    }

    #[test]
    fn rejects_non_numeric_dial_max() {
        assert!(Cli::try_parse_from(["dial-crossings", "--dial-max", "lots"]).is_err());
    }
}

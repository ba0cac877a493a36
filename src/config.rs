use std::path::PathBuf;
use thiserror::Error;

pub const DEFAULT_DIAL_MAX: i64 = 100;
pub const DEFAULT_DIAL_START: i64 = 50;
pub const DEFAULT_FILE_NAME: &str = "input.txt";

/// Largest accepted dial size. A right rotation sums to less than
/// `2 * dial_max`, which must fit in an `i64`.
pub const MAX_DIAL_MAX: i64 = i64::MAX / 2;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("dial max must be at least 1, got {0}")]
    DialMaxTooSmall(i64),

    #[error("dial max must be at most {max}, got {0}", max = MAX_DIAL_MAX)]
    DialMaxTooLarge(i64),

    #[error("dial start {start} is outside [0, {dial_max})")]
    DialStartOutOfRange { start: i64, dial_max: i64 },
}

/// Immutable run configuration handed to the simulator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialConfig {
    /// Exclusive upper bound of valid dial markers; 100 means 0..=99.
    pub dial_max: i64,
    pub dial_start: i64,
    pub file_name: PathBuf,
    /// Print the dial before/after each instruction.
    pub debug: bool,
    /// Where to save the JSON step log, if anywhere.
    pub trace_output: Option<PathBuf>,
}

impl Default for DialConfig {
    fn default() -> Self {
        DialConfig {
            dial_max: DEFAULT_DIAL_MAX,
            dial_start: DEFAULT_DIAL_START,
            file_name: PathBuf::from(DEFAULT_FILE_NAME),
            debug: false,
            trace_output: None,
        }
    }
}

impl DialConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dial_max < 1 {
            return Err(ConfigError::DialMaxTooSmall(self.dial_max));
        }
        if self.dial_max > MAX_DIAL_MAX {
            return Err(ConfigError::DialMaxTooLarge(self.dial_max));
        }
        if !(0..self.dial_max).contains(&self.dial_start) {
            return Err(ConfigError::DialStartOutOfRange {
                start: self.dial_start,
                dial_max: self.dial_max,
            });
        }
        Ok(())
    }
}

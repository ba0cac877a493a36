use crate::config::{ConfigError, DialConfig};
use crate::instruction::{Direction, Instruction};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimulationError {
    #[error("unexpected direction {0}")]
    UnexpectedDirection(Direction),

    #[error("zero crossing count overflowed after {0} crossings")]
    CounterOverflow(u64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialState {
    pub dial: i64,
    pub zero_crossings: u64,
}

/// What one instruction did to the dial.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepTrace {
    #[serde(rename = "Direction")]
    pub direction: Direction,
    /// Magnitude after lap reduction.
    #[serde(rename = "Number")]
    pub number: u64,
    #[serde(rename = "OldDial")]
    pub old_dial: i64,
    #[serde(rename = "Dial")]
    pub dial: i64,
    #[serde(rename = "NumZeros")]
    pub num_zeros: u64,
}

impl fmt::Display for StepTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "direction={},number={},oldDial={},dial={},numZeros={}",
            self.direction, self.number, self.old_dial, self.dial, self.num_zeros
        )
    }
}

pub struct Simulator {
    pub dial_max: i64,
    pub state: DialState,
    pub log: Vec<StepTrace>,
    record: bool,
}

impl Simulator {
    /// Initializes a simulator at `dial_start` with no crossings counted.
    pub fn new(config: &DialConfig) -> Result<Simulator, ConfigError> {
        config.validate()?;
        Ok(Simulator {
            dial_max: config.dial_max,
            state: DialState {
                dial: config.dial_start,
                zero_crossings: 0,
            },
            log: Vec::new(),
            record: config.trace_output.is_some(),
        })
    }

    pub fn dial(&self) -> i64 {
        self.state.dial
    }

    pub fn zero_crossings(&self) -> u64 {
        self.state.zero_crossings
    }

    /// Applies one rotation and returns what it did.
    pub fn apply(&mut self, instr: &Instruction) -> Result<StepTrace, SimulationError> {
        // `new` guarantees 1 <= dial_max <= MAX_DIAL_MAX, so neither the
        // cast nor the sums below can overflow.
        let dial_max = self.dial_max as u64;

        // Rotating by n crosses zero n / dial_max times and ends where
        // rotating by n % dial_max would.
        let laps = instr.number / dial_max;
        let number = instr.number % dial_max;
        let old_dial = self.state.dial;

        let (dial, wrapped) = match instr.direction {
            // The remainder can still cross once more. Landing exactly on
            // dial_max is left alone (50 + 50 stays 100 for dial_max 100).
            Direction::Right => {
                let dial = old_dial + number as i64;
                if dial > self.dial_max {
                    (dial - self.dial_max, true)
                } else {
                    (dial, false)
                }
            }
            // 50 -> L60 -> -10, -10 + 100 = 90
            Direction::Left => {
                let dial = old_dial - number as i64;
                if dial < 0 {
                    (dial + self.dial_max, true)
                } else {
                    (dial, false)
                }
            }
            Direction::Invalid => {
                return Err(SimulationError::UnexpectedDirection(instr.direction));
            }
        };

        let zero_crossings = self
            .state
            .zero_crossings
            .checked_add(laps)
            .and_then(|n| n.checked_add(u64::from(wrapped)))
            .ok_or(SimulationError::CounterOverflow(self.state.zero_crossings))?;

        self.state.dial = dial;
        self.state.zero_crossings = zero_crossings;

        let step = StepTrace {
            direction: instr.direction,
            number,
            old_dial,
            dial: self.state.dial,
            num_zeros: self.state.zero_crossings,
        };
        debug!(%step, "applied instruction");

        if self.record {
            self.dump_step_into_log(step);
        }
        Ok(step)
    }

    /// Appends a step to the simulation log.
    fn dump_step_into_log(&mut self, step: StepTrace) {
        self.log.push(step);
    }
}

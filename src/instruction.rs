use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;
use thiserror::Error;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Never produced by the decoder; the simulator rejects it.
    #[default]
    #[serde(rename = "DIAL_DIRECTION_INVALID")]
    Invalid,
    #[serde(rename = "DIAL_DIRECTION_LEFT")]
    Left,
    #[serde(rename = "DIAL_DIRECTION_RIGHT")]
    Right,
}

impl Direction {
    pub fn from_marker(marker: char) -> Option<Direction> {
        match marker {
            'L' => Some(Direction::Left),
            'R' => Some(Direction::Right),
            _ => None,
        }
    }

    pub fn marker(self) -> Option<char> {
        match self {
            Direction::Left => Some('L'),
            Direction::Right => Some('R'),
            Direction::Invalid => None,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Invalid => "DIAL_DIRECTION_INVALID",
            Direction::Left => "DIAL_DIRECTION_LEFT",
            Direction::Right => "DIAL_DIRECTION_RIGHT",
        };
        f.write_str(name)
    }
}

/// One decoded rotation, e.g. `L150` or `R1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction {
    pub direction: Direction,
    pub number: u64,
}

impl Instruction {
    pub fn left(number: u64) -> Self {
        Self {
            direction: Direction::Left,
            number,
        }
    }

    pub fn right(number: u64) -> Self {
        Self {
            direction: Direction::Right,
            number,
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.direction.marker() {
            Some(marker) => write!(f, "{}{}", marker, self.number),
            None => write!(f, "?{}", self.number),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("empty line")]
    EmptyLine,

    #[error("invalid direction {0:?}")]
    InvalidDirection(char),

    #[error("invalid magnitude {text:?}: {source}")]
    InvalidMagnitude {
        text: String,
        #[source]
        source: ParseIntError,
    },
}

/// Decodes a single instruction line. A trailing newline is tolerated.
pub fn decode_line(line: &str) -> Result<Instruction, DecodeError> {
    let line = line.trim_end_matches(['\n', '\r']);

    let mut chars = line.chars();
    let marker = chars.next().ok_or(DecodeError::EmptyLine)?;
    let direction =
        Direction::from_marker(marker).ok_or(DecodeError::InvalidDirection(marker))?;

    let rest = chars.as_str();
    let number = rest
        .parse::<u64>()
        .map_err(|source| DecodeError::InvalidMagnitude {
            text: rest.to_string(),
            source,
        })?;

    Ok(Instruction { direction, number })
}

impl FromStr for Instruction {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode_line(s)
    }
}

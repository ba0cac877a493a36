use crate::instruction::{DecodeError, Instruction, decode_line};
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

/// A decode failure together with the 1-based line it happened on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("decoding line {line_number}")]
pub struct LineError {
    pub line_number: usize,
    #[source]
    pub source: DecodeError,
}

/// Reads the whole instruction file into memory.
pub fn read_input(input_path: &Path) -> io::Result<String> {
    fs::read_to_string(input_path)
}

/// Lazily decodes `content` one line at a time.
pub fn decode_lines(content: &str) -> impl Iterator<Item = Result<Instruction, LineError>> + '_ {
    content.lines().enumerate().map(|(idx, line)| {
        decode_line(line).map_err(|source| LineError {
            line_number: idx + 1,
            source,
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn decodes_every_line_in_order() {
        let decoded: Result<Vec<_>, _> = decode_lines("L68\nR48\nL5\n").collect();
        assert_eq!(
            decoded.unwrap(),
            vec![
                Instruction::left(68),
                Instruction::right(48),
                Instruction::left(5)
            ]
        );
    }

    #[test]
    fn missing_final_newline_is_fine() {
        assert_eq!(decode_lines("R1\nR2").count(), 2);
    }

    #[test]
    fn reports_line_number_of_failure() {
        let mut lines = decode_lines("R1\nQ2\nR3\n");
        assert!(lines.next().unwrap().is_ok());
        let err = lines.next().unwrap().unwrap_err();
        assert_eq!(err.line_number, 2);
        assert_eq!(err.source, DecodeError::InvalidDirection('Q'));
    }

    #[test]
    fn empty_input_yields_nothing() {
        assert_eq!(decode_lines("").count(), 0);
    }

    #[test]
    fn reads_file_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "R10\nL60\n").unwrap();
        let content = read_input(file.path()).unwrap();
        assert_eq!(content, "R10\nL60\n");
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(read_input(&dir.path().join("nope.txt")).is_err());
    }
}

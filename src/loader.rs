//! Parses whitespace-delimited integer matrices into validated [`Grid`]s.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::error::SearchError;
use crate::grid::{Cost, Grid};

#[derive(Debug, Error)]
pub enum GridParseError {
    #[error("Empty input")]
    EmptyInput,
    #[error("Invalid token '{token}' found at row {row}, column {col}")]
    InvalidToken {
        token: String,
        row: usize,
        col: usize,
    },
    #[error("Ragged row {row}: {len} values, expected {expected}")]
    RaggedRow {
        row: usize,
        len: usize,
        expected: usize,
    },
    #[error(transparent)]
    Invalid(#[from] SearchError),
    #[error("I/O error when loading '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl TryFrom<&str> for Grid {
    type Error = GridParseError;

    /// Parses a rectangular matrix of non-negative base-10 integers, one row
    /// per line, values separated by whitespace. Blank lines are skipped.
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let mut rows: Vec<Vec<Cost>> = vec![];

        for (row, line) in s.lines().filter(|l| !l.trim().is_empty()).enumerate() {
            let mut values = vec![];
            for (col, token) in line.split_whitespace().enumerate() {
                let value = token
                    .parse::<Cost>()
                    .map_err(|_| GridParseError::InvalidToken {
                        token: token.to_string(),
                        row,
                        col,
                    })?;
                values.push(value);
            }
            if let Some(first) = rows.first() {
                if values.len() != first.len() {
                    return Err(GridParseError::RaggedRow {
                        row,
                        len: values.len(),
                        expected: first.len(),
                    });
                }
            }
            rows.push(values);
        }

        if rows.is_empty() {
            return Err(GridParseError::EmptyInput);
        }

        Ok(Grid::new(rows)?)
    }
}

/// Reads and parses a grid file.
pub fn load_grid(path: &Path) -> Result<Grid, GridParseError> {
    let contents = std::fs::read_to_string(path).map_err(|source| GridParseError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("Loaded {} bytes from {:?}", contents.len(), path);
    Grid::try_from(contents.as_str())
}

//! # Roster Storage
//!
//! Load/save the roster as a flat text file, one record per line:
//!
//! ```text
//! first_name,last_name,age,income
//! Ann,Lee,30,45000.0
//! Dan,Ng,41,72500.5
//! ```
//!
//! The file is read once at startup and rewritten in full at quit. There is
//! no header, no escaping and no atomic rename. Names cannot contain commas
//! (the name pattern forbids them), so splitting on `,` is unambiguous.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::info;
use thiserror::Error;

use crate::core::record::{UserRecord, ValidationError};
use crate::core::roster::Roster;

pub const DEFAULT_DATA_FILE: &str = "user_data.txt";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("{path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("line {line}: {problem}")]
    Parse { line: usize, problem: ParseProblem },
}

/// What was wrong with a single storage line.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseProblem {
    #[error("expected 4 comma-separated fields, found {0}")]
    FieldCount(usize),
    #[error("age {0:?} is not a whole number")]
    Age(String),
    #[error("income {0:?} is not a number")]
    Income(String),
    #[error("{0}")]
    Invalid(#[from] ValidationError),
}

/// The storage file backing a roster.
#[derive(Debug, Clone)]
pub struct RosterFile {
    path: PathBuf,
}

impl RosterFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append every record in the file to `roster`, returning how many were read.
    ///
    /// Stops at the first malformed line: records before it stay in `roster`,
    /// nothing after it is read. A missing file loads nothing.
    pub fn load_into(&self, roster: &mut Roster) -> Result<usize, StorageError> {
        if !self.path.exists() {
            info!("No data file at {}, starting empty", self.path.display());
            return Ok(0);
        }

        let contents = fs::read_to_string(&self.path).map_err(|source| StorageError::Io {
            path: self.path.clone(),
            source,
        })?;

        let mut loaded = 0;
        for (index, line) in contents.lines().enumerate() {
            let record = parse_line(line).map_err(|problem| StorageError::Parse {
                line: index + 1,
                problem,
            })?;
            roster.push(record);
            loaded += 1;
        }

        info!("Loaded {} records from {}", loaded, self.path.display());
        Ok(loaded)
    }

    /// Overwrite the file with every record in `roster`.
    pub fn save(&self, roster: &Roster) -> Result<(), StorageError> {
        let contents = serialize(roster);
        fs::write(&self.path, contents).map_err(|source| StorageError::Io {
            path: self.path.clone(),
            source,
        })?;
        info!("Saved {} records to {}", roster.len(), self.path.display());
        Ok(())
    }
}

/// Parse one `first,last,age,income` line into a validated record.
pub fn parse_line(line: &str) -> Result<UserRecord, ParseProblem> {
    let fields: Vec<&str> = line.trim().split(',').collect();
    let [first, last, age, income] = fields.as_slice() else {
        return Err(ParseProblem::FieldCount(fields.len()));
    };

    let age: i64 = age
        .trim()
        .parse()
        .map_err(|_| ParseProblem::Age(age.to_string()))?;
    let income: f64 = income
        .trim()
        .parse()
        .map_err(|_| ParseProblem::Income(income.to_string()))?;

    Ok(UserRecord::new(first, last, age, income)?)
}

/// One storage line, without the trailing newline.
pub fn format_line(record: &UserRecord) -> String {
    format!(
        "{},{},{},{}",
        record.first_name(),
        record.last_name(),
        record.age(),
        format_income_field(record.income())
    )
}

/// Whole roster as file contents, every line newline-terminated.
pub fn serialize(roster: &Roster) -> String {
    roster
        .records()
        .iter()
        .map(|r| format_line(r) + "\n")
        .collect()
}

/// Shortest round-trip decimal, always with a fractional part (`50000.0`).
fn format_income_field(income: f64) -> String {
    let mut text = income.to_string();
    if !text.contains('.') {
        text.push_str(".0");
    }
    text
}

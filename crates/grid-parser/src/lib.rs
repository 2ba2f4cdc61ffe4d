//! Loader for surveyed terrain grid files.
//!
//! A survey file is read line by line:
//! - empty lines, whitespace-only lines and lines starting with `%` are skipped
//! - lines starting with `$` are coordinate adjustments (see [`adjustment`])
//! - every other line holds whitespace-separated `j.i.n.x.y.z` entries
//!
//! Entries must be recorded in survey order: sequence numbers increase by
//! one, the column `j` stays or advances by one, and within a column the row
//! `i` advances by one. The grid spans the largest `j` and `i` seen; slots
//! that were never recorded hold the absent sentinel.

pub mod adjustment;
pub mod error;

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use terrain_common::exact::Integer;
use terrain_common::{DeclaredPoint, Grid, GridIndex};
use tracing::debug;

use adjustment::{Adjustment, Adjustments, Axis};
pub use error::{GridParseError, ParseResult};

/// One `j.i.n.x.y.z` entry, before adjustments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub column: usize,
    pub row: usize,
    pub sequence: u64,
    pub x: Integer,
    pub y: Integer,
    pub z: Integer,
}

impl Entry {
    pub fn parse(entry: &str, line: usize) -> ParseResult<Self> {
        let malformed = |reason: String| GridParseError::MalformedEntry {
            line,
            entry: entry.to_string(),
            reason,
        };

        let fields: Vec<&str> = entry.split('.').collect();
        if fields.len() != 6 {
            return Err(malformed(format!("expected 6 fields, found {}", fields.len())));
        }

        let index = |k: usize, name: &str| {
            fields[k]
                .parse::<usize>()
                .map_err(|err| malformed(format!("{} '{}': {}", name, fields[k], err)))
        };
        let coordinate = |k: usize, name: &str| {
            fields[k]
                .parse::<Integer>()
                .map_err(|err| malformed(format!("{} '{}': {}", name, fields[k], err)))
        };

        Ok(Self {
            column: index(0, "j")?,
            row: index(1, "i")?,
            sequence: fields[2]
                .parse::<u64>()
                .map_err(|err| malformed(format!("n '{}': {}", fields[2], err)))?,
            x: coordinate(3, "x")?,
            y: coordinate(4, "y")?,
            z: coordinate(5, "z")?,
        })
    }

    /// Check that this entry may follow `last` in survey order.
    fn check_order(&self, last: &Entry, line: usize) -> ParseResult<()> {
        let violation = |message: String| -> ParseResult<()> {
            Err(GridParseError::OrderingViolation { line, message })
        };

        if self.sequence != last.sequence + 1 {
            return violation(format!(
                "point #{} given after point #{}",
                self.sequence, last.sequence
            ));
        }
        if self.column != last.column && self.column != last.column + 1 {
            return violation(format!(
                "point #{} with j={} given after point #{} with j={}",
                self.sequence, self.column, last.sequence, last.column
            ));
        }
        if self.column == last.column && self.row != last.row + 1 {
            return violation(format!(
                "point #{} with i={} given after point #{} with i={}",
                self.sequence, self.row, last.sequence, last.row
            ));
        }
        Ok(())
    }

    fn into_point(self, adjustments: &Adjustments) -> DeclaredPoint {
        DeclaredPoint::new(
            adjustments.apply(Axis::X, self.x),
            adjustments.apply(Axis::Y, self.y),
            self.z,
            GridIndex::new(self.column, self.row),
            self.sequence,
        )
    }
}

fn is_skipped(line: &str) -> bool {
    line.trim().is_empty() || line.starts_with('%')
}

/// Read a survey into a grid.
pub fn load_grid(reader: impl BufRead) -> ParseResult<Grid> {
    let mut adjustments = Adjustments::default();
    let mut points: Vec<DeclaredPoint> = Vec::new();
    let mut last: Option<Entry> = None;
    let (mut max_column, mut max_row) = (0, 0);

    for (number, text) in reader.lines().enumerate() {
        let text = text?;
        let line = number + 1;

        if is_skipped(&text) {
            continue;
        }
        if text.starts_with('$') {
            adjustments.push(Adjustment::parse(text.trim_end(), line)?);
            continue;
        }

        for token in text.split_whitespace() {
            let entry = Entry::parse(token, line)?;
            if let Some(last) = &last {
                entry.check_order(last, line)?;
            }
            max_column = max_column.max(entry.column);
            max_row = max_row.max(entry.row);
            last = Some(entry.clone());
            points.push(entry.into_point(&adjustments));
        }
    }

    let mut grid = Grid::empty(max_column + 1, max_row + 1)?;
    let entries = points.len();
    for point in points {
        if let Some(index) = point.index() {
            grid.set(index.column, index.row, point)?;
        }
    }

    debug!(
        entries = entries,
        adjustments = adjustments.len(),
        width = grid.width(),
        height = grid.height(),
        "Loaded survey grid"
    );

    Ok(grid)
}

/// Parse a survey held in memory.
pub fn parse_grid(text: &str) -> ParseResult<Grid> {
    load_grid(text.as_bytes())
}

/// Read a survey file.
pub fn load_grid_file(path: impl AsRef<Path>) -> ParseResult<Grid> {
    let file = File::open(path)?;
    load_grid(BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_entry() {
        let entry = Entry::parse("1.2.7.100.-5.42", 1).unwrap();
        assert_eq!((entry.column, entry.row, entry.sequence), (1, 2, 7));
        assert_eq!(entry.y, Integer::from(-5));
        assert_eq!(entry.z, Integer::from(42));
    }

    #[test]
    fn test_parse_entry_field_count() {
        assert!(matches!(
            Entry::parse("1.2.7.100.5", 4),
            Err(GridParseError::MalformedEntry { line: 4, .. })
        ));
        assert!(Entry::parse("1.2.7.100.5.6.7", 4).is_err());
    }

    #[test]
    fn test_parse_entry_rejects_negative_index() {
        assert!(Entry::parse("-1.0.0.0.0.0", 1).is_err());
    }

    #[test]
    fn test_order_within_column() {
        let last = Entry::parse("0.0.0.0.0.0", 1).unwrap();
        assert!(Entry::parse("0.1.1.0.0.0", 1).unwrap().check_order(&last, 1).is_ok());
        assert!(Entry::parse("0.2.1.0.0.0", 1).unwrap().check_order(&last, 1).is_err());
        assert!(Entry::parse("1.5.1.0.0.0", 1).unwrap().check_order(&last, 1).is_ok());
        assert!(Entry::parse("2.0.1.0.0.0", 1).unwrap().check_order(&last, 1).is_err());
    }

    #[test]
    fn test_skipped_lines() {
        assert!(is_skipped(""));
        assert!(is_skipped("   \t"));
        assert!(is_skipped("% comment"));
        assert!(!is_skipped("0.0.0.0.0.0"));
    }
}

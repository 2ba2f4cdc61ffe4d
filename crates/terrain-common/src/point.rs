//! Surveyed and generated terrain points, and the lines between them.

use std::fmt;

use num_traits::Signed;
use serde::{Deserialize, Serialize};

use crate::error::{ContourError, ContourResult};
use crate::exact::{self, Integer, Rational};

/// Position of a point on the sampling grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GridIndex {
    /// Column (outer index, `j`)
    pub column: usize,
    /// Row (inner index, `i`)
    pub row: usize,
}

impl GridIndex {
    pub fn new(column: usize, row: usize) -> Self {
        Self { column, row }
    }
}

impl fmt::Display for GridIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{}]", self.column, self.row)
    }
}

/// A surveyed terrain sample with integer coordinates.
///
/// A point whose `x` or `y` is negative is the "absent" sentinel for an
/// unsurveyed grid slot and takes no part in geometric processing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DeclaredPoint {
    x: Integer,
    y: Integer,
    z: Integer,
    index: Option<GridIndex>,
    sequence: Option<u64>,
}

impl DeclaredPoint {
    /// A point placed on the grid.
    pub fn new(x: Integer, y: Integer, z: Integer, index: GridIndex, sequence: u64) -> Self {
        Self {
            x,
            y,
            z,
            index: Some(index),
            sequence: Some(sequence),
        }
    }

    /// A point with no grid placement.
    pub fn unplaced(x: Integer, y: Integer, z: Integer) -> Self {
        Self {
            x,
            y,
            z,
            index: None,
            sequence: None,
        }
    }

    /// Convenience constructor from machine integers.
    pub fn from_i64(x: i64, y: i64, z: i64, column: usize, row: usize, sequence: u64) -> Self {
        Self::new(
            exact::integer(x),
            exact::integer(y),
            exact::integer(z),
            GridIndex::new(column, row),
            sequence,
        )
    }

    /// The sentinel for an unsurveyed slot.
    pub fn absent() -> Self {
        let minus_one = exact::integer(-1);
        Self::unplaced(minus_one.clone(), minus_one.clone(), minus_one)
    }

    pub fn x(&self) -> &Integer {
        &self.x
    }

    pub fn y(&self) -> &Integer {
        &self.y
    }

    pub fn z(&self) -> &Integer {
        &self.z
    }

    pub fn index(&self) -> Option<GridIndex> {
        self.index
    }

    pub fn sequence(&self) -> Option<u64> {
        self.sequence
    }

    /// `x >= 0 && y >= 0`.
    pub fn is_valid(&self) -> bool {
        !self.x.is_negative() && !self.y.is_negative()
    }
}

impl fmt::Display for DeclaredPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_label(f, self.sequence, self.index)?;
        write!(f, "({},{},{})", self.x, self.y, self.z)
    }
}

/// A point computed by interpolation, with exact rational coordinates.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GeneratedPoint {
    x: Rational,
    y: Rational,
    z: Rational,
    index: Option<GridIndex>,
    sequence: Option<u64>,
}

impl GeneratedPoint {
    /// A point that is not grid-aligned.
    pub fn new(x: Rational, y: Rational, z: Rational) -> Self {
        Self {
            x,
            y,
            z,
            index: None,
            sequence: None,
        }
    }

    /// Attach a grid placement and sequence number.
    pub fn with_placement(mut self, index: GridIndex, sequence: u64) -> Self {
        self.index = Some(index);
        self.sequence = Some(sequence);
        self
    }

    /// Convenience constructor from machine integers.
    pub fn from_i64(x: i64, y: i64, z: i64) -> Self {
        Self::new(
            exact::to_rational(&exact::integer(x)),
            exact::to_rational(&exact::integer(y)),
            exact::to_rational(&exact::integer(z)),
        )
    }

    pub fn x(&self) -> &Rational {
        &self.x
    }

    pub fn y(&self) -> &Rational {
        &self.y
    }

    pub fn z(&self) -> &Rational {
        &self.z
    }

    pub fn index(&self) -> Option<GridIndex> {
        self.index
    }

    pub fn sequence(&self) -> Option<u64> {
        self.sequence
    }

    /// The height of the point. For interpolated points it is always round.
    pub fn height(&self) -> &Rational {
        &self.z
    }

    /// `x >= 0 && y >= 0`.
    pub fn is_valid(&self) -> bool {
        !self.x.is_negative() && !self.y.is_negative()
    }

    /// Euclidean distance in floating point.
    pub fn distance(&self, other: &GeneratedPoint) -> f64 {
        let dx = exact::to_f64(&(&other.x - &self.x));
        let dy = exact::to_f64(&(&other.y - &self.y));
        let dz = exact::to_f64(&(&other.z - &self.z));
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    /// `(x,y,z)` with each coordinate as `n` or `n/d`.
    pub fn coord_string(&self) -> String {
        format!(
            "({},{},{})",
            exact::display(&self.x),
            exact::display(&self.y),
            exact::display(&self.z)
        )
    }
}

impl fmt::Display for GeneratedPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_label(f, self.sequence, self.index)?;
        f.write_str(&self.coord_string())
    }
}

fn write_label(
    f: &mut fmt::Formatter<'_>,
    sequence: Option<u64>,
    index: Option<GridIndex>,
) -> fmt::Result {
    match sequence {
        Some(n) => write!(f, "#{}", n)?,
        None => f.write_str("#?")?,
    }
    match index {
        Some(index) => write!(f, "{}", index),
        None => f.write_str("[?,?]"),
    }
}

/// A segment between two generated points.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Line {
    beginning: GeneratedPoint,
    end: GeneratedPoint,
}

impl Line {
    pub fn new(beginning: GeneratedPoint, end: GeneratedPoint) -> Self {
        Self { beginning, end }
    }

    pub fn beginning(&self) -> &GeneratedPoint {
        &self.beginning
    }

    pub fn end(&self) -> &GeneratedPoint {
        &self.end
    }

    /// Both endpoints share the same height.
    pub fn is_leveled(&self) -> bool {
        self.beginning.z == self.end.z
    }

    /// Height of a leveled line.
    pub fn height(&self) -> ContourResult<&Rational> {
        if !self.is_leveled() {
            return Err(ContourError::NotLeveled {
                line: self.to_string(),
            });
        }
        Ok(self.beginning.height())
    }

    pub fn length(&self) -> f64 {
        self.beginning.distance(&self.end)
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}->{}",
            self.beginning.coord_string(),
            self.end.coord_string()
        )
    }
}

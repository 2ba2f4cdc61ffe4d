//! The sampling grid of declared points.

use crate::error::{ContourError, ContourResult};
use crate::point::DeclaredPoint;

/// A rectangular grid of declared points, stored column-major.
///
/// `width` is the number of columns (index `j`), `height` the number of rows
/// (index `i`). Unsurveyed slots hold [`DeclaredPoint::absent`].
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    columns: Vec<Vec<DeclaredPoint>>,
    height: usize,
}

impl Grid {
    /// Create a grid from its columns.
    ///
    /// Fails unless there are at least two columns of at least two rows and
    /// every column has the same length.
    pub fn new(columns: Vec<Vec<DeclaredPoint>>) -> ContourResult<Self> {
        let width = columns.len();
        if width < 2 {
            return Err(ContourError::InvalidGrid(format!(
                "width {} is smaller than 2",
                width
            )));
        }

        let height = columns[0].len();
        if height < 2 {
            return Err(ContourError::InvalidGrid(format!(
                "height {} is smaller than 2",
                height
            )));
        }

        if let Some((j, column)) = columns
            .iter()
            .enumerate()
            .find(|(_, column)| column.len() != height)
        {
            return Err(ContourError::InvalidGrid(format!(
                "column {} has {} rows, expected {}",
                j,
                column.len(),
                height
            )));
        }

        Ok(Self { columns, height })
    }

    /// A grid of the given size with every slot absent.
    pub fn empty(width: usize, height: usize) -> ContourResult<Self> {
        Self::new(vec![vec![DeclaredPoint::absent(); height]; width])
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// The slot at column `j`, row `i`, whether valid or not.
    pub fn get(&self, j: usize, i: usize) -> Option<&DeclaredPoint> {
        self.columns.get(j).and_then(|column| column.get(i))
    }

    /// The point at column `j`, row `i` if it exists and is valid.
    pub fn valid_point(&self, j: usize, i: usize) -> Option<&DeclaredPoint> {
        self.get(j, i).filter(|p| p.is_valid())
    }

    /// Replace the slot at column `j`, row `i`.
    pub fn set(&mut self, j: usize, i: usize, point: DeclaredPoint) -> ContourResult<()> {
        let (width, height) = (self.width(), self.height);
        let slot = self
            .columns
            .get_mut(j)
            .and_then(|column| column.get_mut(i))
            .ok_or_else(|| {
                ContourError::InvalidGrid(format!(
                    "slot ({},{}) is outside the {}x{} grid",
                    j, i, width, height
                ))
            })?;
        *slot = point;
        Ok(())
    }

    /// Every slot in column-major order.
    pub fn points(&self) -> impl Iterator<Item = &DeclaredPoint> {
        self.columns.iter().flatten()
    }

    /// Every valid point in column-major order.
    pub fn valid_points(&self) -> impl Iterator<Item = &DeclaredPoint> {
        self.points().filter(|p| p.is_valid())
    }

    /// Number of cells (2x2 neighbourhoods).
    pub fn cell_count(&self) -> usize {
        (self.width() - 1) * (self.height - 1)
    }
}

//! Per-cell processing of the 2x2 neighbourhood ("quad") of the grid.
//!
//! Corners are numbered cyclically starting at the cell origin:
//!
//! ```text
//!   3 (j, i+1) ─── 2 (j+1, i+1)
//!        │               │
//!   0 (j, i)   ─── 1 (j+1, i)
//! ```
//!
//! The four perimeter edges are `k -> k+1 (mod 4)`. Of the two diagonals
//! (0-2 and 1-3) only the one spanning the larger height difference is
//! interpolated.

use num_traits::Signed;
use rayon::prelude::*;
use terrain_common::exact::{self, Integer};
use terrain_common::{ContourResult, DeclaredPoint, GeneratedPoint, Grid, GridIndex};
use tracing::debug;

use crate::interpolate::Interpolator;

/// Number of corners (and perimeter edges) of a quad.
pub const CORNERS: usize = 4;

/// Slot of the diagonal in [`QuadPoints::slot`].
pub const DIAGONAL_SLOT: usize = CORNERS;

/// One of the two diagonals of a quad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Diagonal {
    /// Corner 0 to corner 2
    Rising,
    /// Corner 1 to corner 3
    Falling,
}

impl Diagonal {
    /// Corner indices joined by this diagonal.
    pub fn corners(self) -> (usize, usize) {
        match self {
            Diagonal::Rising => (0, 2),
            Diagonal::Falling => (1, 3),
        }
    }

    fn other(self) -> Self {
        match self {
            Diagonal::Rising => Diagonal::Falling,
            Diagonal::Falling => Diagonal::Rising,
        }
    }
}

/// The four corners of one grid cell. Missing or invalid corners are `None`.
#[derive(Debug, Clone, Copy)]
pub struct Quad<'a> {
    origin: GridIndex,
    corners: [Option<&'a DeclaredPoint>; CORNERS],
}

impl<'a> Quad<'a> {
    /// Gather the cell whose lower-left corner is at column `j`, row `i`.
    pub fn gather(grid: &'a Grid, j: usize, i: usize) -> Self {
        Self {
            origin: GridIndex::new(j, i),
            corners: [
                grid.valid_point(j, i),
                grid.valid_point(j + 1, i),
                grid.valid_point(j + 1, i + 1),
                grid.valid_point(j, i + 1),
            ],
        }
    }

    /// Build a quad from explicit corners; invalid points count as absent.
    pub fn from_corners(origin: GridIndex, corners: [Option<&'a DeclaredPoint>; CORNERS]) -> Self {
        Self {
            origin,
            corners: corners.map(|corner| corner.filter(|p| p.is_valid())),
        }
    }

    pub fn origin(&self) -> GridIndex {
        self.origin
    }

    pub fn corner(&self, k: usize) -> Option<&'a DeclaredPoint> {
        self.corners.get(k).copied().flatten()
    }

    /// Absolute height difference along a diagonal, 0 if an end is missing.
    pub fn height_difference(&self, diagonal: Diagonal) -> Integer {
        let (a, b) = diagonal.corners();
        match (self.corner(a), self.corner(b)) {
            (Some(a), Some(b)) => (a.z() - b.z()).abs(),
            _ => exact::integer(0),
        }
    }

    /// The diagonal to interpolate, if any.
    ///
    /// The diagonal with the larger height difference wins, the rising one on
    /// ties; a diagonal is only eligible when both of its corners are present.
    pub fn choose_diagonal(&self) -> Option<Diagonal> {
        [Diagonal::Rising, Diagonal::Falling]
            .into_iter()
            .find(|&diagonal| {
                let (a, b) = diagonal.corners();
                self.height_difference(diagonal) >= self.height_difference(diagonal.other())
                    && self.corner(a).is_some()
                    && self.corner(b).is_some()
            })
    }

    /// Interpolate along the four edges and the chosen diagonal.
    pub fn process(&self, interpolator: &Interpolator) -> ContourResult<QuadPoints> {
        let mut edges: [Option<Vec<GeneratedPoint>>; CORNERS] = Default::default();
        for (k, edge) in edges.iter_mut().enumerate() {
            if let (Some(p0), Some(p1)) = (self.corner(k), self.corner((k + 1) % CORNERS)) {
                *edge = Some(interpolator.between(p0, p1)?);
            }
        }

        let diagonal = match self.choose_diagonal() {
            Some(diagonal) => {
                let (a, b) = diagonal.corners();
                match (self.corner(a), self.corner(b)) {
                    (Some(p0), Some(p1)) => Some((diagonal, interpolator.between(p0, p1)?)),
                    _ => None,
                }
            }
            None => None,
        };

        Ok(QuadPoints {
            origin: self.origin,
            edges,
            diagonal,
        })
    }
}

/// Interpolation results of one cell.
///
/// Each edge slot is `None` when an endpoint is missing, and an empty list
/// when the endpoints share a height or no mark lies between them.
#[derive(Debug, Clone, PartialEq)]
pub struct QuadPoints {
    pub origin: GridIndex,
    pub edges: [Option<Vec<GeneratedPoint>>; CORNERS],
    pub diagonal: Option<(Diagonal, Vec<GeneratedPoint>)>,
}

impl QuadPoints {
    /// Positional access: slots 0..3 are the edges, slot 4 the diagonal.
    pub fn slot(&self, k: usize) -> Option<&[GeneratedPoint]> {
        match k {
            DIAGONAL_SLOT => self.diagonal.as_ref().map(|(_, points)| points.as_slice()),
            _ => self.edges.get(k)?.as_deref(),
        }
    }

    /// Every generated point of the cell, edges first.
    pub fn points(&self) -> impl Iterator<Item = &GeneratedPoint> {
        self.edges
            .iter()
            .flatten()
            .chain(self.diagonal.iter().map(|(_, points)| points))
            .flatten()
    }

    pub fn into_points(self) -> impl Iterator<Item = GeneratedPoint> {
        self.edges
            .into_iter()
            .flatten()
            .chain(self.diagonal.map(|(_, points)| points))
            .flatten()
    }

    pub fn len(&self) -> usize {
        self.points().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Process every cell of the grid, in column-major cell order.
///
/// Cells are independent and processed in parallel.
pub fn generate_intermediate_points(
    grid: &Grid,
    interpolator: &Interpolator,
) -> ContourResult<Vec<QuadPoints>> {
    let height = grid.height();
    let cells: Vec<(usize, usize)> = (0..grid.width() - 1)
        .flat_map(|j| (0..height - 1).map(move |i| (j, i)))
        .collect();

    let quads = cells
        .into_par_iter()
        .map(|(j, i)| Quad::gather(grid, j, i).process(interpolator))
        .collect::<ContourResult<Vec<_>>>()?;

    debug!(
        width = grid.width(),
        height = grid.height(),
        cells = quads.len(),
        generated = quads.iter().map(QuadPoints::len).sum::<usize>(),
        "Generated intermediate points"
    );

    Ok(quads)
}

/// Flatten per-cell results into one list of points, in cell order.
pub fn flatten_points(quads: Vec<QuadPoints>) -> Vec<GeneratedPoint> {
    quads.into_iter().flat_map(QuadPoints::into_points).collect()
}

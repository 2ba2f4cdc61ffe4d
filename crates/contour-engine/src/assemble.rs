//! Contour assembly: grouping generated points by height and chaining each
//! group into a path.
//!
//! Paths are built with a greedy nearest-neighbour heuristic. The result is a
//! visual approximation, not a topologically correct contour: it is neither
//! guaranteed to be the shortest path nor free of self-intersections. Edges
//! longer than the distance threshold are dropped, which removes the jumps
//! the heuristic makes between unconnected regions at the same height.

use std::collections::BTreeMap;

use rayon::prelude::*;
use terrain_common::exact::{self, Integer, Rational};
use terrain_common::{ContourConfig, ContourError, ContourResult, GeneratedPoint, Line};
use tracing::{debug, trace, warn};

/// Generated points partitioned by exact height, in ascending height order.
pub type HeightGroups = BTreeMap<Rational, Vec<GeneratedPoint>>;

/// Options of the assembly step.
#[derive(Debug, Clone, PartialEq)]
pub struct AssemblyOptions {
    /// Longest edge kept; negative keeps every edge
    pub distance_threshold: f64,
    /// Only assemble the group at this height
    pub for_height: Option<Integer>,
}

impl Default for AssemblyOptions {
    fn default() -> Self {
        Self {
            distance_threshold: terrain_common::config::DEFAULT_DISTANCE_THRESHOLD,
            for_height: None,
        }
    }
}

impl AssemblyOptions {
    pub fn from_config(config: &ContourConfig) -> Self {
        Self {
            distance_threshold: config.distance_threshold,
            for_height: config.for_height.map(exact::integer),
        }
    }

    /// Keep every edge regardless of its length.
    pub fn unfiltered() -> Self {
        Self {
            distance_threshold: -1.0,
            ..Self::default()
        }
    }

    fn accepts(&self, distance: f64) -> bool {
        self.distance_threshold < 0.0 || distance <= self.distance_threshold
    }
}

/// Partition points by exact height.
///
/// Insertion order is preserved inside each group. Every height must be
/// round.
pub fn group_by_height(
    points: impl IntoIterator<Item = GeneratedPoint>,
) -> ContourResult<HeightGroups> {
    let mut groups = HeightGroups::new();
    for point in points {
        if !exact::is_round(point.height()) {
            return Err(ContourError::NotRound {
                value: point.to_string(),
            });
        }
        groups.entry(point.height().clone()).or_default().push(point);
    }
    Ok(groups)
}

/// Index of the candidate closest to `from`.
///
/// Ties go to the earliest candidate.
pub fn find_closest(candidates: &[GeneratedPoint], from: &GeneratedPoint) -> ContourResult<usize> {
    let mut closest: Option<(usize, f64)> = None;
    for (index, candidate) in candidates.iter().enumerate() {
        let distance = from.distance(candidate);
        match closest {
            Some((_, best)) if distance >= best => {}
            _ => closest = Some((index, distance)),
        }
    }

    closest
        .map(|(index, _)| index)
        .ok_or_else(|| ContourError::EmptyGroup {
            height: exact::display(from.height()),
        })
}

/// Chain a height group into a path by repeated nearest-neighbour selection,
/// starting from the group's first point.
pub fn assemble_path(group: Vec<GeneratedPoint>) -> ContourResult<Vec<GeneratedPoint>> {
    let mut working = group;
    if working.is_empty() {
        return Ok(working);
    }

    let mut path = Vec::with_capacity(working.len());
    path.push(working.remove(0));

    while !working.is_empty() {
        let last = path.last().ok_or_else(|| ContourError::EmptyGroup {
            height: "?".to_string(),
        })?;
        let closest = find_closest(&working, last)?;
        path.push(working.remove(closest));
    }

    Ok(path)
}

/// Lines along consecutive path points, closing the loop from the last
/// point back to the first, that pass the distance threshold.
///
/// Every non-empty path is a closed loop: a single point yields its
/// zero-length closing edge, two points yield the edge there and back.
pub fn emit_edges(path: &[GeneratedPoint], options: &AssemblyOptions) -> Vec<Line> {
    let closing = match (path.first(), path.last()) {
        (Some(first), Some(last)) => Some((last, first)),
        _ => return Vec::new(),
    };

    path.windows(2)
        .map(|pair| (&pair[0], &pair[1]))
        .chain(closing)
        .filter(|(a, b)| options.accepts(a.distance(b)))
        .map(|(a, b)| Line::new(a.clone(), b.clone()))
        .collect()
}

/// Signed area enclosed by the path, as a closed polygon.
pub fn enclosed_area(path: &[GeneratedPoint]) -> Rational {
    let n = path.len();
    let doubled = (0..n).fold(exact::to_rational(&exact::integer(0)), |acc, k| {
        let p0 = &path[k];
        let p1 = &path[(k + 1) % n];
        acc + p0.x() * p1.y() - p0.y() * p1.x()
    });
    doubled / exact::to_rational(&exact::integer(2))
}

/// Assemble one height group into its emitted lines.
pub fn assemble_group(
    height: &Rational,
    group: Vec<GeneratedPoint>,
    options: &AssemblyOptions,
) -> ContourResult<Vec<Line>> {
    let path = assemble_path(group)?;
    let lines = emit_edges(&path, options);
    trace!(
        height = %exact::display(height),
        points = path.len(),
        lines = lines.len(),
        area = exact::to_f64(&enclosed_area(&path)),
        "Assembled height group"
    );
    Ok(lines)
}

/// Group points by height and assemble every selected group into lines.
///
/// Groups are independent and assembled in parallel; the result is ordered
/// by ascending height.
pub fn generate_level_lines(
    points: impl IntoIterator<Item = GeneratedPoint>,
    options: &AssemblyOptions,
) -> ContourResult<Vec<Line>> {
    let mut groups = group_by_height(points)?;
    let group_count = groups.len();

    if let Some(height) = &options.for_height {
        let key = exact::to_rational(height);
        groups.retain(|level, _| *level == key);
        if groups.is_empty() {
            warn!(height = %height, "No generated points at the requested height");
        }
    }

    let selected: Vec<(Rational, Vec<GeneratedPoint>)> = groups.into_iter().collect();
    let lines: Vec<Line> = selected
        .into_par_iter()
        .map(|(height, group)| assemble_group(&height, group, options))
        .collect::<ContourResult<Vec<_>>>()?
        .into_iter()
        .flatten()
        .collect();

    debug!(
        groups = group_count,
        threshold = options.distance_threshold,
        lines = lines.len(),
        "Generated level lines"
    );

    Ok(lines)
}

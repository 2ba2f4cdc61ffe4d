//! Intermediate points at round heights between two declared points.
//!
//! Given two surveyed points, every multiple of the height step between
//! their heights is a contour level crossing the segment that joins them.
//! The crossing is found by exact linear interpolation, so the generated
//! point's height is exactly the level (a round rational).

use num_traits::{Signed, Zero};
use terrain_common::exact::{self, Integer};
use terrain_common::{ContourConfig, ContourError, ContourResult, DeclaredPoint, GeneratedPoint};

/// Generates intermediate points at multiples of a fixed height step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interpolator {
    step: Integer,
}

impl Default for Interpolator {
    fn default() -> Self {
        Self {
            step: exact::integer(terrain_common::config::DEFAULT_HEIGHT_STEP),
        }
    }
}

impl Interpolator {
    /// Create an interpolator for the given positive height step.
    pub fn new(step: i64) -> ContourResult<Self> {
        if step <= 0 {
            return Err(ContourError::InvalidConfig(format!(
                "height step must be positive, got {}",
                step
            )));
        }
        Ok(Self {
            step: exact::integer(step),
        })
    }

    pub fn from_config(config: &ContourConfig) -> ContourResult<Self> {
        Self::new(config.height_step)
    }

    pub fn step(&self) -> &Integer {
        &self.step
    }

    /// The smallest multiple of the step that is `>= current`.
    pub fn next_heightmark(&self, current: &Integer) -> Integer {
        let mut remains = current % &self.step;
        if remains.is_negative() {
            remains += &self.step;
        }

        if remains.is_zero() {
            current.clone()
        } else {
            current + (&self.step - remains)
        }
    }

    /// Every point between `p1` and `p2` whose height is a multiple of the
    /// step, in ascending height order.
    ///
    /// The range is half-open: it starts at the first mark at or above the
    /// lower height and stops before the upper height. Points of equal height
    /// produce nothing.
    pub fn between(
        &self,
        p1: &DeclaredPoint,
        p2: &DeclaredPoint,
    ) -> ContourResult<Vec<GeneratedPoint>> {
        if p1.z() == p2.z() {
            return Ok(Vec::new());
        }

        let (first, last) = if p1.z() < p2.z() { (p1, p2) } else { (p2, p1) };
        let mut points = Vec::new();
        let mut height = self.next_heightmark(first.z());

        while &height < last.z() {
            let u = exact::ratio(first.z(), last.z(), &height)?;
            let point = GeneratedPoint::new(
                exact::interpolate(first.x(), last.x(), &u)?,
                exact::interpolate(first.y(), last.y(), &u)?,
                exact::interpolate(first.z(), last.z(), &u)?,
            );

            if exact::to_integer(point.z())? != height {
                return Err(ContourError::NotRound {
                    value: format!("{} (expected height {})", point, height),
                });
            }

            points.push(point);
            height += &self.step;
        }

        Ok(points)
    }
}
